/// Parse a token stream, returning the global scope on success.
///
/// This is the main public entrypoint for parsing.
///
/// ## Errors
/// Returns the first [`CompileError`] encountered.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: TokenStream) -> Result<SymbolTable, CompileError> {
    Parser::new(tokens).parse()
}
