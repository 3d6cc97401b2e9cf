// Parser core type and entrypoint.
//
// This file is `include!`'d into `crate::parser` to keep all parser methods in a
// single module while avoiding a single “god file”.

/// Parser state.
///
/// ## Notes
/// - Parsing is fail-fast: the first violation is returned and nothing is resynchronized.
/// - `line` is the line of the most recently consumed token and locates semantic errors.
pub struct Parser {
    tokens: TokenStream,
    table: SymbolTable,
    line: usize,
}

impl Parser {
    /// Create a parser that drains `tokens` into a fresh [`SymbolTable`].
    pub fn new(tokens: TokenStream) -> Self {
        Self {
            tokens,
            table: SymbolTable::new(),
            line: 1,
        }
    }

    /// Parse `program := function+`.
    ///
    /// ## Errors
    /// Returns the first syntax or scoping error. Tokens left after the last function are a syntax
    /// error.
    pub fn parse(mut self) -> Result<SymbolTable, CompileError> {
        loop {
            self.function()?;
            if self.tokens.is_empty() {
                break;
            }
        }
        Ok(self.table)
    }
}
