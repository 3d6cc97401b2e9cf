/// Token-stream and symbol-table helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`lookahead`, `match_tag`, `accept`, `advance`)
/// - Error construction for the current position (`error_here`)
/// - Scope bookkeeping and name resolution (`store`, `resolve`, `check_redeclaration`)
impl Parser {
    // ========================================================================
    // Tokens
    // ========================================================================

    /// Tag of the next token, `None` once the stream is drained.
    fn lookahead(&self) -> Option<Tag> {
        self.tokens.peek().map(|entry| entry.token.tag())
    }

    fn check(&self, tag: Tag) -> bool {
        self.lookahead() == Some(tag)
    }

    fn check_char(&self, c: char) -> bool {
        self.check(Tag::Char(c))
    }

    /// Consume the next token whatever it is.
    fn advance(&mut self) -> Result<TokenEntry, CompileError> {
        let entry = self
            .tokens
            .remove()
            .map_err(|err| CompileError::underflow(err, self.tokens.last_line()))?;
        self.line = entry.line;
        Ok(entry)
    }

    /// Consume the next token, which must carry `expected`.
    fn match_tag(&mut self, expected: Tag) -> Result<TokenEntry, CompileError> {
        if self.tokens.is_empty() {
            return Err(CompileError::unexpected_eof(expected, self.tokens.last_line()));
        }
        let entry = self.advance()?;
        if entry.token.tag() == expected {
            Ok(entry)
        } else {
            Err(CompileError::unexpected(expected, &entry.token, entry.line))
        }
    }

    fn match_char(&mut self, c: char) -> Result<TokenEntry, CompileError> {
        self.match_tag(Tag::Char(c))
    }

    /// Consume the next token if it carries `tag`.
    fn accept(&mut self, tag: Tag) -> Result<bool, CompileError> {
        if self.check(tag) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn identifier(&mut self) -> Result<String, CompileError> {
        let entry = self.match_tag(Tag::Id)?;
        match entry.token {
            Token::Word(word) => Ok(word.lexeme),
            other => Err(CompileError::unexpected(Tag::Id, &other, entry.line)),
        }
    }

    fn number(&mut self) -> Result<i64, CompileError> {
        let entry = self.match_tag(Tag::Num)?;
        match entry.token {
            Token::Num(value) => Ok(value),
            other => Err(CompileError::unexpected(Tag::Num, &other, entry.line)),
        }
    }

    /// Syntax error describing the next token (or the end of input) as not being `expected`.
    fn error_here(&self, expected: &str) -> CompileError {
        match self.tokens.peek() {
            Some(entry) => CompileError::unexpected(expected, &entry.token, entry.line),
            None => CompileError::unexpected_eof(expected, self.tokens.last_line()),
        }
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    fn store(&mut self, symbol: Symbol) -> Result<(), CompileError> {
        self.table
            .store(symbol)
            .map_err(|err| CompileError::scope(err, self.line))
    }

    fn enter_scope(&mut self, name: impl Into<String>) {
        self.table.enter_scope(name);
    }

    fn leave_scope(&mut self) -> Result<(), CompileError> {
        self.table
            .leave_scope()
            .map(drop)
            .map_err(|err| CompileError::scope(err, self.line))
    }

    /// Reject `name` if the current scope or the same declaration already has it.
    fn check_redeclaration(&self, name: &str, pending: &[String]) -> Result<(), CompileError> {
        if self.table.lookup_local(name) || pending.iter().any(|p| p == name) {
            Err(CompileError::already_declared(name, self.line))
        } else {
            Ok(())
        }
    }

    /// Find `name` in the nearest enclosing scope.
    fn resolve(&self, name: &str) -> Result<&Symbol, CompileError> {
        self.table
            .retrieve(name)
            .map(|(symbol, _)| symbol)
            .ok_or_else(|| CompileError::undeclared(name, self.line))
    }
}
