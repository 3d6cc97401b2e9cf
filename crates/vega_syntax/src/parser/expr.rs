/// Expression parsing methods.
///
/// Precedence from loosest to tightest:
/// - `expression`: `+`, `-`, `or`
/// - `term`: `*`, `/`, `and`
/// - `factor`: optional `not` / `-` prefix, then comparisons
/// - `unary`: literals, names, calls, indexing, parentheses and array literals
///
/// Expressions are only validated; names are resolved but no value or type is computed.
impl Parser {
    fn expression(&mut self) -> Result<(), CompileError> {
        self.term()?;
        while matches!(self.lookahead(), Some(Tag::Char('+' | '-') | Tag::Or)) {
            self.advance()?;
            self.term()?;
        }
        Ok(())
    }

    fn expression_list(&mut self) -> Result<(), CompileError> {
        self.expression()?;
        while self.accept(Tag::Char(','))? {
            self.expression()?;
        }
        Ok(())
    }

    fn term(&mut self) -> Result<(), CompileError> {
        self.factor()?;
        while matches!(self.lookahead(), Some(Tag::Char('*' | '/') | Tag::And)) {
            self.advance()?;
            self.factor()?;
        }
        Ok(())
    }

    fn factor(&mut self) -> Result<(), CompileError> {
        self.accept(Tag::Not)?;
        self.accept(Tag::Char('-'))?;
        self.unary()?;
        while matches!(
            self.lookahead(),
            Some(Tag::Eq | Tag::Ne | Tag::Ge | Tag::Le | Tag::Char('<' | '>'))
        ) {
            self.advance()?;
            self.unary()?;
        }
        Ok(())
    }

    fn unary(&mut self) -> Result<(), CompileError> {
        match self.lookahead() {
            Some(Tag::Num | Tag::Real | Tag::True | Tag::False) => {
                self.advance()?;
            }
            Some(Tag::Char(quote @ ('\'' | '"'))) => {
                self.advance()?;
                self.match_tag(Tag::Literal)?;
                self.match_char(quote)?;
            }
            Some(Tag::Id) => {
                let name = self.identifier()?;
                if self.check_char('(') {
                    self.call_stmt(&name)?;
                } else {
                    self.resolve(&name)?;
                    if self.accept(Tag::Char('['))? {
                        self.expression()?;
                        self.match_char(']')?;
                    }
                }
            }
            Some(Tag::Char('(')) => {
                self.advance()?;
                self.expression()?;
                self.match_char(')')?;
            }
            Some(Tag::Char('[')) => {
                self.advance()?;
                if !self.check_char(']') {
                    self.expression_list()?;
                }
                self.match_char(']')?;
            }
            _ => return Err(self.error_here("operand")),
        }
        Ok(())
    }
}
