/// Statement parsing methods.
///
/// This chunk parses braced blocks and the statement forms that can appear in them. `while`, `if`,
/// `elif` and `else` bodies each run in their own scope.
impl Parser {
    // ========================================================================
    // Blocks
    // ========================================================================

    /// `scopeStmt := '{' statement '}'`
    fn scope_stmt(&mut self) -> Result<(), CompileError> {
        self.match_char('{')?;
        self.statement()?;
        self.match_char('}')?;
        Ok(())
    }

    /// A braced body in a fresh scope called `name`.
    fn nested_block(&mut self, name: &str) -> Result<(), CompileError> {
        self.enter_scope(name);
        self.scope_stmt()?;
        self.leave_scope()
    }

    /// `statement := 'pass' ';' | (idStmt | returnStmt | 'break' ';' | 'continue' ';' | whileStmt | ifStmt | function)+`
    fn statement(&mut self) -> Result<(), CompileError> {
        if self.accept(Tag::Pass)? {
            self.match_char(';')?;
            return Ok(());
        }
        if !self.at_statement_start() {
            return Err(self.error_here("statement"));
        }
        while self.at_statement_start() {
            self.simple_statement()?;
        }
        Ok(())
    }

    fn at_statement_start(&self) -> bool {
        matches!(
            self.lookahead(),
            Some(
                Tag::Id | Tag::Return | Tag::Break | Tag::Continue | Tag::While | Tag::If | Tag::Func
            )
        )
    }

    fn simple_statement(&mut self) -> Result<(), CompileError> {
        match self.lookahead() {
            Some(Tag::Id) => self.id_stmt(),
            Some(Tag::Return) => self.return_stmt(),
            Some(Tag::Break | Tag::Continue) => {
                self.advance()?;
                self.match_char(';')?;
                Ok(())
            }
            Some(Tag::While) => self.while_stmt(),
            Some(Tag::If) => self.if_stmt(),
            Some(Tag::Func) => self.function(),
            _ => Err(self.error_here("statement")),
        }
    }

    // ========================================================================
    // Identifier statements
    // ========================================================================

    /// `idStmt := ID (declStmt | assignStmt | callStmt) ';'`
    fn id_stmt(&mut self) -> Result<(), CompileError> {
        let name = self.identifier()?;
        match self.lookahead() {
            Some(Tag::Char(',' | ':')) => self.decl_stmt(name)?,
            Some(Tag::Char('[' | '=')) => self.assign_stmt(&name)?,
            Some(Tag::Char('(')) => self.call_stmt(&name)?,
            _ => return Err(self.error_here("declaration, assignment or call")),
        }
        self.match_char(';')?;
        Ok(())
    }

    /// `assignStmt := ('[' expression ']')? '=' expression`
    fn assign_stmt(&mut self, name: &str) -> Result<(), CompileError> {
        let symbol = self.resolve(name)?;
        if symbol.is_callable() {
            return Err(CompileError::not_assignable(name, "it is a function", self.line));
        }
        if symbol.constant {
            return Err(CompileError::not_assignable(name, "it is a constant", self.line));
        }

        if self.accept(Tag::Char('['))? {
            self.expression()?;
            self.match_char(']')?;
        }
        self.match_char('=')?;
        self.expression()
    }

    /// `callStmt := '(' (expression (',' expression)*)? ')'`
    fn call_stmt(&mut self, name: &str) -> Result<(), CompileError> {
        if !self.resolve(name)?.is_callable() {
            return Err(CompileError::not_callable(name, self.line));
        }
        self.match_char('(')?;
        if !self.check_char(')') {
            self.expression_list()?;
        }
        self.match_char(')')?;
        Ok(())
    }

    // ========================================================================
    // Control flow
    // ========================================================================

    fn return_stmt(&mut self) -> Result<(), CompileError> {
        self.match_tag(Tag::Return)?;
        self.expression()?;
        self.match_char(';')?;
        Ok(())
    }

    fn condition(&mut self) -> Result<(), CompileError> {
        self.match_char('(')?;
        self.expression()?;
        self.match_char(')')?;
        Ok(())
    }

    fn while_stmt(&mut self) -> Result<(), CompileError> {
        self.match_tag(Tag::While)?;
        self.condition()?;
        self.nested_block("while")
    }

    fn if_stmt(&mut self) -> Result<(), CompileError> {
        self.match_tag(Tag::If)?;
        self.condition()?;
        self.nested_block("if")?;
        while self.accept(Tag::Elif)? {
            self.condition()?;
            self.nested_block("elif")?;
        }
        if self.accept(Tag::Else)? {
            self.nested_block("else")?;
        }
        Ok(())
    }
}
