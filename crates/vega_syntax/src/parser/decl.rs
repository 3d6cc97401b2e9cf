/// Declaration parsing: functions, parameters and `name: type` statements.
///
/// ## Notes
/// - A function's own name goes into the enclosing scope before its parameters are parsed, so
///   default values and the body can call it recursively. Its return type is bound once parsed.
/// - Parameters and body share a single scope named after the function. Each parameter is stored
///   before its default value is parsed, so later defaults can refer to earlier parameters.
impl Parser {
    // ========================================================================
    // Functions
    // ========================================================================

    /// `function := 'func' ID '(' paramList? ')' '->' returnType scopeStmt`
    fn function(&mut self) -> Result<(), CompileError> {
        self.match_tag(Tag::Func)?;
        let name = self.identifier()?;
        self.check_redeclaration(&name, &[])?;
        let line = self.line;
        self.store(Symbol::function(name.as_str()))?;
        self.enter_scope(name.as_str());

        self.match_char('(')?;
        let mut params = 0;
        if !self.check_char(')') {
            loop {
                self.param()?;
                params += 1;
                if !self.accept(Tag::Char(','))? {
                    break;
                }
            }
        }
        self.match_char(')')?;
        self.match_tag(Tag::ReturnType)?;

        let ty = self.return_type()?;
        debug!(name = %name, params, ty = %ty, line, "declare function");
        if let Some(symbol) = self.table.enclosing_mut(&name) {
            symbol.set_type(ty);
        }

        self.scope_stmt()?;
        self.leave_scope()
    }

    /// `param := ID ':' varType ('=' expression)?`
    fn param(&mut self) -> Result<(), CompileError> {
        let name = self.identifier()?;
        self.check_redeclaration(&name, &[])?;
        self.match_char(':')?;
        let mut symbol = Symbol::new(name);
        symbol.set_type(self.var_type()?);
        self.store(symbol)?;
        if self.accept(Tag::Char('='))? {
            self.expression()?;
        }
        Ok(())
    }

    // ========================================================================
    // Variables
    // ========================================================================

    /// `declStmt := (',' ID)* ':' 'const'? varType ('=' expression)?`
    ///
    /// Names are buffered until the type is known; all of them share the type, the `const` flag and
    /// the initializer.
    fn decl_stmt(&mut self, first: String) -> Result<(), CompileError> {
        self.check_redeclaration(&first, &[])?;
        let mut names = vec![first];
        while self.accept(Tag::Char(','))? {
            let name = self.identifier()?;
            self.check_redeclaration(&name, &names)?;
            names.push(name);
        }

        self.match_char(':')?;
        let constant = self.accept(Tag::Const)?;
        let ty = self.var_type()?;
        for name in names {
            debug!(name = %name, ty = %ty, constant, line = self.line, "declare variable");
            let mut symbol = Symbol::new(name);
            symbol.constant = constant;
            symbol.set_type(ty.clone());
            self.store(symbol)?;
        }

        if self.accept(Tag::Char('='))? {
            self.expression()?;
        }
        Ok(())
    }
}
