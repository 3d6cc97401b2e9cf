/// Type annotation parsing.
///
/// `varType := basicType ('[' NUM ']')*` for declarations and parameters,
/// `returnType := basicType ('[' ']')*` for function results. Each bracket pair wraps the type
/// so far in one more [`Array`] layer, in source order.
impl Parser {
    fn basic_type(&mut self) -> Result<Type, CompileError> {
        match self.lookahead() {
            Some(Tag::Basic) => {
                let entry = self.advance()?;
                let lexeme = entry.token.lexeme().unwrap_or_default();
                BasicType::from_keyword(lexeme)
                    .map(Type::Basic)
                    .ok_or_else(|| CompileError::unexpected("basic type", &entry.token, entry.line))
            }
            Some(Tag::Type) => {
                self.advance()?;
                Ok(Type::string())
            }
            _ => Err(self.error_here("type")),
        }
    }

    fn var_type(&mut self) -> Result<Type, CompileError> {
        let mut ty = self.basic_type()?;
        while self.accept(Tag::Char('['))? {
            let size = self.number()?;
            let array = usize::try_from(size)
                .ok()
                .and_then(|slots| Array::new(ty, slots))
                .ok_or_else(|| {
                    CompileError::syntax(format!("array size {size} is too large"), self.line)
                })?;
            self.match_char(']')?;
            ty = Type::Array(array);
        }
        Ok(ty)
    }

    fn return_type(&mut self) -> Result<Type, CompileError> {
        let mut ty = self.basic_type()?;
        while self.accept(Tag::Char('['))? {
            self.match_char(']')?;
            ty = Type::Array(Array::unsized_of(ty));
        }
        Ok(ty)
    }
}
