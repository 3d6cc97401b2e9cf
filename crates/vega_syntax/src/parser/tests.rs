#[cfg(test)]
/// Parser unit tests.
///
/// These tests cover each grammar production and the scoping rules enforced while parsing.
mod tests {
    use super::*;
    use crate::diagnostics::ErrorKind;
    use crate::lexer;
    use crate::symbols::SymbolKind;

    fn parse_str(source: &str) -> Result<SymbolTable, CompileError> {
        parse(lexer::lex(source)?)
    }

    fn kind_of(source: &str) -> ErrorKind {
        parse_str(source).expect_err("source should be rejected").kind
    }

    fn in_main(body: &str) -> String {
        format!("func main() -> int {{ {body} }}")
    }

    const FOOBAR: &str = r#"
func foobar(k: float, i: int, g: int = 6) -> float {
    while (true) { i = i + 1; }
    return k;
}
func main() -> int {
    i: const int = 5;
    l: float = 0;
    l = foobar(1.2, i);
}
"#;

    #[test]
    fn test_reference_program_parses() {
        let globals = parse_str(FOOBAR).unwrap();
        assert_eq!(globals.depth(), 1);
        let (foobar, scope) = globals.retrieve("foobar").unwrap();
        assert!(foobar.is_callable());
        assert_eq!(foobar.ty, Some(Type::FLOAT));
        assert_eq!(scope, "global");
        assert!(globals.lookup("main"));
        // Locals and parameters are gone with their scopes.
        assert!(!globals.lookup("i"));
        assert!(!globals.lookup("k"));
    }

    #[test]
    fn test_double_declaration_in_body() {
        let source = FOOBAR.replace("l: float = 0;", "l: float = 0;\n    i: int = 2;");
        let err = parse_str(&source).unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyDeclared);
        assert_eq!(err.line, 9);
    }

    #[test]
    fn test_calling_a_variable() {
        let source = FOOBAR.replace("l = foobar(1.2, i);", "l = i(1.2);");
        assert_eq!(kind_of(&source), ErrorKind::NotCallable);
        let source = FOOBAR.replace("l = foobar(1.2, i);", "i(1.2);");
        assert_eq!(kind_of(&source), ErrorKind::NotCallable);
    }

    #[test]
    fn test_assigning_a_constant() {
        let source = FOOBAR.replace("l = foobar(1.2, i);", "i = 7;");
        let err = parse_str(&source).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotAssignable);
        assert!(err.message.contains("constant"), "{}", err.message);
    }

    #[test]
    fn test_assigning_a_function() {
        assert_eq!(
            kind_of("func f() -> int { pass; } func main() -> int { f = 1; }"),
            ErrorKind::NotAssignable
        );
    }

    #[test]
    fn test_undeclared_uses() {
        assert_eq!(kind_of(&in_main("x = 1;")), ErrorKind::Undeclared);
        assert_eq!(kind_of(&in_main("g();")), ErrorKind::Undeclared);
        assert_eq!(kind_of(&in_main("y: int = x;")), ErrorKind::Undeclared);
        assert_eq!(kind_of(&in_main("a: int[2]; a[z] = 1;")), ErrorKind::Undeclared);
    }

    #[test]
    fn test_block_scopes_end_with_block() {
        let source = in_main("if (true) { t: int = 1; } t = 2;");
        assert_eq!(kind_of(&source), ErrorKind::Undeclared);
        // Redeclaring an outer name inside a nested block shadows it.
        parse_str(&in_main("t: int = 1; while (t < 3) { t: float = 2.5; t = t * 2; }")).unwrap();
    }

    #[test]
    fn test_if_elif_else() {
        let body = "x: int = 1; if (x == 1) { x = 2; } elif (x >= 2 and x != 5) { x = 3; } elif (not -x) { pass; } else { x = 4; }";
        parse_str(&in_main(body)).unwrap();
    }

    #[test]
    fn test_multi_declaration_shares_type() {
        let source = "func main() -> int { a, b, c: const int[3][4] = [1, 2]; }";
        parse_str(source).unwrap();
        assert_eq!(kind_of(&in_main("a, a: int;")), ErrorKind::AlreadyDeclared);
    }

    #[test]
    fn test_global_symbol_types() {
        let globals = parse_str("func grid(n: int[4]) -> float[][] { return n[0]; }").unwrap();
        let symbol = globals.current().and_then(|s| s.get("grid")).unwrap();
        assert_eq!(symbol.kind, SymbolKind::Function);
        let Some(Type::Array(array)) = &symbol.ty else {
            panic!("expected an array return type, got {:?}", symbol.ty);
        };
        assert_eq!(array.dimensions(), &[0, 0]);
        assert_eq!(array.element(), BasicType::Float);
    }

    #[test]
    fn test_duplicate_parameter() {
        assert_eq!(
            kind_of("func f(a: int, a: float) -> int { pass; }"),
            ErrorKind::AlreadyDeclared
        );
    }

    #[test]
    fn test_parameter_and_local_share_scope() {
        assert_eq!(
            kind_of("func f(a: int) -> int { a: int = 1; }"),
            ErrorKind::AlreadyDeclared
        );
    }

    #[test]
    fn test_default_refers_to_earlier_parameter() {
        parse_str("func f(a: int, b: int = a) -> int { pass; }").unwrap();
        let err = parse_str("func f(a: int = b, b: int) -> int { pass; }").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Undeclared);
        assert_eq!(err.message, "'b' is not declared");
    }

    #[test]
    fn test_default_calls_the_function_itself() {
        let globals = parse_str("func f(a: int, b: int = f(a)) -> float { pass; }").unwrap();
        let (f, _) = globals.retrieve("f").unwrap();
        assert!(f.is_callable());
        assert_eq!(f.ty, Some(Type::FLOAT));
    }

    #[test]
    fn test_parameter_named_like_its_function() {
        let globals = parse_str("func f(f: int) -> bool { f = 1; }").unwrap();
        let (f, scope) = globals.retrieve("f").unwrap();
        assert!(f.is_callable());
        assert_eq!(f.ty, Some(Type::BOOL));
        assert_eq!(scope, "global");
    }

    #[test]
    fn test_oversized_arrays_are_rejected() {
        for source in [
            in_main("a: int[9223372036854775807];"),
            in_main("a: int[100000][100000][100000][100000];"),
        ] {
            let err = parse_str(&source).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Syntax, "{source}");
            assert!(err.message.contains("is too large"), "{}", err.message);
        }
        parse_str(&in_main("a: int[100000][100000][100000];")).unwrap();
    }

    #[test]
    fn test_duplicate_function() {
        assert_eq!(
            kind_of("func f() -> int { pass; } func f() -> int { pass; }"),
            ErrorKind::AlreadyDeclared
        );
    }

    #[test]
    fn test_recursion_and_nested_functions() {
        let source = r#"
func fact(n: int) -> int {
    if (n <= 1) { return 1; }
    return n * fact(n - 1);
}
func main() -> int {
    func helper(s: str) -> bool { return s == "x"; }
    ok: bool = helper('y');
}
"#;
        parse_str(source).unwrap();
    }

    #[test]
    fn test_break_continue_and_calls_with_no_arguments() {
        let source = "func tick() -> int { pass; } func main() -> int { while (true) { tick(); break; continue; } }";
        parse_str(source).unwrap();
    }

    #[test]
    fn test_syntax_errors() {
        let cases = [
            "func main() -> int { }",
            "func main() -> int { pass }",
            "func main() int { pass; }",
            "func main() -> int { x: int = ; }",
            "func main() -> int { 5; }",
            "func main() -> int { pass; } 42",
            "func main() -> int { x: int[] = 1; }",
            "func main() -> list { pass; }",
        ];
        for source in cases {
            assert_eq!(kind_of(source), ErrorKind::Syntax, "{source}");
        }
    }

    #[test]
    fn test_running_out_of_tokens() {
        let err = parse_str("func main() -> int { x: int = 1;").unwrap_err();
        assert_eq!(err.kind, ErrorKind::QueueUnderflow);
        assert!(err.message.contains("end of input"), "{}", err.message);
        assert_eq!(kind_of(""), ErrorKind::QueueUnderflow);
    }

    #[test]
    fn test_error_line_points_at_offending_token() {
        let err = parse_str("func main() -> int {\n  x: int = 1;\n  x = 2\n}\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.line, 4);
        assert_eq!(err.message, "expected ';', found '}'");
    }
}
