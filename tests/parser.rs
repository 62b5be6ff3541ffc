use ozl::{
    Error,
    ast::{BinaryOperator, Expr, Program, Property, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Position, TokenKind, tokenize},
        parser::core::{parse, parse_tokens},
    },
};
use pretty_assertions::assert_eq;

fn num(value: f64) -> Expr {
    Expr::NumericLiteral { value }
}

fn ident(name: &str) -> Expr {
    Expr::Identifier { name: name.to_string() }
}

fn bin(left: Expr, operator: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryExpression { left: Box::new(left),
                             right: Box::new(right),
                             operator }
}

fn single(source: &str) -> Statement {
    let program = parse(source).unwrap_or_else(|e| panic!("{source:?} failed to parse: {e}"));
    assert_eq!(program.body.len(), 1, "statements in {source:?}");
    program.body.into_iter().next().unwrap()
}

fn expr(source: &str) -> Expr {
    match single(source) {
        Statement::Expression(expr) => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

fn parse_error(source: &str) -> ParseError {
    match parse(source) {
        Err(Error::Parse(e)) => e,
        other => panic!("expected a parse error for {source:?}, got {other:?}"),
    }
}

#[test]
fn multiplicative_binds_tighter_than_additive() {
    assert_eq!(expr("2 + 3 * 4;"),
               bin(num(2.0), BinaryOperator::Add, bin(num(3.0), BinaryOperator::Mul, num(4.0))));
    assert_eq!(expr("(2 + 3) * 4;"),
               bin(bin(num(2.0), BinaryOperator::Add, num(3.0)), BinaryOperator::Mul, num(4.0)));
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(expr("1 - 2 - 3"),
               bin(bin(num(1.0), BinaryOperator::Sub, num(2.0)), BinaryOperator::Sub, num(3.0)));
    assert_eq!(expr("8 / 4 * 2"),
               bin(bin(num(8.0), BinaryOperator::Div, num(4.0)), BinaryOperator::Mul, num(2.0)));
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(expr("a = b = 3;"),
               Expr::AssignmentExpression { target: Box::new(ident("a")),
                                            value:  Box::new(Expr::AssignmentExpression {
                                                target: Box::new(ident("b")),
                                                value:  Box::new(num(3.0)),
                                            }), });
}

#[test]
fn variable_declarations() {
    assert_eq!(single("let x;"),
               Statement::VariableDeclaration { identifier: "x".to_string(),
                                                constant:   false,
                                                value:      None, });
    assert_eq!(single("const y = 1 + 2;"),
               Statement::VariableDeclaration { identifier: "y".to_string(),
                                                constant:   true,
                                                value:      Some(bin(num(1.0),
                                                                     BinaryOperator::Add,
                                                                     num(2.0))), });
}

#[test]
fn constant_requires_a_value() {
    assert_eq!(parse_error("const x;"),
               ParseError::MissingConstantValue { name:     "x".to_string(),
                                                  position: Position { line: 1, column: 8 }, });
}

#[test]
fn declaration_requires_semicolon() {
    assert!(matches!(parse_error("let x = 1"),
                     ParseError::UnexpectedToken { found: TokenKind::EndOfInput, .. }));
    assert!(matches!(parse_error("let = 1;"),
                     ParseError::UnexpectedToken { found: TokenKind::Equals, .. }));
}

#[test]
fn expression_statement_semicolon_is_optional() {
    let program = parse("x y; z").unwrap();

    assert_eq!(program,
               Program { body: vec![ident("x").into(), ident("y").into(), ident("z").into()] });
}

#[test]
fn object_literal_forms() {
    assert_eq!(expr("{ x, y: 1 };"),
               Expr::ObjectLiteral { properties: vec![Property { key:   "x".to_string(),
                                                                 value: None, },
                                                      Property { key:   "y".to_string(),
                                                                 value: Some(num(1.0)), }], });
    assert_eq!(expr("{}"), Expr::ObjectLiteral { properties: vec![] });
    assert_eq!(expr("{ a: 1, b, }"), expr("{ a: 1, b }"));
    assert_eq!(expr("{ a: 1, }"), expr("{ a: 1 }"));
}

#[test]
fn nested_object_literals() {
    let inner = Expr::ObjectLiteral { properties: vec![Property { key:   "b".to_string(),
                                                                  value: Some(num(1.0)), }], };

    assert_eq!(expr("{ a: { b: 1 } }"),
               Expr::ObjectLiteral { properties: vec![Property { key:   "a".to_string(),
                                                                 value: Some(inner), }], });
}

#[test]
fn object_properties_need_commas() {
    let error = parse_error("{ a: 1 b: 2 }");

    assert_eq!(error,
               ParseError::UnexpectedToken { expected: "',' or closing '}' following property".to_string(),
                                             found:    TokenKind::Identifier,
                                             text:     "b".to_string(),
                                             position: Position { line: 1, column: 8 }, });
}

#[test]
fn objects_are_not_operands() {
    assert!(matches!(parse_error("1 + {}"),
                     ParseError::UnexpectedToken { found: TokenKind::OpenBrace, .. }));
}

#[test]
fn member_expressions() {
    let dotted = Expr::MemberExpression { object:   Box::new(ident("a")),
                                          property: Box::new(ident("b")),
                                          computed: false, };

    assert_eq!(expr("a.b[c]"),
               Expr::MemberExpression { object:   Box::new(dotted),
                                        property: Box::new(ident("c")),
                                        computed: true, });
}

#[test]
fn dot_requires_identifier() {
    assert_eq!(parse_error("a.5"),
               ParseError::InvalidMemberProperty { position: Position { line: 1, column: 3 } });
}

#[test]
fn call_expressions_chain() {
    let inner = Expr::CallExpression { callee: Box::new(ident("f")),
                                       args:   vec![num(1.0), ident("x")], };

    assert_eq!(expr("f(1, x)(2);"),
               Expr::CallExpression { callee: Box::new(inner),
                                      args:   vec![num(2.0)], });
    assert_eq!(expr("f()"),
               Expr::CallExpression { callee: Box::new(ident("f")),
                                      args:   vec![], });
}

#[test]
fn method_call_on_member() {
    let member = Expr::MemberExpression { object:   Box::new(ident("obj")),
                                          property: Box::new(ident("run")),
                                          computed: false, };

    assert_eq!(expr("obj.run(1 * 2)"),
               Expr::CallExpression { callee: Box::new(member),
                                      args:   vec![bin(num(1.0), BinaryOperator::Mul, num(2.0))], });
}

#[test]
fn unclosed_call_is_error() {
    assert!(matches!(parse_error("f(1, 2"),
                     ParseError::UnexpectedToken { found: TokenKind::EndOfInput, .. }));
}

#[test]
fn null_is_an_identifier() {
    assert_eq!(expr("null"), ident("null"));
}

#[test]
fn modulo_is_not_an_operator() {
    assert_eq!(parse_error("5 % 2;"),
               ParseError::UnexpectedToken { expected: "expression".to_string(),
                                             found:    TokenKind::BinaryOperator,
                                             text:     "%".to_string(),
                                             position: Position { line: 1, column: 3 }, });
}

#[test]
fn stray_closing_paren_is_error() {
    assert!(matches!(parse_error(")"),
                     ParseError::UnexpectedToken { found: TokenKind::CloseParen, .. }));
    assert!(matches!(parse_error("(1 + 2"),
                     ParseError::UnexpectedToken { found: TokenKind::EndOfInput, .. }));
}

#[test]
fn lex_errors_surface_through_parse() {
    assert!(matches!(parse("let a = 1 & 2;"), Err(Error::Lex(_))));
}

#[test]
fn reparsing_is_idempotent() {
    let source = "let x = 5;\nconst o = { x, y: (x + 1) * 2 };\no.y[0](x) = x = 3;";

    assert_eq!(parse(source).unwrap(), parse(source).unwrap());
}

#[test]
fn parse_tokens_matches_parse() {
    let source = "let total = 1 + 2;";
    let tokens = tokenize(source).unwrap();

    assert_eq!(parse_tokens(&tokens).unwrap(), parse(source).unwrap());
}

#[test]
fn empty_source_is_empty_program() {
    assert_eq!(parse("").unwrap(), Program::default());
}

#[test]
fn token_slices_without_end_marker_still_parse() {
    assert_eq!(parse_tokens(&[]).unwrap(), Program::default());

    let mut tokens = tokenize("let a = 1; a").unwrap();
    tokens.pop();

    assert_eq!(parse_tokens(&tokens).unwrap().body.len(), 2);
}

#[test]
fn running_out_of_tokens_reports_a_position() {
    let mut tokens = tokenize("1 +").unwrap();
    tokens.pop();

    assert_eq!(parse_tokens(&tokens),
               Err(ParseError::UnexpectedToken { expected: "expression".to_string(),
                                                 found:    TokenKind::EndOfInput,
                                                 text:     "EndOfFile".to_string(),
                                                 position: Position { line: 1, column: 4 }, }));
}
