use color_eyre::eyre::Result;

use lamb::parser::{
    expression::{BinaryOperator, Expression},
    formatter::{ExpressionFormatter, PrettyFormatter, SExpressionFormatter},
    Parser, ParserErrorKind,
};

fn check(input: &str, expected: &str) -> Result<()> {
    let program = Parser::new(input).parse_program()?;
    assert_eq!(
        SExpressionFormatter.format(&program),
        expected,
        "Failed to parse {input:?}"
    );
    Ok(())
}

fn check_error(input: &str, expected: &str) {
    match Parser::new(input).parse_program() {
        Ok(program) => panic!("Expected {input:?} to fail but got {program}"),
        Err(error) => assert_eq!(error.to_string(), expected),
    }
}

#[test]
fn smoke_test() -> Result<()> {
    let program = Parser::new("").parse_program()?;
    assert_eq!(program, Expression::Program(vec![]));
    Ok(())
}

#[test]
fn parses_assignment() -> Result<()> {
    let program = Parser::new("x = 42").parse_program()?;
    assert_eq!(
        program,
        Expression::Program(vec![Expression::assignment(
            Expression::variable("x"),
            Expression::Number(42.0)
        )])
    );
    Ok(())
}

#[test]
fn single_expression_is_still_a_program() -> Result<()> {
    check("1", "(program 1)")
}

#[test]
fn parses_literals() -> Result<()> {
    check(
        "1.5; \"text\"; true; false; name",
        "(program 1.5 \"text\" true false name)",
    )
}

#[test]
fn trailing_semicolon_is_allowed() -> Result<()> {
    check("a; b;", "(program a b)")
}

#[test]
fn multiplication_binds_tighter_than_addition() -> Result<()> {
    check("1 + 2 * 3", "(program (+ 1 (* 2 3)))")?;
    check("1 * 2 + 3", "(program (+ (* 1 2) 3))")
}

#[test]
fn same_precedence_is_left_associative() -> Result<()> {
    check("1 - 2 - 3", "(program (- (- 1 2) 3))")?;
    check("8 / 4 % 3", "(program (% (/ 8 4) 3))")
}

#[test]
fn logical_operators_bind_loosest() -> Result<()> {
    check(
        "a < 1 || b >= 2 && c != 3",
        "(program (|| (< a 1) (&& (>= b 2) (!= c 3))))",
    )
}

#[test]
fn assignment_is_right_associative() -> Result<()> {
    check("a = b = 1 + 2", "(program (= a (= b (+ 1 2))))")
}

#[test]
fn parentheses_group_expressions() -> Result<()> {
    check("(1 + 2) * 3", "(program (* (+ 1 2) 3))")
}

#[test]
fn parses_condition() -> Result<()> {
    check(
        "if x % 2 == 0 then 1 else 0",
        "(program (if (== (% x 2) 0) 1 0))",
    )?;
    let program = Parser::new("if a then b").parse_program()?;
    let Expression::Program(body) = program else {
        panic!("Expected a program");
    };
    assert!(matches!(
        &body[0],
        Expression::Condition { otherwise: None, .. }
    ));
    Ok(())
}

#[test]
fn then_is_optional_before_a_block() -> Result<()> {
    check("if a { b } else { c }", "(program (if a b c))")
}

#[test]
fn condition_without_then_or_block_fails() {
    check_error("if a b", "Expecting Keyword: \"then\" (1:6)");
}

#[test]
fn blocks_collapse_by_size() -> Result<()> {
    check("{}", "(program false)")?;
    check("{ a }", "(program a)")?;
    check("{ a; b }", "(program (program a b))")
}

#[test]
fn parses_lambda() -> Result<()> {
    check(
        "def (x, y) { x * 2 + y }",
        "(program (lambda (x y) (+ (* x 2) y)))",
    )?;
    check("def () 1", "(program (lambda () 1))")
}

#[test]
fn lambda_body_extends_over_operators() -> Result<()> {
    check("sqr = def(x) x * x", "(program (= sqr (lambda (x) (* x x))))")
}

#[test]
fn parses_calls() -> Result<()> {
    check("f(1, a + 2)", "(program (call f 1 (+ a 2)))")?;
    check("f()", "(program (call f))")
}

#[test]
fn chained_calls_apply_left_to_right() -> Result<()> {
    check("f(1)(2)", "(program (call (call f 1) 2))")
}

#[test]
fn calls_bind_tighter_than_operators() -> Result<()> {
    check("f(1) + g(2)", "(program (+ (call f 1) (call g 2)))")
}

#[test]
fn delimited_list_allows_trailing_separator() -> Result<()> {
    let mut parser = Parser::new("(a, b, c,)");
    let names = parser.parse_delimited('(', ')', ',', Parser::parse_variable)?;
    let names: Vec<_> = names.iter().map(|name| name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    Ok(())
}

#[test]
fn parses_booleans_directly() -> Result<()> {
    let mut parser = Parser::new("true false");
    assert_eq!(parser.parse_boolean()?, Expression::Boolean(true));
    assert_eq!(parser.parse_boolean()?, Expression::Boolean(false));
    Ok(())
}

#[test]
fn parses_binary_expression_structure() -> Result<()> {
    let expression = Parser::new("a + 1").parse_expression()?;
    assert_eq!(
        expression,
        Expression::binary(
            BinaryOperator::Add,
            Expression::variable("a"),
            Expression::Number(1.0)
        )
    );
    Ok(())
}

#[test]
fn missing_separator_is_reported() {
    check_error("a b", "Expecting Punctuation: \";\" (1:3)");
}

#[test]
fn unknown_operator_stops_the_expression() {
    check_error("a ** b", "Expecting Punctuation: \";\" (1:4)");
}

#[test]
fn lambda_parameters_must_be_variables() {
    check_error("def (1) x", "Expecting variable name (1:6)");
}

#[test]
fn unexpected_token_is_rendered_as_json() {
    check_error(
        "x = )",
        "Unexpected token: {\"type\":\"Punctuation\",\"value\":\")\"} (1:5)",
    );
    check_error(
        "-1",
        "Unexpected token: {\"type\":\"Operator\",\"value\":\"-\"} (1:1)",
    );
    check_error(
        "then",
        "Unexpected token: {\"type\":\"Keyword\",\"value\":\"then\"} (1:4)",
    );
}

#[test]
fn end_of_input_is_an_unexpected_token() {
    check_error("x =", "Unexpected token: null (1:3)");
}

#[test]
fn unclosed_block_is_reported() {
    check_error("{ a", "Expecting Punctuation: \"}\" (1:3)");
}

#[test]
fn lexical_errors_surface_through_the_parser() {
    let error = Parser::new("x = @").parse_program().unwrap_err();
    assert!(matches!(error.kind, ParserErrorKind::Lexical(_)));
    assert_eq!(error.to_string(), "Unexpected character: @ (1:4)");
}

#[test]
fn pretty_report_survives_multibyte_text() {
    for input in ["x = \"eeeeeee\"; y = @", "x = \"ééééééé\"; y = @", "ü = )"] {
        let error = Parser::new(input).parse_program().unwrap_err();
        let report = PrettyFormatter::new(input, "input.lamb").format_error(&error);
        assert!(report.contains(&error.kind.to_string()), "{report}");
    }
}
