use std::rc::Rc;

use monkey::{
    ast::{
        BlockStatement, Expression, FunctionLiteral, Identifier, InfixOperator, Node,
        PrefixOperator, Program, Statement,
    },
    error::{ParseError, ParseErrors},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::Parser,
    },
    parse,
};
use pretty_assertions::assert_eq;

fn parse_clean(source: &str) -> Program {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected diagnostics for {source:?}: {errors:?}");
    program
}

fn assert_renders(source: &str, expected: &str) {
    assert_eq!(parse_clean(source).to_string(), expected, "source: {source:?}");
}

fn messages(source: &str) -> Vec<String> {
    parse(source).1.iter().map(ToString::to_string).collect()
}

fn int(value: i64) -> Box<Expression> {
    Box::new(Expression::Integer(value))
}

fn ident(name: &str) -> Expression {
    Expression::Identifier(Identifier::new(name))
}

#[test]
fn let_statements() {
    let program = parse_clean("let x = 5;\nlet y = true;\nlet foobar = y;");

    assert_eq!(program.statements,
               vec![Statement::Let { name:  Identifier::new("x"),
                                     value: Expression::Integer(5), },
                    Statement::Let { name:  Identifier::new("y"),
                                     value: Expression::Boolean(true), },
                    Statement::Let { name:  Identifier::new("foobar"),
                                     value: ident("y"), },]);
    assert_eq!(program.to_string(), "let x = 5;let y = true;let foobar = y;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn return_statements() {
    assert_renders("return 5; return foobar;", "return 5;return foobar;");
    assert_renders("return 1 + 2", "return (1 + 2);");
}

#[test]
fn expression_statements() {
    let program = parse_clean("5 + 5; -a; \"hello world\";");

    assert_eq!(program.statements,
               vec![Statement::Expression(Expression::Infix { left:  int(5),
                                                              op:    InfixOperator::Add,
                                                              right: int(5), }),
                    Statement::Expression(Expression::Prefix { op:    PrefixOperator::Negate,
                                                               right: Box::new(ident("a")), }),
                    Statement::Expression(Expression::String("hello world".to_string())),]);
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (source, expected) in cases {
        assert_renders(source, expected);
    }
}

#[test]
fn if_expressions() {
    assert_renders("if (x < y) { x }", "if((x < y)) {x}");
    assert_renders("if (x < y) { x } else { y }", "if((x < y)) {x} {y}");

    let program = parse_clean("if (x) { 1 }");
    assert_eq!(program.statements,
               vec![Statement::Expression(Expression::If { condition:   Box::new(ident("x")),
                                                           consequence:
                                                               BlockStatement { statements:
                                                                                    vec![Statement::Expression(Expression::Integer(1))], },
                                                           alternative: None, })]);
}

#[test]
fn function_literals() {
    assert_renders("fn(x, y) { x + y; }", "fn(x,y){(x + y)}");
    assert_renders("fn() {}", "fn(){}");

    let program = parse_clean("fn(x) { x }");
    let expected = FunctionLiteral { parameters: vec![Identifier::new("x")],
                                     body:       BlockStatement { statements:
                                                                      vec![Statement::Expression(ident("x"))], }, };
    assert_eq!(program.statements,
               vec![Statement::Expression(Expression::Function(Rc::new(expected)))]);
}

#[test]
fn call_and_index_expressions() {
    assert_renders("add(1, 2 * 3, 4 + 5);", "add(1, (2 * 3), (4 + 5))");
    assert_renders("add()", "add()");
    assert_renders("myArray[1 + 1]", "(myArray[(1 + 1)])");
    assert_renders("fn(x) { x }(5)", "fn(x){x}(5)");
}

#[test]
fn array_and_hash_literals() {
    assert_renders("[1, 2 * 2, 3 + 3]", "[1, (2 * 2), (3 + 3)]");
    assert_renders("[]", "[]");
    assert_renders("{\"one\": 1, \"two\": 2}", "{one: 1, two: 2}");
    assert_renders("{}", "{}");
    assert_renders("{\"one\": 0 + 1, true: 10 - 8}", "{one: (0 + 1), true: (10 - 8)}");
}

#[test]
fn token_literals() {
    let program = parse_clean("return 1; fn(x) { x }; [1]; if (a) { b }");
    let literals: Vec<String> = program.statements.iter().map(Node::token_literal).collect();

    assert_eq!(literals, vec!["return", "fn", "[", "if"]);
}

#[test]
fn missing_tokens_are_reported_and_parsing_continues() {
    let (program, errors) = parse("let x 5;\nlet = 10;\nlet 838383;");

    assert_eq!(errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
               vec!["expected next token to be =, got INT instead",
                    "expected next token to be IDENT, got = instead",
                    "no prefix parse function for = found",
                    "expected next token to be IDENT, got INT instead"]);
    assert_eq!(errors.iter().map(ParseError::line).collect::<Vec<_>>(), vec![1, 2, 2, 3]);
    assert_eq!(program.to_string(), "510838383");
}

#[test]
fn diagnostics_render_as_a_block() {
    let errors = ParseErrors(parse("let x 5;\n(1 + 2").1);

    assert_eq!(errors.to_string(),
               "parser errors:\n\tline 1: expected next token to be =, got INT instead\n\tline 2: \
                expected next token to be ), got EOF instead");
}

#[test]
fn illegal_tokens_have_no_prefix_parse_function() {
    assert_eq!(messages("5 @ 5"), vec!["no prefix parse function for ILLEGAL found"]);
}

#[test]
fn oversized_integer_literals_are_rejected() {
    assert_eq!(messages("9223372036854775808"),
               vec!["could not parse \"9223372036854775808\" as integer"]);
    assert!(messages("9223372036854775807").is_empty());
}

#[test]
fn hash_pairs_require_a_colon() {
    assert_eq!(messages("{\"a\" 1}")[0], "expected next token to be :, got INT instead");
}

#[test]
fn unclosed_lists_are_reported() {
    assert_eq!(messages("[1, 2")[0], "expected next token to be ], got EOF instead");
    assert_eq!(messages("add(1")[0], "expected next token to be ), got EOF instead");
    assert_eq!(messages("fn(1) { 1 }")[0], "expected next token to be IDENT, got INT instead");
}

#[test]
fn errors_inside_blocks_keep_the_block() {
    let (program, errors) = parse("fn(x) { let = 1; x }");

    assert_eq!(errors[0].to_string(), "expected next token to be IDENT, got = instead");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn token_streams_without_end_marker() {
    let mut parser = Parser::new(vec![Token::new(TokenKind::Int, "1", 1),
                                      Token::new(TokenKind::Plus, "+", 1),
                                      Token::new(TokenKind::Int, "2", 1)]);
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "(1 + 2)");
}

#[test]
fn deeply_nested_expressions_parse() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_renders(&source, "1");
}
