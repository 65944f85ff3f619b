use monkey::interpreter::lexer::{Lexer, Token, TokenKind};
use pretty_assertions::assert_eq;

fn kinds_and_literals(source: &str) -> Vec<(TokenKind, String)> {
    Lexer::new(source).map(|t| (t.kind, t.literal)).collect()
}

fn pairs(expected: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    expected.iter()
            .map(|(kind, literal)| (*kind, (*literal).to_string()))
            .collect()
}

#[test]
fn operators_and_delimiters() {
    assert_eq!(kinds_and_literals("=+(){},;"),
               pairs(&[(TokenKind::Assign, "="),
                       (TokenKind::Plus, "+"),
                       (TokenKind::LParen, "("),
                       (TokenKind::RParen, ")"),
                       (TokenKind::LBrace, "{"),
                       (TokenKind::RBrace, "}"),
                       (TokenKind::Comma, ","),
                       (TokenKind::Semicolon, ";"),
                       (TokenKind::Eof, "")]));
}

#[test]
fn small_program() {
    let source = "let five = 5;
let add = fn(x, y) {
  x + y;
};
let result = add(five, 10);
!-/*5;
5 < 10 > 5;
if (5 < 10) {
    return true;
} else {
    return false;
}
10 == 10;
10 != 9;
\"foobar\"
\"foo bar\"
[1, 2];
{\"foo\": \"bar\"}
";

    let expected = pairs(&[(TokenKind::Let, "let"),
                           (TokenKind::Ident, "five"),
                           (TokenKind::Assign, "="),
                           (TokenKind::Int, "5"),
                           (TokenKind::Semicolon, ";"),
                           (TokenKind::Let, "let"),
                           (TokenKind::Ident, "add"),
                           (TokenKind::Assign, "="),
                           (TokenKind::Function, "fn"),
                           (TokenKind::LParen, "("),
                           (TokenKind::Ident, "x"),
                           (TokenKind::Comma, ","),
                           (TokenKind::Ident, "y"),
                           (TokenKind::RParen, ")"),
                           (TokenKind::LBrace, "{"),
                           (TokenKind::Ident, "x"),
                           (TokenKind::Plus, "+"),
                           (TokenKind::Ident, "y"),
                           (TokenKind::Semicolon, ";"),
                           (TokenKind::RBrace, "}"),
                           (TokenKind::Semicolon, ";"),
                           (TokenKind::Let, "let"),
                           (TokenKind::Ident, "result"),
                           (TokenKind::Assign, "="),
                           (TokenKind::Ident, "add"),
                           (TokenKind::LParen, "("),
                           (TokenKind::Ident, "five"),
                           (TokenKind::Comma, ","),
                           (TokenKind::Int, "10"),
                           (TokenKind::RParen, ")"),
                           (TokenKind::Semicolon, ";"),
                           (TokenKind::Bang, "!"),
                           (TokenKind::Minus, "-"),
                           (TokenKind::Slash, "/"),
                           (TokenKind::Asterisk, "*"),
                           (TokenKind::Int, "5"),
                           (TokenKind::Semicolon, ";"),
                           (TokenKind::Int, "5"),
                           (TokenKind::Lt, "<"),
                           (TokenKind::Int, "10"),
                           (TokenKind::Gt, ">"),
                           (TokenKind::Int, "5"),
                           (TokenKind::Semicolon, ";"),
                           (TokenKind::If, "if"),
                           (TokenKind::LParen, "("),
                           (TokenKind::Int, "5"),
                           (TokenKind::Lt, "<"),
                           (TokenKind::Int, "10"),
                           (TokenKind::RParen, ")"),
                           (TokenKind::LBrace, "{"),
                           (TokenKind::Return, "return"),
                           (TokenKind::True, "true"),
                           (TokenKind::Semicolon, ";"),
                           (TokenKind::RBrace, "}"),
                           (TokenKind::Else, "else"),
                           (TokenKind::LBrace, "{"),
                           (TokenKind::Return, "return"),
                           (TokenKind::False, "false"),
                           (TokenKind::Semicolon, ";"),
                           (TokenKind::RBrace, "}"),
                           (TokenKind::Int, "10"),
                           (TokenKind::Eq, "=="),
                           (TokenKind::Int, "10"),
                           (TokenKind::Semicolon, ";"),
                           (TokenKind::Int, "10"),
                           (TokenKind::NotEq, "!="),
                           (TokenKind::Int, "9"),
                           (TokenKind::Semicolon, ";"),
                           (TokenKind::String, "foobar"),
                           (TokenKind::String, "foo bar"),
                           (TokenKind::LBracket, "["),
                           (TokenKind::Int, "1"),
                           (TokenKind::Comma, ","),
                           (TokenKind::Int, "2"),
                           (TokenKind::RBracket, "]"),
                           (TokenKind::Semicolon, ";"),
                           (TokenKind::LBrace, "{"),
                           (TokenKind::String, "foo"),
                           (TokenKind::Colon, ":"),
                           (TokenKind::String, "bar"),
                           (TokenKind::RBrace, "}"),
                           (TokenKind::Eof, "")]);

    assert_eq!(kinds_and_literals(source), expected);
}

#[test]
fn keywords_need_exact_match() {
    assert_eq!(kinds_and_literals("fn fnord letter new_adder"),
               pairs(&[(TokenKind::Function, "fn"),
                       (TokenKind::Ident, "fnord"),
                       (TokenKind::Ident, "letter"),
                       (TokenKind::Ident, "new_adder"),
                       (TokenKind::Eof, "")]));
}

#[test]
fn unknown_characters_become_illegal_tokens() {
    assert_eq!(kinds_and_literals("5 @ 5"),
               pairs(&[(TokenKind::Int, "5"),
                       (TokenKind::Illegal, "@"),
                       (TokenKind::Int, "5"),
                       (TokenKind::Eof, "")]));
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    assert_eq!(kinds_and_literals("\"abc def"),
               pairs(&[(TokenKind::String, "abc def"), (TokenKind::Eof, "")]));
}

#[test]
fn end_of_input_is_emitted_once() {
    let mut lexer = Lexer::new("");

    assert_eq!(lexer.next(), Some(Token::new(TokenKind::Eof, "", 1)));
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next(), None);
}

#[test]
fn tokens_carry_their_line() {
    let lines: Vec<(TokenKind, usize)> =
        Lexer::new("let\nx =\n\n5;").map(|t| (t.kind, t.line)).collect();

    assert_eq!(lines,
               vec![(TokenKind::Let, 1),
                    (TokenKind::Ident, 2),
                    (TokenKind::Assign, 2),
                    (TokenKind::Int, 4),
                    (TokenKind::Semicolon, 4),
                    (TokenKind::Eof, 4)]);
}

#[test]
fn multi_line_strings_advance_the_line() {
    let tokens: Vec<Token> = Lexer::new("\"a\nb\" x").collect();

    assert_eq!(tokens,
               vec![Token::new(TokenKind::String, "a\nb", 1),
                    Token::new(TokenKind::Ident, "x", 2),
                    Token::new(TokenKind::Eof, "", 2)]);
}
