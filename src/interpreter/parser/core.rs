use std::mem;

use tracing::{debug, trace};

use crate::{
    ast::{Expression, InfixOperator, Program},
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the parser.
///
/// Every parse function either produces a complete node or a `ParseError`
/// describing why it could not; partial nodes are never returned.
pub type ParseResult<T> = Result<T, ParseError>;

/// Binding strength of operators, from weakest to strongest.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Floor used when starting a fresh expression.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix `!` and `-`
    Prefix,
    /// `(` of a call
    Call,
    /// `[` of an index
    Index,
}

impl Precedence {
    /// The precedence a token has when it appears between two operands, or
    /// `None` if the token cannot continue an expression.
    #[must_use]
    pub const fn of_infix(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Some(Self::Equals),
            TokenKind::Lt | TokenKind::Gt => Some(Self::LessGreater),
            TokenKind::Plus | TokenKind::Minus => Some(Self::Sum),
            TokenKind::Asterisk | TokenKind::Slash => Some(Self::Product),
            TokenKind::LParen => Some(Self::Call),
            TokenKind::LBracket => Some(Self::Index),
            _ => None,
        }
    }
}

/// Maps an operator token to the binary operator it denotes.
pub(super) const fn infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Add),
        TokenKind::Minus => Some(InfixOperator::Sub),
        TokenKind::Asterisk => Some(InfixOperator::Mul),
        TokenKind::Slash => Some(InfixOperator::Div),
        TokenKind::Lt => Some(InfixOperator::Less),
        TokenKind::Gt => Some(InfixOperator::Greater),
        TokenKind::Eq => Some(InfixOperator::Equal),
        TokenKind::NotEq => Some(InfixOperator::NotEqual),
        _ => None,
    }
}

/// A Pratt parser over a stream of tokens.
///
/// The parser looks at exactly two tokens at a time, the current one and the
/// next one, and advances explicitly. Diagnostics are collected instead of
/// aborting: when a statement fails to parse it is dropped, the diagnostic is
/// recorded and parsing resumes with the following token.
///
/// # Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let mut parser = Parser::new(Lexer::new("let x 5; 1 + 2 * 3"));
/// let program = parser.parse_program();
///
/// assert_eq!(parser.errors()[0].to_string(),
///            "expected next token to be =, got INT instead");
/// assert_eq!(program.to_string(), "5(1 + (2 * 3))");
/// ```
pub struct Parser<I>
    where I: Iterator<Item = Token>
{
    tokens:             I,
    pub(super) current: Token,
    pub(super) peek:    Token,
    errors:             Vec<ParseError>,
}

impl<'source> Parser<Lexer<'source>> {
    /// Creates a parser that lexes `source` on demand.
    #[must_use]
    pub fn from_source(source: &'source str) -> Self {
        Self::new(Lexer::new(source))
    }
}

impl<I> Parser<I> where I: Iterator<Item = Token>
{
    /// Creates a parser over `tokens`.
    ///
    /// The stream should end with an end-of-input token; if it simply stops,
    /// the parser behaves as if one followed.
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        let mut tokens = tokens.into_iter();
        let current = tokens.next()
                            .unwrap_or_else(|| Token::new(TokenKind::Eof, "", 1));
        let peek = tokens.next()
                         .unwrap_or_else(|| Token::new(TokenKind::Eof, "", current.line));
        Self { tokens,
               current,
               peek,
               errors: Vec::new() }
    }

    /// Diagnostics collected so far, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser and returns its diagnostics.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses the whole token stream.
    ///
    /// Always returns a program. Statements that failed to parse are left out
    /// of it and reported through [`Parser::errors`]; callers should check
    /// that list before evaluating the program.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current.kind != TokenKind::Eof {
            match self.parse_statement() {
                Ok(statement) => program.statements.push(statement),
                Err(error) => self.record(error),
            }
            self.next_token();
        }

        program
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// The current token must be the first token of the expression. On
    /// return, the current token is the last token of the expression.
    pub fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        ensure_sufficient_stack(|| -> ParseResult<Expression> {
            let mut left = self.parse_prefix()?;

            while self.peek.kind != TokenKind::Semicolon {
                match Precedence::of_infix(self.peek.kind) {
                    Some(next) if precedence < next => {
                        self.next_token();
                        left = self.parse_infix(left)?;
                    },
                    _ => break,
                }
            }

            Ok(left)
        })
    }

    /// Advances by one token.
    pub(super) fn next_token(&mut self) {
        let line = self.peek.line;
        let next = self.tokens
                       .next()
                       .unwrap_or_else(|| Token::new(TokenKind::Eof, "", line));
        self.current = mem::replace(&mut self.peek, next);
        trace!(kind = %self.current.kind, literal = %self.current.literal, "advance");
    }

    /// Records a diagnostic.
    pub(super) fn record(&mut self, error: ParseError) {
        debug!(line = error.line(), %error, "parse error");
        self.errors.push(error);
    }

    /// The precedence of the current token as an infix operator.
    pub(super) fn current_precedence(&self) -> Precedence {
        Precedence::of_infix(self.current.kind).unwrap_or(Precedence::Lowest)
    }
}
