use logos::Logos;
use tracing::trace;

/// The kind of a lexical token.
///
/// The set of kinds is closed: the parser dispatches on it with exhaustive
/// `match` expressions instead of handler tables. Logos builds the scanner from
/// the attributes below; multi-character operators (`==`, `!=`) win over their
/// single-character prefixes because Logos always prefers the longest match.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// A character the language does not know about.
    Illegal,
    /// End of input. Emitted exactly once, after the last real token.
    Eof,

    /// Identifier tokens; variable names such as `x` or `new_adder`.
    #[regex(r"[a-zA-Z_]+")]
    Ident,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// String literal tokens, such as `"hello"`. No escape processing is
    /// done; an unterminated string runs to the end of the input.
    #[regex(r#""[^"]*""#)]
    #[regex(r#""[^"]*"#)]
    String,

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,

    /// Line breaks. Never surfaced; only bumps the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::String => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::NewLine => "NEWLINE",
            Self::Ignored => "WHITESPACE",
        };
        write!(f, "{name}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number so that parse diagnostics can point at the
/// offending line.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// A token: its kind, the literal source text and the line it starts on.
///
/// For string literals `literal` holds the contents without the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The source text of the token.
    pub literal: String,
    /// The source line the token starts on.
    pub line:    usize,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize) -> Self {
        Self { kind,
               literal: literal.into(),
               line }
    }
}

/// Turns source text into a stream of [`Token`]s.
///
/// The lexer is lazy: tokens are scanned on demand as the iterator is
/// advanced. The stream always ends with a single [`TokenKind::Eof`] token,
/// after which the iterator is exhausted. Characters that do not start any
/// token become [`TokenKind::Illegal`] tokens instead of failing; the parser
/// decides what to do with them.
///
/// # Example
/// ```
/// use monkey::interpreter::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("let x = 5;").map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Let,
///                 TokenKind::Ident,
///                 TokenKind::Assign,
///                 TokenKind::Int,
///                 TokenKind::Semicolon,
///                 TokenKind::Eof]);
/// ```
pub struct Lexer<'source> {
    inner:    logos::Lexer<'source, TokenKind>,
    finished: bool,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner:    TokenKind::lexer_with_extras(source, LexerExtras::default()),
               finished: false, }
    }

    /// The line the lexer is currently on.
    #[must_use]
    pub fn line(&self) -> usize {
        self.inner.extras.line
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = match self.inner.next() {
            Some(Ok(TokenKind::String)) => {
                let slice = self.inner.slice();
                let body = slice.strip_prefix('"').unwrap_or(slice);
                let body = body.strip_suffix('"').unwrap_or(body);
                let line = self.line();
                self.inner.extras.line += slice.matches('\n').count();
                Token::new(TokenKind::String, body, line)
            },
            Some(Ok(kind)) => Token::new(kind, self.inner.slice(), self.line()),
            Some(Err(())) => Token::new(TokenKind::Illegal, self.inner.slice(), self.line()),
            None => {
                self.finished = true;
                Token::new(TokenKind::Eof, "", self.line())
            },
        };

        trace!(kind = %token.kind, literal = %token.literal, line = token.line, "lex");
        Some(token)
    }
}
