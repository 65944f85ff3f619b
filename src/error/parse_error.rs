use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

/// Represents all diagnostics that can be produced while parsing.
///
/// The `Display` text of each variant is the human-readable message shown to
/// users; the source line is kept separately and available through
/// [`ParseError::line`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token after the current one was not the one the grammar requires.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        /// The token kind the grammar requires.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The token cannot start an expression.
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn {
        /// The offending token kind.
        kind: TokenKind,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit in a signed 64-bit integer.
    #[error("could not parse {literal:?} as integer")]
    InvalidInteger {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// The source line the diagnostic points at.
    ///
    /// # Example
    /// ```
    /// use monkey::{error::ParseError, interpreter::lexer::TokenKind};
    ///
    /// let error = ParseError::NoPrefixParseFn { kind: TokenKind::Plus,
    ///                                           line: 3, };
    ///
    /// assert_eq!(error.line(), 3);
    /// assert_eq!(error.to_string(), "no prefix parse function for + found");
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixParseFn { line, .. }
            | Self::InvalidInteger { line, .. } => *line,
        }
    }
}

/// Every diagnostic produced while parsing one program, in source order.
///
/// Returned by [`crate::run`] when a program cannot be evaluated because it
/// did not parse cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parser errors:{}", render(.0))]
pub struct ParseErrors(pub Vec<ParseError>);

fn render(errors: &[ParseError]) -> String {
    errors.iter()
          .map(|e| format!("\n\tline {}: {e}", e.line()))
          .collect()
}

impl ParseErrors {
    /// The individual diagnostics.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.0
    }
}
