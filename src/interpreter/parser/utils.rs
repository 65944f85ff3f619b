use crate::{
    ast::{Expression, Identifier},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl<I> Parser<I> where I: Iterator<Item = Token>
{
    /// Whether the next token has kind `kind`.
    pub(in crate::interpreter::parser) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the next token has kind `kind`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` without advancing if the next
    /// token is of any other kind.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.peek_token_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { expected: kind,
                                              found:    self.peek.kind,
                                              line:     self.peek.line, })
        }
    }

    /// Parses a comma-separated list of items until a closing token.
    ///
    /// This utility is shared by array literals, call arguments and function
    /// parameters. The current token must be the token that opens the list;
    /// `parse_item` is called with the current token on the first token of
    /// each item and must leave it on the item's last token. An immediately
    /// encountered closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := item ("," item)*`
    ///
    /// # Parameters
    /// - `end`: The token kind that terminates the list (`)` or `]`).
    /// - `parse_item`: Function used to parse each list element.
    ///
    /// # Errors
    /// Returns a `ParseError` if an item fails to parse or the list is not
    /// closed by `end`.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        end: TokenKind,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();

        if self.peek_token_is(end) {
            self.next_token();
            return Ok(items);
        }

        self.next_token();
        items.push(parse_item(self)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(parse_item(self)?);
        }

        self.expect_peek(end)?;
        Ok(items)
    }

    /// Parses a list of expressions closed by `end`.
    pub(in crate::interpreter::parser) fn parse_expression_list(&mut self,
                                                                end: TokenKind)
                                                                -> ParseResult<Vec<Expression>> {
        self.parse_comma_separated(end, |parser| parser.parse_expression(Precedence::Lowest))
    }

    /// Parses a single function parameter, which must be an identifier.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` if the current token is not an
    /// identifier.
    pub(in crate::interpreter::parser) fn parse_parameter(&mut self) -> ParseResult<Identifier> {
        if self.current.kind == TokenKind::Ident {
            Ok(Identifier::new(self.current.literal.clone()))
        } else {
            Err(ParseError::UnexpectedToken { expected: TokenKind::Ident,
                                              found:    self.current.kind,
                                              line:     self.current.line, })
        }
    }
}
