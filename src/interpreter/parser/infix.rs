use crate::{
    ast::Expression,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{infix_operator, ParseResult, Parser, Precedence},
    },
};

impl<I> Parser<I> where I: Iterator<Item = Token>
{
    /// Parses the continuation of `left` that starts at the current token.
    ///
    /// The current token is the operator, `(` or `[` that [`Parser::parse_expression`]
    /// decided binds tighter than the enclosing floor.
    ///
    /// # Errors
    /// Returns a `ParseError` if the right operand, the argument list or the
    /// index is malformed.
    pub(in crate::interpreter::parser) fn parse_infix(&mut self,
                                                      left: Expression)
                                                      -> ParseResult<Expression> {
        match self.current.kind {
            TokenKind::LParen => self.parse_call(left),
            TokenKind::LBracket => self.parse_index(left),
            kind => match infix_operator(kind) {
                Some(op) => {
                    let precedence = self.current_precedence();
                    self.next_token();
                    let right = self.parse_expression(precedence)?;

                    Ok(Expression::Infix { left: Box::new(left),
                                           op,
                                           right: Box::new(right) })
                },
                None => Err(ParseError::NoPrefixParseFn { kind,
                                                          line: self.current.line }),
            },
        }
    }

    /// Parses `<function>(<arguments>)`.
    fn parse_call(&mut self, function: Expression) -> ParseResult<Expression> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Ok(Expression::Call { function: Box::new(function),
                              arguments })
    }

    /// Parses `<left>[<index>]`.
    fn parse_index(&mut self, left: Expression) -> ParseResult<Expression> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;

        Ok(Expression::Index { left:  Box::new(left),
                               index: Box::new(index), })
    }
}
