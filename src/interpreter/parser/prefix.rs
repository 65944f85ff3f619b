use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expression, FunctionLiteral, Identifier, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl<I> Parser<I> where I: Iterator<Item = Token>
{
    /// Parses an expression that starts at the current token.
    ///
    /// This is the "prefix" half of the Pratt parser: literals, identifiers,
    /// unary operators, grouping and every bracketed form are recognized by
    /// their first token. Tokens that cannot start an expression produce a
    /// `NoPrefixParseFn` diagnostic.
    ///
    /// # Errors
    /// Returns a `ParseError` if the expression is malformed.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> ParseResult<Expression> {
        match self.current.kind {
            TokenKind::Ident => Ok(Expression::Identifier(Identifier::new(self.current
                                                                              .literal
                                                                              .clone()))),
            TokenKind::Int => self.parse_integer(),
            TokenKind::String => Ok(Expression::String(self.current.literal.clone())),
            TokenKind::True => Ok(Expression::Boolean(true)),
            TokenKind::False => Ok(Expression::Boolean(false)),
            TokenKind::Bang => self.parse_prefix_operator(PrefixOperator::Not),
            TokenKind::Minus => self.parse_prefix_operator(PrefixOperator::Negate),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::If => self.parse_if(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => Ok(Expression::Array(self.parse_expression_list(TokenKind::RBracket)?)),
            TokenKind::LBrace => self.parse_hash(),
            TokenKind::Illegal
            | TokenKind::Eof
            | TokenKind::Assign
            | TokenKind::Plus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::Colon
            | TokenKind::RParen
            | TokenKind::RBrace
            | TokenKind::RBracket
            | TokenKind::Let
            | TokenKind::Else
            | TokenKind::Return
            | TokenKind::NewLine
            | TokenKind::Ignored => Err(ParseError::NoPrefixParseFn { kind: self.current.kind,
                                                                      line: self.current.line, }),
        }
    }

    fn parse_integer(&mut self) -> ParseResult<Expression> {
        self.current
            .literal
            .parse::<i64>()
            .map(Expression::Integer)
            .map_err(|_| ParseError::InvalidInteger { literal: self.current.literal.clone(),
                                                      line:    self.current.line, })
    }

    /// Parses `!<operand>` or `-<operand>`.
    ///
    /// The operand binds at prefix precedence, so `-a * b` is `((-a) * b)`.
    fn parse_prefix_operator(&mut self, op: PrefixOperator) -> ParseResult<Expression> {
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix { op,
                                right: Box::new(right) })
    }

    /// Parses `( <expression> )`. Grouping leaves no trace in the tree.
    fn parse_grouped(&mut self) -> ParseResult<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Ok(expression)
    }

    /// Parses `if (<condition>) { ... }` with an optional `else { ... }`.
    fn parse_if(&mut self) -> ParseResult<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        let consequence = self.parse_braced_block()?;

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            Some(self.parse_braced_block()?)
        } else {
            None
        };

        Ok(Expression::If { condition: Box::new(condition),
                            consequence,
                            alternative })
    }

    /// Parses `fn(<parameters>) { <body> }`.
    fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_comma_separated(TokenKind::RParen, Self::parse_parameter)?;
        let body = self.parse_braced_block()?;

        Ok(Expression::Function(Rc::new(FunctionLiteral { parameters, body })))
    }

    /// Parses `{ <key>: <value>, ... }`.
    ///
    /// Every key must be followed by `:` and every pair but the last by `,`.
    /// Pairs are kept in source order.
    fn parse_hash(&mut self) -> ParseResult<Expression> {
        let mut pairs = Vec::new();

        while !self.peek_token_is(TokenKind::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(TokenKind::Colon)?;
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_token_is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::RBrace)?;
        Ok(Expression::Hash(pairs))
    }

    /// Expects the next token to be `{` and parses the block it opens.
    fn parse_braced_block(&mut self) -> ParseResult<BlockStatement> {
        self.expect_peek(TokenKind::LBrace)?;
        Ok(self.parse_block_statement())
    }
}
