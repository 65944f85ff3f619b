use crate::{
    ast::{BlockStatement, Identifier, Statement},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl<I> Parser<I> where I: Iterator<Item = Token>
{
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a `let` binding,
    /// - a `return` statement,
    /// - an expression used as a statement.
    ///
    /// The choice is made on the current token alone. On return the current
    /// token is the last token of the statement, which is its `;` when one is
    /// present.
    ///
    /// # Errors
    /// Returns a `ParseError` if the statement is malformed. The caller is
    /// responsible for recording it and moving on.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <identifier> = <expression>;`, where the `;` is optional.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.current.literal.clone());

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Let { name, value })
    }

    /// Parses `return <expression>;`, where the `;` is optional.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Expression(expression))
    }

    /// Parses the statements of a `{ ... }` block.
    ///
    /// The current token must be the opening `{`. Statements are collected
    /// until the closing `}` or the end of input; a missing `}` is not
    /// reported. A statement that fails to parse is recorded and skipped the
    /// same way [`Parser::parse_program`] does, so one bad line inside a
    /// function body does not discard the whole function.
    ///
    /// On return the current token is the closing `}` (or end of input).
    pub fn parse_block_statement(&mut self) -> BlockStatement {
        let mut block = BlockStatement::default();
        self.next_token();

        while !matches!(self.current.kind, TokenKind::RBrace | TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => block.statements.push(statement),
                Err(error) => self.record(error),
            }
            self.next_token();
        }

        block
    }

    fn skip_semicolon(&mut self) {
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}
