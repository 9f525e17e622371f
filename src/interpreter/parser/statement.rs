use crate::{
    ast::{AssignOperator, Block, Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, Parser, Precedence},
    },
};

impl Parser {
    /// Parses a single statement.
    ///
    /// Dispatches on the current token: `let`/`const` declarations,
    /// `return`, assignments (identifier followed by an assignment
    /// operator), named function declarations, loops, `break`/`continue`,
    /// and expression statements. Stray semicolons parse to `None` and are
    /// skipped.
    ///
    /// On success the current token is the last token of the statement;
    /// the program and block loops advance past it.
    pub(in crate::interpreter::parser) fn parse_statement(
        &mut self,
    ) -> ParseResult<Option<Statement>> {
        match self.cur() {
            Token::Let => self.parse_let_statement(false).map(Some),
            Token::Const => self.parse_let_statement(true).map(Some),
            Token::Return => self.parse_return_statement().map(Some),
            Token::Ident(_)
                if matches!(
                    self.peek(),
                    Token::Assign
                        | Token::AddAssign
                        | Token::SubAssign
                        | Token::MulAssign
                        | Token::DivAssign
                ) =>
            {
                self.parse_reassign_statement().map(Some)
            },
            Token::Function if matches!(self.peek(), Token::Ident(_)) => {
                self.parse_function_declaration().map(Some)
            },
            Token::For => self.parse_for_statement().map(Some),
            Token::While => self.parse_while_statement().map(Some),
            Token::Break => Ok(Some(Statement::Break)),
            Token::Continue => Ok(Some(Statement::Continue)),
            Token::Semicolon => Ok(None),
            _ => self.parse_expression_statement().map(Some),
        }
    }

    /// Parses `let <name> = <expr>` or `const <name> = <expr>`.
    fn parse_let_statement(&mut self, constant: bool) -> ParseResult<Statement> {
        let name = self.expect_peek_ident()?;
        self.expect_peek(&Token::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if matches!(self.peek(), Token::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Let { name, constant, value })
    }

    /// Parses `return <expr>`.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        while matches!(self.peek(), Token::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Return(value))
    }

    /// Parses `<name> <assign-op> <expr>`.
    ///
    /// The caller guarantees the current token is an identifier and the
    /// peek token is an assignment operator.
    fn parse_reassign_statement(&mut self) -> ParseResult<Statement> {
        let name = match self.cur() {
            Token::Ident(name) => name.clone(),
            other => {
                return Err(ParseError::UnexpectedToken {
                    expected: "IDENT".to_string(),
                    found: other.to_string(),
                    line: self.cur_line(),
                });
            },
        };

        self.next_token();
        let operator = match self.cur() {
            Token::AddAssign => AssignOperator::AddAssign,
            Token::SubAssign => AssignOperator::SubAssign,
            Token::MulAssign => AssignOperator::MulAssign,
            Token::DivAssign => AssignOperator::DivAssign,
            _ => AssignOperator::Assign,
        };

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if matches!(self.peek(), Token::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Reassign { name, operator, value })
    }

    /// Parses `fn <name>(<params>) { … }`.
    ///
    /// The name binds as a `const` in the evaluator.
    fn parse_function_declaration(&mut self) -> ParseResult<Statement> {
        let name = self.expect_peek_ident()?;
        self.expect_peek(&Token::LParen)?;

        let parameters = self.parse_function_parameters()?;
        self.expect_peek(&Token::LBrace)?;
        let body = self.parse_block()?;

        Ok(Statement::FunctionDeclaration { name, function: Expr::Function { parameters, body } })
    }

    /// Parses a `for` statement, distinguishing the classic and `for-in`
    /// forms by the token after the opening parenthesis.
    fn parse_for_statement(&mut self) -> ParseResult<Statement> {
        self.expect_peek(&Token::LParen)?;

        match self.peek() {
            Token::Let => self.parse_for_loop(),
            Token::Ident(_) => self.parse_for_in_loop(),
            other => Err(ParseError::InvalidForHeader {
                found: other.to_string(),
                line: self.peek_line(),
            }),
        }
    }

    /// Parses `for (let <init>; <cond>; <update>) { … }`.
    ///
    /// The initialization must be a `let`; the update slot accepts a
    /// postfix `++`/`--` expression or a reassignment.
    fn parse_for_loop(&mut self) -> ParseResult<Statement> {
        self.expect_peek(&Token::Let)?;
        let init = self.parse_let_statement(false)?;

        if !matches!(self.cur(), Token::Semicolon) {
            return Err(ParseError::UnexpectedToken {
                expected: ";".to_string(),
                found: self.cur().to_string(),
                line: self.cur_line(),
            });
        }
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest)?;
        self.next_token();
        if !matches!(self.cur(), Token::Semicolon) {
            return Err(ParseError::UnexpectedToken {
                expected: ";".to_string(),
                found: self.cur().to_string(),
                line: self.cur_line(),
            });
        }
        self.next_token();

        let update = if matches!(self.peek(), Token::Increment | Token::Decrement) {
            Statement::Expression(self.parse_expression(Precedence::Lowest)?)
        } else {
            self.parse_reassign_statement()?
        };

        self.expect_peek(&Token::RParen)?;
        self.expect_peek(&Token::LBrace)?;
        let body = self.parse_block()?;

        Ok(Statement::ForLoop {
            init: Box::new(init),
            condition,
            update: Box::new(update),
            body,
        })
    }

    /// Parses `for (<key>, <value> in <iterable>) { … }`.
    fn parse_for_in_loop(&mut self) -> ParseResult<Statement> {
        let key = self.expect_peek_ident()?;
        self.expect_peek(&Token::Comma)?;
        let value = self.expect_peek_ident()?;
        self.expect_peek(&Token::In)?;
        self.next_token();

        let iterable = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(&Token::RParen)?;
        self.expect_peek(&Token::LBrace)?;
        let body = self.parse_block()?;

        Ok(Statement::ForIn { key, value, iterable, body })
    }

    /// Parses `while (<cond>) { … }`.
    fn parse_while_statement(&mut self) -> ParseResult<Statement> {
        self.expect_peek(&Token::LParen)?;
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(&Token::RParen)?;
        self.expect_peek(&Token::LBrace)?;
        let body = self.parse_block()?;

        Ok(Statement::While { condition, body })
    }

    /// Parses a bare expression statement.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;

        if matches!(self.peek(), Token::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Expression(expression))
    }

    /// Parses a braced statement block.
    ///
    /// The current token must be `{`. The block ends at the matching `}`;
    /// a block cut short by end of input ends there silently.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Block> {
        let mut statements = Vec::new();

        self.next_token();
        while !matches!(self.cur(), Token::RBrace | Token::Eof) {
            if let Some(statement) = self.parse_statement()? {
                statements.push(statement);
            }
            self.next_token();
        }

        Ok(Block { statements })
    }
}
