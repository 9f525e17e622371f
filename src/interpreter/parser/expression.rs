use crate::{
    ast::{Expr, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, Parser, Precedence},
    },
};

/// Maps a token to its infix operator, if it is one.
fn infix_operator(token: &Token) -> Option<InfixOperator> {
    let operator = match token {
        Token::Plus => InfixOperator::Add,
        Token::Minus => InfixOperator::Sub,
        Token::Asterisk => InfixOperator::Mul,
        Token::Slash => InfixOperator::Div,
        Token::Percent => InfixOperator::Mod,
        Token::Less => InfixOperator::Less,
        Token::LessEqual => InfixOperator::LessEqual,
        Token::Greater => InfixOperator::Greater,
        Token::GreaterEqual => InfixOperator::GreaterEqual,
        Token::Equal => InfixOperator::Equal,
        Token::NotEqual => InfixOperator::NotEqual,
        Token::And => InfixOperator::And,
        Token::Or => InfixOperator::Or,
        _ => return None,
    };
    Some(operator)
}

impl Parser {
    /// Parses the expression beginning at the current token.
    ///
    /// This is the prefix half of the Pratt engine: literals, identifiers,
    /// prefix operators, grouping, conditionals, function literals, and
    /// array/hash literals. Tokens with no handler report
    /// `no prefix parse function`; illegal tokens surface here as parse
    /// errors.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> ParseResult<Expr> {
        match self.cur().clone() {
            Token::Ident(name) => Ok(Expr::Identifier(name)),
            Token::Int(value) => Ok(Expr::Integer(value)),
            Token::Float(value) => Ok(Expr::Float(value)),
            Token::Str(value) => Ok(Expr::Str(value)),
            Token::True => Ok(Expr::Boolean(true)),
            Token::False => Ok(Expr::Boolean(false)),
            Token::Null => Ok(Expr::Null),
            Token::Bang => self.parse_prefix_expression(PrefixOperator::Bang),
            Token::Minus => self.parse_prefix_expression(PrefixOperator::Minus),
            Token::LParen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            Token::LBracket => self.parse_array_literal(),
            Token::LBrace => self.parse_hash_literal(),
            Token::Illegal(literal) => {
                Err(ParseError::IllegalToken { literal, line: self.cur_line() })
            },
            other => Err(ParseError::NoPrefixParseFn {
                token: other.to_string(),
                line: self.cur_line(),
            }),
        }
    }

    /// Parses `!<expr>` or `-<expr>` at prefix precedence.
    fn parse_prefix_expression(&mut self, operator: PrefixOperator) -> ParseResult<Expr> {
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        Ok(Expr::Prefix { operator, right: Box::new(right) })
    }

    /// Parses the right-hand side of a binary operator.
    ///
    /// The current token is the operator; the right operand parses at the
    /// operator's own precedence, making the operator left-associative.
    pub(in crate::interpreter::parser) fn parse_infix_expression(
        &mut self,
        left: Expr,
    ) -> ParseResult<Expr> {
        let operator = match infix_operator(self.cur()) {
            Some(operator) => operator,
            None => {
                return Err(ParseError::NoPrefixParseFn {
                    token: self.cur().to_string(),
                    line: self.cur_line(),
                });
            },
        };

        let precedence = self.cur_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Ok(Expr::Infix { left: Box::new(left), operator, right: Box::new(right) })
    }

    /// Parses `(<expr>)`.
    fn parse_grouped_expression(&mut self) -> ParseResult<Expr> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;
        Ok(expression)
    }

    /// Parses an `if (…) { … }` chain with optional `else if` branches and
    /// a trailing `else`.
    fn parse_if_expression(&mut self) -> ParseResult<Expr> {
        self.expect_peek(&Token::LParen)?;
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;
        self.expect_peek(&Token::LBrace)?;
        let consequence = self.parse_block()?;

        let mut conditions = vec![(condition, consequence)];
        let mut alternative = None;

        while matches!(self.peek(), Token::Else) {
            self.next_token();

            if matches!(self.peek(), Token::If) {
                self.next_token();
                self.expect_peek(&Token::LParen)?;
                self.next_token();

                let condition = self.parse_expression(Precedence::Lowest)?;
                self.expect_peek(&Token::RParen)?;
                self.expect_peek(&Token::LBrace)?;
                conditions.push((condition, self.parse_block()?));
            } else {
                self.expect_peek(&Token::LBrace)?;
                alternative = Some(self.parse_block()?);
            }
        }

        Ok(Expr::If { conditions, alternative })
    }

    /// Parses `fn(<params>) { … }`.
    fn parse_function_literal(&mut self) -> ParseResult<Expr> {
        self.expect_peek(&Token::LParen)?;
        let parameters = self.parse_function_parameters()?;
        self.expect_peek(&Token::LBrace)?;
        let body = self.parse_block()?;

        Ok(Expr::Function { parameters, body })
    }

    /// Parses a parenthesized, comma-separated parameter name list.
    pub(in crate::interpreter::parser) fn parse_function_parameters(
        &mut self,
    ) -> ParseResult<Vec<String>> {
        let mut parameters = Vec::new();

        if matches!(self.peek(), Token::RParen) {
            self.next_token();
            return Ok(parameters);
        }

        parameters.push(self.expect_peek_ident()?);
        while matches!(self.peek(), Token::Comma) {
            self.next_token();
            parameters.push(self.expect_peek_ident()?);
        }

        self.expect_peek(&Token::RParen)?;
        Ok(parameters)
    }

    /// Parses `[<expr>, …]`.
    fn parse_array_literal(&mut self) -> ParseResult<Expr> {
        let elements = self.parse_expression_list(&Token::RBracket)?;
        Ok(Expr::Array(elements))
    }

    /// Parses `{<key>: <value>, …}`.
    ///
    /// Keys are arbitrary expressions; hashability is checked at
    /// evaluation time.
    fn parse_hash_literal(&mut self) -> ParseResult<Expr> {
        let mut pairs = Vec::new();

        while !matches!(self.peek(), Token::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(&Token::Colon)?;
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !matches!(self.peek(), Token::RBrace) {
                self.expect_peek(&Token::Comma)?;
            }
        }

        self.expect_peek(&Token::RBrace)?;
        Ok(Expr::Hash(pairs))
    }

    /// Parses the argument list of a call; the current token is `(`.
    pub(in crate::interpreter::parser) fn parse_call_expression(
        &mut self,
        function: Expr,
    ) -> ParseResult<Expr> {
        let arguments = self.parse_expression_list(&Token::RParen)?;
        Ok(Expr::Call { function: Box::new(function), arguments })
    }

    /// Parses `[<expr>]` indexing; the current token is `[`.
    pub(in crate::interpreter::parser) fn parse_index_expression(
        &mut self,
        left: Expr,
    ) -> ParseResult<Expr> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RBracket)?;

        Ok(Expr::Index { left: Box::new(left), index: Box::new(index) })
    }

    /// Parses `.name(<args>)` method syntax; the current token is `.`.
    ///
    /// Binds at call precedence, so method calls chain and compose with
    /// surrounding operators.
    pub(in crate::interpreter::parser) fn parse_method_expression(
        &mut self,
        receiver: Expr,
    ) -> ParseResult<Expr> {
        let name = self.expect_peek_ident()?;
        self.expect_peek(&Token::LParen)?;
        let arguments = self.parse_expression_list(&Token::RParen)?;

        Ok(Expr::Method { receiver: Box::new(receiver), name, arguments })
    }

    /// Parses a comma-separated expression list up to a closing token.
    fn parse_expression_list(&mut self, end: &Token) -> ParseResult<Vec<Expr>> {
        let mut list = Vec::new();

        if std::mem::discriminant(self.peek()) == std::mem::discriminant(end) {
            self.next_token();
            return Ok(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while matches!(self.peek(), Token::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Ok(list)
    }
}
