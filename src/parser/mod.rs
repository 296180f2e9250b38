mod error;
pub mod expression;
pub mod formatter;

pub use error::{ParserError, ParserErrorKind};

use crate::lexer::{Keyword, Lexer, Token, TokenKind};
use compact_str::CompactString;
use expression::{Expression, InfixOperator, Lambda};
use std::rc::Rc;
use tracing::trace;

/// Recursive descent parser with precedence climbing for infix operators.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: Lexer::new(source),
        }
    }

    pub fn get_source(&self) -> &'src str {
        self.lexer.get_source()
    }

    fn fail(&self, kind: ParserErrorKind) -> ParserError {
        ParserError {
            kind,
            location: self.lexer.location(),
        }
    }

    fn is_punctuation(&mut self, expected: char) -> Result<bool, ParserError> {
        Ok(self
            .lexer
            .peek()?
            .is_some_and(|token| token.is_punctuation(expected)))
    }

    fn is_keyword(&mut self, expected: Keyword) -> Result<bool, ParserError> {
        Ok(self
            .lexer
            .peek()?
            .is_some_and(|token| token.is_keyword(expected)))
    }

    fn skip_punctuation(&mut self, expected: char) -> Result<(), ParserError> {
        if self.is_punctuation(expected)? {
            self.lexer.next_token()?;
            Ok(())
        } else {
            let mut value = CompactString::default();
            value.push(expected);
            Err(self.fail(ParserErrorKind::Expecting {
                kind: TokenKind::Punctuation,
                value,
            }))
        }
    }

    fn skip_keyword(&mut self, expected: Keyword) -> Result<(), ParserError> {
        if self.is_keyword(expected)? {
            self.lexer.next_token()?;
            Ok(())
        } else {
            Err(self.fail(ParserErrorKind::Expecting {
                kind: TokenKind::Keyword,
                value: expected.as_str().into(),
            }))
        }
    }
}

impl<'src> Parser<'src> {
    /// Parses `;` separated expressions until the input runs out. The result is
    /// always a [`Expression::Program`], even for zero or one expressions.
    pub fn parse_program(&mut self) -> Result<Expression, ParserError> {
        let mut program = Vec::new();
        while !self.lexer.is_at_end()? {
            program.push(self.parse_expression()?);
            if !self.lexer.is_at_end()? {
                self.skip_punctuation(';')?;
            }
        }
        trace!(expressions = program.len(), "parsed program");
        Ok(Expression::Program(program))
    }

    pub fn parse_expression(&mut self) -> Result<Expression, ParserError> {
        let atom = self.parse_atom()?;
        let expression = self.maybe_binary(atom, 0)?;
        self.maybe_call(expression)
    }

    pub fn parse_atom(&mut self) -> Result<Expression, ParserError> {
        let atom = self.parse_bare_atom()?;
        self.maybe_call(atom)
    }

    fn parse_bare_atom(&mut self) -> Result<Expression, ParserError> {
        match self.lexer.peek()?.cloned() {
            Some(Token::Punctuation('(')) => {
                self.lexer.next_token()?;
                let inner = self.parse_expression()?;
                self.skip_punctuation(')')?;
                Ok(inner)
            }
            Some(Token::Punctuation('{')) => self.parse_block(),
            Some(Token::Keyword(Keyword::If)) => self.parse_condition(),
            Some(Token::Keyword(Keyword::True | Keyword::False)) => self.parse_boolean(),
            Some(Token::Keyword(Keyword::Def)) => {
                self.lexer.next_token()?;
                self.parse_lambda()
            }
            Some(token) => {
                self.lexer.next_token()?;
                match token {
                    Token::Variable(name) => Ok(Expression::Variable(name)),
                    Token::Number(value) => Ok(Expression::Number(value)),
                    Token::String(value) => Ok(Expression::String(value)),
                    token => Err(self.fail(ParserErrorKind::UnexpectedToken(token.to_json()))),
                }
            }
            None => Err(self.fail(ParserErrorKind::UnexpectedToken("null".into()))),
        }
    }

    /// A braced block. Empty blocks are `false` and single expressions are unwrapped.
    pub fn parse_block(&mut self) -> Result<Expression, ParserError> {
        let mut program = self.parse_delimited('{', '}', ';', Self::parse_expression)?;
        if program.len() > 1 {
            return Ok(Expression::Program(program));
        }
        Ok(program.pop().unwrap_or(Expression::Boolean(false)))
    }

    pub fn parse_condition(&mut self) -> Result<Expression, ParserError> {
        self.skip_keyword(Keyword::If)?;
        let condition = self.parse_expression()?;
        if !self.is_punctuation('{')? {
            self.skip_keyword(Keyword::Then)?;
        }
        let then = self.parse_expression()?;
        let otherwise = if self.is_keyword(Keyword::Else)? {
            self.lexer.next_token()?;
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };
        Ok(Expression::Condition {
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise,
        })
    }

    pub fn parse_boolean(&mut self) -> Result<Expression, ParserError> {
        match self.lexer.next_token()? {
            Some(Token::Keyword(Keyword::True)) => Ok(Expression::Boolean(true)),
            Some(Token::Keyword(Keyword::False)) => Ok(Expression::Boolean(false)),
            _ => Err(self.fail(ParserErrorKind::Expecting {
                kind: TokenKind::Keyword,
                value: Keyword::True.as_str().into(),
            })),
        }
    }

    /// Parameter list and body of a lambda; the `def` keyword is already consumed.
    pub fn parse_lambda(&mut self) -> Result<Expression, ParserError> {
        let parameters = self.parse_delimited('(', ')', ',', Self::parse_variable)?;
        let body = self.parse_expression()?;
        Ok(Expression::Lambda(Rc::new(Lambda { parameters, body })))
    }

    pub fn parse_variable(&mut self) -> Result<CompactString, ParserError> {
        match self.lexer.next_token()? {
            Some(Token::Variable(name)) => Ok(name),
            _ => Err(self.fail(ParserErrorKind::NonVariable)),
        }
    }

    pub fn parse_delimited<T>(
        &mut self,
        start: char,
        stop: char,
        separator: char,
        mut parse: impl FnMut(&mut Self) -> Result<T, ParserError>,
    ) -> Result<Vec<T>, ParserError> {
        self.skip_punctuation(start)?;

        let mut result = Vec::new();
        let mut first = true;
        while !self.lexer.is_at_end()? {
            if self.is_punctuation(stop)? {
                break;
            }
            if first {
                first = false;
            } else {
                self.skip_punctuation(separator)?;
            }
            if self.is_punctuation(stop)? {
                break;
            }
            result.push(parse(self)?);
        }

        self.skip_punctuation(stop)?;
        Ok(result)
    }

    pub fn parse_call(&mut self, function: Expression) -> Result<Expression, ParserError> {
        let arguments = self.parse_delimited('(', ')', ',', Self::parse_expression)?;
        Ok(Expression::Call {
            function: Box::new(function),
            arguments,
        })
    }

    fn maybe_call(&mut self, mut expression: Expression) -> Result<Expression, ParserError> {
        while self.is_punctuation('(')? {
            expression = self.parse_call(expression)?;
        }
        Ok(expression)
    }

    fn peek_infix_operator(&mut self) -> Result<Option<InfixOperator>, ParserError> {
        match self.lexer.peek()? {
            Some(Token::Operator(lexeme)) => Ok(InfixOperator::from_lexeme(lexeme)),
            _ => Ok(None),
        }
    }

    /// Folds infix operators binding tighter than `min_precedence` onto `lhs`.
    fn maybe_binary(
        &mut self,
        mut lhs: Expression,
        min_precedence: u8,
    ) -> Result<Expression, ParserError> {
        while let Some(operator) = self.peek_infix_operator()? {
            let precedence = operator.get_precedence();
            if precedence <= min_precedence {
                break;
            }
            self.lexer.next_token()?;

            let atom = self.parse_atom()?;
            lhs = match operator {
                // Assignment chains to the right: `a = b = c` is `a = (b = c)`.
                InfixOperator::Assign => {
                    let rhs = self.maybe_binary(atom, precedence - 1)?;
                    Expression::assignment(lhs, rhs)
                }
                InfixOperator::Binary(operator) => {
                    let rhs = self.maybe_binary(atom, precedence)?;
                    Expression::binary(operator, lhs, rhs)
                }
            };
        }
        Ok(lhs)
    }
}
