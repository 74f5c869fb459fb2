//! Recursive descent parser for scientific expressions.
//!
//! Precedence, loosest first:
//!
//! | Level          | Operators        | Associativity |
//! |----------------|------------------|---------------|
//! | additive       | `+ -`            | left          |
//! | multiplicative | `* / % × ÷`      | left          |
//! | unary          | prefix `- +`     | right         |
//! | power          | `^` (`**`)       | right         |
//! | postfix        | `!`              | left          |
//!
//! Unary minus binds looser than `^`, so `-2^2` is `-(2^2)`. The exponent
//! may itself carry a sign: `2^-1`.

use super::ast::{BinaryOperator, Expr};
use super::functions::{lookup_constant, lookup_function};
use super::lexer::{Lexer, Spanned, Token};
use crate::errors::{CalcError, CalcResult};

pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Spanned>,
    index: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> CalcResult<Self> {
        let tokens = Lexer::new(source).tokenize()?;
        Ok(Self {
            source,
            tokens,
            index: 0,
        })
    }

    fn current(&self) -> &Spanned {
        // tokenize() always ends with Eof and advance() never steps past it
        &self.tokens[self.index.min(self.tokens.len() - 1)]
    }

    fn token(&self) -> &Token {
        &self.current().token
    }

    fn advance(&mut self) {
        if self.index + 1 < self.tokens.len() {
            self.index += 1;
        }
    }

    fn error_here(&self, reason: impl Into<String>) -> CalcError {
        CalcError::invalid_expression(self.source, self.current().position, reason)
    }

    fn expect(&mut self, expected: Token) -> CalcResult<()> {
        if *self.token() == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(format!("Expected '{}', found '{}'", expected, self.token())))
        }
    }

    /// Parse the whole input as one expression.
    pub fn parse(mut self) -> CalcResult<Expr> {
        if *self.token() == Token::Eof {
            return Err(self.error_here("Expression is empty"));
        }
        let expr = self.parse_additive()?;
        if *self.token() != Token::Eof {
            return Err(self.error_here(format!("Unexpected '{}'", self.token())));
        }
        Ok(expr)
    }

    fn parse_additive(&mut self) -> CalcResult<Expr> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.token() {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            left = Expr::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> CalcResult<Expr> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.token() {
                Token::Star => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                Token::Percent => BinaryOperator::Modulo,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> CalcResult<Expr> {
        match self.token() {
            Token::Minus => {
                self.advance();
                Ok(Expr::negate(self.parse_unary()?))
            }
            Token::Plus => {
                self.advance();
                self.parse_unary()
            }
            _ => self.parse_power(),
        }
    }

    fn parse_power(&mut self) -> CalcResult<Expr> {
        let base = self.parse_postfix()?;

        // Right-associative; the exponent may be signed
        if *self.token() == Token::Caret {
            self.advance();
            let exponent = self.parse_unary()?;
            return Ok(Expr::binary(base, BinaryOperator::Power, exponent));
        }

        Ok(base)
    }

    fn parse_postfix(&mut self) -> CalcResult<Expr> {
        let mut expr = self.parse_primary()?;
        while *self.token() == Token::Bang {
            self.advance();
            expr = Expr::factorial(expr);
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> CalcResult<Expr> {
        match self.token().clone() {
            Token::Number(value) => {
                self.advance();
                Ok(Expr::Number(value))
            }
            Token::LeftParen => {
                self.advance();
                let inner = self.parse_additive()?;
                self.expect(Token::RightParen)?;
                Ok(inner)
            }
            Token::Identifier(name) => {
                if let Some(value) = lookup_constant(&name) {
                    self.advance();
                    return Ok(Expr::Number(value));
                }
                let Some(function) = lookup_function(&name) else {
                    return Err(self.error_here(format!("Unknown identifier '{}'", name)));
                };
                self.advance();
                if *self.token() != Token::LeftParen {
                    return Err(self.error_here(format!("Expected '(' after '{}'", name)));
                }
                self.advance();
                let argument = self.parse_additive()?;
                self.expect(Token::RightParen)?;
                Ok(Expr::call(function, argument))
            }
            Token::Eof => Err(self.error_here("Unexpected end of expression")),
            other => Err(self.error_here(format!("Unexpected '{}'", other))),
        }
    }
}

/// Parse `source` into an expression tree.
pub fn parse(source: &str) -> CalcResult<Expr> {
    Parser::new(source)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::functions::Function;

    fn tree(source: &str) -> String {
        parse(source).unwrap().to_string()
    }

    fn error_position(source: &str) -> usize {
        match parse(source).unwrap_err() {
            CalcError::InvalidExpression { position, .. } => position,
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_precedence() {
        assert_eq!(tree("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(tree("(1 + 2) * 3"), "((1 + 2) * 3)");
        assert_eq!(tree("8 / 4 / 2"), "((8 / 4) / 2)");
        assert_eq!(tree("10 - 4 - 3"), "((10 - 4) - 3)");
    }

    #[test]
    fn test_power_associativity_and_sign() {
        assert_eq!(tree("2 ^ 3 ^ 2"), "(2 ^ (3 ^ 2))");
        assert_eq!(tree("-2 ^ 2"), "(-(2 ^ 2))");
        assert_eq!(tree("2 ^ -1"), "(2 ^ (-1))");
    }

    #[test]
    fn test_postfix_factorial() {
        assert_eq!(tree("3!"), "(3!)");
        assert_eq!(tree("2 * 3!"), "(2 * (3!))");
        assert_eq!(tree("2 ^ 3!"), "(2 ^ (3!))");
    }

    #[test]
    fn test_function_call() {
        let expr = parse("sqrt(16)").unwrap();
        assert_eq!(expr, Expr::call(Function::Sqrt, Expr::Number(16.0)));
    }

    #[test]
    fn test_error_positions() {
        assert_eq!(error_position(""), 0);
        assert_eq!(error_position("2 +"), 3);
        assert_eq!(error_position("(1 + 2"), 6);
        assert_eq!(error_position("1 + 2)"), 5);
        assert_eq!(error_position("foo(1)"), 0);
        assert_eq!(error_position("sqrt 4"), 5);
        assert_eq!(error_position("2 3"), 2);
    }
}
