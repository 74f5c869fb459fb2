//! Tokenizer for scientific expressions.
//!
//! Every token carries the character offset where it starts so parse errors
//! can point at the offending spot.

use std::fmt;

use crate::errors::{CalcError, CalcResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Identifier(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Bang,

    // Delimiters
    LeftParen,
    RightParen,

    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Percent => write!(f, "%"),
            Token::Caret => write!(f, "^"),
            Token::Bang => write!(f, "!"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

/// A token and the character offset it starts at
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

pub struct Lexer<'a> {
    source: &'a str,
    input: Vec<char>,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            input: source.chars().collect(),
            position: 0,
        }
    }

    fn current(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn error(&self, position: usize, reason: impl Into<String>) -> CalcError {
        CalcError::invalid_expression(self.source, position, reason)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current(), Some(ch) if ch.is_whitespace()) {
            self.position += 1;
        }
    }

    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.position;
        let mut text = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.current() {
            if ch.is_ascii_digit() {
                text.push(ch);
            } else if ch == '.' && !seen_dot {
                seen_dot = true;
                text.push(ch);
            } else {
                break;
            }
            self.position += 1;
        }

        // Exponent only when digits follow, so a bare `e` stays Euler's number
        if matches!(self.current(), Some('e' | 'E')) {
            let digits_at = match self.peek(1) {
                Some('+' | '-') => 2,
                _ => 1,
            };
            if matches!(self.peek(digits_at), Some(d) if d.is_ascii_digit()) {
                for _ in 0..digits_at {
                    if let Some(c) = self.current() {
                        text.push(c);
                    }
                    self.position += 1;
                }
                while let Some(d) = self.current().filter(char::is_ascii_digit) {
                    text.push(d);
                    self.position += 1;
                }
            }
        }

        if text == "." {
            return Err(self.error(start, "Expected a number"));
        }
        text.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| self.error(start, format!("Invalid number '{}'", text)))
    }

    fn read_identifier(&mut self) -> Token {
        let mut name = String::new();
        while let Some(ch) = self.current() {
            if ch.is_alphanumeric() || ch == '_' {
                name.push(ch);
                self.position += 1;
            } else {
                break;
            }
        }
        Token::Identifier(name.to_lowercase())
    }

    pub fn next_token(&mut self) -> CalcResult<Spanned> {
        self.skip_whitespace();
        let position = self.position;

        let Some(ch) = self.current() else {
            return Ok(Spanned {
                token: Token::Eof,
                position,
            });
        };

        let token = if ch.is_ascii_digit() || ch == '.' {
            self.read_number()?
        } else if ch.is_alphabetic() {
            self.read_identifier()
        } else {
            let token = match ch {
                '+' => Token::Plus,
                '-' | '−' => Token::Minus,
                '*' if self.peek(1) == Some('*') => {
                    self.position += 1;
                    Token::Caret
                }
                '*' | '×' => Token::Star,
                '/' | '÷' => Token::Slash,
                '%' => Token::Percent,
                '^' => Token::Caret,
                '!' => Token::Bang,
                '(' => Token::LeftParen,
                ')' => Token::RightParen,
                other => return Err(self.error(position, format!("Unexpected character '{}'", other))),
            };
            self.position += 1;
            token
        };

        Ok(Spanned { token, position })
    }

    /// Tokenize the whole input, ending with [`Token::Eof`].
    pub fn tokenize(mut self) -> CalcResult<Vec<Spanned>> {
        let mut tokens = Vec::new();
        loop {
            let spanned = self.next_token()?;
            let done = spanned.token == Token::Eof;
            tokens.push(spanned);
            if done {
                return Ok(tokens);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|s| s.token)
            .collect()
    }

    #[test]
    fn test_operators_and_symbols() {
        assert_eq!(
            tokens("3 × 4 ÷ 2 − 1"),
            vec![
                Token::Number(3.0),
                Token::Star,
                Token::Number(4.0),
                Token::Slash,
                Token::Number(2.0),
                Token::Minus,
                Token::Number(1.0),
                Token::Eof
            ]
        );
        assert_eq!(tokens("2**3"), vec![Token::Number(2.0), Token::Caret, Token::Number(3.0), Token::Eof]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(tokens(".5"), vec![Token::Number(0.5), Token::Eof]);
        assert_eq!(tokens("1.5e3"), vec![Token::Number(1500.0), Token::Eof]);
        // `e` without digits is the constant
        assert_eq!(
            tokens("2e"),
            vec![Token::Number(2.0), Token::Identifier("e".into()), Token::Eof]
        );
    }

    #[test]
    fn test_identifiers_lowercased() {
        assert_eq!(
            tokens("SQRT(π)"),
            vec![
                Token::Identifier("sqrt".into()),
                Token::LeftParen,
                Token::Identifier("π".into()),
                Token::RightParen,
                Token::Eof
            ]
        );
    }

    #[test]
    fn test_positions() {
        let spans = Lexer::new("1 +  22").tokenize().unwrap();
        let positions: Vec<usize> = spans.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0, 2, 5, 7]);
    }

    #[test]
    fn test_unexpected_character() {
        let err = Lexer::new("2 $ 3").tokenize().unwrap_err();
        match err {
            CalcError::InvalidExpression { position, .. } => assert_eq!(position, 2),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
