//! Arithmetic Expression Evaluator
//! Tokenizer and recursive-descent evaluator for the numeric form fields.
//!
//! Accepted: numeric literals (decimal, optional `e` exponent), `+ - * / ^`
//! and parentheses. `^` is right associative and binds tighter than a
//! leading minus, so `-2^2` is `-4` while `10^-6` is `1e-6`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("expression ends unexpectedly")]
    UnexpectedEnd,
    #[error("unexpected token at position {pos}")]
    UnexpectedToken { pos: usize },
    #[error("parenthesis opened at position {pos} is never closed")]
    UnclosedParen { pos: usize },
    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },
    #[error("expression does not evaluate to a finite number")]
    NotFinite,
    #[error("expression nests too deeply at position {pos}")]
    TooDeep { pos: usize },
}

/// Deepest nesting of parentheses, signs and exponents accepted.
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Num(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

/// Split raw text into tokens, each tagged with its byte offset.
fn tokenize(src: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        let tok = match c {
            b' ' | b'\t' | b'\n' | b'\r' => {
                i += 1;
                continue;
            }
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'*' => Token::Star,
            b'/' => Token::Slash,
            b'^' => Token::Caret,
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b'0'..=b'9' | b'.' => {
                let start = i;
                i = scan_number(bytes, i);
                let text = &src[start..i];
                let value = text.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    text: text.to_string(),
                    pos: start,
                })?;
                tokens.push((Token::Num(value), start));
                continue;
            }
            _ => {
                // Report the full char, not the byte
                let ch = src[i..].chars().next().unwrap_or('\u{FFFD}');
                return Err(ParseError::UnexpectedChar { ch, pos: i });
            }
        };
        tokens.push((tok, i));
        i += 1;
    }

    Ok(tokens)
}

/// Return the end offset of the literal starting at `start`.
fn scan_number(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
        i += 1;
    }

    // Exponent part only counts if digits follow
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    i
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|(t, _)| *t)
    }

    fn offset(&self) -> usize {
        self.tokens.get(self.pos).map(|(_, p)| *p).unwrap_or(0)
    }

    fn bump(&mut self) -> Option<(Token, usize)> {
        let tok = self.tokens.get(self.pos).copied();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn enter(&mut self, pos: usize) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep { pos });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn expr(&mut self) -> Result<f64, ParseError> {
        let mut acc = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.bump();
            let rhs = self.term()?;
            acc = if op == Token::Plus { acc + rhs } else { acc - rhs };
        }
        Ok(acc)
    }

    fn term(&mut self) -> Result<f64, ParseError> {
        let mut acc = self.unary()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.bump();
            let rhs = self.unary()?;
            acc = if op == Token::Star { acc * rhs } else { acc / rhs };
        }
        Ok(acc)
    }

    fn unary(&mut self) -> Result<f64, ParseError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.enter(self.offset())?;
                self.bump();
                let value = -self.unary()?;
                self.leave();
                Ok(value)
            }
            Some(Token::Plus) => {
                self.enter(self.offset())?;
                self.bump();
                let value = self.unary()?;
                self.leave();
                Ok(value)
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<f64, ParseError> {
        let base = self.primary()?;
        if self.peek() == Some(Token::Caret) {
            self.enter(self.offset())?;
            self.bump();
            let exponent = self.unary()?;
            self.leave();
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<f64, ParseError> {
        match self.bump() {
            Some((Token::Num(v), _)) => Ok(v),
            Some((Token::LParen, open)) => {
                self.enter(open)?;
                let inner = self.expr()?;
                self.leave();
                match self.bump() {
                    Some((Token::RParen, _)) => Ok(inner),
                    Some((_, pos)) => Err(ParseError::UnexpectedToken { pos }),
                    None => Err(ParseError::UnclosedParen { pos: open }),
                }
            }
            Some((_, pos)) => Err(ParseError::UnexpectedToken { pos }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }
}

/// Evaluate a restricted arithmetic expression such as `3*10^-6`.
pub fn evaluate(src: &str) -> Result<f64, ParseError> {
    let tokens = tokenize(src)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;

    if parser.peek().is_some() {
        return Err(ParseError::UnexpectedToken {
            pos: parser.offset(),
        });
    }
    if !value.is_finite() {
        return Err(ParseError::NotFinite);
    }

    Ok(value)
}
