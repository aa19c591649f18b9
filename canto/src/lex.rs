//! Lexer for Canto
use std::iter::Peekable;
use tracing::error;

use crate::{Error, Result};

/// Parsed Tokens from String
#[derive(Debug, PartialEq)]
pub enum Token {
    Nil,
    T,
    Int(i32),
    String(String),
    Symbol(String),
    ParenLeft,
    ParenRight,
    Quote,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Nil => write!(f, "nil"),
            Token::T => write!(f, "t"),
            Token::Int(i) => write!(f, "{}", i),
            Token::String(s) => write!(f, "\"{}\"", s),
            Token::Symbol(s) => write!(f, "{}", s),
            Token::ParenLeft => write!(f, "("),
            Token::ParenRight => write!(f, ")"),
            Token::Quote => write!(f, "'"),
        }
    }
}

/// Tokenize entire expression as vector
pub(crate) fn lex(expr: &str) -> Result<Vec<Token>> {
    let mut tokens = vec![];
    for token in Tokens::new(expr) {
        match token {
            Ok(token) => tokens.push(token),
            Err(err) => {
                error!("lexing failed - {}, tokens={:?}", err, tokens);
                return Err(err);
            }
        }
    }
    Ok(tokens)
}

/// An iterator over Tokens
struct Tokens<'a> {
    inner: Peekable<std::str::Chars<'a>>,
}

impl Tokens<'_> {
    /// Create Tokens iterator from &str
    fn new(expr: &str) -> Tokens<'_> {
        Tokens {
            inner: expr.chars().peekable(),
        }
    }

    /// Parse next symbol from inner iterator. Sentinel names fold to
    /// their tokens in any case
    fn next_symbol(&mut self) -> Result<Token> {
        let expr: String =
            std::iter::from_fn(|| self.inner.next_if(|ch| !is_symbol_delimiter(ch))).collect();
        if expr.eq_ignore_ascii_case("nil") {
            Ok(Token::Nil)
        } else if expr.eq_ignore_ascii_case("t") {
            Ok(Token::T)
        } else {
            Ok(Token::Symbol(expr))
        }
    }

    /// Parse the next int
    fn next_int(&mut self) -> Result<Token> {
        let expr: String =
            std::iter::from_fn(|| self.inner.next_if(|ch| !is_symbol_delimiter(ch))).collect();
        let num = expr
            .parse::<i32>()
            .map_err(|_| Error::FailedToLex(format!("Unable to parse integer - {expr}")))?;
        Ok(Token::Int(num))
    }

    /// Parse next punctuation
    fn next_punct(&mut self) -> Result<Token> {
        let ch = self
            .inner
            .next()
            .ok_or(Error::FailedToLex("Expected punctuation".to_string()))?;
        match ch {
            '(' => Ok(Token::ParenLeft),
            ')' => Ok(Token::ParenRight),
            '\'' => Ok(Token::Quote),
            _ => Err(Error::FailedToLex(format!("Unexpected punctuation - {ch}"))),
        }
    }

    /// Parse next string
    fn next_string(&mut self) -> Result<Token> {
        let ch = self.inner.next().ok_or(Error::FailedToLex(
            "Expected opening string quotation".to_string(),
        ))?;
        if ch != '\"' {
            return Err(Error::FailedToLex(format!(
                "Expected opening string quotation - found {ch}"
            )));
        }

        let mut escaped = false;
        let expr: String = std::iter::from_fn(|| {
            while let Some(ch) = self.inner.next_if(|ch| *ch != '\"' || escaped) {
                if !escaped && ch == '\\' {
                    escaped = true;
                } else {
                    let actual_ch = match ch {
                        'n' if escaped => '\n',
                        '"' if escaped => '\"',
                        _ => ch,
                    };
                    escaped = false;
                    return Some(actual_ch);
                }
            }
            None
        })
        .collect();

        let ch = self.inner.next().ok_or(Error::FailedToLex(
            "Expected closing string quotation".to_string(),
        ))?;
        if ch != '\"' {
            return Err(Error::FailedToLex(format!(
                "Expected closing string quotation - found {ch}"
            )));
        }

        Ok(Token::String(expr))
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut is_comment = false;

        while let Some(ch) = self.inner.peek() {
            if *ch == '\n' && is_comment {
                is_comment = false;
            }
            if *ch == '#' {
                is_comment = true;
            }
            if ch.is_whitespace() || is_comment {
                let _ = self.inner.next();
                continue;
            }
            let token = match ch {
                '\"' => self.next_string(),
                _ if is_punct(ch) => self.next_punct(),
                _ if ch.is_numeric() || ch == &'-' => self.next_int(),
                _ => self.next_symbol(),
            };
            return Some(token);
        }
        None
    }
}

/// Return whether or not a given character is a symbol delimiter
fn is_symbol_delimiter(ch: &char) -> bool {
    ch.is_whitespace() || is_punct(ch)
}

/// Return whether or not token is an interesting punctuation
fn is_punct(ch: &char) -> bool {
    *ch == '(' || *ch == ')' || *ch == '\''
}
