//! Parser for Canto
use crate::expr::{Expr, SymbolId};
use crate::lex::{lex, Token};
use crate::{Error, Result};

type PeekableTokens = std::iter::Peekable<std::vec::IntoIter<Token>>;

/// Maximum nesting depth the reader accepts
const MAX_DEPTH: usize = 512;

/// Parse a given string as a single expression
pub fn parse(expr: &str) -> Result<Expr> {
    let mut tokens = lex(expr)?.into_iter().peekable();
    let expr = parse_expr(&mut tokens, 0)?;
    if let Some(token) = tokens.next() {
        return Err(Error::FailedToParse(format!(
            "Unexpected token after expression - {token}"
        )));
    }
    Ok(expr)
}

/// Parse single expression
fn parse_expr(tokens: &mut PeekableTokens, depth: usize) -> Result<Expr> {
    if depth > MAX_DEPTH {
        return Err(Error::FailedToParse(format!(
            "Exceeded max nesting depth - {MAX_DEPTH}"
        )));
    }
    let next = tokens.next().ok_or(Error::IncompleteExpression(
        "Expected an expression".to_string(),
    ))?;
    match next {
        Token::Nil => Ok(Expr::nil()),
        Token::T => Ok(Expr::T),
        Token::Int(i) => Ok(Expr::Int(i)),
        Token::String(s) => Ok(Expr::String(s)),
        Token::Symbol(s) => Ok(Expr::Symbol(SymbolId::from(s))),
        Token::Quote => {
            let quoted = parse_expr(tokens, depth + 1)?;
            Ok(Expr::List(vec![Expr::Quote, quoted]))
        }
        Token::ParenLeft => parse_list(tokens, depth + 1),
        Token::ParenRight => Err(Error::FailedToParse(
            "Unexpected closing parenthesis".to_string(),
        )),
    }
}

/// Parse elements until the closing parenthesis. The quoting marker stays
/// a sibling of the element it protects
fn parse_list(tokens: &mut PeekableTokens, depth: usize) -> Result<Expr> {
    let mut elements = vec![];
    loop {
        match tokens.peek() {
            Some(Token::ParenRight) => {
                let _ = tokens.next();
                return Ok(Expr::List(elements));
            }
            Some(Token::Quote) => {
                let _ = tokens.next();
                elements.push(Expr::Quote);
            }
            Some(_) => elements.push(parse_expr(tokens, depth)?),
            None => {
                return Err(Error::IncompleteExpression(
                    "Expected closing parenthesis".to_string(),
                ))
            }
        }
    }
}
