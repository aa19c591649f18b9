//! Documentation retrieval and symbol search
use crate::apropos;
use crate::env::{Apply, Arity, Function};
use crate::expr::{Expr, SymbolId};
use crate::Error;

use super::arity_err;

/// Language binding for `apropos`
pub fn apropos_fn() -> Function {
    Function {
        doc: Some(
            "(apropos SUBSTR) - Returns (NAME DOC) entries for bound symbols whose names contain SUBSTR, case insensitively"
                .to_string(),
        ),
        arity: Arity::Exact(1),
        apply: Apply::Eager(|_, env, args| {
            let query = match args {
                [Expr::String(s)] => s.clone(),
                [Expr::Symbol(s)] => s.as_str().to_string(),
                [other] => {
                    return Err(Error::TypeMismatch(format!(
                        "apropos expects a string or symbol - got {other}"
                    )))
                }
                _ => return Err(arity_err("APROPOS", Arity::Exact(1), args.len())),
            };
            let entries = apropos::search(env, &query)
                .into_iter()
                .map(|(name, doc)| {
                    Expr::List(vec![
                        Expr::Symbol(name),
                        doc.map(Expr::String).unwrap_or_else(Expr::nil),
                    ])
                })
                .collect();
            Ok(Expr::List(entries))
        }),
    }
}

/// Language binding for `documentation`
pub fn documentation_fn() -> Function {
    Function {
        doc: Some(
            "(documentation NAME) - Returns the documentation string attached to NAME, or nil"
                .to_string(),
        ),
        arity: Arity::Exact(1),
        apply: Apply::Eager(|_, env, args| {
            let name = match args {
                [Expr::Symbol(s)] => s.clone(),
                [Expr::String(s)] => SymbolId::from(s.as_str()),
                [other] => {
                    return Err(Error::TypeMismatch(format!(
                        "documentation expects a symbol or string - got {other}"
                    )))
                }
                _ => return Err(arity_err("DOCUMENTATION", Arity::Exact(1), args.len())),
            };
            Ok(apropos::documentation(env, &name)
                .map(Expr::String)
                .unwrap_or_else(Expr::nil))
        }),
    }
}
