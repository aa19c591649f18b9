//! Predicates over values and bound symbols
use crate::env::{Apply, Arity, Function};
use crate::eval::resolve_sentinel;
use crate::expr::{Expr, SymbolId};
use crate::Error;

use super::arity_err;

/// Language binding for `eq`, also bound as `=`
pub fn eq_fn() -> Function {
    Function {
        doc: Some("(eq LHS RHS) - Returns t if LHS and RHS are equal, nil otherwise".to_string()),
        arity: Arity::Exact(2),
        apply: Apply::Eager(|_, _, args| match args {
            [lhs, rhs] => Ok(Expr::from(lhs == rhs)),
            _ => Err(arity_err("EQ", Arity::Exact(2), args.len())),
        }),
    }
}

/// Language binding for `null`
pub fn null_fn() -> Function {
    Function {
        doc: Some("(null EXPR) - Returns t if EXPR is the empty list, nil otherwise".to_string()),
        arity: Arity::Exact(1),
        apply: Apply::Eager(|_, _, args| match args {
            [value] => Ok(Expr::from(value.is_nil())),
            _ => Err(arity_err("NULL", Arity::Exact(1), args.len())),
        }),
    }
}

/// Language binding for `symbolp`
pub fn symbolp_fn() -> Function {
    Function {
        doc: Some(
            "(symbolp NAME) - Returns t if NAME resolves to a binding anywhere in the environment chain, nil otherwise"
                .to_string(),
        ),
        arity: Arity::Exact(1),
        apply: Apply::Eager(|_, env, args| {
            let name = match args {
                [Expr::Symbol(s)] => s.clone(),
                [Expr::String(s)] => SymbolId::from(s.as_str()),
                // the sentinels designate themselves and always resolve
                [Expr::T] => return Ok(Expr::T),
                [value] if value.is_nil() => return Ok(Expr::T),
                [other] => {
                    return Err(Error::TypeMismatch(format!(
                        "symbolp expects a symbol or string - got {other}"
                    )))
                }
                _ => return Err(arity_err("SYMBOLP", Arity::Exact(1), args.len())),
            };
            let resolves = resolve_sentinel(&name).is_some()
                || env.borrow().is_bound(&name)
                || env.borrow().is_bound(&name.canonical());
            Ok(Expr::from(resolves))
        }),
    }
}

/// Language binding for `>`
pub fn gt_fn() -> Function {
    Function {
        doc: Some(
            "(> LHS RHS) - Returns t if LHS is greater than RHS, nil otherwise. Ints compare numerically, strings lexically"
                .to_string(),
        ),
        arity: Arity::Exact(2),
        apply: Apply::Eager(|_, _, args| match args {
            [Expr::Int(lhs), Expr::Int(rhs)] => Ok(Expr::from(lhs > rhs)),
            [Expr::String(lhs), Expr::String(rhs)] => Ok(Expr::from(lhs > rhs)),
            [lhs, rhs] => Err(Error::TypeMismatch(format!(
                "> expects two ints or two strings - got {lhs} and {rhs}"
            ))),
            _ => Err(arity_err(">", Arity::Exact(2), args.len())),
        }),
    }
}
