//! Conditional and boolean forms
use crate::env::{Apply, Arity, EnvRef, Function};
use crate::eval::{quote_or_eval, Evaluator};
use crate::expr::Expr;
use crate::{Error, Result};

use super::arity_err;

/// Language binding for `cond`, also bound as `if`
pub fn cond_fn() -> Function {
    Function {
        doc: Some(
            "(cond CLAUSES...) - Evaluates each clause's test in order. On the first truthy test, evaluates that clause's body and returns its last value, or the test's value for a bodiless clause. Returns nil when no test is truthy"
                .to_string(),
        ),
        arity: Arity::AtLeast(0),
        apply: Apply::Lazy(|evaluator, env, operands| {
            for clause in operands {
                if let Some(value) = eval_clause(evaluator, env, clause)? {
                    return Ok(value);
                }
            }
            Ok(Expr::nil())
        }),
    }
}

/// Language binding for `and`
pub fn and_fn() -> Function {
    Function {
        doc: Some(
            "(and FORMS...) - Evaluates FORMS left to right, returning the first falsy value, or the last value once all are truthy. Returns t given no forms"
                .to_string(),
        ),
        arity: Arity::AtLeast(0),
        apply: Apply::Lazy(|evaluator, env, operands| {
            let mut last = Expr::T;
            let mut rest = operands.iter();
            while let Some(form) = rest.next() {
                let value = quote_or_eval(evaluator, env, form, &mut rest)?;
                if !value.is_truthy() {
                    return Ok(value);
                }
                last = value;
            }
            Ok(last)
        }),
    }
}

/// Language binding for `or`
pub fn or_fn() -> Function {
    Function {
        doc: Some(
            "(or FORMS...) - Evaluates FORMS left to right, returning the first truthy value, or nil once none is"
                .to_string(),
        ),
        arity: Arity::AtLeast(0),
        apply: Apply::Lazy(|evaluator, env, operands| {
            let mut rest = operands.iter();
            while let Some(form) = rest.next() {
                let value = quote_or_eval(evaluator, env, form, &mut rest)?;
                if value.is_truthy() {
                    return Ok(value);
                }
            }
            Ok(Expr::nil())
        }),
    }
}

/// Language binding for `not`
pub fn not_fn() -> Function {
    Function {
        doc: Some("(not EXPR) - Returns t if EXPR is nil, nil otherwise".to_string()),
        arity: Arity::Exact(1),
        apply: Apply::Eager(|_, _, args| match args {
            [value] => Ok(Expr::from(!value.is_truthy())),
            _ => Err(arity_err("NOT", Arity::Exact(1), args.len())),
        }),
    }
}

/// Evaluate a single clause, returning its value when the test is truthy
fn eval_clause(evaluator: &mut Evaluator, env: &EnvRef, clause: &Expr) -> Result<Option<Expr>> {
    let elements = match clause {
        Expr::List(elements) => elements,
        other => {
            return Err(Error::TypeMismatch(format!(
                "cond expects clause lists - got {other}"
            )))
        }
    };

    let mut rest = elements.iter();
    let test = match rest.next() {
        Some(form) => quote_or_eval(evaluator, env, form, &mut rest)?,
        None => {
            return Err(Error::TypeMismatch(
                "cond clause is missing a test".to_string(),
            ))
        }
    };
    if !test.is_truthy() {
        return Ok(None);
    }

    let mut value = test;
    while let Some(form) = rest.next() {
        value = quote_or_eval(evaluator, env, form, &mut rest)?;
    }
    Ok(Some(value))
}
