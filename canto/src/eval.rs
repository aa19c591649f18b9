//! Evaluator for Canto expressions
use crate::env::{Apply, Binding, EnvRef};
use crate::expr::{Expr, SymbolId};
use crate::{Error, Result};
use tracing::warn;

/// Guard rails for evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// Maximum depth of nested evaluations
    pub max_depth: usize,
    /// Optional budget of total evaluation steps
    pub max_steps: Option<u64>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 200,
            max_steps: None,
        }
    }
}

/// Evaluates expressions against an environment of bindings
#[derive(Debug, Default)]
pub struct Evaluator {
    limits: Limits,
    depth: usize,
    steps: u64,
}

impl Evaluator {
    /// Create evaluator with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create evaluator with given limits
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Clear accumulated counters. Steps accumulate across calls so that
    /// natives re-entering the evaluator share one budget. Hosts evaluating
    /// independent expressions should reset between them
    pub fn reset(&mut self) {
        self.depth = 0;
        self.steps = 0;
    }

    /// Evaluate a single expression in the given environment
    pub fn eval(&mut self, expr: &Expr, env: &EnvRef) -> Result<Expr> {
        self.depth += 1;
        if self.depth > self.limits.max_depth {
            self.depth -= 1;
            warn!("evaluation exceeded max depth - {}", self.limits.max_depth);
            return Err(Error::RecursionLimitExceeded(self.limits.max_depth));
        }
        self.steps = self.steps.saturating_add(1);
        if let Some(max_steps) = self.limits.max_steps {
            if self.steps > max_steps {
                self.depth -= 1;
                warn!("evaluation exhausted step budget - {}", max_steps);
                return Err(Error::StepBudgetExhausted(max_steps));
            }
        }
        let result = self.eval_inner(expr, env);
        self.depth -= 1;
        result
    }

    fn eval_inner(&mut self, expr: &Expr, env: &EnvRef) -> Result<Expr> {
        match expr {
            Expr::T | Expr::Int(_) | Expr::String(_) => Ok(expr.clone()),
            Expr::Symbol(symbol) => eval_symbol(symbol, env),
            Expr::Quote => Err(Error::TypeMismatch(
                "Quote marker without an expression to quote".to_string(),
            )),
            Expr::List(elements) => self.eval_form(elements, env),
        }
    }

    fn eval_form(&mut self, form: &[Expr], env: &EnvRef) -> Result<Expr> {
        match form {
            [] => Ok(Expr::nil()),
            [Expr::Quote, quoted] => Ok(quoted.clone()),
            [Expr::Symbol(operator), operands @ ..] => self.eval_call(operator, operands, env),
            [head, ..] => Err(Error::TypeMismatch(format!(
                "Form head is not a symbol - {head}"
            ))),
        }
    }

    fn eval_call(&mut self, operator: &SymbolId, operands: &[Expr], env: &EnvRef) -> Result<Expr> {
        let name = operator.canonical();
        let binding = env.borrow().lookup(&name);
        let func = match binding {
            Some(Binding::Function(func)) => func,
            _ => return Err(Error::UndefinedFunction(name)),
        };
        match func.apply {
            Apply::Eager(native) => {
                // arity is validated before any operand is evaluated
                func.arity.check(&name, effective_count(operands)?)?;
                let mut args = vec![];
                let mut rest = operands.iter();
                while let Some(form) = rest.next() {
                    args.push(quote_or_eval(self, env, form, &mut rest)?);
                }
                native(self, env, &args)
            }
            Apply::Lazy(native) => {
                func.arity.check(&name, operands.len())?;
                native(self, env, operands)
            }
        }
    }
}

/// Resolve case-insensitive sentinel names to their canonical values
pub(crate) fn resolve_sentinel(symbol: &SymbolId) -> Option<Expr> {
    if symbol.as_str().eq_ignore_ascii_case("nil") {
        Some(Expr::nil())
    } else if symbol.as_str().eq_ignore_ascii_case("t") {
        Some(Expr::T)
    } else {
        None
    }
}

/// Take the next element verbatim when given the quoting marker, otherwise
/// evaluate the form. Used wherever operands honor the quoting rule
pub fn quote_or_eval<'a, I>(
    evaluator: &mut Evaluator,
    env: &EnvRef,
    form: &'a Expr,
    rest: &mut I,
) -> Result<Expr>
where
    I: Iterator<Item = &'a Expr>,
{
    match form {
        Expr::Quote => match rest.next() {
            Some(next) => Ok(next.clone()),
            None => Err(Error::TypeMismatch(
                "Quote marker without an expression to quote".to_string(),
            )),
        },
        _ => evaluator.eval(form, env),
    }
}

fn eval_symbol(symbol: &SymbolId, env: &EnvRef) -> Result<Expr> {
    if let Some(sentinel) = resolve_sentinel(symbol) {
        return Ok(sentinel);
    }
    match env.borrow().lookup(symbol) {
        Some(Binding::Value(value)) => Ok(value),
        // a symbol naming a function designates itself
        Some(Binding::Function(_)) => Ok(Expr::Symbol(symbol.clone())),
        None => Err(Error::UnboundSymbol(symbol.clone())),
    }
}

/// Count argument slots in operand forms. The quoting marker consumes no
/// slot, and a marker with nothing to protect is an error
fn effective_count(operands: &[Expr]) -> Result<usize> {
    let mut count = 0;
    let mut rest = operands;
    loop {
        match rest {
            [] => return Ok(count),
            [Expr::Quote] => {
                return Err(Error::TypeMismatch(
                    "Quote marker without an expression to quote".to_string(),
                ))
            }
            [Expr::Quote, _, tail @ ..] => {
                count += 1;
                rest = tail;
            }
            [_, tail @ ..] => {
                count += 1;
                rest = tail;
            }
        }
    }
}
