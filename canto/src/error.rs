use crate::env::Arity;
use crate::SymbolId;

#[derive(thiserror::Error, Debug, PartialEq, Clone)]
pub enum Error {
    #[error("Failed to lex - {0}")]
    FailedToLex(String),

    #[error("Failed to parse - {0}")]
    FailedToParse(String),

    #[error("Incomplete expression - {0}")]
    IncompleteExpression(String),

    #[error("Unbound symbol - {0}")]
    UnboundSymbol(SymbolId),

    #[error("Undefined function - {0}")]
    UndefinedFunction(SymbolId),

    #[error("Arity mismatch - {name} expects {expected} args, got {got}")]
    ArityMismatch {
        name: SymbolId,
        expected: Arity,
        got: usize,
    },

    #[error("Type mismatch - {0}")]
    TypeMismatch(String),

    #[error("Recursion limit exceeded - {0}")]
    RecursionLimitExceeded(usize),

    #[error("Step budget exhausted - {0}")]
    StepBudgetExhausted(u64),
}
