//! Builtin functions
pub mod cond;
pub mod docs;
pub mod pred;

pub(crate) use cond::and_fn;
pub(crate) use cond::cond_fn;
pub(crate) use cond::not_fn;
pub(crate) use cond::or_fn;
pub(crate) use docs::apropos_fn;
pub(crate) use docs::documentation_fn;
pub(crate) use pred::eq_fn;
pub(crate) use pred::gt_fn;
pub(crate) use pred::null_fn;
pub(crate) use pred::symbolp_fn;

use crate::env::Arity;
use crate::{Error, SymbolId};

/// Arity failure for a builtin invoked outside the dispatcher
pub(crate) fn arity_err(name: &str, expected: Arity, got: usize) -> Error {
    Error::ArityMismatch {
        name: SymbolId::from(name),
        expected,
        got,
    }
}
