//! Environments of symbol bindings
use crate::{builtin, Error, Evaluator, Expr, Result, SymbolId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// An environment of bindings
#[derive(Debug, Clone, Default)]
pub struct Env {
    bindings: HashMap<SymbolId, Binding>,
    parent: Option<EnvRef>,
}

/// Reference to an environment
pub type EnvRef = Rc<RefCell<Env>>;

/// What a symbol may be bound to
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// A plain data value
    Value(Expr),
    /// A callable function record
    Function(Function),
}

/// A native function bound to a symbol
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Optional documentation shown by apropos
    pub doc: Option<String>,
    /// Declared argument count, validated before invocation
    pub arity: Arity,
    /// Dispatch style and implementation
    pub apply: Apply,
}

/// Declared argument count of a function
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

/// Dispatch style of a function
#[derive(Debug, Clone, Copy)]
pub enum Apply {
    /// Receives arguments evaluated in the calling environment
    Eager(NativeOp),
    /// Receives the raw unevaluated operand forms
    Lazy(NativeOp),
}

/// Signature shared by all native implementations
pub type NativeOp = fn(&mut Evaluator, &EnvRef, &[Expr]) -> Result<Expr>;

// Equality is the dispatch style only, never the implementation pointer
impl PartialEq for Apply {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Apply::Eager(_), Apply::Eager(_)) | (Apply::Lazy(_), Apply::Lazy(_))
        )
    }
}

impl Env {
    /// Create an empty root env
    pub fn new() -> Self {
        Self::default()
    }

    /// Create standard base env with all builtin functions registered
    pub fn standard() -> Self {
        let mut e = Env::new();
        e.bind_native(SymbolId::from("EQ"), builtin::eq_fn())
            .bind_native(SymbolId::from("="), builtin::eq_fn())
            .bind_native(SymbolId::from("NULL"), builtin::null_fn())
            .bind_native(SymbolId::from("NOT"), builtin::not_fn())
            .bind_native(SymbolId::from("SYMBOLP"), builtin::symbolp_fn())
            .bind_native(SymbolId::from("AND"), builtin::and_fn())
            .bind_native(SymbolId::from("OR"), builtin::or_fn())
            .bind_native(SymbolId::from("COND"), builtin::cond_fn())
            .bind_native(SymbolId::from("IF"), builtin::cond_fn())
            .bind_native(SymbolId::from(">"), builtin::gt_fn())
            .bind_native(SymbolId::from("APROPOS"), builtin::apropos_fn())
            .bind_native(
                SymbolId::from("DOCUMENTATION"),
                builtin::documentation_fn(),
            );
        e
    }

    /// Create a child env chained to the given parent
    pub fn child(parent: &EnvRef) -> Self {
        Self {
            bindings: HashMap::new(),
            parent: Some(Rc::clone(parent)),
        }
    }

    /// Define a new symbol with given binding in current environment
    pub fn define(&mut self, symbol: SymbolId, binding: Binding) {
        self.bindings.insert(symbol, binding);
    }

    /// Get binding for symbol, falling back to the parent chain
    pub fn lookup(&self, symbol: &SymbolId) -> Option<Binding> {
        match self.bindings.get(symbol) {
            Some(b) => Some(b.clone()),
            None => self.parent.as_ref().and_then(|p| p.borrow().lookup(symbol)),
        }
    }

    /// Whether symbol is bound anywhere in the chain
    pub fn is_bound(&self, symbol: &SymbolId) -> bool {
        if self.bindings.contains_key(symbol) {
            return true;
        }
        match self.parent.as_ref() {
            Some(p) => p.borrow().is_bound(symbol),
            None => false,
        }
    }

    /// Convenience to bind native functions
    pub fn bind_native(&mut self, symbol: SymbolId, func: Function) -> &mut Self {
        self.define(symbol, Binding::Function(func));
        self
    }

    /// Iterate over bindings local to this env
    pub fn iter(&self) -> impl Iterator<Item = (&SymbolId, &Binding)> {
        self.bindings.iter()
    }

    /// Parent env, if this is not the root
    pub fn parent(&self) -> Option<&EnvRef> {
        self.parent.as_ref()
    }
}

impl Arity {
    /// Whether the given argument count satisfies this arity
    pub fn admits(&self, got: usize) -> bool {
        match self {
            Arity::Exact(n) => got == *n,
            Arity::AtLeast(n) => got >= *n,
        }
    }

    /// Validate an argument count for the named function
    pub fn check(&self, name: &SymbolId, got: usize) -> Result<()> {
        if self.admits(got) {
            Ok(())
        } else {
            Err(Error::ArityMismatch {
                name: name.clone(),
                expected: *self,
                got,
            })
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}
