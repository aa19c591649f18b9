//! Expression types for Canto
use serde::{Deserialize, Serialize};

/// All values manipulated by the interpreter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// The truth sentinel
    T,
    /// Integers
    Int(i32),
    /// Strings
    String(String),
    /// Named slots for values
    Symbol(SymbolId),
    /// The quoting marker, protects the element that follows it
    Quote,
    /// Lists. The empty list doubles as the false sentinel nil
    List(Vec<Expr>),
}

/// Identifier for Symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(String);

impl Expr {
    /// The empty list, which is nil
    pub fn nil() -> Self {
        Self::List(vec![])
    }

    /// Shorthand for constructing [Expr::String]
    pub fn string(s: &str) -> Self {
        Self::String(String::from(s))
    }

    /// Shorthand for constructing [Expr::Symbol]
    pub fn symbol(id: &str) -> Self {
        Self::Symbol(SymbolId::from(id))
    }

    /// Whether this value is nil
    pub fn is_nil(&self) -> bool {
        matches!(self, Expr::List(l) if l.is_empty())
    }

    /// Whether this value counts as true in conditionals. Only nil is false
    pub fn is_truthy(&self) -> bool {
        !self.is_nil()
    }
}

impl SymbolId {
    /// Returns inner ID as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uppercase form of the name, used for function lookups
    pub fn canonical(&self) -> SymbolId {
        SymbolId(self.0.to_uppercase())
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        if value {
            Expr::T
        } else {
            Expr::nil()
        }
    }
}

impl From<String> for SymbolId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SymbolId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::T => write!(f, "t"),
            Expr::Int(i) => write!(f, "{}", i),
            Expr::String(s) => write!(f, "\"{}\"", s),
            Expr::Symbol(s) => write!(f, "{}", s),
            Expr::Quote => write!(f, "'"),
            Expr::List(l) => match &l[..] {
                [] => write!(f, "nil"),
                [Expr::Quote, quoted] => write!(f, "'{}", quoted),
                _ => {
                    let mut parts = vec![];
                    let mut rest = l.iter();
                    while let Some(e) = rest.next() {
                        match e {
                            Expr::Quote => match rest.next() {
                                Some(next) => parts.push(format!("'{}", next)),
                                None => parts.push("'".to_string()),
                            },
                            _ => parts.push(e.to_string()),
                        }
                    }
                    write!(f, "({})", parts.join(" "))
                }
            },
        }
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
