mod error;
mod lex;
mod parse;

pub mod apropos;
pub mod builtin;
pub mod env;
pub mod eval;
pub mod expr;

pub use env::Apply;
pub use env::Arity;
pub use env::Binding;
pub use env::Env;
pub use env::EnvRef;
pub use env::Function;
pub use env::NativeOp;
pub use error::Error;
pub use eval::Evaluator;
pub use eval::Limits;
pub use expr::Expr;
pub use expr::SymbolId;
pub use parse::parse;

pub type Result<T> = std::result::Result<T, Error>;
