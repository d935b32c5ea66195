pub mod ast;
pub mod error;
mod input;
pub mod parser;
mod pretty;

pub use ast::{Apply, Expr, ExprKind, Operator};
pub use error::{Error, ErrorKind, Found, Result};
pub use parser::Parser;
