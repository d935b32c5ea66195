//! Spreadsheet formula language
//!
//! Formulas are infix arithmetic over literal values, cell references and
//! function calls:
//!
//! ```text
//! A1 + sum(B1:B3, 2) * "text" / -1
//! ```
//!
//! [`Tokenizer`] splits formula text into tokens, and [`Parser`] turns the
//! token stream into an [`Expr`] tree where every node is either a leaf of
//! text or an operator or function applied to operands. The tree leaves
//! references unresolved; [`Expr::references`] finds them.

pub mod error;
pub mod parse;
mod references;
mod shift;
pub mod tokenize;

use tracing::debug;

pub use error::Error;
pub use parse::{Apply, Expr, ExprKind, Operator, Parser};
pub use references::{Reference, References};
pub use shift::shift;
pub use tokenize::{Token, TokenKind, Tokenizer};

pub fn tokenize(input: &str) -> tokenize::Result<Vec<Token>> {
    let tr = Tokenizer::new(input);
    tr.collect::<tokenize::Result<Vec<_>>>()
}

pub fn parse(input: &str) -> parse::Result<Expr> {
    let tr = Tokenizer::new(input);
    let p = Parser::new(tr);

    p.parse().map_err(|err| {
        debug!(%err, span = ?err.span, "failed to parse formula");
        err
    })
}

/// Parse a formula and collect the cells and ranges it refers to
pub fn references(input: &str) -> Result<Vec<Reference>, Error> {
    let expr = parse(input)?;
    Ok(expr.references().collect())
}
