//! Cell addressing for spreadsheets
//!
//! An [`Index`] is a single zero-based cell address with a textual label like
//! `A1`; a [`Range`] is an inclusive rectangle of cells like `A1:B3`.
//!
//! Column labels do not follow the usual `A..Z, AA, AB..` lettering. Instead
//! the column letter is repeated once for every 26 columns, so column 0 is `A`,
//! column 26 is `AA`, column 27 is `BB` and column 53 is `BBB`.

pub mod error;
pub mod index;
pub mod range;

pub use error::{Error, Result};
pub use index::Index;
pub use range::{Indices, Range, Row, Rows};
