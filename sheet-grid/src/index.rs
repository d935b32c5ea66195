use std::fmt;
use std::iter;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::*;

const LETTERS: usize = 26;

/// A spreadsheet cell address, like `A1` or `ZZZ123`
///
/// `row` and `col` are both zero-indexed. Any `(row, col)` pair converts into
/// an index, so it can be used wherever an index is accepted:
///
/// ```
/// use sheet_grid::Index;
///
/// assert_eq!(Index::new(0, 0) + (2, 3), Index::new(2, 3));
/// assert_eq!(Index::parse("bb10").unwrap(), Index::new(9, 27));
/// assert_eq!(Index::new(9, 27).label(), "BB10");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Index {
    pub row: usize,
    pub col: usize,
}

impl Index {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse a label like `A1`, case-insensitively
    ///
    /// The label must be one letter repeated any number of times followed by a
    /// row number of at least 1, with nothing else around it.
    pub fn parse(label: &str) -> Result<Self> {
        let invalid = || Error::InvalidIndex(label.to_string());

        let letter = match label.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
            _ => return Err(invalid()),
        };

        // every repeated letter is ascii, so the count doubles as a byte offset
        let repeat = 1 + label[1..]
            .chars()
            .take_while(|c| c.to_ascii_uppercase() == letter)
            .count();

        let digits = &label[repeat..];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let row = digits
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .ok_or_else(invalid)?;

        let col = (repeat - 1)
            .checked_mul(LETTERS)
            .and_then(|col| col.checked_add(usize::from(letter as u8 - b'A')))
            .ok_or_else(invalid)?;

        Ok(Self { row, col })
    }

    /// The column part of the label: the column's letter, repeated once per
    /// 26 columns
    pub fn column_label(&self) -> String {
        let letter = char::from(b'A' + (self.col % LETTERS) as u8);
        iter::repeat(letter).take(self.col / LETTERS + 1).collect()
    }

    /// The one-based row number
    pub fn row_label(&self) -> String {
        (self.row + 1).to_string()
    }

    pub fn label(&self) -> String {
        format!("{}{}", self.column_label(), self.row_label())
    }

    /// Componentwise minimum
    pub fn min<T: Into<Index>>(self, other: T) -> Self {
        let other = other.into();
        Self::new(self.row.min(other.row), self.col.min(other.col))
    }

    /// Componentwise maximum
    pub fn max<T: Into<Index>>(self, other: T) -> Self {
        let other = other.into();
        Self::new(self.row.max(other.row), self.col.max(other.col))
    }

    /// Componentwise difference, or `None` if either component would be negative
    pub fn checked_sub<T: Into<Index>>(self, other: T) -> Option<Self> {
        let other = other.into();
        Some(Self::new(
            self.row.checked_sub(other.row)?,
            self.col.checked_sub(other.col)?,
        ))
    }

    /// Move the index by a signed number of rows and columns, or `None` if it
    /// would leave the sheet
    pub fn offset(self, rows: isize, cols: isize) -> Option<Self> {
        Some(Self::new(
            self.row.checked_add_signed(rows)?,
            self.col.checked_add_signed(cols)?,
        ))
    }
}

impl From<(usize, usize)> for Index {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl<T: Into<Index>> Add<T> for Index {
    type Output = Index;

    fn add(self, other: T) -> Index {
        let other = other.into();
        Index::new(self.row + other.row, self.col + other.col)
    }
}

/// # Panics
///
/// Panics if either component of `other` is larger than this index's; use
/// [`Index::checked_sub`] to handle that case.
impl<T: Into<Index>> Sub<T> for Index {
    type Output = Index;

    fn sub(self, other: T) -> Index {
        let other = other.into();
        Index::new(self.row - other.row, self.col - other.col)
    }
}

impl FromStr for Index {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Index::parse(s)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_label(), self.row_label())
    }
}
