use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::error::*;
use crate::Index;

/// A rectangular range of cells, like `A1:B3`
///
/// Both `first` and `last` are *inclusive*: ranges are written by naming the
/// first and last cells they include, and a selection from `A1` to a cursor on
/// `B2` should include both cells.
///
/// A range may be constructed from corners in any order; they are rearranged
/// so that `first` is the top-left cell and `last` the bottom-right:
///
/// ```
/// use sheet_grid::{Index, Range};
///
/// let range = Range::new((1, 0), (0, 1));
/// assert_eq!(range.first(), Index::new(0, 0));
/// assert_eq!(range.last(), Index::new(1, 1));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Range {
    first: Index,
    last:  Index,
}

impl Range {
    pub fn new<A, B>(pos1: A, pos2: B) -> Self
    where
        A: Into<Index>,
        B: Into<Index>,
    {
        let pos1 = pos1.into();
        let pos2 = pos2.into();

        Self {
            first: pos1.min(pos2),
            last:  pos1.max(pos2),
        }
    }

    /// Parse a range from a label like `A1:B3`
    pub fn parse(desc: &str) -> Result<Self> {
        let mut parts = desc.split(':');
        let (Some(first), Some(last), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::InvalidRange(desc.to_string()));
        };

        Ok(Range::new(Index::parse(first)?, Index::parse(last)?))
    }

    /// The top-left cell
    pub fn first(&self) -> Index {
        self.first
    }

    /// The bottom-right cell, which is still part of the range
    pub fn last(&self) -> Index {
        self.last
    }

    /// Number of columns in the range
    pub fn width(&self) -> usize {
        self.last.col - self.first.col + 1
    }

    /// Number of rows in the range
    pub fn height(&self) -> usize {
        self.last.row - self.first.row + 1
    }

    /// Number of cells in the range, saturating at `usize::MAX`
    pub fn len(&self) -> usize {
        self.width().saturating_mul(self.height())
    }

    /// A range always holds at least one cell
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains<T: Into<Index>>(&self, pos: T) -> bool {
        let pos = pos.into();

        (self.first.col..=self.last.col).contains(&pos.col)
            && (self.first.row..=self.last.row).contains(&pos.row)
    }

    pub fn label(&self) -> String {
        format!("{}:{}", self.first, self.last)
    }

    /// Move the whole range by a signed number of rows and columns, or `None`
    /// if any part of it would leave the sheet
    pub fn offset(&self, rows: isize, cols: isize) -> Option<Self> {
        Some(Self {
            first: self.first.offset(rows, cols)?,
            last:  self.last.offset(rows, cols)?,
        })
    }

    /// The cells of the `i`-th row of the range (counting from the range's first
    /// row), or `None` if the range is not that tall
    pub fn row(&self, i: usize) -> Option<Row> {
        if i >= self.height() {
            return None;
        }

        Some(Row {
            next:      self.first + (i, 0),
            remaining: self.width(),
        })
    }

    /// Every row of the range, top to bottom
    pub fn rows(&self) -> Rows {
        Rows {
            range: *self,
            next:  0,
        }
    }

    /// Every cell of the range in row-major order
    pub fn indices(&self) -> Indices {
        Indices {
            range: *self,
            next:  Some(self.first),
        }
    }
}

impl From<Index> for Range {
    fn from(index: Index) -> Self {
        Range::new(index, index)
    }
}

impl<'a> IntoIterator for &'a Range {
    type Item = Index;
    type IntoIter = Indices;

    fn into_iter(self) -> Indices {
        self.indices()
    }
}

impl FromStr for Range {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Range::parse(s)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.first, self.last)
    }
}

/// Cells of a single row of a [`Range`], left to right
#[derive(Clone, Debug)]
pub struct Row {
    next:      Index,
    remaining: usize,
}

impl Iterator for Row {
    type Item = Index;

    fn next(&mut self) -> Option<Index> {
        if self.remaining == 0 {
            return None;
        }

        let index = self.next;
        self.next.col += 1;
        self.remaining -= 1;

        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Row {}
impl FusedIterator for Row {}

/// Rows of a [`Range`], top to bottom
#[derive(Clone, Debug)]
pub struct Rows {
    range: Range,
    next:  usize,
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        let row = self.range.row(self.next)?;
        self.next += 1;

        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range.height() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows {}
impl FusedIterator for Rows {}

/// Cells of a [`Range`] in row-major order
#[derive(Clone, Debug)]
pub struct Indices {
    range: Range,
    next:  Option<Index>,
}

impl Iterator for Indices {
    type Item = Index;

    fn next(&mut self) -> Option<Index> {
        let index = self.next?;
        let (first, last) = (self.range.first, self.range.last);

        self.next = if index.col < last.col {
            Some(Index::new(index.row, index.col + 1))
        } else if index.row < last.row {
            Some(Index::new(index.row + 1, first.col))
        } else {
            None
        };

        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(next) = self.next else {
            return (0, Some(0));
        };

        let last = self.range.last;
        let remaining = (last.row - next.row)
            .checked_mul(self.range.width())
            .and_then(|cells| cells.checked_add(last.col - next.col + 1));

        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

impl FusedIterator for Indices {}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels<I: Iterator<Item = Index>>(iter: I) -> Vec<String> {
        iter.map(|index| index.label()).collect()
    }

    fn range(desc: &str) -> Range {
        Range::parse(desc).expect("valid range")
    }

    fn index(label: &str) -> Index {
        Index::parse(label).expect("valid index")
    }

    #[test]
    fn normalize() {
        let corners: [(usize, usize); 4] = [(0, 0), (3, 1), (1, 4), (2, 2)];
        for p in corners {
            for q in corners {
                assert_eq!(Range::new(p, q), Range::new(q, p));
                assert_eq!(Range::new(p, q).first(), Index::from(p).min(q));
                assert_eq!(Range::new(p, q).last(), Index::from(p).max(q));
            }
        }

        let range = Range::new(index("B1"), index("A2"));
        assert_eq!(range.first(), index("A1"));
        assert_eq!(range.last(), index("B2"));
    }

    #[test]
    fn parse() {
        let range = range("A1:B3");
        assert_eq!(range.first(), Index::new(0, 0));
        assert_eq!(range.last(), Index::new(2, 1));
        assert_eq!(range.label(), "A1:B3");
        assert_eq!("b3:a1".parse::<Range>(), Ok(range));
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(Range::parse("A1"), Err(Error::InvalidRange("A1".to_string())));
        assert_eq!(
            Range::parse("A1:B2:C3"),
            Err(Error::InvalidRange("A1:B2:C3".to_string()))
        );
        assert_eq!(Range::parse("A1:"), Err(Error::InvalidIndex(String::new())));
        assert_eq!(Range::parse("A1:AB2"), Err(Error::InvalidIndex("AB2".to_string())));
        assert_eq!(
            Range::parse("A1").unwrap_err().to_string(),
            "A1 is not a valid range"
        );
    }

    #[test]
    fn dimensions() {
        let range = range("A1:B3");
        assert_eq!(range.width(), 2);
        assert_eq!(range.height(), 3);
        assert_eq!(range.len(), 6);

        let cell = Range::from(index("C4"));
        assert_eq!(cell.width(), 1);
        assert_eq!(cell.height(), 1);
        assert_eq!(cell.to_string(), "C4:C4");
    }

    #[test]
    fn contains() {
        assert!(Range::new(index("A1"), index("C3")).contains(index("B2")));
        assert!(range("B2:C3").contains(index("C3")));
        assert!(range("B2:C3").contains(index("B2")));
        assert!(!range("B2:C3").contains(index("C4")));
        assert!(!range("B2:C3").contains(index("D3")));
        assert!(!range("B2:C3").contains(index("A2")));
        assert!(!range("B2:C3").contains((0, 1)));
    }

    #[test]
    fn row() {
        let range = Range::new(index("A1"), index("C4"));
        assert_eq!(labels(range.row(1).unwrap()), vec!["A2", "B2", "C2"]);
        assert_eq!(labels(range.row(3).unwrap()), vec!["A4", "B4", "C4"]);
        assert!(range.row(4).is_none());
        assert_eq!(range.row(0).unwrap().len(), 3);
    }

    #[test]
    fn rows() {
        let range = range("B2:C3");
        let rows = range
            .rows()
            .map(|row| labels(row))
            .collect::<Vec<_>>();
        assert_eq!(rows, vec![vec!["B2", "C2"], vec!["B3", "C3"]]);
        assert_eq!(range.rows().len(), 2);
    }

    #[test]
    fn indices() {
        let range = range("A1:B3");
        assert_eq!(
            labels(range.indices()),
            vec!["A1", "B1", "A2", "B2", "A3", "B3"]
        );
        assert_eq!(labels((&range).into_iter()), labels(range.indices()));
    }

    #[test]
    fn iteration_is_restartable() {
        let range = range("A1:B2");
        let mut first = range.indices();
        first.next();
        first.next();

        let second = range.indices();
        assert_eq!(second.size_hint(), (4, Some(4)));
        assert_eq!(first.size_hint(), (2, Some(2)));
        assert_eq!(labels(first), vec!["A2", "B2"]);
        assert_eq!(labels(second), vec!["A1", "B1", "A2", "B2"]);
    }

    #[test]
    fn tall_range() {
        let range = range("A1:B18446744073709551615");
        assert_eq!(range.height(), usize::MAX);
        assert_eq!(range.len(), usize::MAX);

        let mut cells = range.indices();
        assert_eq!(cells.size_hint(), (usize::MAX, None));
        assert_eq!(labels(cells.by_ref().take(3)), vec!["A1", "B1", "A2"]);

        let last_row = range.row(usize::MAX - 1).unwrap();
        assert_eq!(labels(last_row), vec![
            "A18446744073709551615",
            "B18446744073709551615"
        ]);
    }

    #[test]
    fn offset() {
        let range = range("B2:C3");
        assert_eq!(range.offset(1, 1), Some(Range::parse("C3:D4").unwrap()));
        assert_eq!(range.offset(-1, -1), Some(Range::parse("A1:B2").unwrap()));
        assert_eq!(range.offset(-2, 0), None);
    }
}
