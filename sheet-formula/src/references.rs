use std::fmt;

use sheet_grid::{Index, Range};

use crate::parse::{Expr, ExprKind};

/// A cell or block of cells named by a formula
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reference {
    Cell(Index),
    Range(Range),
}

impl Reference {
    /// Read a label like `B3` or `A1:C2`, or `None` if the text names
    /// neither a cell nor a range
    pub fn parse(text: &str) -> Option<Self> {
        if text.contains(':') {
            Range::parse(text).ok().map(Reference::Range)
        } else {
            Index::parse(text).ok().map(Reference::Cell)
        }
    }

    /// Move the reference by a number of rows and columns, or `None` if it
    /// would leave the sheet
    pub fn offset(&self, rows: isize, cols: isize) -> Option<Self> {
        match self {
            Reference::Cell(index) => index.offset(rows, cols).map(Reference::Cell),
            Reference::Range(range) => range.offset(rows, cols).map(Reference::Range),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Cell(index) => write!(f, "{}", index),
            Reference::Range(range) => write!(f, "{}", range),
        }
    }
}

impl Expr {
    /// Iterate over the cell and range references among the leaves of the
    /// tree, left to right
    ///
    /// Function names are never references, but quoted strings are leaves
    /// like any other; `"A1"` names cell A1 as far as the tree can tell.
    pub fn references(&self) -> References<'_> {
        References { stack: vec![self] }
    }
}

pub struct References<'a> {
    stack: Vec<&'a Expr>,
}

impl<'a> Iterator for References<'a> {
    type Item = Reference;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(expr) = self.stack.pop() {
            match &expr.kind {
                ExprKind::Leaf(text) => {
                    if let Some(reference) = Reference::parse(text) {
                        return Some(reference);
                    }
                },
                ExprKind::Apply(apply) => self.stack.extend(apply.operands.iter().rev()),
            }
        }

        None
    }
}

impl std::iter::FusedIterator for References<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::Parser;
    use crate::tokenize::Tokenizer;

    fn references(input: &str) -> Vec<String> {
        let expr = Parser::new(Tokenizer::new(input)).parse().unwrap();
        expr.references().map(|r| r.to_string()).collect()
    }

    #[test]
    fn parse() {
        assert_eq!(Reference::parse("B3"), Some(Reference::Cell(Index::new(2, 1))));
        assert_eq!(
            Reference::parse("c2:a1"),
            Some(Reference::Range(Range::new(Index::new(0, 0), Index::new(1, 2))))
        );
        assert_eq!(Reference::parse("sum"), None);
        assert_eq!(Reference::parse("12"), None);
        assert_eq!(Reference::parse("A1:"), None);
    }

    #[test]
    fn in_order() {
        assert_eq!(references("A1 + sum(B1:B3, 2 * c4) / D5"), vec![
            "A1", "B1:B3", "C4", "D5"
        ]);
        assert_eq!(references("x + 2018-01-01 * 6.02e23"), Vec::<String>::new());
    }

    #[test]
    fn function_names_are_skipped() {
        assert_eq!(references("aa(AA1)"), vec!["AA1"]);
    }

    #[test]
    fn offset() {
        let cell = Reference::parse("B2").unwrap();
        assert_eq!(cell.offset(1, -1).unwrap().to_string(), "A3");
        assert_eq!(cell.offset(0, -2), None);

        let range = Reference::parse("A1:B2").unwrap();
        assert_eq!(range.offset(2, 1).unwrap().to_string(), "B3:C4");
        assert_eq!(range.offset(-1, 0), None);
    }
}
