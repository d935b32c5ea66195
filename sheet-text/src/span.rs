use std::fmt;

/// A half-open range of character offsets into a source string
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end:   usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty span sitting at `offset`
    pub fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end:   offset,
        }
    }

    /// The span covering everything from the start of `start` to the end of `end`
    pub fn wrap(start: &Span, end: &Span) -> Self {
        Span {
            start: start.start,
            end:   end.end,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap() {
        let span = Span::wrap(&Span::new(2, 4), &Span::new(7, 9));
        assert_eq!(span, Span::new(2, 9));
        assert_eq!(span.len(), 7);
    }

    #[test]
    fn point() {
        let span = Span::point(5);
        assert!(span.is_empty());
        assert_eq!(format!("{}", span), "5-5");
    }
}
