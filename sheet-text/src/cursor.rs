use std::str::Chars;

use crate::Span;

/// Scanner over a source string
///
/// The cursor tracks two positions: the next character to be read, and the
/// start of the token currently being scanned. Offsets in the produced spans
/// count characters, not bytes.
pub struct Cursor<'a> {
    src:    &'a str,
    chars:  Chars<'a>,
    n:      usize,
    t:      usize,
    n_byte: usize,
    t_byte: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Cursor {
            src,
            chars: src.chars(),
            n: 0,
            t: 0,
            n_byte: 0,
            t_byte: 0,
        }
    }

    /// Peek at the next character without consuming it
    pub fn first(&self) -> Option<char> {
        self.chars.clone().next()
    }

    /// Peek at the character after the next one
    pub fn second(&self) -> Option<char> {
        let mut chars = self.chars.clone();
        chars.next();
        chars.next()
    }

    pub fn next(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.n += 1;
        self.n_byte += c.len_utf8();

        Some(c)
    }

    pub fn bump(&mut self) {
        self.next();
    }

    /// Consume characters as long as `pred` holds, returning how many were consumed
    pub fn eat_while<P>(&mut self, pred: P) -> usize
    where
        P: Fn(char) -> bool,
    {
        let mut count = 0;
        while matches!(self.first(), Some(c) if pred(c)) {
            self.bump();
            count += 1;
        }

        count
    }

    pub fn matches(&mut self, c: char) -> bool {
        match self.first() {
            Some(found) if found == c => {
                self.bump();
                true
            },
            _ => false,
        }
    }

    /// Span of the pending token
    pub fn span(&self) -> Span {
        Span::new(self.t, self.n)
    }

    /// Text of the pending token
    pub fn text(&self) -> &'a str {
        &self.src[self.t_byte..self.n_byte]
    }

    pub fn take_text(&mut self) -> &'a str {
        let text = self.text();
        self.reset();

        text
    }

    /// Finish the pending token, handing its span and text to `f`
    pub fn map<B, F>(&mut self, f: F) -> B
    where
        F: FnOnce(Span, &'a str) -> B,
    {
        let span = self.span();
        let text = self.take_text();

        f(span, text)
    }

    /// Start a new token at the current position, discarding anything pending
    pub fn reset(&mut self) {
        self.t = self.n;
        self.t_byte = self.n_byte;
    }
}
