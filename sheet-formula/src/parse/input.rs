use sheet_text::Span;

use crate::parse::error::*;
use crate::tokenize::{self, Token, TokenKind};

/// Token stream as seen by the parser
///
/// Whitespace tokens are skipped, and the stream ends in an endless supply of
/// [`TokenKind::EndOfInput`] even if the underlying iterator runs dry. Each
/// failed [`consume`](Input::consume) records the kind that was tried, so that
/// a syntax error can list every alternative since the last accepted token.
pub(crate) struct Input<'a> {
    data:      Box<dyn Iterator<Item = tokenize::Result<Token>> + 'a>,
    current:   Option<Token>,
    attempted: Vec<TokenKind>,
    position:  usize,
}

impl<'a> Input<'a> {
    pub fn new<T>(data: T) -> Self
    where
        T: Iterator<Item = tokenize::Result<Token>> + 'a,
    {
        Self {
            data:      Box::new(data),
            current:   None,
            attempted: Vec::new(),
            position:  0,
        }
    }

    /// The next significant token, without consuming it
    pub fn current(&mut self) -> Result<&Token> {
        let tok = match self.current.take() {
            Some(tok) => tok,
            None => self.pull()?,
        };

        Ok(&*self.current.insert(tok))
    }

    /// Consume the current token if it is of the given kind
    pub fn consume(&mut self, kind: TokenKind) -> Result<Option<Token>> {
        if self.current()?.kind == kind {
            self.attempted.clear();
            return Ok(self.current.take());
        }

        if !self.attempted.contains(&kind) {
            self.attempted.push(kind);
        }

        Ok(None)
    }

    /// Consume the current token, failing unless it is of the given kind
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        match self.consume(kind)? {
            Some(tok) => Ok(tok),
            None => Err(self.unexpected()),
        }
    }

    /// Build an error for the current token, listing all the alternatives
    /// tried against it
    pub fn unexpected(&self) -> Error {
        let (span, found) = match &self.current {
            Some(tok) if tok.kind != TokenKind::EndOfInput => {
                (tok.span, Found::Token(tok.text.clone()))
            },
            Some(tok) => (tok.span, Found::EndOfInput),
            None => (Span::point(self.position), Found::EndOfInput),
        };

        Error {
            span,
            kind: ErrorKind::UnexpectedToken {
                expected: self.attempted.clone(),
                found,
            },
        }
    }

    fn pull(&mut self) -> Result<Token> {
        loop {
            let Some(res) = self.data.next() else {
                return Ok(Token::end_of_input(self.position));
            };

            let tok = res?;
            self.position = tok.span.end;

            if tok.kind != TokenKind::Whitespace {
                return Ok(tok);
            }
        }
    }
}
