use std::fmt;

use sheet_text::Span;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub span: Span,
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new<T: Into<String>>(kind: TokenKind, text: T, span: Span) -> Self {
        Self {
            span,
            kind,
            text: text.into(),
        }
    }

    pub fn end_of_input(offset: usize) -> Self {
        Self::new(TokenKind::EndOfInput, "", Span::point(offset))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    Plus,
    Minus,

    /// Bare literal or reference: `A1`, `A1:B2`, `-1`, `6.02e23`, `2018-01-01`
    Value,

    /// Double-quoted string, quotes included
    Quoted,
    Times,
    Divided,
    Comma,
    Whitespace,
    EndOfInput,
}

impl TokenKind {
    /// How the token kind is described to users in error messages
    pub fn description(&self) -> &'static str {
        match self {
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Value => "a literal value",
            TokenKind::Quoted => "a quoted string",
            TokenKind::Times => "*",
            TokenKind::Divided => "/",
            TokenKind::Comma => ",",
            TokenKind::Whitespace => "whitespace",
            TokenKind::EndOfInput => "[end of string]",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
