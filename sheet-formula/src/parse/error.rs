use std::{fmt, result};

use itertools::Itertools;
use sheet_text::Span;
use thiserror::Error;

use crate::tokenize::{self, TokenKind};

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Clone, Debug, Eq, PartialEq)]
#[error("{kind}")]
pub struct Error {
    pub span: Span,
    pub kind: ErrorKind,
}

#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    #[error("{0}")]
    TokenizeError(tokenize::Error),

    #[error("Expected one of: {}; got {found}", describe(.expected))]
    UnexpectedToken {
        expected: Vec<TokenKind>,
        found:    Found,
    },

    #[error("{0} is not a valid function name")]
    InvalidFunctionName(String),
}

/// What the parser ran into instead of what it expected
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Found {
    Token(String),
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(text) => write!(f, "'{}'", text),
            Found::EndOfInput => f.write_str(TokenKind::EndOfInput.description()),
        }
    }
}

fn describe(kinds: &[TokenKind]) -> String {
    kinds.iter().join(", ")
}

impl From<tokenize::Error> for Error {
    fn from(err: tokenize::Error) -> Self {
        Error {
            span: err.span,
            kind: ErrorKind::TokenizeError(err),
        }
    }
}
