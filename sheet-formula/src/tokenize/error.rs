use std::result;

use sheet_text::Span;

pub type Result<T> = result::Result<T, Error>;

#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
#[error("{kind} at offset {}", .span.start)]
pub struct Error {
    pub span: Span,
    pub kind: ErrorKind,
}

#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    #[error("unexpected `{0}`")]
    UnexpectedChar(char),
}
