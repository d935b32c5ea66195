use sheet_text::Span;

use crate::{parse, tokenize};

#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    #[error("tokenizer error: {0}")]
    TokenizerError(#[from] tokenize::Error),

    #[error("parser error: {0}")]
    ParserError(#[from] parse::Error),

    #[error("{reference} would move outside of the sheet")]
    OutOfBounds { reference: String, span: Span },
}

impl Error {
    /// The part of the formula the error refers to
    pub fn span(&self) -> Span {
        match self {
            Error::TokenizerError(err) => err.span,
            Error::ParserError(err) => err.span,
            Error::OutOfBounds { span, .. } => *span,
        }
    }
}
