pub mod error;
mod pretty;
pub mod token;
pub mod tokenizer;

pub use error::{Error, ErrorKind, Result};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;

/// Check that the tokenizer yields exactly these kinds, then stops
#[cfg(test)]
pub(crate) fn assert_tokens(tr: Tokenizer, expected: Vec<TokenKind>) {
    let actual = tr
        .map(|res| res.expect("received error").kind)
        .collect::<Vec<_>>();

    assert_eq!(actual, expected);
}

#[cfg(test)]
macro_rules! assert_next_tok {
    ( $tokenizer:expr , $kind:pat ) => {
        assert!(matches!(
            $tokenizer.next(),
            Some(Ok($crate::tokenize::Token { kind: $kind, .. }))
        ));
    };
    ( $tokenizer:expr , $kind:pat , $text:expr ) => {
        assert!(matches!(
            $tokenizer.next(),
            Some(Ok($crate::tokenize::Token { kind: $kind, text, .. })) if text == $text
        ));
    };
}

#[cfg(test)]
macro_rules! assert_next_err {
    ( $tokenizer:expr , $kind:pat ) => {
        assert!(matches!(
            $tokenizer.next(),
            Some(Err($crate::tokenize::Error { kind: $kind, .. }))
        ));
    };
}

#[cfg(test)]
macro_rules! assert_next_none {
    ( $tokenizer:expr ) => {
        assert!(matches!($tokenizer.next(), None));
    };
}

#[cfg(test)]
pub(crate) use assert_next_err;
#[cfg(test)]
pub(crate) use assert_next_none;
#[cfg(test)]
pub(crate) use assert_next_tok;
