use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    #[error("{0} is not a valid spreadsheet index")]
    InvalidIndex(String),

    #[error("{0} is not a valid range")]
    InvalidRange(String),
}
