use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DtoError {
    #[error("Unknown title [title: {0}]")]
    UnknownTitle(String),
    #[error("Unknown nationality [nationality: {0}]")]
    UnknownNationality(String),
}
