use crate::database::error::DatabaseError::{MalformedRow, UnderlyingDatabase};
use dto::error::DtoError;
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DatabaseError {
    #[error("The --database-url argument is missing.")]
    MissingDatabaseUrl,
    #[error("The connection to the database failed.")]
    ConnectionFailed,
    #[error("An error occurred within the database [error: {0}]")]
    UnderlyingDatabase(String),
    #[error("The last update of {0} can't be saved.")]
    CantUpdateLastUpdated(String),
    #[error("A row can't be converted [error: {0}]")]
    MalformedRow(String),
}

impl From<Box<dyn Error + Send + Sync + 'static>> for DatabaseError {
    fn from(value: Box<dyn Error + Send + Sync + 'static>) -> Self {
        UnderlyingDatabase(value.to_string())
    }
}

impl From<diesel::result::Error> for DatabaseError {
    fn from(value: diesel::result::Error) -> Self {
        UnderlyingDatabase(value.to_string())
    }
}

impl From<r2d2::Error> for DatabaseError {
    fn from(value: r2d2::Error) -> Self {
        UnderlyingDatabase(value.to_string())
    }
}

impl From<chrono::ParseError> for DatabaseError {
    fn from(value: chrono::ParseError) -> Self {
        MalformedRow(value.to_string())
    }
}

impl From<DtoError> for DatabaseError {
    fn from(value: DtoError) -> Self {
        MalformedRow(value.to_string())
    }
}
