use crate::database::error::DatabaseError;
use crate::roster::error::RosterError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("An error has occurred with the database.")]
    Database(#[from] DatabaseError),
    #[error("Error while reading the roster.")]
    Roster(#[from] RosterError),
}
