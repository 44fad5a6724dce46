use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("The roster file can't be read.")]
    CantReadRosterFile(#[from] std::io::Error),
    #[error("The roster file has an unexpected encoding [error: {0}]")]
    WrongEncoding(Cow<'static, str>),
}

impl From<Cow<'static, str>> for RosterError {
    fn from(value: Cow<'static, str>) -> Self {
        RosterError::WrongEncoding(value)
    }
}
