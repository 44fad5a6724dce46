use crate::error::DtoError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Nationality {
    #[serde(rename = "Gabon")]
    Gabon,
    /// Any nationality other than Gabonese, written `ETRANGER` in the roster.
    #[serde(rename = "ETRANGER")]
    Foreign,
}

impl Nationality {
    pub const ALL: [Nationality; 2] = [Nationality::Gabon, Nationality::Foreign];

    pub fn as_str(&self) -> &'static str {
        match self {
            Nationality::Gabon => "Gabon",
            Nationality::Foreign => "ETRANGER",
        }
    }
}

impl Display for Nationality {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Nationality {
    type Err = DtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Nationality::ALL
            .into_iter()
            .find(|nationality| nationality.as_str() == s)
            .ok_or_else(|| DtoError::UnknownNationality(s.to_owned()))
    }
}
