use crate::error::DtoError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Professional honorific heading each roster entry.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Title {
    #[serde(rename = "Dr")]
    Doctor,
    #[serde(rename = "Pr")]
    Professor,
}

impl Title {
    pub const ALL: [Title; 2] = [Title::Doctor, Title::Professor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Title::Doctor => "Dr",
            Title::Professor => "Pr",
        }
    }
}

impl Display for Title {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Title {
    type Err = DtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Title::ALL
            .into_iter()
            .find(|title| title.as_str() == s)
            .ok_or_else(|| DtoError::UnknownTitle(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        value = {"Dr", "Pr"},
        expected_title = {Title::Doctor, Title::Professor}
    )]
    fn should_parse_title(value: &str, expected_title: Title) {
        assert_eq!(Ok(expected_title), Title::from_str(value));
        assert_eq!(value, expected_title.to_string());
    }

    #[parameterized(value = {"dr", "Mr", "", "Dr "})]
    fn should_not_parse_unknown_title(value: &str) {
        assert_eq!(
            Err(DtoError::UnknownTitle(value.to_owned())),
            Title::from_str(value)
        );
    }

    #[test]
    fn should_serialize_as_abbreviation() {
        assert_eq!(r#""Pr""#, serde_json::to_string(&Title::Professor).unwrap());
        assert_eq!(
            Title::Doctor,
            serde_json::from_str::<Title>(r#""Dr""#).unwrap()
        );
    }
}
