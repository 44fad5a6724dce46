use crate::nationality::Nationality;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Criteria used to search the directory. Absent criteria match everything.
#[derive(Getters, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PharmacistToLookUp {
    registration_number: Option<u32>,
    name: Option<String>,
    nationality: Option<Nationality>,
    section: Option<String>,
}

impl PharmacistToLookUp {
    pub fn new(
        registration_number: Option<u32>,
        name: Option<String>,
        nationality: Option<Nationality>,
        section: Option<String>,
    ) -> Self {
        Self {
            registration_number,
            name,
            nationality,
            section,
        }
    }
}
