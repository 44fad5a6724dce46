use crate::nationality::Nationality;
use crate::title::Title;
use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A registered pharmacist, as listed in the directory.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Hash, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Pharmacist {
    title: Title,
    full_name: String,
    last_name: String,
    first_name: String,
    registration_number: u32,
    nationality: Nationality,
    #[serde(default)]
    section: String,
    is_active: bool,
    dues_current: bool,
    #[serde(default)]
    overdue_since: Option<NaiveDateTime>,
}

impl Pharmacist {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: Title,
        full_name: String,
        last_name: String,
        first_name: String,
        registration_number: u32,
        nationality: Nationality,
        section: String,
        is_active: bool,
        dues_current: bool,
        overdue_since: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            title,
            full_name,
            last_name,
            first_name,
            registration_number,
            nationality,
            section,
            is_active,
            dues_current,
            overdue_since,
        }
    }
}

impl PartialOrd for Pharmacist {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pharmacist {
    fn cmp(&self, other: &Self) -> Ordering {
        self.registration_number
            .cmp(&other.registration_number)
            .then(self.full_name.cmp(&other.full_name))
    }
}

/// A pharmacist as stored, along with its bookkeeping dates.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PharmacistRecord {
    #[serde(flatten)]
    pharmacist: Pharmacist,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl PharmacistRecord {
    pub fn new(
        pharmacist: Pharmacist,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> Self {
        Self {
            pharmacist,
            created_at,
            updated_at,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use chrono::NaiveDate;

    pub fn jean_obiang() -> Pharmacist {
        Pharmacist::new(
            Title::Doctor,
            "Jean Paul Obiang".to_owned(),
            "Jean".to_owned(),
            "Paul Obiang".to_owned(),
            1234,
            Nationality::Gabon,
            "".to_owned(),
            true,
            true,
            None,
        )
    }

    pub fn marie_koumba() -> Pharmacist {
        Pharmacist::new(
            Title::Professor,
            "Marie Koumba".to_owned(),
            "Marie".to_owned(),
            "Koumba".to_owned(),
            5678,
            Nationality::Foreign,
            "".to_owned(),
            true,
            true,
            None,
        )
    }

    /// Same registration number as [jean_obiang], as found in a later roster.
    pub fn jean_obiang_renamed() -> Pharmacist {
        Pharmacist::new(
            Title::Professor,
            "Jean Paul Obiang Nze".to_owned(),
            "Jean Paul".to_owned(),
            "Obiang Nze".to_owned(),
            1234,
            Nationality::Gabon,
            "".to_owned(),
            true,
            true,
            None,
        )
    }

    pub fn overdue_pharmacist() -> Pharmacist {
        Pharmacist::new(
            Title::Doctor,
            "Éloïse Mba Ndong".to_owned(),
            "Éloïse".to_owned(),
            "Mba Ndong".to_owned(),
            42,
            Nationality::Gabon,
            "Section A".to_owned(),
            false,
            false,
            NaiveDate::from_ymd_opt(2024, 1, 31).and_then(|date| date.and_hms_opt(0, 0, 0)),
        )
    }

    #[test]
    fn should_serialize_in_camel_case() {
        let json = serde_json::to_string(&jean_obiang()).unwrap();

        assert_eq!(
            r#"{"title":"Dr","fullName":"Jean Paul Obiang","lastName":"Jean","firstName":"Paul Obiang","registrationNumber":1234,"nationality":"Gabon","section":"","isActive":true,"duesCurrent":true,"overdueSince":null}"#,
            json
        );
    }

    #[test]
    fn should_deserialize_without_optional_fields() {
        let json = r#"{"title":"Pr","fullName":"Marie Koumba","lastName":"Marie","firstName":"Koumba","registrationNumber":5678,"nationality":"ETRANGER","isActive":true,"duesCurrent":true}"#;

        let result: Pharmacist = serde_json::from_str(json).unwrap();

        assert_eq!(marie_koumba(), result);
    }

    #[test]
    fn should_not_deserialize_unknown_nationality() {
        let json = r#"{"title":"Pr","fullName":"Marie Koumba","lastName":"Marie","firstName":"Koumba","registrationNumber":5678,"nationality":"France","isActive":true,"duesCurrent":true}"#;

        let result: Result<Pharmacist, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn should_sort_by_registration_number() {
        let mut pharmacists = vec![marie_koumba(), jean_obiang(), overdue_pharmacist()];
        pharmacists.sort();

        assert_eq!(
            vec![overdue_pharmacist(), jean_obiang(), marie_koumba()],
            pharmacists
        );
    }

    #[test]
    fn should_flatten_record() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4)
            .unwrap()
            .and_hms_opt(10, 11, 12)
            .unwrap();
        let record = PharmacistRecord::new(marie_koumba(), date, date);

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(5678, json["registrationNumber"]);
        assert_eq!("2025-03-04T10:11:12", json["createdAt"]);
        assert_eq!("2025-03-04T10:11:12", json["updatedAt"]);
    }
}
