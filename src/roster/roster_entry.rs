use crate::roster::name::split_name;
use chrono::NaiveDateTime;
use derive_getters::Getters;
use dto::nationality::Nationality;
use dto::pharmacist::Pharmacist;
use dto::title::Title;

/// A pharmacist as extracted from a roster.
/// Only what the roster tells is filled, everything else gets its default value.
#[derive(Debug, Getters, PartialEq, Eq, Clone)]
pub struct RosterEntry {
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
}

impl RosterEntry {
    pub fn new(
        title: Title,
        full_name: String,
        registration_number: u32,
        nationality: Nationality,
    ) -> Self {
        let (last_name, first_name) = split_name(&full_name);
        Self {
            title,
            full_name,
            last_name,
            first_name,
            registration_number,
            nationality,
            section: String::new(),
            is_active: true,
            dues_current: true,
            overdue_since: None,
        }
    }
}

impl From<RosterEntry> for Pharmacist {
    fn from(entry: RosterEntry) -> Self {
        Pharmacist::new(
            entry.title,
            entry.full_name,
            entry.last_name,
            entry.first_name,
            entry.registration_number,
            entry.nationality,
            entry.section,
            entry.is_active,
            entry.dues_current,
            entry.overdue_since,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::roster::roster_entry::RosterEntry;
    use dto::nationality::Nationality;
    use dto::pharmacist::Pharmacist;
    use dto::pharmacist::tests::jean_obiang;
    use dto::title::Title;

    #[test]
    fn should_create_entry_with_defaults() {
        let entry = RosterEntry::new(
            Title::Professor,
            "Mba Ndong Marie Claire".to_owned(),
            42,
            Nationality::Foreign,
        );

        assert_eq!("Mba Ndong", entry.last_name());
        assert_eq!("Marie Claire", entry.first_name());
        assert_eq!("", entry.section());
        assert!(*entry.is_active());
        assert!(*entry.dues_current());
        assert_eq!(&None, entry.overdue_since());
    }

    #[test]
    fn should_convert_into_pharmacist() {
        let entry = RosterEntry::new(
            Title::Doctor,
            "Jean Paul Obiang".to_owned(),
            1234,
            Nationality::Gabon,
        );

        assert_eq!(jean_obiang(), Pharmacist::from(entry));
    }
}
