use crate::database::error::DatabaseError;
use crate::database::model::DATE_TIME_FORMAT;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use dto::nationality::Nationality;
use dto::pharmacist::{Pharmacist, PharmacistRecord};
use dto::title::Title;
use std::str::FromStr;

#[derive(Queryable, Selectable, Insertable, Debug, PartialEq)]
#[diesel(table_name = crate::database::schema::pharmacist)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct PharmacistRow {
    registration_number: i32,
    title: String,
    full_name: String,
    last_name: String,
    first_name: String,
    nationality: String,
    section: String,
    is_active: bool,
    dues_current: bool,
    overdue_since: Option<String>,
    created_at: String,
    updated_at: String,
}

impl PharmacistRow {
    pub(crate) fn new(
        pharmacist: &Pharmacist,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> Result<Self, DatabaseError> {
        Ok(Self {
            registration_number: to_column(*pharmacist.registration_number())?,
            title: pharmacist.title().to_string(),
            full_name: pharmacist.full_name().clone(),
            last_name: pharmacist.last_name().clone(),
            first_name: pharmacist.first_name().clone(),
            nationality: pharmacist.nationality().to_string(),
            section: pharmacist.section().clone(),
            is_active: *pharmacist.is_active(),
            dues_current: *pharmacist.dues_current(),
            overdue_since: pharmacist.overdue_since().map(format_date_time),
            created_at: format_date_time(created_at),
            updated_at: format_date_time(updated_at),
        })
    }
}

impl TryFrom<PharmacistRow> for PharmacistRecord {
    type Error = DatabaseError;

    fn try_from(value: PharmacistRow) -> Result<Self, Self::Error> {
        let registration_number = u32::try_from(value.registration_number).map_err(|_| {
            DatabaseError::MalformedRow(format!(
                "negative registration number {}",
                value.registration_number
            ))
        })?;
        let overdue_since = match value.overdue_since {
            Some(overdue_since) => Some(parse_date_time(&overdue_since)?),
            None => None,
        };
        let pharmacist = Pharmacist::new(
            Title::from_str(&value.title)?,
            value.full_name,
            value.last_name,
            value.first_name,
            registration_number,
            Nationality::from_str(&value.nationality)?,
            value.section,
            value.is_active,
            value.dues_current,
            overdue_since,
        );

        Ok(PharmacistRecord::new(
            pharmacist,
            parse_date_time(&value.created_at)?,
            parse_date_time(&value.updated_at)?,
        ))
    }
}

/// Registration numbers are stored as SQLite integers.
pub(crate) fn to_column(registration_number: u32) -> Result<i32, DatabaseError> {
    i32::try_from(registration_number).map_err(|_| {
        DatabaseError::MalformedRow(format!(
            "registration number {registration_number} is too large"
        ))
    })
}

pub(crate) fn format_date_time(date_time: NaiveDateTime) -> String {
    date_time.format(DATE_TIME_FORMAT).to_string()
}

fn parse_date_time(value: &str) -> Result<NaiveDateTime, DatabaseError> {
    Ok(NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)?)
}

#[cfg(test)]
mod tests {
    use crate::database::error::DatabaseError;
    use crate::database::model::pharmacist::{PharmacistRow, to_column};
    use chrono::{NaiveDate, Utc};
    use dto::pharmacist::PharmacistRecord;
    use dto::pharmacist::tests::{marie_koumba, overdue_pharmacist};

    #[test]
    fn should_convert_back_and_forth() {
        let created_at = NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_milli_opt(7, 8, 9, 10)
            .unwrap();
        let updated_at = Utc::now().naive_utc();

        for pharmacist in [marie_koumba(), overdue_pharmacist()] {
            let row = PharmacistRow::new(&pharmacist, created_at, updated_at).unwrap();
            let record = PharmacistRecord::try_from(row).unwrap();

            assert_eq!(
                PharmacistRecord::new(pharmacist, created_at, updated_at),
                record
            );
        }
    }

    #[test]
    fn should_not_convert_unknown_nationality() {
        let now = Utc::now().naive_utc();
        let mut row = PharmacistRow::new(&marie_koumba(), now, now).unwrap();
        row.nationality = "France".to_owned();

        let result = PharmacistRecord::try_from(row);

        assert!(matches!(result, Err(DatabaseError::MalformedRow(_))));
    }

    #[test]
    fn should_refuse_too_large_registration_number() {
        assert_eq!(Ok(42), to_column(42));
        assert!(to_column(u32::MAX).is_err());
    }
}
