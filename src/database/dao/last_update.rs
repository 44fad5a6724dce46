use super::Result;
use crate::database::error::DatabaseError::CantUpdateLastUpdated;
use crate::database::model::last_update::LastUpdate;
use crate::database::model::pharmacist::format_date_time;
use crate::database::schema::last_update::dsl::last_update;
use crate::database::schema::last_update::*;
use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use log::debug;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum UpdatableElement {
    Roster,
}

impl Display for UpdatableElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn get_last_update(
    connection: &mut SqliteConnection,
    updatable_element: &UpdatableElement,
) -> Result<Option<NaiveDateTime>> {
    let result = last_update
        .filter(element.eq(updatable_element.to_string()))
        .select(LastUpdate::as_select())
        .first(connection)
        .optional()?;

    result.map(|result| result.date()).transpose()
}

pub(super) fn update(
    connection: &mut SqliteConnection,
    updatable_element: &UpdatableElement,
    update_date: NaiveDateTime,
) -> Result<NaiveDateTime> {
    let result = diesel::update(last_update.filter(element.eq(updatable_element.to_string())))
        .set(date.eq(format_date_time(update_date)))
        .execute(connection)?;

    if result == 1 {
        debug!("Updated {updatable_element} at {update_date}")
    } else {
        let result = diesel::insert_into(last_update)
            .values((
                element.eq(updatable_element.to_string()),
                date.eq(format_date_time(update_date)),
            ))
            .execute(connection)?;

        if result != 1 {
            Err(CantUpdateLastUpdated(updatable_element.to_string()))?;
        }

        debug!("Inserted {updatable_element} at {update_date}")
    }

    Ok(update_date)
}

pub(super) fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
