use super::Result;
use crate::database::dao::last_update::{UpdatableElement, now};
use crate::database::error::DatabaseError;
use crate::database::model::pharmacist::{PharmacistRow, format_date_time, to_column};
use crate::database::schema::pharmacist::dsl::pharmacist;
use crate::database::schema::pharmacist::*;
use derive_getters::Getters;
use diesel::prelude::*;
use diesel::upsert::excluded;
use dto::pharmacist::{Pharmacist, PharmacistRecord};
use log::debug;

/// How many rows an upsert has created and how many it has overwritten.
#[derive(Debug, Default, Getters, PartialEq, Eq)]
pub struct UpsertCount {
    inserted: usize,
    updated: usize,
}

pub fn retrieve_pharmacists(connection: &mut SqliteConnection) -> Result<Vec<PharmacistRecord>> {
    pharmacist
        .order(registration_number.asc())
        .select(PharmacistRow::as_select())
        .load(connection)?
        .into_iter()
        .map(PharmacistRecord::try_from)
        .collect()
}

pub fn retrieve_pharmacist(
    connection: &mut SqliteConnection,
    number: u32,
) -> Result<Option<PharmacistRecord>> {
    pharmacist
        .find(to_column(number)?)
        .select(PharmacistRow::as_select())
        .first(connection)
        .optional()?
        .map(PharmacistRecord::try_from)
        .transpose()
}

fn exists(connection: &mut SqliteConnection, number: i32) -> Result<bool> {
    Ok(diesel::select(diesel::dsl::exists(pharmacist.find(number))).get_result(connection)?)
}

/// Insert a new pharmacist.
/// Return `false` without touching anything if the registration number is already taken.
pub fn insert_pharmacist(
    connection: &mut SqliteConnection,
    new_pharmacist: &Pharmacist,
) -> Result<bool> {
    connection.transaction::<_, DatabaseError, _>(|connection| {
        let number = to_column(*new_pharmacist.registration_number())?;
        if exists(connection, number)? {
            return Ok(false);
        }

        let date = now();
        diesel::insert_into(pharmacist)
            .values(PharmacistRow::new(new_pharmacist, date, date)?)
            .execute(connection)?;

        Ok(true)
    })
}

/// Overwrite every field of a known pharmacist but its creation date.
/// Return `false` if no pharmacist has this registration number.
pub fn update_pharmacist(
    connection: &mut SqliteConnection,
    updated_pharmacist: &Pharmacist,
) -> Result<bool> {
    let number = to_column(*updated_pharmacist.registration_number())?;
    let count = diesel::update(pharmacist.find(number))
        .set((
            title.eq(updated_pharmacist.title().to_string()),
            full_name.eq(updated_pharmacist.full_name()),
            last_name.eq(updated_pharmacist.last_name()),
            first_name.eq(updated_pharmacist.first_name()),
            nationality.eq(updated_pharmacist.nationality().to_string()),
            section.eq(updated_pharmacist.section()),
            is_active.eq(*updated_pharmacist.is_active()),
            dues_current.eq(*updated_pharmacist.dues_current()),
            overdue_since.eq(updated_pharmacist.overdue_since().map(format_date_time)),
            updated_at.eq(format_date_time(now())),
        ))
        .execute(connection)?;

    Ok(count == 1)
}

/// Return `false` if no pharmacist has this registration number.
pub fn delete_pharmacist(connection: &mut SqliteConnection, number: u32) -> Result<bool> {
    let count = diesel::delete(pharmacist.find(to_column(number)?)).execute(connection)?;

    Ok(count == 1)
}

/// Save pharmacists coming from a roster, using their registration number as the key.
///
/// Unknown pharmacists are inserted as is. Known ones get their title, names and nationality
/// overwritten by the latest roster, while the fields managed by administrators are left untouched.
/// Everything happens within a single transaction.
pub fn upsert_pharmacists(
    connection: &mut SqliteConnection,
    pharmacists: &[Pharmacist],
) -> Result<UpsertCount> {
    connection.transaction::<_, DatabaseError, _>(|connection| {
        let date = now();
        let mut count = UpsertCount::default();
        for roster_pharmacist in pharmacists {
            let number = to_column(*roster_pharmacist.registration_number())?;
            if exists(connection, number)? {
                count.updated += 1;
            } else {
                count.inserted += 1;
            }

            diesel::insert_into(pharmacist)
                .values(PharmacistRow::new(roster_pharmacist, date, date)?)
                .on_conflict(registration_number)
                .do_update()
                .set((
                    title.eq(excluded(title)),
                    full_name.eq(excluded(full_name)),
                    last_name.eq(excluded(last_name)),
                    first_name.eq(excluded(first_name)),
                    nationality.eq(excluded(nationality)),
                    updated_at.eq(excluded(updated_at)),
                ))
                .execute(connection)?;
        }

        super::last_update::update(connection, &UpdatableElement::Roster, date)?;
        debug!(
            "Upserted pharmacists [inserted: {}, updated: {}]",
            count.inserted, count.updated
        );

        Ok(count)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::dao::last_update::get_last_update;
    use crate::database::with_temp_database;
    use dto::pharmacist::tests::{
        jean_obiang, jean_obiang_renamed, marie_koumba, overdue_pharmacist,
    };

    fn pharmacists_of(records: Vec<PharmacistRecord>) -> Vec<Pharmacist> {
        records
            .into_iter()
            .map(|record| record.pharmacist().clone())
            .collect()
    }

    mod retrieve_pharmacists {
        use super::*;

        #[test]
        fn success_when_empty() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();

                assert!(retrieve_pharmacists(&mut connection).unwrap().is_empty());
            })
        }

        #[test]
        fn success_sorted_by_registration_number() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                for new_pharmacist in [marie_koumba(), jean_obiang(), overdue_pharmacist()] {
                    assert!(insert_pharmacist(&mut connection, &new_pharmacist).unwrap());
                }

                let result = retrieve_pharmacists(&mut connection).unwrap();

                assert_eq!(
                    vec![overdue_pharmacist(), jean_obiang(), marie_koumba()],
                    pharmacists_of(result)
                );
            })
        }
    }

    mod retrieve_pharmacist {
        use super::*;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                insert_pharmacist(&mut connection, &overdue_pharmacist()).unwrap();

                let result = retrieve_pharmacist(&mut connection, 42).unwrap().unwrap();

                assert_eq!(&overdue_pharmacist(), result.pharmacist());
                assert_eq!(result.created_at(), result.updated_at());
            })
        }

        #[test]
        fn none_when_unknown() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();

                assert_eq!(None, retrieve_pharmacist(&mut connection, 42).unwrap());
            })
        }
    }

    mod insert_pharmacist {
        use super::*;

        #[test]
        fn refuse_taken_registration_number() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                assert!(insert_pharmacist(&mut connection, &jean_obiang()).unwrap());

                assert!(!insert_pharmacist(&mut connection, &jean_obiang_renamed()).unwrap());
                assert_eq!(
                    vec![jean_obiang()],
                    pharmacists_of(retrieve_pharmacists(&mut connection).unwrap())
                );
            })
        }
    }

    mod update_pharmacist {
        use super::*;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                insert_pharmacist(&mut connection, &jean_obiang()).unwrap();
                let before = retrieve_pharmacist(&mut connection, 1234).unwrap().unwrap();

                assert!(update_pharmacist(&mut connection, &jean_obiang_renamed()).unwrap());

                let after = retrieve_pharmacist(&mut connection, 1234).unwrap().unwrap();
                assert_eq!(&jean_obiang_renamed(), after.pharmacist());
                assert_eq!(before.created_at(), after.created_at());
                assert!(after.updated_at() >= before.updated_at());
            })
        }

        #[test]
        fn unknown() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();

                assert!(!update_pharmacist(&mut connection, &jean_obiang()).unwrap());
            })
        }
    }

    mod delete_pharmacist {
        use super::*;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                insert_pharmacist(&mut connection, &jean_obiang()).unwrap();
                insert_pharmacist(&mut connection, &marie_koumba()).unwrap();

                assert!(delete_pharmacist(&mut connection, 1234).unwrap());
                assert!(!delete_pharmacist(&mut connection, 1234).unwrap());
                assert_eq!(
                    vec![marie_koumba()],
                    pharmacists_of(retrieve_pharmacists(&mut connection).unwrap())
                );
            })
        }
    }

    mod upsert_pharmacists {
        use super::*;

        #[test]
        fn insert_unknown_pharmacists() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();

                let result =
                    upsert_pharmacists(&mut connection, &[jean_obiang(), marie_koumba()]).unwrap();

                assert_eq!(
                    UpsertCount {
                        inserted: 2,
                        updated: 0
                    },
                    result
                );
                assert_eq!(
                    vec![jean_obiang(), marie_koumba()],
                    pharmacists_of(retrieve_pharmacists(&mut connection).unwrap())
                );
                assert!(
                    get_last_update(&mut connection, &UpdatableElement::Roster)
                        .unwrap()
                        .is_some()
                );
            })
        }

        #[test]
        fn overwrite_roster_fields_only() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                let administrated = Pharmacist::new(
                    *jean_obiang().title(),
                    jean_obiang().full_name().clone(),
                    jean_obiang().last_name().clone(),
                    jean_obiang().first_name().clone(),
                    1234,
                    *jean_obiang().nationality(),
                    "Section B".to_owned(),
                    false,
                    false,
                    *overdue_pharmacist().overdue_since(),
                );
                insert_pharmacist(&mut connection, &administrated).unwrap();
                let before = retrieve_pharmacist(&mut connection, 1234).unwrap().unwrap();

                let result = upsert_pharmacists(&mut connection, &[jean_obiang_renamed()]).unwrap();

                assert_eq!(
                    UpsertCount {
                        inserted: 0,
                        updated: 1
                    },
                    result
                );
                let after = retrieve_pharmacist(&mut connection, 1234).unwrap().unwrap();
                let expected = Pharmacist::new(
                    *jean_obiang_renamed().title(),
                    jean_obiang_renamed().full_name().clone(),
                    jean_obiang_renamed().last_name().clone(),
                    jean_obiang_renamed().first_name().clone(),
                    1234,
                    *jean_obiang_renamed().nationality(),
                    "Section B".to_owned(),
                    false,
                    false,
                    *overdue_pharmacist().overdue_since(),
                );
                assert_eq!(&expected, after.pharmacist());
                assert_eq!(before.created_at(), after.created_at());
            })
        }

        #[test]
        fn keep_last_duplicate() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();

                let result =
                    upsert_pharmacists(&mut connection, &[jean_obiang(), jean_obiang_renamed()])
                        .unwrap();

                assert_eq!(
                    UpsertCount {
                        inserted: 1,
                        updated: 1
                    },
                    result
                );
                assert_eq!(
                    vec![jean_obiang_renamed()],
                    pharmacists_of(retrieve_pharmacists(&mut connection).unwrap())
                );
            })
        }

        #[test]
        fn be_idempotent() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                let roster = [jean_obiang(), marie_koumba()];

                upsert_pharmacists(&mut connection, &roster).unwrap();
                upsert_pharmacists(&mut connection, &roster).unwrap();

                assert_eq!(
                    roster.to_vec(),
                    pharmacists_of(retrieve_pharmacists(&mut connection).unwrap())
                );
            })
        }
    }
}
