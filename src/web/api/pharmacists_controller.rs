use crate::database::DatabasePool;
use crate::database::dao;
use crate::database::dao::last_update::UpdatableElement;
use crate::directory;
use crate::tools::log_error_and_return;
use crate::web::authentication::Administrator;
use chrono::NaiveDateTime;
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use dto::nationality::Nationality;
use dto::pharmacist::{Pharmacist, PharmacistRecord};
use dto::pharmacist_to_look_up::PharmacistToLookUp;
use log::debug;
use rocket::State;
use rocket::http::Status;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use std::str::FromStr;

type Connection = PooledConnection<ConnectionManager<SqliteConnection>>;

fn get_connection(pool: &DatabasePool) -> Result<Connection, Status> {
    pool.get()
        .map_err(log_error_and_return(Status::InternalServerError))
}

/// List the pharmacists matching all given criteria, sorted by registration number.
/// Without criteria, the whole directory is listed.
#[get("/pharmacists?<name>&<nationality>&<section>&<number>")]
pub async fn look_pharmacists_up(
    pool: &State<DatabasePool>,
    name: Option<String>,
    nationality: Option<String>,
    section: Option<String>,
    number: Option<u32>,
) -> Result<Json<Vec<PharmacistRecord>>, Status> {
    let nationality = nationality
        .map(|nationality| Nationality::from_str(&nationality))
        .transpose()
        .map_err(|error| {
            debug!("Can't look pharmacists up [error: {error}]");
            Status::BadRequest
        })?;
    let pharmacist_to_look_up = PharmacistToLookUp::new(number, name, nationality, section);

    let mut connection = get_connection(pool)?;
    let records = dao::pharmacist::retrieve_pharmacists(&mut connection)
        .map_err(log_error_and_return(Status::InternalServerError))?;

    let matching_records =
        directory::look_up::look_pharmacists_up(&records, &pharmacist_to_look_up)
            .into_iter()
            .cloned()
            .collect();

    Ok(Json(matching_records))
}

/// Date of the last roster import, or `null` if no roster has been imported yet.
#[get("/pharmacists/last-update")]
pub async fn get_last_update(
    pool: &State<DatabasePool>,
) -> Result<Json<Option<NaiveDateTime>>, Status> {
    let mut connection = get_connection(pool)?;
    let last_update =
        dao::last_update::get_last_update(&mut connection, &UpdatableElement::Roster)
            .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok(Json(last_update))
}

#[get("/pharmacists/<number>")]
pub async fn get_pharmacist(
    pool: &State<DatabasePool>,
    number: u32,
) -> Result<Json<PharmacistRecord>, Status> {
    let mut connection = get_connection(pool)?;
    let record = dao::pharmacist::retrieve_pharmacist(&mut connection, number)
        .map_err(log_error_and_return(Status::InternalServerError))?;

    record.map(Json).ok_or(Status::NotFound)
}

/// Add a pharmacist to the directory.
/// Fail with a Conflict status if the registration number is already taken.
#[post("/pharmacists", format = "application/json", data = "<pharmacist>")]
pub async fn create_pharmacist(
    pool: &State<DatabasePool>,
    pharmacist: Json<Pharmacist>,
    _administrator: Administrator,
) -> Result<Created<Json<PharmacistRecord>>, Status> {
    let pharmacist = pharmacist.into_inner();
    let number = *pharmacist.registration_number();
    if number == 0 {
        return Err(Status::BadRequest);
    }

    let mut connection = get_connection(pool)?;
    let inserted = dao::pharmacist::insert_pharmacist(&mut connection, &pharmacist)
        .map_err(log_error_and_return(Status::InternalServerError))?;
    if !inserted {
        debug!("Pharmacist {number} already exists");
        return Err(Status::Conflict);
    }

    let record = dao::pharmacist::retrieve_pharmacist(&mut connection, number)
        .map_err(log_error_and_return(Status::InternalServerError))?
        .ok_or(Status::InternalServerError)?;

    Ok(Created::new(format!("/api/pharmacists/{number}")).body(Json(record)))
}

/// Overwrite every field of a pharmacist.
/// The registration number of the body has to match the one of the path.
#[put("/pharmacists/<number>", format = "application/json", data = "<pharmacist>")]
pub async fn update_pharmacist(
    pool: &State<DatabasePool>,
    number: u32,
    pharmacist: Json<Pharmacist>,
    _administrator: Administrator,
) -> Result<Json<PharmacistRecord>, Status> {
    let pharmacist = pharmacist.into_inner();
    if *pharmacist.registration_number() != number {
        debug!(
            "Registration numbers don't match [path: {number}, body: {}]",
            pharmacist.registration_number()
        );
        return Err(Status::BadRequest);
    }

    let mut connection = get_connection(pool)?;
    let updated = dao::pharmacist::update_pharmacist(&mut connection, &pharmacist)
        .map_err(log_error_and_return(Status::InternalServerError))?;
    if !updated {
        return Err(Status::NotFound);
    }

    dao::pharmacist::retrieve_pharmacist(&mut connection, number)
        .map_err(log_error_and_return(Status::InternalServerError))?
        .map(Json)
        .ok_or(Status::NotFound)
}

#[delete("/pharmacists/<number>")]
pub async fn delete_pharmacist(
    pool: &State<DatabasePool>,
    number: u32,
    _administrator: Administrator,
) -> Result<Status, Status> {
    let mut connection = get_connection(pool)?;
    let deleted = dao::pharmacist::delete_pharmacist(&mut connection, number)
        .map_err(log_error_and_return(Status::InternalServerError))?;

    if deleted {
        Ok(Status::NoContent)
    } else {
        Err(Status::NotFound)
    }
}
