use crate::database::DatabasePool;
use crate::roster::import_from_file::decode;
use crate::roster_import::import_roster_text;
use crate::tools::{log_error_and_return, log_message_and_return};
use crate::web::authentication::Administrator;
use dto::import_report::ImportReport;
use log::info;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

/// Extract the entries of a roster passed as plain text, header included,
/// and save them into the directory.
/// The roster is either UTF-8 or LATIN-1 encoded, as roster files are.
/// Known pharmacists see their title, names and nationality updated.
#[post("/pharmacists/import", format = "text/plain", data = "<roster>")]
pub async fn import_roster(
    pool: &State<DatabasePool>,
    roster: Vec<u8>,
    _administrator: Administrator,
) -> Result<Json<ImportReport>, Status> {
    let roster = decode(roster).map_err(log_message_and_return(
        "Can't decode roster",
        Status::BadRequest,
    ))?;
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let report = import_roster_text(&mut connection, &roster).map_err(log_message_and_return(
        "Can't import roster",
        Status::InternalServerError,
    ))?;

    info!(
        "Roster imported [extracted: {}, inserted: {}, updated: {}, flagged: {}]",
        report.extracted(),
        report.inserted(),
        report.updated(),
        report.flagged().len()
    );

    Ok(Json(report))
}
