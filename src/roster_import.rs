use crate::database::DatabasePool;
use crate::database::dao::pharmacist::upsert_pharmacists;
use crate::database::error::DatabaseError;
use crate::error::Result;
use crate::roster::extractor::{Extraction, extract};
use crate::roster::import_from_file::import_from_file;
use crate::roster::prepare_lines;
use diesel::SqliteConnection;
use dto::import_report::ImportReport;
use dto::pharmacist::Pharmacist;
use log::info;
use std::path::Path;

/// Save the entries of an extraction into the directory and report what happened.
pub fn import_extraction(
    connection: &mut SqliteConnection,
    extraction: Extraction,
) -> Result<ImportReport, DatabaseError> {
    let (entries, review_notes) = extraction.into_parts();
    let extracted = entries.len();
    let pharmacists = entries
        .into_iter()
        .map(Pharmacist::from)
        .collect::<Vec<_>>();

    let count = upsert_pharmacists(connection, &pharmacists)?;

    Ok(ImportReport::new(
        extracted,
        *count.inserted(),
        *count.updated(),
        review_notes,
    ))
}

/// Extract the entries of a whole roster, header included, and save them.
pub fn import_roster_text(
    connection: &mut SqliteConnection,
    text: &str,
) -> Result<ImportReport, DatabaseError> {
    import_extraction(connection, extract(&prepare_lines(text)))
}

/// Extract the entries of a roster file and save them.
pub fn import_roster_file(pool: &DatabasePool, path: &Path) -> Result<ImportReport> {
    let extraction = import_from_file(path)?;
    let mut connection = pool.get().map_err(DatabaseError::from)?;
    let report = import_extraction(&mut connection, extraction)?;

    info!(
        "Roster {} imported [extracted: {}, inserted: {}, updated: {}, flagged: {}]",
        path.display(),
        report.extracted(),
        report.inserted(),
        report.updated(),
        report.flagged().len()
    );

    Ok(report)
}
