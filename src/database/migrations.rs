use crate::database::error::DatabaseError;
use diesel::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use log::debug;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub(crate) fn run_migrations(connection: &mut SqliteConnection) -> Result<(), DatabaseError> {
    let applied = connection.run_pending_migrations(MIGRATIONS)?;
    debug!("Applied {} pending migration(s)", applied.len());

    Ok(())
}
