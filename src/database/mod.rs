use crate::database::error::DatabaseError;
use crate::database::error::DatabaseError::{ConnectionFailed, MissingDatabaseUrl};
use crate::database::migrations::run_migrations;
use crate::tools::env_args::retrieve_expected_arg_value;
use crate::tools::log_error_and_return;
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool};

pub(crate) mod dao;
pub(crate) mod error;
mod migrations;
mod model;
mod schema;

pub const DATABASE_URL_ARG: &str = "--database-url";

pub type DatabasePool = Pool<ConnectionManager<SqliteConnection>>;

/// Create a pool of connections to the database given by `--database-url`
/// and bring its schema up to date.
pub fn init_pool() -> Result<DatabasePool, DatabaseError> {
    let database_url = retrieve_expected_arg_value(DATABASE_URL_ARG, MissingDatabaseUrl)?;
    establish_pool(&database_url)
}

pub fn establish_pool(database_url: &str) -> Result<DatabasePool, DatabaseError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .build(manager)
        .map_err(log_error_and_return(ConnectionFailed))?;
    let mut connection = pool.get().map_err(log_error_and_return(ConnectionFailed))?;
    run_migrations(&mut connection)?;

    Ok(pool)
}

/// Run `function` against a brand-new database, stored in a temporary folder.
#[cfg(test)]
pub fn with_temp_database<F, T>(function: F) -> T
where
    F: FnOnce(DatabasePool) -> T,
{
    let database_url = crate::tools::test::tests::temp_dir()
        .join("database.db")
        .to_str()
        .unwrap()
        .to_owned();
    let pool = establish_pool(&database_url).unwrap();

    function(pool)
}
