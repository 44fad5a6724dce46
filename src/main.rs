mod database;
mod directory;
mod error;
mod roster;
mod roster_import;
mod tools;
mod web;

#[macro_use]
extern crate rocket;

use crate::database::{DatabasePool, init_pool};
use crate::roster_import::import_roster_file;
use crate::tools::env_args::retrieve_arg_value;
use crate::web::start_servers;
use log::error;
use std::path::Path;

const IMPORT_ROSTER_ARG: &str = "--import-roster";

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let pool = match init_pool() {
        Ok(pool) => pool,
        Err(error) => {
            error!("{error:#?}");
            panic!("Initialization failed, aborting.");
        }
    };
    import_roster_if_requested(&pool);

    start_servers(pool)
}

/// Import the roster given by `--import-roster`, if any, before serving the directory.
fn import_roster_if_requested(pool: &DatabasePool) {
    if let Some(path) = retrieve_arg_value(IMPORT_ROSTER_ARG) {
        if let Err(error) = import_roster_file(pool, Path::new(&path)) {
            error!("Can't import roster {path}, aborting...\n{error:#?}");
            panic!("Initialization failed, aborting.");
        }
    }
}
