use crate::database::DatabasePool;
use crate::web::server::build_server;
use rocket::{Build, Rocket};

mod api;
mod authentication;
mod server;

pub fn start_servers(pool: DatabasePool) -> Rocket<Build> {
    build_server(pool)
}
