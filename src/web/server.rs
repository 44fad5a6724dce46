use crate::database::DatabasePool;
use crate::tools::env_args::{retrieve_arg_value, retrieve_parsed_arg_value};
use crate::web::api::server::ApiServer;
use crate::web::authentication::ApiToken;
use log::warn;
use rocket::data::{Limits, ToByteUnit};
use rocket::{Build, Rocket};

const PORT_ARG: &str = "--port";
const API_TOKEN_ARG: &str = "--api-token";
const DEFAULT_PORT: u16 = 8000;
/// Rosters are posted as plain text, way above Rocket's default limits.
const ROSTER_SIZE_LIMIT_IN_MIB: u64 = 5;

pub fn build_server(pool: DatabasePool) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("port", get_port()))
        .merge((
            "limits",
            Limits::default()
                .limit("string", ROSTER_SIZE_LIMIT_IN_MIB.mebibytes())
                .limit("bytes", ROSTER_SIZE_LIMIT_IN_MIB.mebibytes()),
        ));
    let rocket_build = rocket::build().configure(figment);

    let api_token = get_api_token();
    if !api_token.is_configured() {
        warn!("No {API_TOKEN_ARG} given, the directory can't be modified through the API.");
    }

    ApiServer::new(pool, api_token).configure(rocket_build)
}

fn get_port() -> u16 {
    retrieve_parsed_arg_value(PORT_ARG).unwrap_or(DEFAULT_PORT)
}

fn get_api_token() -> ApiToken {
    ApiToken::new(retrieve_arg_value(API_TOKEN_ARG))
}
