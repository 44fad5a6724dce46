use crate::database::DatabasePool;
use crate::web::api::{import_controller, pharmacists_controller};
use crate::web::authentication::ApiToken;
use rocket::{Build, Rocket};

pub struct ApiServer {
    pool: DatabasePool,
    api_token: ApiToken,
}

impl ApiServer {
    pub fn new(pool: DatabasePool, api_token: ApiToken) -> Self {
        Self { pool, api_token }
    }

    pub fn configure(self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build
            .manage(self.pool)
            .manage(self.api_token)
            .mount(
                "/api/",
                routes![
                    pharmacists_controller::look_pharmacists_up,
                    pharmacists_controller::get_last_update,
                    pharmacists_controller::get_pharmacist,
                    pharmacists_controller::create_pharmacist,
                    pharmacists_controller::update_pharmacist,
                    pharmacists_controller::delete_pharmacist,
                    import_controller::import_roster,
                ],
            )
    }
}
