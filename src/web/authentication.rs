use rocket::State;
use rocket::http::Status;
use rocket::outcome::{Outcome, try_outcome};
use rocket::request::{self, FromRequest, Request};

const AUTHORIZATION_HEADER: &str = "Authorization";
const BEARER_PREFIX: &str = "Bearer ";

/// The token administrators have to present, if any.
/// Without one, nobody is an administrator.
pub struct ApiToken(Option<String>);

impl ApiToken {
    pub fn new(token: Option<String>) -> Self {
        Self(token)
    }

    pub fn is_configured(&self) -> bool {
        self.0.is_some()
    }

    fn matches(&self, token: &str) -> bool {
        self.0.as_deref() == Some(token)
    }
}

/// If an endpoint modifies the directory, then its implementation should require an [Administrator] parameter.
/// Rocket will summon this guard to ensure the caller has passed the API token
/// as an `Authorization: Bearer <token>` header.
/// If they haven't, then the caller receives an Unauthorized status.
pub struct Administrator;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Administrator {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let api_token = try_outcome!(req.guard::<&State<ApiToken>>().await);
        match get_bearer_token(req) {
            Some(token) if api_token.matches(token) => Outcome::Success(Administrator),
            _ => Outcome::Forward(Status::Unauthorized),
        }
    }
}

fn get_bearer_token<'a>(req: &'a Request) -> Option<&'a str> {
    req.headers()
        .get_one(AUTHORIZATION_HEADER)
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
