use rocket::{
    self,
    http::Status,
    request::{FromRequest, Outcome, Request},
    response::Redirect,
};

use flipvid_core::entities::Id;

pub const COOKIE_USER_KEY: &str = "flipvid-user-id";

/// The logged-in user, identified by the private session cookie.
///
/// Requests without a valid session fail with `401 Unauthorized`
/// instead of being redirected, so that a stale form post never
/// silently ends up on the login page.
#[derive(Debug)]
pub struct Account(Id);

impl Account {
    pub fn user_id(&self) -> &Id {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.cookies().get_private(COOKIE_USER_KEY) {
            Some(cookie) => Outcome::Success(Account(Id::from(cookie.value().to_owned()))),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

/// Where a form post sends the user afterwards: back to the page the
/// request came from, or to the start page if the header is missing.
#[derive(Debug)]
pub struct Referer(Option<String>);

impl Referer {
    pub fn redirect(self) -> Redirect {
        Redirect::to(self.0.unwrap_or_else(|| "/".to_owned()))
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Referer {
    type Error = std::convert::Infallible;
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let referer = request
            .headers()
            .get_one("Referer")
            .map(ToOwned::to_owned);
        Outcome::Success(Referer(referer))
    }
}
