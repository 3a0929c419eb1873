use maud::Markup;
use rocket::{
    self,
    form::Form,
    get,
    http::{Cookie, CookieJar, SameSite},
    post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::{super::guards::*, view};

use crate::web::sqlite::Connections;
use flipvid_core::{usecases, usecases::Error as ParameterError};

#[derive(FromForm)]
pub struct Credentials<'r> {
    pub(crate) name: &'r str,
}

#[allow(clippy::result_large_err)]
#[get("/login")]
pub fn get_login(
    account: Option<Account>,
    flash: Option<FlashMessage>,
) -> std::result::Result<Markup, Redirect> {
    if account.is_some() {
        Err(Redirect::to(uri!(super::get_index)))
    } else {
        Ok(view::login(flash))
    }
}

#[allow(clippy::result_large_err)]
#[post("/login", data = "<credentials>")]
pub fn post_login(
    db: Connections,
    credentials: Form<Credentials>,
    cookies: &CookieJar<'_>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let Ok(db) = db.shared() else {
        return Err(Flash::error(
            Redirect::to(uri!(get_login)),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        ));
    };
    match usecases::login(&db, credentials.name) {
        Err(err) => {
            let msg = match err {
                ParameterError::Credentials => "Unknown user name.",
                _ => "We are so sorry, something went wrong :(",
            };
            Err(Flash::error(Redirect::to(uri!(get_login)), msg))
        }
        Ok(user) => {
            add_session_cookie(cookies, &user.id.to_string());
            Ok(Redirect::to(uri!(super::get_index)))
        }
    }
}

#[post("/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Flash<Redirect> {
    cookies.remove_private(COOKIE_USER_KEY);
    Flash::success(
        Redirect::to(uri!(super::get_index)),
        "You have successfully logged out.",
    )
}

pub(crate) fn add_session_cookie(cookies: &CookieJar<'_>, user_id: &str) {
    cookies.add_private(
        Cookie::build((COOKIE_USER_KEY, user_id.to_owned()))
            .http_only(true)
            .same_site(SameSite::Lax),
    );
}
