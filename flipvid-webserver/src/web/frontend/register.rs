use maud::Markup;
use rocket::{
    self,
    form::Form,
    get,
    http::CookieJar,
    post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri,
};

use super::{login::Credentials, view};
use crate::web::sqlite::Connections;
use flipvid_core::{usecases, usecases::Error as ParameterError};

#[get("/register")]
pub fn get_register(flash: Option<FlashMessage>) -> Markup {
    view::register(flash)
}

#[allow(clippy::result_large_err)]
#[post("/register", data = "<credentials>")]
pub fn post_register(
    db: Connections,
    credentials: Form<Credentials>,
    cookies: &CookieJar<'_>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let Ok(db) = db.exclusive() else {
        return Err(Flash::error(
            Redirect::to(uri!(get_register)),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        ));
    };
    match usecases::register(&db, credentials.name) {
        Err(err) => {
            let msg = match err {
                ParameterError::UserExists => "A user with this name already exists.",
                ParameterError::UserName => "Please choose a non-empty user name.",
                _ => "We are so sorry, something went wrong :(",
            };
            Err(Flash::error(Redirect::to(uri!(get_register)), msg))
        }
        Ok(user) => {
            // Registration doubles as the first login.
            super::login::add_session_cookie(cookies, &user.id.to_string());
            Ok(Redirect::to(uri!(super::get_index)))
        }
    }
}
