use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    request::FlashMessage,
    response::Redirect,
    routes, FromForm, Route, State,
};

use crate::web::{guards::*, sqlite, Catalog};
use flipvid_application::prelude::*;
use flipvid_core::{
    catalog,
    entities::{Id, User},
    repositories::{Error as RepoError, UserRepo as _},
    usecases,
};

mod error;
mod login;
mod register;
mod view;

#[cfg(test)]
mod tests;

use error::Error;

type Result<T> = std::result::Result<T, Error>;

fn current_user(db: &sqlite::Connections, account: Option<Account>) -> Result<Option<User>> {
    let Some(account) = account else {
        return Ok(None);
    };
    match db.shared()?.get_user(account.user_id().as_str()) {
        Ok(user) => Ok(Some(user)),
        // A stale session cookie refers to a user that no longer exists.
        Err(RepoError::NotFound) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[get("/")]
pub fn get_index(
    db: sqlite::Connections,
    catalog: &State<Catalog>,
    account: Option<Account>,
) -> Result<Markup> {
    let user = current_user(&db, account)?;
    Ok(view::index(user.as_ref(), &catalog.0))
}

#[get("/phases/<slug>")]
pub fn get_phase(
    db: sqlite::Connections,
    catalog: &State<Catalog>,
    account: Option<Account>,
    slug: &str,
) -> Result<Markup> {
    let phase = catalog::find_phase_by_slug(&catalog.0, slug).ok_or(RepoError::NotFound)?;
    let user = current_user(&db, account)?;
    Ok(view::phase(user.as_ref(), phase))
}

#[get("/videos/<pos>")]
pub fn get_video(
    db: sqlite::Connections,
    catalog: &State<Catalog>,
    account: Option<Account>,
    pos: i64,
) -> Result<Markup> {
    let (_, video) = catalog::find_video_by_pos(&catalog.0, pos).ok_or(RepoError::NotFound)?;
    let user = current_user(&db, account)?;
    let (threads, watched) = {
        let db = db.shared()?;
        let viewer = user.as_ref().map(|user| &user.id);
        let threads = usecases::load_discussion(&db, video.id, viewer)?;
        let watched = match &user {
            Some(user) => usecases::is_video_watched(&db, &user.id, video.id)?,
            None => false,
        };
        (threads, watched)
    };
    Ok(view::video(
        user.as_ref(),
        video,
        &threads,
        watched,
        catalog::find_by_pos(&catalog.0, pos - 1),
        catalog::find_by_pos(&catalog.0, pos + 1),
    ))
}

#[get("/quizzes/<pos>")]
pub fn get_quiz(
    db: sqlite::Connections,
    catalog: &State<Catalog>,
    account: Option<Account>,
    pos: i64,
) -> Result<Markup> {
    let (_, quiz) = catalog::find_quiz_by_pos(&catalog.0, pos).ok_or(RepoError::NotFound)?;
    let user = current_user(&db, account)?;
    Ok(view::quiz(
        user.as_ref(),
        quiz,
        catalog::find_by_pos(&catalog.0, pos - 1),
        catalog::find_by_pos(&catalog.0, pos + 1),
    ))
}

#[get("/notification_alert")]
pub fn get_notification_alert(flash: Option<FlashMessage>) -> Markup {
    view::notification_alert(flash)
}

#[derive(FromForm)]
pub struct CommentForm<'r> {
    body: &'r str,
    video_time: Option<i64>,
    #[field(name = "replyID")]
    reply_id: Option<&'r str>,
}

#[post("/post_comment/<video_id>", data = "<data>")]
pub fn post_comment(
    db: sqlite::Connections,
    account: Account,
    referer: Referer,
    video_id: i64,
    data: Form<CommentForm>,
) -> Result<Redirect> {
    let data = data.into_inner();
    let new_comment = usecases::NewComment {
        author: account.user_id().clone(),
        video_id,
        text: data.body.to_owned(),
        video_time: data.video_time,
        reply_to: data.reply_id.map(Id::from),
    };
    create_comment(&db, new_comment)?;
    Ok(referer.redirect())
}

#[derive(FromForm)]
pub struct EditForm<'r> {
    text: &'r str,
}

#[post("/edit_comment/<id>", data = "<data>")]
pub fn post_edit_comment(
    db: sqlite::Connections,
    account: Account,
    referer: Referer,
    id: &str,
    data: Form<EditForm>,
) -> Result<Redirect> {
    edit_comment(&db, account.user_id(), id, data.into_inner().text.to_owned())?;
    Ok(referer.redirect())
}

#[post("/remove_comment/<id>")]
pub fn post_remove_comment(
    db: sqlite::Connections,
    account: Account,
    referer: Referer,
    id: &str,
) -> Result<Redirect> {
    remove_comment(&db, account.user_id(), id)?;
    Ok(referer.redirect())
}

#[post("/upvote_comment/<id>")]
pub fn post_upvote_comment(
    db: sqlite::Connections,
    account: Account,
    referer: Referer,
    id: &str,
) -> Result<Redirect> {
    cast_vote(&db, account.user_id(), id, true)?;
    Ok(referer.redirect())
}

#[post("/downvote_comment/<id>")]
pub fn post_downvote_comment(
    db: sqlite::Connections,
    account: Account,
    referer: Referer,
    id: &str,
) -> Result<Redirect> {
    cast_vote(&db, account.user_id(), id, false)?;
    Ok(referer.redirect())
}

#[post("/watched/<video_id>")]
pub fn post_watched(
    db: sqlite::Connections,
    account: Account,
    referer: Referer,
    video_id: i64,
) -> Result<Redirect> {
    usecases::mark_video_watched(&db.exclusive()?, account.user_id(), video_id)?;
    Ok(referer.redirect())
}

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        get_phase,
        get_video,
        get_quiz,
        get_notification_alert,
        post_comment,
        post_edit_comment,
        post_remove_comment,
        post_upvote_comment,
        post_downvote_comment,
        post_watched,
        login::get_login,
        login::post_login,
        login::post_logout,
        register::get_register,
        register::post_register,
    ]
}
