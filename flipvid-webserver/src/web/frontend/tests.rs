use super::*;
use crate::web::{
    self, sqlite,
    tests::{prelude::*, register_user},
};

fn setup() -> (Client, sqlite::Connections) {
    web::tests::rocket_test_setup(vec![("/", super::routes())])
}

fn register_via_http(client: &Client, name: &str) {
    let res = client
        .post("/register")
        .header(ContentType::Form)
        .body(format!("name={name}"))
        .dispatch();
    assert_eq!(res.status(), Status::SeeOther);
}

#[test]
fn index_lists_the_phases() {
    let (client, _) = setup();
    let res = client.get("/").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    assert!(body.contains("Getting Started"));
    assert!(body.contains("/phases/getting_started"));
    assert!(body.contains("/phases/advanced_topics"));
}

#[test]
fn phase_page_lists_videos_and_quizzes() {
    let (client, _) = setup();
    let res = client.get("/phases/getting_started").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    assert!(body.contains("/videos/1"));
    assert!(body.contains("/videos/2"));
    assert!(body.contains("/quizzes/3"));

    let res = client.get("/phases/no_such_phase").dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn video_page_shows_the_discussion() {
    let (client, pool) = setup();
    let alice = register_user(&pool, "alice");
    flipvid_application::prelude::create_comment(
        &pool,
        usecases::NewComment {
            author: alice,
            video_id: 10,
            text: "looking_forward".into(),
            video_time: Some(90),
            reply_to: None,
        },
    )
    .unwrap();

    let res = client.get("/videos/1").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    assert!(body.contains("Welcome"));
    assert!(body.contains("looking_forward"));
    assert!(body.contains("alice"));
    assert!(body.contains("at 1:30"));
    // Anonymous visitors get no comment form.
    assert!(!body.contains("/post_comment/10"));
}

#[test]
fn positions_resolve_to_the_right_kind_of_page() {
    let (client, _) = setup();
    // Position 3 is a quiz, not a video.
    assert_eq!(client.get("/videos/3").dispatch().status(), Status::NotFound);
    assert_eq!(client.get("/quizzes/3").dispatch().status(), Status::Ok);
    assert_eq!(
        client.get("/videos/99").dispatch().status(),
        Status::NotFound
    );
}

#[test]
fn mutations_require_a_session() {
    let (client, _) = setup();
    let res = client
        .post("/post_comment/10")
        .header(ContentType::Form)
        .body("body=hello")
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    let res = client.post("/upvote_comment/some-id").dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    let res = client.post("/watched/10").dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn post_comment_redirects_back_to_the_video_page() {
    let (client, pool) = setup();
    register_via_http(&client, "alice");

    let res = client
        .post("/post_comment/10")
        .header(ContentType::Form)
        .header(Header::new("Referer", "/videos/1"))
        .body("body=nice&video_time=42")
        .dispatch();
    assert_eq!(res.status(), Status::SeeOther);
    assert_eq!(res.headers().get_one("Location"), Some("/videos/1"));

    let comments = pool
        .shared()
        .unwrap()
        .load_comments_of_video(10)
        .unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].text, "nice");
    assert_eq!(comments[0].video_time, Some(42));
}

#[test]
fn without_referer_the_redirect_falls_back_to_the_start_page() {
    let (client, _) = setup();
    register_via_http(&client, "alice");

    let res = client
        .post("/post_comment/10")
        .header(ContentType::Form)
        .body("body=nice")
        .dispatch();
    assert_eq!(res.status(), Status::SeeOther);
    assert_eq!(res.headers().get_one("Location"), Some("/"));
}

#[test]
fn vote_round_trip_over_http() {
    let (client, pool) = setup();
    register_via_http(&client, "alice");
    let res = client
        .post("/post_comment/10")
        .header(ContentType::Form)
        .body("body=nice")
        .dispatch();
    assert_eq!(res.status(), Status::SeeOther);
    let comment = pool
        .shared()
        .unwrap()
        .load_comments_of_video(10)
        .unwrap()
        .remove(0);

    let res = client
        .post(format!("/upvote_comment/{}", comment.id))
        .dispatch();
    assert_eq!(res.status(), Status::SeeOther);
    let comment = pool
        .shared()
        .unwrap()
        .load_comment(comment.id.as_str())
        .unwrap();
    assert_eq!(comment.points, 1);

    // A second upvote takes the vote back.
    let res = client
        .post(format!("/upvote_comment/{}", comment.id))
        .dispatch();
    assert_eq!(res.status(), Status::SeeOther);
    let comment = pool
        .shared()
        .unwrap()
        .load_comment(comment.id.as_str())
        .unwrap();
    assert_eq!(comment.points, 0);
}

#[test]
fn only_the_author_may_remove_a_comment_over_http() {
    let (client, pool) = setup();
    let alice = register_user(&pool, "alice");
    let comment = flipvid_application::prelude::create_comment(
        &pool,
        usecases::NewComment {
            author: alice,
            video_id: 10,
            text: "mine".into(),
            video_time: None,
            reply_to: None,
        },
    )
    .unwrap();

    register_via_http(&client, "bob");
    let res = client
        .post(format!("/remove_comment/{}", comment.id))
        .dispatch();
    assert_eq!(res.status(), Status::Forbidden);
    assert!(pool
        .shared()
        .unwrap()
        .load_comment(comment.id.as_str())
        .is_ok());
}

#[test]
fn logout_ends_the_session() {
    let (client, _) = setup();
    register_via_http(&client, "alice");

    let res = client.post("/logout").dispatch();
    assert_eq!(res.status(), Status::SeeOther);

    let res = client
        .post("/post_comment/10")
        .header(ContentType::Form)
        .body("body=hello")
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn login_with_unknown_name_flashes_an_error() {
    let (client, _) = setup();
    let res = client.get("/login").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert!(res.into_string().unwrap().contains("action=\"login\""));

    let res = client
        .post("/login")
        .header(ContentType::Form)
        .body("name=nobody")
        .dispatch();
    assert_eq!(res.status(), Status::SeeOther);
    assert_eq!(res.headers().get_one("Location"), Some("/login"));
}

#[test]
fn watched_state_survives_a_page_reload() {
    let (client, _) = setup();
    register_via_http(&client, "alice");

    let res = client
        .post("/watched/10")
        .header(Header::new("Referer", "/videos/1"))
        .dispatch();
    assert_eq!(res.status(), Status::SeeOther);
    assert_eq!(res.headers().get_one("Location"), Some("/videos/1"));

    let body = client.get("/videos/1").dispatch().into_string().unwrap();
    assert!(body.contains("Watched"));
}
