use super::{error::*, prelude::*, *};

use flipvid_core::{
    repositories::{CommentRepository as _, VoteRepository as _},
    usecases::Error as ParameterError,
};
use flipvid_db_sqlite::{run_embedded_database_migrations, Connections};

fn setup_connections() -> sqlite::Connections {
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap());
    connections
}

fn register_user(connections: &sqlite::Connections, name: &str) -> Id {
    let mut connection = connections.exclusive().unwrap();
    connection
        .transaction(|conn| usecases::register(conn, name))
        .unwrap()
        .id
}

fn new_comment(author: &Id, video_id: i64, text: &str) -> usecases::NewComment {
    usecases::NewComment {
        author: author.clone(),
        video_id,
        text: text.into(),
        video_time: None,
        reply_to: None,
    }
}

#[test]
fn post_a_comment_and_load_the_discussion() {
    let connections = setup_connections();
    let alice = register_user(&connections, "alice");

    let comment = create_comment(&connections, new_comment(&alice, 3, "nice video")).unwrap();
    assert_eq!(comment.video_id, 3);
    assert_eq!(comment.points, 0);

    let threads =
        usecases::load_discussion(&connections.shared().unwrap(), 3, Some(&alice)).unwrap();
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].comment.comment.id, comment.id);
    assert_eq!(threads[0].comment.author_name, "alice");
    assert!(threads[0].replies.is_empty());
    assert_eq!(threads[0].own_vote, None);
}

#[test]
fn replies_are_attached_to_their_top_level_comment() {
    let connections = setup_connections();
    let alice = register_user(&connections, "alice");
    let bob = register_user(&connections, "bob");

    let parent = create_comment(&connections, new_comment(&alice, 7, "first")).unwrap();
    let reply = create_comment(
        &connections,
        usecases::NewComment {
            reply_to: Some(parent.id.clone()),
            ..new_comment(&bob, 7, "second")
        },
    )
    .unwrap();
    assert_eq!(reply.parent_id.as_ref(), Some(&parent.id));
    assert_eq!(reply.video_id, parent.video_id);

    let threads = usecases::load_discussion(&connections.shared().unwrap(), 7, None).unwrap();
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].replies.len(), 1);
    assert_eq!(threads[0].replies[0].comment.id, reply.id);
    assert_eq!(threads[0].replies[0].author_name, "bob");
}

#[test]
fn vote_toggle_round_trip() {
    let connections = setup_connections();
    let alice = register_user(&connections, "alice");
    let bob = register_user(&connections, "bob");
    let comment = create_comment(&connections, new_comment(&alice, 1, "hm")).unwrap();

    let comment = cast_vote(&connections, &bob, comment.id.as_str(), true).unwrap();
    assert_eq!(comment.points, 1);
    // Switching the direction revokes the old vote and casts the new one.
    let comment = cast_vote(&connections, &bob, comment.id.as_str(), false).unwrap();
    assert_eq!(comment.points, -1);
    // Repeating the same vote revokes it.
    let comment = cast_vote(&connections, &bob, comment.id.as_str(), false).unwrap();
    assert_eq!(comment.points, 0);

    let vote = connections
        .shared()
        .unwrap()
        .try_load_vote(comment.id.as_str(), bob.as_str())
        .unwrap();
    assert_eq!(vote, None);
}

#[test]
fn removing_a_comment_removes_replies_and_votes() {
    let connections = setup_connections();
    let alice = register_user(&connections, "alice");
    let bob = register_user(&connections, "bob");

    let parent = create_comment(&connections, new_comment(&alice, 5, "root")).unwrap();
    let reply = create_comment(
        &connections,
        usecases::NewComment {
            reply_to: Some(parent.id.clone()),
            ..new_comment(&bob, 5, "leaf")
        },
    )
    .unwrap();
    cast_vote(&connections, &bob, parent.id.as_str(), true).unwrap();
    cast_vote(&connections, &alice, reply.id.as_str(), true).unwrap();

    remove_comment(&connections, &alice, parent.id.as_str()).unwrap();

    let shared = connections.shared().unwrap();
    assert!(shared.load_comments_of_video(5).unwrap().is_empty());
    assert!(shared.load_replies_of_comment(parent.id.as_str()).unwrap().is_empty());
    assert_eq!(shared.try_load_vote(parent.id.as_str(), bob.as_str()).unwrap(), None);
    assert_eq!(shared.try_load_vote(reply.id.as_str(), alice.as_str()).unwrap(), None);
}

#[test]
fn removing_a_comment_removes_nested_replies() {
    let connections = setup_connections();
    let alice = register_user(&connections, "alice");
    let bob = register_user(&connections, "bob");

    let parent = create_comment(&connections, new_comment(&alice, 6, "root")).unwrap();
    let reply = create_comment(
        &connections,
        usecases::NewComment {
            reply_to: Some(parent.id.clone()),
            ..new_comment(&bob, 6, "branch")
        },
    )
    .unwrap();
    // Replying to a reply is accepted by the storage even though the
    // frontend only renders one level.
    let nested = create_comment(
        &connections,
        usecases::NewComment {
            reply_to: Some(reply.id.clone()),
            ..new_comment(&alice, 6, "leaf")
        },
    )
    .unwrap();
    cast_vote(&connections, &bob, nested.id.as_str(), true).unwrap();

    remove_comment(&connections, &alice, parent.id.as_str()).unwrap();

    let shared = connections.shared().unwrap();
    assert!(matches!(
        shared.load_comment(nested.id.as_str()),
        Err(flipvid_core::repositories::Error::NotFound)
    ));
    assert!(shared.load_replies_of_comment(reply.id.as_str()).unwrap().is_empty());
    assert_eq!(shared.try_load_vote(nested.id.as_str(), bob.as_str()).unwrap(), None);
}

#[test]
fn only_the_author_may_remove_a_comment() {
    let connections = setup_connections();
    let alice = register_user(&connections, "alice");
    let bob = register_user(&connections, "bob");
    let comment = create_comment(&connections, new_comment(&alice, 2, "mine")).unwrap();

    let err = remove_comment(&connections, &bob, comment.id.as_str()).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(ParameterError::Forbidden))
    ));

    // Still there.
    let threads = usecases::load_discussion(&connections.shared().unwrap(), 2, None).unwrap();
    assert_eq!(threads.len(), 1);
}

#[test]
fn editing_a_comment_records_the_editor() {
    let connections = setup_connections();
    let alice = register_user(&connections, "alice");
    let comment = create_comment(&connections, new_comment(&alice, 4, "tpyo")).unwrap();
    assert_eq!(comment.last_edited_by, None);

    let edited = edit_comment(&connections, &alice, comment.id.as_str(), "typo".into()).unwrap();
    assert_eq!(edited.text, "typo");
    assert_eq!(edited.last_edited_by.as_ref(), Some(&alice));
    assert!(edited.last_edited_at.is_some());
}
