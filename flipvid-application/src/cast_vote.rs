use super::*;

/// Toggles the vote of `user_id` on a comment and returns the comment
/// with its updated score.
///
/// The whole read-modify-write sequence runs inside a single exclusive
/// transaction so that two simultaneous votes can never be counted
/// against a stale score.
pub fn cast_vote(
    connections: &sqlite::Connections,
    user_id: &Id,
    comment_id: &str,
    want_upvote: bool,
) -> Result<Comment> {
    let mut connection = connections.exclusive()?;
    connection
        .transaction(|conn| usecases::cast_vote(conn, user_id, comment_id, want_upvote))
        .map_err(|err| {
            warn!("Failed to cast vote on comment {comment_id}: {err}");
            err.into()
        })
}
