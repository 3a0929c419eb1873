use super::*;

pub fn create_comment(
    connections: &sqlite::Connections,
    new_comment: usecases::NewComment,
) -> Result<Comment> {
    let mut connection = connections.exclusive()?;
    let comment = connection.transaction(|conn| usecases::create_comment(conn, new_comment))?;
    info!(
        "Created comment {} on video {}",
        comment.id, comment.video_id
    );
    Ok(comment)
}
