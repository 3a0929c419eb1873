use super::*;

pub fn remove_comment(
    connections: &sqlite::Connections,
    requester: &Id,
    comment_id: &str,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::remove_comment(conn, requester, comment_id))?;
    info!("Removed comment {comment_id} and its replies");
    Ok(())
}
