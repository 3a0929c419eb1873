use super::*;

pub fn edit_comment(
    connections: &sqlite::Connections,
    editor: &Id,
    comment_id: &str,
    new_text: String,
) -> Result<Comment> {
    let mut connection = connections.exclusive()?;
    let comment =
        connection.transaction(|conn| usecases::edit_comment(conn, editor, comment_id, new_text))?;
    Ok(comment)
}
