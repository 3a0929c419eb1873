use super::prelude::*;

/// Rewrites the text of a comment and records editor and edit time.
///
/// Only the author may edit. The parent reference of a reply is
/// never touched.
pub fn edit_comment<R>(repo: &R, editor: &Id, comment_id: &str, new_text: String) -> Result<Comment>
where
    R: CommentRepository,
{
    if new_text.trim().is_empty() {
        return Err(Error::EmptyCommentText);
    }
    let mut comment = repo.load_comment(comment_id)?;
    if comment.user_id != *editor {
        log::warn!(
            "User {} tried to edit comment {} of user {}",
            editor,
            comment.id,
            comment.user_id
        );
        return Err(Error::Forbidden);
    }
    comment.text = new_text;
    comment.last_edited_by = Some(editor.clone());
    comment.last_edited_at = Some(Timestamp::now());
    repo.update_comment(&comment)?;
    Ok(comment)
}
