use super::prelude::*;

/// Removes a comment together with its replies and votes.
///
/// Restricted to the original author.
pub fn remove_comment<R>(repo: &R, requester: &Id, comment_id: &str) -> Result<()>
where
    R: CommentRepository,
{
    let comment = repo.load_comment(comment_id)?;
    if comment.user_id != *requester {
        log::warn!(
            "User {} tried to remove comment {} of user {}",
            requester,
            comment.id,
            comment.user_id
        );
        return Err(Error::Forbidden);
    }
    Ok(repo.delete_comment(comment_id)?)
}
