use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub author: Id,
    pub video_id: i64,
    pub text: String,
    pub video_time: Option<i64>,
    /// Id of the comment this one replies to, if any.
    pub reply_to: Option<Id>,
}

/// Creates a top-level comment or a reply.
///
/// Replies inherit the video of their parent; the `video_id` given by
/// the caller is ignored for them.
pub fn create_comment<R>(repo: &R, new_comment: NewComment) -> Result<Comment>
where
    R: CommentRepository + UserRepo,
{
    let NewComment {
        author,
        video_id,
        text,
        video_time,
        reply_to,
    } = new_comment;
    if text.trim().is_empty() {
        return Err(Error::EmptyCommentText);
    }
    // A stale session cookie might reference a vanished account.
    if let Err(err) = repo.get_user(author.as_ref()) {
        return Err(match err {
            repositories::Error::NotFound => Error::Unauthorized,
            err => err.into(),
        });
    }
    let (video_id, parent_id) = match reply_to {
        Some(parent_id) => {
            let parent = repo.load_comment(parent_id.as_ref())?;
            (parent.video_id, Some(parent.id))
        }
        None => (video_id, None),
    };
    let comment = Comment {
        id: Id::new(),
        video_id,
        video_time,
        created_at: Timestamp::now(),
        last_edited_at: None,
        last_edited_by: None,
        text,
        points: 0,
        user_id: author,
        parent_id,
    };
    repo.create_comment(comment.clone())?;
    Ok(comment)
}
