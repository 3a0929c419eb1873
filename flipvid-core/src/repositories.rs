// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CommentRepository {
    fn create_comment(&self, comment: Comment) -> Result<()>;

    fn load_comment(&self, id: &str) -> Result<Comment>;

    /// Top-level comments of a video, newest first.
    fn load_comments_of_video(&self, video_id: i64) -> Result<Vec<Comment>>;

    /// Replies of a comment, oldest first.
    fn load_replies_of_comment(&self, parent_id: &str) -> Result<Vec<Comment>>;

    fn update_comment(&self, comment: &Comment) -> Result<()>;

    /// Deletes the comment together with its replies and all
    /// votes on either of them.
    fn delete_comment(&self, id: &str) -> Result<()>;

    fn zip_comments_with_replies(
        &self,
        comments: Vec<Comment>,
    ) -> Result<Vec<(Comment, Vec<Comment>)>> {
        let mut results = Vec::with_capacity(comments.len());
        for comment in comments {
            debug_assert!(comment.parent_id.is_none());
            let replies = self.load_replies_of_comment(comment.id.as_ref())?;
            results.push((comment, replies));
        }
        Ok(results)
    }
}

pub trait VoteRepository {
    fn create_vote(&self, vote: Vote) -> Result<()>;
    fn try_load_vote(&self, comment_id: &str, user_id: &str) -> Result<Option<Vote>>;
    fn load_votes_of_comment(&self, comment_id: &str) -> Result<Vec<Vote>>;
    fn update_vote(&self, vote: &Vote) -> Result<()>;
    fn delete_vote(&self, comment_id: &str, user_id: &str) -> Result<()>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user_by_name(&self, name: &str) -> Result<Option<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait WatchedVideoRepo {
    fn mark_video_watched(&self, user_id: &str, video_id: i64) -> Result<()>;
    fn is_video_watched(&self, user_id: &str, video_id: i64) -> Result<bool>;
}
