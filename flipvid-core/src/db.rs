use crate::repositories::*;

/// Everything a request handler may need from the record store.
pub trait Db: CommentRepository + VoteRepository + UserRepo + WatchedVideoRepo {}

impl<T> Db for T where T: CommentRepository + VoteRepository + UserRepo + WatchedVideoRepo {}
