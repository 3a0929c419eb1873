use crate::{id::*, time::*};

/// A text post attached to a video of the course catalog.
///
/// A comment with a `parent_id` is a reply to another comment.
/// The parent reference is set at creation and never changes.
/// `points` is the eagerly maintained tally of all live votes.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id             : Id,
    pub video_id       : i64,
    /// Playback second the comment refers to, if any.
    pub video_time     : Option<i64>,
    pub created_at     : Timestamp,
    pub last_edited_at : Option<Timestamp>,
    pub last_edited_by : Option<Id>,
    pub text           : String,
    pub points         : i64,
    pub user_id        : Id,
    pub parent_id      : Option<Id>,
}

impl Comment {
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}
