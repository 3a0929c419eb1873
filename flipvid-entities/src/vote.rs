use crate::id::*;

/// One user's stance on one comment.
///
/// At most one vote exists per `(comment_id, user_id)` pair.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub comment_id : Id,
    pub user_id    : Id,
    pub is_upvote  : bool,
}

impl Vote {
    /// The signed contribution of this vote to the point tally.
    pub const fn weight(&self) -> i64 {
        if self.is_upvote {
            1
        } else {
            -1
        }
    }
}
