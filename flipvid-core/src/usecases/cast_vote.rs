use super::prelude::*;

/// Creates, flips or retracts the vote of a user on a comment and
/// adjusts the point tally of the comment in the same step.
///
/// Repeating the same action retracts the vote, the opposite action
/// flips its polarity. Flipping removes the old contribution and
/// applies the new one at once, hence the double adjustment. The
/// read-then-write sequence is only safe inside a single exclusive
/// database transaction; callers must provide one.
pub fn cast_vote<R>(repo: &R, user_id: &Id, comment_id: &str, want_upvote: bool) -> Result<Comment>
where
    R: CommentRepository + VoteRepository,
{
    let mut comment = repo.load_comment(comment_id)?;
    match repo.try_load_vote(comment_id, user_id.as_ref())? {
        None => {
            repo.create_vote(Vote {
                comment_id: comment.id.clone(),
                user_id: user_id.clone(),
                is_upvote: want_upvote,
            })?;
            comment.points += if want_upvote { 1 } else { -1 };
        }
        Some(existing) if existing.is_upvote == want_upvote => {
            repo.delete_vote(comment_id, user_id.as_ref())?;
            comment.points += if want_upvote { -1 } else { 1 };
        }
        Some(mut existing) => {
            existing.is_upvote = want_upvote;
            repo.update_vote(&existing)?;
            comment.points += if want_upvote { 2 } else { -2 };
        }
    }
    repo.update_comment(&comment)?;
    Ok(comment)
}
