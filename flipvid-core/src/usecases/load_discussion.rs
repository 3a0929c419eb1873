use super::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub comment: Comment,
    pub author_name: String,
}

/// A top-level comment with one level of replies and the stance of
/// the viewing user, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentThread {
    pub comment: CommentView,
    pub replies: Vec<CommentView>,
    pub own_vote: Option<bool>,
}

/// Loads the discussion of a video: top-level comments newest first,
/// replies oldest first.
pub fn load_discussion<R>(
    repo: &R,
    video_id: i64,
    viewer: Option<&Id>,
) -> Result<Vec<CommentThread>>
where
    R: CommentRepository + VoteRepository + UserRepo,
{
    let comments = repo.load_comments_of_video(video_id)?;
    let with_replies = repo.zip_comments_with_replies(comments)?;
    let mut threads = Vec::with_capacity(with_replies.len());
    for (comment, replies) in with_replies {
        let own_vote = match viewer {
            Some(user_id) => repo
                .try_load_vote(comment.id.as_ref(), user_id.as_ref())?
                .map(|vote| vote.is_upvote),
            None => None,
        };
        let replies = replies
            .into_iter()
            .map(|reply| comment_view(repo, reply))
            .collect::<Result<Vec<_>>>()?;
        threads.push(CommentThread {
            comment: comment_view(repo, comment)?,
            replies,
            own_vote,
        });
    }
    Ok(threads)
}

fn comment_view<R: UserRepo>(repo: &R, comment: Comment) -> Result<CommentView> {
    let author_name = repo.get_user(comment.user_id.as_ref())?.name;
    Ok(CommentView {
        comment,
        author_name,
    })
}
