use std::{cell::RefCell, cmp::Reverse};

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
    usecases::{self, NewComment},
};

type RepoResult<T> = std::result::Result<T, RepoError>;

/// In-memory record store for use case tests.
///
/// `delete_comment` emulates the cascading deletes of the SQL
/// implementation, including arbitrarily nested replies.
#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub comments: RefCell<Vec<Comment>>,
    pub votes: RefCell<Vec<Vote>>,
    pub watched: RefCell<Vec<(String, i64)>>,
}

impl CommentRepository for MockDb {
    fn create_comment(&self, comment: Comment) -> RepoResult<()> {
        let mut comments = self.comments.borrow_mut();
        if comments.iter().any(|c| c.id == comment.id) {
            return Err(RepoError::AlreadyExists);
        }
        comments.push(comment);
        Ok(())
    }

    fn load_comment(&self, id: &str) -> RepoResult<Comment> {
        self.comments
            .borrow()
            .iter()
            .find(|c| c.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn load_comments_of_video(&self, video_id: i64) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<_> = self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.video_id == video_id && c.parent_id.is_none())
            .cloned()
            .collect();
        // Newest first; the stable sort keeps equal timestamps in
        // insertion order, matching what the SQL query returns.
        comments.sort_by_key(|c| Reverse(c.created_at));
        Ok(comments)
    }

    fn load_replies_of_comment(&self, parent_id: &str) -> RepoResult<Vec<Comment>> {
        let mut replies: Vec<_> = self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.parent_id.as_ref().map(Id::as_str) == Some(parent_id))
            .cloned()
            .collect();
        replies.sort_by_key(|c| c.created_at);
        Ok(replies)
    }

    fn update_comment(&self, comment: &Comment) -> RepoResult<()> {
        let mut comments = self.comments.borrow_mut();
        match comments.iter().position(|c| c.id == comment.id) {
            Some(pos) => {
                comments[pos] = comment.clone();
                Ok(())
            }
            None => Err(RepoError::NotFound),
        }
    }

    fn delete_comment(&self, id: &str) -> RepoResult<()> {
        let mut comments = self.comments.borrow_mut();
        if !comments.iter().any(|c| c.id.as_str() == id) {
            return Err(RepoError::NotFound);
        }
        let mut doomed = vec![id.to_owned()];
        let mut frontier = vec![id.to_owned()];
        while !frontier.is_empty() {
            frontier = comments
                .iter()
                .filter(|c| {
                    c.parent_id
                        .as_ref()
                        .is_some_and(|p| frontier.iter().any(|f| f == p.as_str()))
                })
                .map(|c| c.id.to_string())
                .collect();
            doomed.extend_from_slice(&frontier);
        }
        comments.retain(|c| !doomed.iter().any(|d| d == c.id.as_str()));
        self.votes
            .borrow_mut()
            .retain(|v| !doomed.iter().any(|d| d == v.comment_id.as_str()));
        Ok(())
    }
}

impl VoteRepository for MockDb {
    fn create_vote(&self, vote: Vote) -> RepoResult<()> {
        let mut votes = self.votes.borrow_mut();
        if votes
            .iter()
            .any(|v| v.comment_id == vote.comment_id && v.user_id == vote.user_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        votes.push(vote);
        Ok(())
    }

    fn try_load_vote(&self, comment_id: &str, user_id: &str) -> RepoResult<Option<Vote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .find(|v| v.comment_id.as_str() == comment_id && v.user_id.as_str() == user_id)
            .cloned())
    }

    fn load_votes_of_comment(&self, comment_id: &str) -> RepoResult<Vec<Vote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| v.comment_id.as_str() == comment_id)
            .cloned()
            .collect())
    }

    fn update_vote(&self, vote: &Vote) -> RepoResult<()> {
        let mut votes = self.votes.borrow_mut();
        match votes
            .iter()
            .position(|v| v.comment_id == vote.comment_id && v.user_id == vote.user_id)
        {
            Some(pos) => {
                votes[pos] = vote.clone();
                Ok(())
            }
            None => Err(RepoError::NotFound),
        }
    }

    fn delete_vote(&self, comment_id: &str, user_id: &str) -> RepoResult<()> {
        let mut votes = self.votes.borrow_mut();
        match votes
            .iter()
            .position(|v| v.comment_id.as_str() == comment_id && v.user_id.as_str() == user_id)
        {
            Some(pos) => {
                votes.remove(pos);
                Ok(())
            }
            None => Err(RepoError::NotFound),
        }
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        if users.iter().any(|u| u.id == user.id || u.name == user.name) {
            return Err(RepoError::AlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }

    fn get_user(&self, id: &str) -> RepoResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_name(&self, name: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.name == name)
            .cloned())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl WatchedVideoRepo for MockDb {
    fn mark_video_watched(&self, user_id: &str, video_id: i64) -> RepoResult<()> {
        let mut watched = self.watched.borrow_mut();
        if !watched
            .iter()
            .any(|(u, v)| u == user_id && *v == video_id)
        {
            watched.push((user_id.to_owned(), video_id));
        }
        Ok(())
    }

    fn is_video_watched(&self, user_id: &str, video_id: i64) -> RepoResult<bool> {
        Ok(self
            .watched
            .borrow()
            .iter()
            .any(|(u, v)| u == user_id && *v == video_id))
    }
}

pub fn register_test_user(db: &MockDb, name: &str) -> Id {
    usecases::register(db, name).unwrap().id
}

/// Shifts the creation time of a stored comment into the past so that
/// ordering assertions do not depend on the wall clock.
pub fn backdate_comment(db: &MockDb, id: &Id, seconds: i64) {
    let mut comments = db.comments.borrow_mut();
    let comment = comments.iter_mut().find(|c| &c.id == id).unwrap();
    comment.created_at = Timestamp::from_seconds(comment.created_at.into_seconds() - seconds);
}

pub fn new_comment(author: &Id, video_id: i64, text: &str) -> NewComment {
    NewComment {
        author: author.clone(),
        video_id,
        text: text.into(),
        video_time: None,
        reply_to: None,
    }
}
