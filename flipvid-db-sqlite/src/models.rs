use flipvid_core::entities as e;

use super::schema::*;

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamps in seconds.

#[derive(Debug, Queryable, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct User {
    pub id: String,
    pub name: String,
    pub registered_at: i64,
}

#[derive(Debug, Queryable, Insertable, AsChangeset)]
#[diesel(table_name = comments, treat_none_as_null = true)]
pub struct Comment {
    pub id: String,
    pub video_id: i64,
    pub video_time: Option<i64>,
    pub created_at: i64,
    pub last_edited_at: Option<i64>,
    pub last_edited_by: Option<String>,
    pub text: String,
    pub points: i64,
    pub user_id: String,
    pub parent_id: Option<String>,
}

#[derive(Debug, Queryable, Insertable, AsChangeset)]
#[diesel(table_name = votes)]
pub struct Vote {
    pub comment_id: String,
    pub user_id: String,
    pub is_upvote: bool,
}

#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = watched_videos)]
pub struct WatchedVideo {
    pub user_id: String,
    pub video_id: i64,
}

impl From<User> for e::User {
    fn from(from: User) -> Self {
        let User {
            id,
            name,
            registered_at,
        } = from;
        Self {
            id: id.into(),
            name,
            registered_at: e::Timestamp::from_seconds(registered_at),
        }
    }
}

impl From<&e::User> for User {
    fn from(from: &e::User) -> Self {
        let e::User {
            id,
            name,
            registered_at,
        } = from;
        Self {
            id: id.to_string(),
            name: name.clone(),
            registered_at: registered_at.into_seconds(),
        }
    }
}

impl From<Comment> for e::Comment {
    fn from(from: Comment) -> Self {
        let Comment {
            id,
            video_id,
            video_time,
            created_at,
            last_edited_at,
            last_edited_by,
            text,
            points,
            user_id,
            parent_id,
        } = from;
        Self {
            id: id.into(),
            video_id,
            video_time,
            created_at: e::Timestamp::from_seconds(created_at),
            last_edited_at: last_edited_at.map(e::Timestamp::from_seconds),
            last_edited_by: last_edited_by.map(Into::into),
            text,
            points,
            user_id: user_id.into(),
            parent_id: parent_id.map(Into::into),
        }
    }
}

impl From<&e::Comment> for Comment {
    fn from(from: &e::Comment) -> Self {
        let e::Comment {
            id,
            video_id,
            video_time,
            created_at,
            last_edited_at,
            last_edited_by,
            text,
            points,
            user_id,
            parent_id,
        } = from;
        Self {
            id: id.to_string(),
            video_id: *video_id,
            video_time: *video_time,
            created_at: created_at.into_seconds(),
            last_edited_at: last_edited_at.map(e::Timestamp::into_seconds),
            last_edited_by: last_edited_by.as_ref().map(ToString::to_string),
            text: text.clone(),
            points: *points,
            user_id: user_id.to_string(),
            parent_id: parent_id.as_ref().map(ToString::to_string),
        }
    }
}

impl From<Vote> for e::Vote {
    fn from(from: Vote) -> Self {
        let Vote {
            comment_id,
            user_id,
            is_upvote,
        } = from;
        Self {
            comment_id: comment_id.into(),
            user_id: user_id.into(),
            is_upvote,
        }
    }
}

impl From<&e::Vote> for Vote {
    fn from(from: &e::Vote) -> Self {
        let e::Vote {
            comment_id,
            user_id,
            is_upvote,
        } = from;
        Self {
            comment_id: comment_id.to_string(),
            user_id: user_id.to_string(),
            is_upvote: *is_upvote,
        }
    }
}
