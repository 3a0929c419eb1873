use super::*;

impl<'a> WatchedVideoRepo for DbReadOnly<'a> {
    fn mark_video_watched(&self, _user_id: &str, _video_id: i64) -> Result<()> {
        unreachable!();
    }

    fn is_video_watched(&self, user_id: &str, video_id: i64) -> Result<bool> {
        is_video_watched(&mut self.conn.borrow_mut(), user_id, video_id)
    }
}

impl<'a> WatchedVideoRepo for DbReadWrite<'a> {
    fn mark_video_watched(&self, user_id: &str, video_id: i64) -> Result<()> {
        mark_video_watched(&mut self.conn.borrow_mut(), user_id, video_id)
    }
    fn is_video_watched(&self, user_id: &str, video_id: i64) -> Result<bool> {
        is_video_watched(&mut self.conn.borrow_mut(), user_id, video_id)
    }
}

impl<'a> WatchedVideoRepo for DbConnection<'a> {
    fn mark_video_watched(&self, user_id: &str, video_id: i64) -> Result<()> {
        mark_video_watched(&mut self.conn.borrow_mut(), user_id, video_id)
    }
    fn is_video_watched(&self, user_id: &str, video_id: i64) -> Result<bool> {
        is_video_watched(&mut self.conn.borrow_mut(), user_id, video_id)
    }
}

fn mark_video_watched(conn: &mut SqliteConnection, user_id: &str, video_id: i64) -> Result<()> {
    let model = models::WatchedVideo {
        user_id: user_id.to_owned(),
        video_id,
    };
    // Watching a video twice is not an error.
    diesel::insert_or_ignore_into(schema::watched_videos::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn is_video_watched(conn: &mut SqliteConnection, user_id: &str, video_id: i64) -> Result<bool> {
    use schema::watched_videos::dsl;
    Ok(dsl::watched_videos
        .find((user_id, video_id))
        .first::<models::WatchedVideo>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .is_some())
}
