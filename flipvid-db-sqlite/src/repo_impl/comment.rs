use super::*;

impl<'a> CommentRepository for DbReadOnly<'a> {
    fn create_comment(&self, _comment: Comment) -> Result<()> {
        unreachable!();
    }
    fn update_comment(&self, _comment: &Comment) -> Result<()> {
        unreachable!();
    }
    fn delete_comment(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_video(&self, video_id: i64) -> Result<Vec<Comment>> {
        load_comments_of_video(&mut self.conn.borrow_mut(), video_id)
    }
    fn load_replies_of_comment(&self, parent_id: &str) -> Result<Vec<Comment>> {
        load_replies_of_comment(&mut self.conn.borrow_mut(), parent_id)
    }
}

impl<'a> CommentRepository for DbReadWrite<'a> {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_video(&self, video_id: i64) -> Result<Vec<Comment>> {
        load_comments_of_video(&mut self.conn.borrow_mut(), video_id)
    }
    fn load_replies_of_comment(&self, parent_id: &str) -> Result<Vec<Comment>> {
        load_replies_of_comment(&mut self.conn.borrow_mut(), parent_id)
    }
    fn update_comment(&self, comment: &Comment) -> Result<()> {
        update_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn delete_comment(&self, id: &str) -> Result<()> {
        delete_comment(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> CommentRepository for DbConnection<'a> {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_video(&self, video_id: i64) -> Result<Vec<Comment>> {
        load_comments_of_video(&mut self.conn.borrow_mut(), video_id)
    }
    fn load_replies_of_comment(&self, parent_id: &str) -> Result<Vec<Comment>> {
        load_replies_of_comment(&mut self.conn.borrow_mut(), parent_id)
    }
    fn update_comment(&self, comment: &Comment) -> Result<()> {
        update_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn delete_comment(&self, id: &str) -> Result<()> {
        delete_comment(&mut self.conn.borrow_mut(), id)
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: Comment) -> Result<()> {
    let model = models::Comment::from(&comment);
    diesel::insert_into(schema::comments::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_comment(conn: &mut SqliteConnection, id: &str) -> Result<Comment> {
    use schema::comments::dsl;
    Ok(dsl::comments
        .find(id)
        .first::<models::Comment>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn load_comments_of_video(conn: &mut SqliteConnection, video_id: i64) -> Result<Vec<Comment>> {
    use schema::comments::dsl;
    Ok(dsl::comments
        .filter(dsl::video_id.eq(video_id))
        .filter(dsl::parent_id.is_null())
        .order(dsl::created_at.desc())
        .load::<models::Comment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn load_replies_of_comment(conn: &mut SqliteConnection, parent_id: &str) -> Result<Vec<Comment>> {
    use schema::comments::dsl;
    Ok(dsl::comments
        .filter(dsl::parent_id.eq(parent_id))
        .order(dsl::created_at.asc())
        .load::<models::Comment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn update_comment(conn: &mut SqliteConnection, comment: &Comment) -> Result<()> {
    use schema::comments::dsl;
    let model = models::Comment::from(comment);
    let count = diesel::update(dsl::comments.find(&model.id))
        .set(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_comment(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::{comments, votes};
    // The foreign_keys pragma is a per-connection setting, so the
    // cascade is spelled out instead of relying on ON DELETE CASCADE.
    // Replies are collected level by level because the storage does
    // not limit the nesting depth, only the rendering does.
    let mut doomed = vec![id.to_owned()];
    let mut frontier = vec![id.to_owned()];
    while !frontier.is_empty() {
        frontier = comments::table
            .select(comments::id)
            .filter(comments::parent_id.eq_any(&frontier))
            .load::<String>(conn)
            .map_err(from_diesel_err)?;
        doomed.extend_from_slice(&frontier);
    }
    diesel::delete(votes::table.filter(votes::comment_id.eq_any(&doomed)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(comments::table.filter(comments::id.eq_any(&doomed[1..])))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let count = diesel::delete(comments::table.find(id))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
