use super::*;

impl<'a> VoteRepository for DbReadOnly<'a> {
    fn create_vote(&self, _vote: Vote) -> Result<()> {
        unreachable!();
    }
    fn update_vote(&self, _vote: &Vote) -> Result<()> {
        unreachable!();
    }
    fn delete_vote(&self, _comment_id: &str, _user_id: &str) -> Result<()> {
        unreachable!();
    }

    fn try_load_vote(&self, comment_id: &str, user_id: &str) -> Result<Option<Vote>> {
        try_load_vote(&mut self.conn.borrow_mut(), comment_id, user_id)
    }
    fn load_votes_of_comment(&self, comment_id: &str) -> Result<Vec<Vote>> {
        load_votes_of_comment(&mut self.conn.borrow_mut(), comment_id)
    }
}

impl<'a> VoteRepository for DbReadWrite<'a> {
    fn create_vote(&self, vote: Vote) -> Result<()> {
        create_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn try_load_vote(&self, comment_id: &str, user_id: &str) -> Result<Option<Vote>> {
        try_load_vote(&mut self.conn.borrow_mut(), comment_id, user_id)
    }
    fn load_votes_of_comment(&self, comment_id: &str) -> Result<Vec<Vote>> {
        load_votes_of_comment(&mut self.conn.borrow_mut(), comment_id)
    }
    fn update_vote(&self, vote: &Vote) -> Result<()> {
        update_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn delete_vote(&self, comment_id: &str, user_id: &str) -> Result<()> {
        delete_vote(&mut self.conn.borrow_mut(), comment_id, user_id)
    }
}

impl<'a> VoteRepository for DbConnection<'a> {
    fn create_vote(&self, vote: Vote) -> Result<()> {
        create_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn try_load_vote(&self, comment_id: &str, user_id: &str) -> Result<Option<Vote>> {
        try_load_vote(&mut self.conn.borrow_mut(), comment_id, user_id)
    }
    fn load_votes_of_comment(&self, comment_id: &str) -> Result<Vec<Vote>> {
        load_votes_of_comment(&mut self.conn.borrow_mut(), comment_id)
    }
    fn update_vote(&self, vote: &Vote) -> Result<()> {
        update_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn delete_vote(&self, comment_id: &str, user_id: &str) -> Result<()> {
        delete_vote(&mut self.conn.borrow_mut(), comment_id, user_id)
    }
}

fn create_vote(conn: &mut SqliteConnection, vote: Vote) -> Result<()> {
    let model = models::Vote::from(&vote);
    diesel::insert_into(schema::votes::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn try_load_vote(
    conn: &mut SqliteConnection,
    comment_id: &str,
    user_id: &str,
) -> Result<Option<Vote>> {
    use schema::votes::dsl;
    Ok(dsl::votes
        .find((comment_id, user_id))
        .first::<models::Vote>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn load_votes_of_comment(conn: &mut SqliteConnection, comment_id: &str) -> Result<Vec<Vote>> {
    use schema::votes::dsl;
    Ok(dsl::votes
        .filter(dsl::comment_id.eq(comment_id))
        .load::<models::Vote>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn update_vote(conn: &mut SqliteConnection, vote: &Vote) -> Result<()> {
    use schema::votes::dsl;
    let model = models::Vote::from(vote);
    let count = diesel::update(dsl::votes.find((&model.comment_id, &model.user_id)))
        .set(dsl::is_upvote.eq(model.is_upvote))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_vote(conn: &mut SqliteConnection, comment_id: &str, user_id: &str) -> Result<()> {
    use schema::votes::dsl;
    let count = diesel::delete(dsl::votes.find((comment_id, user_id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
