use super::prelude::*;

pub fn register<R: UserRepo>(repo: &R, name: &str) -> Result<User> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::UserName);
    }
    if repo.try_get_user_by_name(name)?.is_some() {
        return Err(Error::UserExists);
    }
    let user = User {
        id: Id::new(),
        name: name.into(),
        registered_at: Timestamp::now(),
    };
    repo.create_user(&user)?;
    Ok(user)
}

pub fn login<R: UserRepo>(repo: &R, name: &str) -> Result<User> {
    repo.try_get_user_by_name(name.trim())?
        .ok_or(Error::Credentials)
}
