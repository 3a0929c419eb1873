#[macro_use]
extern crate log;

mod cast_vote;
mod create_comment;
mod edit_comment;
mod remove_comment;

pub mod prelude {
    pub use super::{cast_vote::*, create_comment::*, edit_comment::*, remove_comment::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use flipvid_core::{entities::*, usecases};

#[cfg(test)]
mod tests;

pub(crate) mod sqlite {
    pub use flipvid_db_sqlite::Connections;
}
