mod cast_vote;
mod edit_comment;
mod error;
mod load_discussion;
mod post_comment;
mod register;
mod remove_comment;
mod watch_video;

#[cfg(test)]
pub mod tests;

pub use self::{
    cast_vote::*, edit_comment::*, error::Error, load_discussion::*, post_comment::*, register::*,
    remove_comment::*, watch_video::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::{self, *},
    };
}
