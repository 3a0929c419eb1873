//! # flipvid-core
//!
//! Repository contracts and use cases of the flipvid platform.

pub mod catalog;
pub mod db;
pub mod gateways;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use flipvid_entities::{catalog::*, comment::*, id::*, time::*, user::*, vote::*};
}
