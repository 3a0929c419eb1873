#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # flipvid-entities
//!
//! Reusable, agnostic domain entities for the flipvid platform.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod catalog;
pub mod comment;
pub mod id;
pub mod time;
pub mod user;
pub mod vote;
