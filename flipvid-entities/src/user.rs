use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id            : Id,
    pub name          : String,
    pub registered_at : Timestamp,
}
