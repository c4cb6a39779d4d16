use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : Id,
    /// Public handle that may be disclosed to other users.
    pub uid        : String,
    pub name       : String,
    pub avatar_url : Option<String>,
}
