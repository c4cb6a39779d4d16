use crate::{commentable::*, id::*, time::*};

/// A user-authored comment attached to a single commentable.
///
/// Immutable after creation. Deletion is a hard delete.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id          : Id,
    pub author_id   : Id,
    pub commentable : CommentableRef,
    pub created_at  : Timestamp,
    pub text        : String,
}
