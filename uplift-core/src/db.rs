use crate::repositories::*;

/// Umbrella over all repositories a storage backend has to provide.
pub trait Db: CommentRepository + CommentableRepo + UserRepo {}

impl<T> Db for T where T: CommentRepository + CommentableRepo + UserRepo {}
