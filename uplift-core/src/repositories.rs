// Low-level storage access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CommentRepository {
    fn create_comment(&self, comment: Comment) -> Result<()>;

    fn load_comment(&self, id: &Id) -> Result<Comment>;

    // Newest first
    fn load_comments_of_commentable(&self, commentable: &CommentableRef) -> Result<Vec<Comment>>;

    fn delete_comment(&self, id: &Id) -> Result<()>;
}

// One getter per kind. The polymorphic dispatch on top of these
// lives in the resolver registry.
pub trait CommentableRepo {
    fn get_moment(&self, id: &Id) -> Result<Moment>;
    fn get_strategy(&self, id: &Id) -> Result<Strategy>;
    fn get_meeting(&self, id: &Id) -> Result<Meeting>;
}

pub trait UserRepo {
    fn get_user(&self, id: &Id) -> Result<User>;
    fn try_get_user(&self, id: &Id) -> Result<Option<User>>;

    fn user_exists(&self, id: &Id) -> Result<bool> {
        Ok(self.try_get_user(id)?.is_some())
    }
}
