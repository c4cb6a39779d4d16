use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Empty comment")]
    EmptyComment,
    #[error("The commentable could not be resolved")]
    UnresolvedCommentable,
    #[error("The comment does not exist")]
    CommentNotFound,
    #[error("Unsupported commentable kind: {0}")]
    UnsupportedCommentableKind(String),
    // Reserved for a stricter delete contract. The current delete
    // flow answers unauthorized requests with the comment id instead,
    // see `delete_comment`.
    #[error("This is not allowed")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
