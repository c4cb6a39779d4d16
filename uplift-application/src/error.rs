use std::io;

use thiserror::Error;

use uplift_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

pub use uplift_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}

impl AppError {
    /// Transports answer every client fault with one generic
    /// bad-request signal. Whether an id was unknown or a kind tag
    /// unsupported is not disclosed to the caller.
    pub fn is_bad_request(&self) -> bool {
        use ParameterError as E;
        matches!(
            self,
            AppError::Business(BError::Parameter(
                E::EmptyComment
                    | E::UnresolvedCommentable
                    | E::CommentNotFound
                    | E::UnsupportedCommentableKind(_)
            ))
        )
    }
}
