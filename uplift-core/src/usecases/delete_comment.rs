use super::prelude::*;
use crate::{authorization, repositories::Error as RepoError};

/// Outcome of a delete request.
///
/// Unauthorized requests leave storage untouched but still carry the
/// comment id, so callers answer them exactly like a removal and the
/// response does not disclose the permission outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deletion {
    Removed {
        comment: Comment,
        commentable: Commentable,
    },
    Skipped {
        id: Id,
    },
}

impl Deletion {
    pub fn id(&self) -> &Id {
        match self {
            Self::Removed { comment, .. } => &comment.id,
            Self::Skipped { id } => id,
        }
    }
}

pub fn delete_comment<R>(repo: &R, comment_id: &Id, acting_user: &User) -> Result<Deletion>
where
    R: CommentRepository + CommentableRepo,
{
    let comment = repo.load_comment(comment_id).map_err(|err| match err {
        RepoError::NotFound => Error::CommentNotFound,
        err => Error::Repo(err),
    })?;
    let commentable =
        registry::resolve_commentable(repo, &comment.commentable).map_err(|err| match err {
            RepoError::NotFound => Error::UnresolvedCommentable,
            err => Error::Repo(err),
        })?;
    if !authorization::can_delete(&comment, &commentable, &acting_user.id) {
        log::warn!(
            "User {} is not allowed to delete comment {}",
            acting_user.id,
            comment.id
        );
        return Ok(Deletion::Skipped { id: comment.id });
    }
    repo.delete_comment(&comment.id)?;
    log::info!("Deleted comment {}", comment.id);
    Ok(Deletion::Removed {
        comment,
        commentable,
    })
}
