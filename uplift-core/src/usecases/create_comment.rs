use super::prelude::*;
use crate::repositories::Error as RepoError;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub commentable: CommentableRef,
    pub text: String,
}

/// Validates and stores a new comment with a server-assigned id and
/// timestamp. The author is always the acting user; there is no
/// ambient session state.
pub fn create_comment<R>(
    repo: &R,
    new_comment: NewComment,
    author: &User,
) -> Result<(Comment, Commentable)>
where
    R: CommentRepository + CommentableRepo,
{
    let NewComment { commentable, text } = new_comment;
    if text.trim().is_empty() {
        return Err(Error::EmptyComment);
    }
    if !commentable.id.is_valid() {
        return Err(Error::UnresolvedCommentable);
    }
    // An orphaned reference is invalid input, never silently skipped.
    let parent = registry::resolve_commentable(repo, &commentable).map_err(|err| match err {
        RepoError::NotFound => Error::UnresolvedCommentable,
        err => Error::Repo(err),
    })?;
    let comment = Comment {
        id: Id::new(),
        author_id: author.id.clone(),
        commentable,
        created_at: Timestamp::now(),
        text,
    };
    log::debug!("Creating comment {} by user {}", comment.id, author.id);
    repo.create_comment(comment.clone())?;
    Ok((comment, parent))
}
