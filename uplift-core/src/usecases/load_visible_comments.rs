use super::prelude::*;
use crate::repositories::Error as RepoError;

/// Loads the comments of a commentable the viewing user is entitled
/// to see, newest first, together with their authors.
///
/// Comments whose author record has been removed are dropped
/// entirely. Visibility is recomputed on every call.
pub fn load_visible_comments<R>(
    repo: &R,
    commentable: &CommentableRef,
    viewing_user: &User,
) -> Result<(Commentable, Vec<(Comment, User)>)>
where
    R: CommentRepository + CommentableRepo + UserRepo,
{
    let parent = registry::resolve_commentable(repo, commentable).map_err(|err| match err {
        RepoError::NotFound => Error::UnresolvedCommentable,
        err => Error::Repo(err),
    })?;
    let comments = repo.load_comments_of_commentable(commentable)?;
    let mut results = Vec::with_capacity(comments.len());
    for comment in comments {
        let Some(author) = repo.try_get_user(&comment.author_id)? else {
            continue;
        };
        if !visibility::eligible_viewer(&comment, &parent, &viewing_user.id) {
            continue;
        }
        results.push((comment, author));
    }
    Ok((parent, results))
}
