// Permission rules for comment mutations. Viewing permissions live in
// the visibility module.

use crate::{entities::*, registry};

/// Any authenticated user may comment on any commentable kind. The
/// remaining creation gate is a well-formed request with a resolvable
/// parent; authentication itself belongs to the transport layer.
pub fn can_create(kind: CommentableKind) -> bool {
    match kind {
        CommentableKind::Moment | CommentableKind::Strategy | CommentableKind::Meeting => true,
    }
}

/// Deletion is allowed for the comment author, the commentable owner,
/// and for meetings additionally every leader.
pub fn can_delete(comment: &Comment, commentable: &Commentable, acting_user: &Id) -> bool {
    debug_assert_eq!(comment.commentable.kind, commentable.kind());
    if comment.author_id == *acting_user {
        return true;
    }
    let resolver = registry::resolver_for(commentable.kind());
    resolver.owner_of(commentable) == acting_user || resolver.is_leader(commentable, acting_user)
}
