use crate::entities::*;

/// Notification side effects of the comment lifecycle.
pub trait NotificationGateway {
    /// Issued exactly once per stored comment.
    fn comment_created(&self, comment: &Comment, author: &User);

    /// Retracts the pending notification of a comment.
    ///
    /// Removal is idempotent: removing a non-existent record is not
    /// an error.
    fn remove_comment_notification(&self, comment_id: &Id, kind: CommentableKind);
}
