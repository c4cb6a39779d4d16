use super::*;
use crate::gateways::notify::NotificationGateway;

pub fn delete_comment<D: Db>(
    db: &D,
    notify: &dyn NotificationGateway,
    comment_id: &Id,
    acting_user: &User,
) -> Result<Id> {
    match usecases::delete_comment(db, comment_id, acting_user)? {
        usecases::Deletion::Removed {
            comment,
            commentable,
        } => {
            // Cleanup runs only once the comment is gone from storage.
            usecases::cleanup_notification(notify, &comment, &commentable, &acting_user.id);
            Ok(comment.id)
        }
        // The response must not disclose that nothing was removed.
        usecases::Deletion::Skipped { id } => Ok(id),
    }
}
