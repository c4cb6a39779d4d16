use super::prelude::*;
use crate::gateways::notify::NotificationGateway;

/// Retracts the pending notification of a deleted comment.
///
/// Must only run after the comment has been removed from storage.
/// For moments and strategies the removal is unconditional. Meeting
/// notifications follow a narrower rule than delete permission
/// itself: they are retracted by the author while still a member, or
/// by a leader. Everyone else leaves the notification in place.
pub fn cleanup_notification(
    notify: &dyn NotificationGateway,
    comment: &Comment,
    commentable: &Commentable,
    acting_user: &Id,
) {
    if let Commentable::Meeting(meeting) = commentable {
        let own_comment = comment.author_id == *acting_user;
        if !((own_comment && meeting.is_member(acting_user)) || meeting.is_led_by(acting_user)) {
            log::debug!(
                "Keeping notification for comment {} deleted from meeting {}",
                comment.id,
                meeting.id
            );
            return;
        }
    }
    // Removal is idempotent on the gateway side.
    notify.remove_comment_notification(&comment.id, commentable.kind());
}
