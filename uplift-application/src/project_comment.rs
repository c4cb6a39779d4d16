use super::*;
use crate::gateways::{TextSanitizer, TimeAgoFormatter, ViewerDirectory};
use uplift_boundary::{CommentView, DeleteAction};

/// Shapes a stored comment for one viewing user.
///
/// The body is cleaned by the sanitizer collaborator; the disclosed
/// viewer set is capped by the recipients the viewer directory
/// reports; the delete capability is attached only when the viewing
/// user is actually allowed to delete.
pub fn project_comment(
    sanitizer: &dyn TextSanitizer,
    time_ago: &dyn TimeAgoFormatter,
    viewer_directory: &dyn ViewerDirectory,
    comment: &Comment,
    commentable: &Commentable,
    author: &User,
    viewing_user: &User,
) -> CommentView {
    let recipients = viewer_directory.recipients_of(comment);
    let viewers = visibility::viewers(comment, commentable, &recipients);
    let delete_action =
        authorization::can_delete(comment, commentable, &viewing_user.id).then(|| DeleteAction {
            kind: commentable.kind().into(),
            comment_id: comment.id.to_string(),
        });
    CommentView {
        id: comment.id.to_string(),
        comment_by_uid: author.uid.clone(),
        comment_by_name: author.name.clone(),
        comment_by_avatar: author.avatar_url.clone(),
        comment: sanitizer.clean(&comment.text),
        viewers: Vec::from(viewers).into_iter().map(Into::into).collect(),
        created_at: time_ago.relative(comment.created_at),
        delete_action,
    }
}
