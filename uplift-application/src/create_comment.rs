use super::{project_comment::project_comment, *};
use crate::gateways::{
    notify::NotificationGateway, TextSanitizer, TimeAgoFormatter, ViewerDirectory,
};
use uplift_boundary::CommentView;

pub fn create_comment<D: Db>(
    db: &D,
    notify: &dyn NotificationGateway,
    sanitizer: &dyn TextSanitizer,
    time_ago: &dyn TimeAgoFormatter,
    viewer_directory: &dyn ViewerDirectory,
    new_comment: usecases::NewComment,
    acting_user: &User,
) -> Result<CommentView> {
    if !authorization::can_create(new_comment.commentable.kind) {
        return Err(usecases::Error::Unauthorized.into());
    }
    let (comment, commentable) = usecases::create_comment(db, new_comment, acting_user)?;
    // Exactly one creation notification per stored comment.
    notify.comment_created(&comment, acting_user);
    info!(
        "User {} commented on {} {}",
        acting_user.id,
        comment.commentable.kind,
        comment.commentable.id
    );
    Ok(project_comment(
        sanitizer,
        time_ago,
        viewer_directory,
        &comment,
        &commentable,
        acting_user,
        acting_user,
    ))
}
