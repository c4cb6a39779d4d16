use super::{project_comment::project_comment, *};
use crate::gateways::{TextSanitizer, TimeAgoFormatter, ViewerDirectory};
use uplift_boundary::CommentView;

pub fn load_comments<D: Db>(
    db: &D,
    sanitizer: &dyn TextSanitizer,
    time_ago: &dyn TimeAgoFormatter,
    viewer_directory: &dyn ViewerDirectory,
    commentable: &CommentableRef,
    viewing_user: &User,
) -> Result<Vec<CommentView>> {
    let (parent, comments) = usecases::load_visible_comments(db, commentable, viewing_user)?;
    Ok(comments
        .iter()
        .map(|(comment, author)| {
            project_comment(
                sanitizer,
                time_ago,
                viewer_directory,
                comment,
                &parent,
                author,
                viewing_user,
            )
        })
        .collect())
}
