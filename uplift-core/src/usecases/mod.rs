mod cleanup_notification;
mod create_comment;
mod delete_comment;
mod error;
mod load_visible_comments;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    cleanup_notification::*, create_comment::*, delete_comment::*, error::Error,
    load_visible_comments::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, registry, repositories::*, visibility};
}
use self::prelude::*;

/// Parses a raw kind tag at the transport seam. Unknown tags are
/// rejected here; once parsed, the kind is a closed enum and cannot
/// fall through to another kind's handling.
pub fn parse_commentable_kind(kind: &str) -> Result<CommentableKind> {
    kind.parse()
        .map_err(|_| Error::UnsupportedCommentableKind(kind.to_owned()))
}
