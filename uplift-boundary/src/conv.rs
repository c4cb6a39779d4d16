use thiserror::Error;

use uplift_entities as e;

use super::*;

#[derive(Debug, Error)]
#[error("Unsupported commentable kind: {0}")]
pub struct UnsupportedCommentableKind(pub String);

impl From<e::commentable::CommentableKind> for CommentableKind {
    fn from(from: e::commentable::CommentableKind) -> Self {
        use e::commentable::CommentableKind::*;
        match from {
            Moment => CommentableKind::Moment,
            Strategy => CommentableKind::Strategy,
            Meeting => CommentableKind::Meeting,
        }
    }
}

impl From<CommentableKind> for e::commentable::CommentableKind {
    fn from(from: CommentableKind) -> Self {
        use e::commentable::CommentableKind::*;
        match from {
            CommentableKind::Moment => Moment,
            CommentableKind::Strategy => Strategy,
            CommentableKind::Meeting => Meeting,
        }
    }
}

impl TryFrom<&NewCommentRequest> for e::commentable::CommentableRef {
    type Error = UnsupportedCommentableKind;
    fn try_from(from: &NewCommentRequest) -> Result<Self, Self::Error> {
        let kind = from
            .commentable_type
            .parse()
            .map_err(|_| UnsupportedCommentableKind(from.commentable_type.clone()))?;
        Ok(Self {
            kind,
            id: from.commentable_id.as_str().into(),
        })
    }
}
