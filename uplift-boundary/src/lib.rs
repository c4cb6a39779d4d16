//! # uplift-boundary
//!
//! Serializable, anemic data structures exchanged between the comment
//! core and its transport layers.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;
#[cfg(feature = "entity-conversions")]
pub use self::conv::UnsupportedCommentableKind;

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum CommentableKind {
    Moment,
    Strategy,
    Meeting,
}

/// Inbound payload for creating a comment.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewCommentRequest {
    pub commentable_type: String,
    pub commentable_id: String,
    pub comment: String,
}

/// The outward-facing projection of a stored comment.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id                : String,
    pub comment_by_uid    : String,
    pub comment_by_name   : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_by_avatar : Option<String>,
    pub comment           : String,
    pub viewers           : Vec<String>,
    pub created_at        : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_action     : Option<DeleteAction>,
}

/// Capability descriptor attached to a [`CommentView`] when the
/// viewing user may delete the comment. Transports map it to the
/// kind-specific delete route.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct DeleteAction {
    pub kind: CommentableKind,
    pub comment_id: String,
}
