// Read-time visibility rules. Nothing in here is persisted; every
// decision is recomputed per request from the current commentable
// state and the author identity.

use crate::{
    entities::*,
    registry,
    repositories::{Error, UserRepo},
};

/// The computed set of users entitled to see a comment at read time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewerSet(Vec<Id>);

impl ViewerSet {
    fn from_ids(mut ids: Vec<Id>) -> Self {
        ids.sort_unstable();
        ids.dedup();
        Self(ids)
    }

    pub fn contains(&self, user_id: &Id) -> bool {
        self.0.binary_search(user_id).is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.0.iter()
    }
}

impl From<ViewerSet> for Vec<Id> {
    fn from(from: ViewerSet) -> Self {
        from.0
    }
}

/// Whether a user is eligible to see a comment: its author, the
/// commentable owner, and for meetings every current member or leader.
pub fn eligible_viewer(comment: &Comment, commentable: &Commentable, user_id: &Id) -> bool {
    if comment.author_id == *user_id {
        return true;
    }
    let resolver = registry::resolver_for(commentable.kind());
    resolver.owner_of(commentable) == user_id
        || resolver.is_member(commentable, user_id)
        || resolver.is_leader(commentable, user_id)
}

/// Enumerates all eligible viewers of a comment.
pub fn eligible_viewers(comment: &Comment, commentable: &Commentable) -> ViewerSet {
    let mut ids = vec![comment.author_id.clone(), commentable.owner_id().clone()];
    if let Commentable::Meeting(meeting) = commentable {
        ids.extend(meeting.members.iter().map(|m| m.user_id.clone()));
    }
    ViewerSet::from_ids(ids)
}

/// A comment whose author record has been removed is never shown,
/// not even to the commentable owner.
pub fn is_visible<R>(
    repo: &R,
    comment: &Comment,
    commentable: &Commentable,
    viewing_user: &Id,
) -> Result<bool, Error>
where
    R: UserRepo + ?Sized,
{
    if !repo.user_exists(&comment.author_id)? {
        return Ok(false);
    }
    Ok(eligible_viewer(comment, commentable, viewing_user))
}

/// The disclosed "seen by" set: the intersection of the eligible
/// viewers with the recipients the notification-viewer service has
/// actually delivered to.
pub fn viewers(comment: &Comment, commentable: &Commentable, recipients: &[Id]) -> ViewerSet {
    let eligible = eligible_viewers(comment, commentable);
    ViewerSet::from_ids(
        recipients
            .iter()
            .filter(|&user_id| eligible.contains(user_id))
            .cloned()
            .collect(),
    )
}
