// Kind dispatch for commentables. Policies never match on the kind
// themselves; they go through the resolver selected here, which keeps
// the visibility and permission rules identical across all kinds.

use crate::{
    entities::*,
    repositories::{CommentableRepo, Error},
};

type Result<T> = std::result::Result<T, Error>;

/// Ownership and membership capabilities of one commentable kind.
///
/// `is_member` covers membership beyond plain ownership. Only
/// meetings have a real membership relation; for moments and
/// strategies the predicate holds for the owner alone.
pub trait CommentableResolver {
    fn kind(&self) -> CommentableKind;

    fn resolve(&self, repo: &dyn CommentableRepo, id: &Id) -> Result<Commentable>;

    fn owner_of<'a>(&self, commentable: &'a Commentable) -> &'a Id {
        commentable.owner_id()
    }

    fn is_member(&self, commentable: &Commentable, user_id: &Id) -> bool;

    fn is_leader(&self, commentable: &Commentable, user_id: &Id) -> bool;
}

#[derive(Debug, Clone, Copy)]
pub struct MomentResolver;

impl CommentableResolver for MomentResolver {
    fn kind(&self) -> CommentableKind {
        CommentableKind::Moment
    }

    fn resolve(&self, repo: &dyn CommentableRepo, id: &Id) -> Result<Commentable> {
        Ok(Commentable::Moment(repo.get_moment(id)?))
    }

    fn is_member(&self, commentable: &Commentable, user_id: &Id) -> bool {
        debug_assert_eq!(self.kind(), commentable.kind());
        commentable.owner_id() == user_id
    }

    fn is_leader(&self, _: &Commentable, _: &Id) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyResolver;

impl CommentableResolver for StrategyResolver {
    fn kind(&self) -> CommentableKind {
        CommentableKind::Strategy
    }

    fn resolve(&self, repo: &dyn CommentableRepo, id: &Id) -> Result<Commentable> {
        Ok(Commentable::Strategy(repo.get_strategy(id)?))
    }

    fn is_member(&self, commentable: &Commentable, user_id: &Id) -> bool {
        debug_assert_eq!(self.kind(), commentable.kind());
        commentable.owner_id() == user_id
    }

    fn is_leader(&self, _: &Commentable, _: &Id) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MeetingResolver;

impl CommentableResolver for MeetingResolver {
    fn kind(&self) -> CommentableKind {
        CommentableKind::Meeting
    }

    fn resolve(&self, repo: &dyn CommentableRepo, id: &Id) -> Result<Commentable> {
        Ok(Commentable::Meeting(repo.get_meeting(id)?))
    }

    fn is_member(&self, commentable: &Commentable, user_id: &Id) -> bool {
        debug_assert_eq!(self.kind(), commentable.kind());
        match commentable {
            Commentable::Meeting(meeting) => meeting.is_member(user_id),
            _ => false,
        }
    }

    fn is_leader(&self, commentable: &Commentable, user_id: &Id) -> bool {
        debug_assert_eq!(self.kind(), commentable.kind());
        match commentable {
            Commentable::Meeting(meeting) => meeting.is_led_by(user_id),
            _ => false,
        }
    }
}

/// Selects the resolver with a finite match. There is no dynamic
/// construction from kind strings; unknown tags are rejected when the
/// tag is parsed into [`CommentableKind`].
pub fn resolver_for(kind: CommentableKind) -> &'static dyn CommentableResolver {
    match kind {
        CommentableKind::Moment => &MomentResolver,
        CommentableKind::Strategy => &StrategyResolver,
        CommentableKind::Meeting => &MeetingResolver,
    }
}

pub fn resolve_commentable(
    repo: &dyn CommentableRepo,
    commentable: &CommentableRef,
) -> Result<Commentable> {
    resolver_for(commentable.kind).resolve(repo, &commentable.id)
}
