use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::id::*;

/// The closed set of entity kinds a comment can attach to.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CommentableKind {
    Moment,
    Strategy,
    Meeting,
}

/// Typed reference to the parent entity of a comment.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentableRef {
    pub kind : CommentableKind,
    pub id   : Id,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moment {
    pub id       : Id,
    pub owner_id : Id,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    pub id       : Id,
    pub owner_id : Id,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingMember {
    pub user_id : Id,
    pub leader  : bool,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub id       : Id,
    pub owner_id : Id,
    pub members  : Vec<MeetingMember>,
}

impl Meeting {
    pub fn is_member(&self, user_id: &Id) -> bool {
        self.members.iter().any(|m| m.user_id == *user_id)
    }

    pub fn is_led_by(&self, user_id: &Id) -> bool {
        self.members.iter().any(|m| m.leader && m.user_id == *user_id)
    }
}

/// A resolved commentable of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commentable {
    Moment(Moment),
    Strategy(Strategy),
    Meeting(Meeting),
}

impl Commentable {
    pub const fn kind(&self) -> CommentableKind {
        match self {
            Self::Moment(_) => CommentableKind::Moment,
            Self::Strategy(_) => CommentableKind::Strategy,
            Self::Meeting(_) => CommentableKind::Meeting,
        }
    }

    pub fn id(&self) -> &Id {
        match self {
            Self::Moment(moment) => &moment.id,
            Self::Strategy(strategy) => &strategy.id,
            Self::Meeting(meeting) => &meeting.id,
        }
    }

    pub fn owner_id(&self) -> &Id {
        match self {
            Self::Moment(moment) => &moment.owner_id,
            Self::Strategy(strategy) => &strategy.owner_id,
            Self::Meeting(meeting) => &meeting.owner_id,
        }
    }
}
