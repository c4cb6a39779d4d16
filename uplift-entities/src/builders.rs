pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, meeting_builder::*, user_builder::*};

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, commentable::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn author(mut self, user_id: &str) -> Self {
            self.comment.author_id = user_id.into();
            self
        }
        pub fn moment(mut self, id: &str) -> Self {
            self.comment.commentable = CommentableRef {
                kind: CommentableKind::Moment,
                id: id.into(),
            };
            self
        }
        pub fn strategy(mut self, id: &str) -> Self {
            self.comment.commentable = CommentableRef {
                kind: CommentableKind::Strategy,
                id: id.into(),
            };
            self
        }
        pub fn meeting(mut self, id: &str) -> Self {
            self.comment.commentable = CommentableRef {
                kind: CommentableKind::Meeting,
                id: id.into(),
            };
            self
        }
        pub fn created_at(mut self, ts: Timestamp) -> Self {
            self.comment.created_at = ts;
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.text = text.into();
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> Self::Build {
            Self::Build {
                comment: Comment {
                    id: Id::new(),
                    author_id: Id::default(),
                    commentable: CommentableRef {
                        kind: CommentableKind::Moment,
                        id: Id::default(),
                    },
                    created_at: Timestamp::now(),
                    text: "".into(),
                },
            }
        }
    }
}

pub mod meeting_builder {

    use super::*;
    use crate::{commentable::*, id::*};

    #[derive(Debug)]
    pub struct MeetingBuild {
        meeting: Meeting,
    }

    impl MeetingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.meeting.id = id.into();
            self
        }
        pub fn owner(mut self, user_id: &str) -> Self {
            self.meeting.owner_id = user_id.into();
            self
        }
        pub fn member(mut self, user_id: &str) -> Self {
            self.meeting.members.push(MeetingMember {
                user_id: user_id.into(),
                leader: false,
            });
            self
        }
        pub fn leader(mut self, user_id: &str) -> Self {
            self.meeting.members.push(MeetingMember {
                user_id: user_id.into(),
                leader: true,
            });
            self
        }
        pub fn finish(self) -> Meeting {
            self.meeting
        }
    }

    impl Builder for Meeting {
        type Build = MeetingBuild;
        fn build() -> Self::Build {
            Self::Build {
                meeting: Meeting {
                    id: Id::new(),
                    owner_id: Id::default(),
                    members: vec![],
                },
            }
        }
    }

    #[test]
    fn leaders_are_members() {
        let meeting = Meeting::build().leader("x").finish();
        assert!(meeting.is_member(&"x".into()));
        assert!(meeting.is_led_by(&"x".into()));
    }
}

pub mod user_builder {

    use super::*;
    use crate::{id::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn uid(mut self, uid: &str) -> Self {
            self.user.uid = uid.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn avatar_url(mut self, url: Option<&str>) -> Self {
            self.user.avatar_url = url.map(Into::into);
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            Self::Build {
                user: User {
                    id: Id::new(),
                    uid: "".into(),
                    name: "".into(),
                    avatar_url: None,
                },
            }
        }
    }
}
