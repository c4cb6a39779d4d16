
pub mod prelude {

    use std::cell::{Cell, RefCell};

    pub use uplift_boundary::CommentView;
    pub use uplift_core::{
        entities::*,
        gateways,
        repositories::{CommentRepository, CommentableRepo, Error as RepoError, UserRepo},
        usecases,
    };
    pub use uplift_entities::builders::Builder;

    pub use crate::{error::AppError, prelude as flows, Result};

    type RepoResult<T> = std::result::Result<T, RepoError>;

    #[derive(Debug, Default)]
    pub struct MemoryDb {
        pub comments: RefCell<Vec<Comment>>,
        pub moments: RefCell<Vec<Moment>>,
        pub strategies: RefCell<Vec<Strategy>>,
        pub meetings: RefCell<Vec<Meeting>>,
        pub users: RefCell<Vec<User>>,
        /// Lets tests simulate a failing storage backend.
        pub fail_deletes: Cell<bool>,
    }

    impl CommentRepository for MemoryDb {
        fn create_comment(&self, comment: Comment) -> RepoResult<()> {
            self.comments.borrow_mut().push(comment);
            Ok(())
        }

        fn load_comment(&self, id: &Id) -> RepoResult<Comment> {
            self.comments
                .borrow()
                .iter()
                .find(|c| c.id == *id)
                .cloned()
                .ok_or(RepoError::NotFound)
        }

        fn load_comments_of_commentable(
            &self,
            commentable: &CommentableRef,
        ) -> RepoResult<Vec<Comment>> {
            let mut comments: Vec<_> = self
                .comments
                .borrow()
                .iter()
                .filter(|c| c.commentable == *commentable)
                .cloned()
                .collect();
            comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(comments)
        }

        fn delete_comment(&self, id: &Id) -> RepoResult<()> {
            if self.fail_deletes.get() {
                return Err(RepoError::Other(anyhow::anyhow!("storage failure")));
            }
            let mut comments = self.comments.borrow_mut();
            let index = comments
                .iter()
                .position(|c| c.id == *id)
                .ok_or(RepoError::NotFound)?;
            comments.remove(index);
            Ok(())
        }
    }

    impl CommentableRepo for MemoryDb {
        fn get_moment(&self, id: &Id) -> RepoResult<Moment> {
            self.moments
                .borrow()
                .iter()
                .find(|m| m.id == *id)
                .cloned()
                .ok_or(RepoError::NotFound)
        }

        fn get_strategy(&self, id: &Id) -> RepoResult<Strategy> {
            self.strategies
                .borrow()
                .iter()
                .find(|s| s.id == *id)
                .cloned()
                .ok_or(RepoError::NotFound)
        }

        fn get_meeting(&self, id: &Id) -> RepoResult<Meeting> {
            self.meetings
                .borrow()
                .iter()
                .find(|m| m.id == *id)
                .cloned()
                .ok_or(RepoError::NotFound)
        }
    }

    impl UserRepo for MemoryDb {
        fn get_user(&self, id: &Id) -> RepoResult<User> {
            self.try_get_user(id)?.ok_or(RepoError::NotFound)
        }

        fn try_get_user(&self, id: &Id) -> RepoResult<Option<User>> {
            Ok(self.users.borrow().iter().find(|u| u.id == *id).cloned())
        }
    }

    #[derive(Debug, Default)]
    pub struct RecordingNotifyGw {
        pub created: RefCell<Vec<Id>>,
        pub removed: RefCell<Vec<(Id, CommentableKind)>>,
    }

    impl gateways::notify::NotificationGateway for RecordingNotifyGw {
        fn comment_created(&self, comment: &Comment, _author: &User) {
            self.created.borrow_mut().push(comment.id.clone());
        }

        fn remove_comment_notification(&self, comment_id: &Id, kind: CommentableKind) {
            let mut removed = self.removed.borrow_mut();
            if !removed.iter().any(|(id, k)| id == comment_id && *k == kind) {
                removed.push((comment_id.clone(), kind));
            }
        }
    }

    #[derive(Debug, Default)]
    pub struct EscapingSanitizer;

    impl gateways::TextSanitizer for EscapingSanitizer {
        fn clean(&self, text: &str) -> String {
            text.replace('<', "&lt;").replace('>', "&gt;")
        }
    }

    #[derive(Debug, Default)]
    pub struct StaticTimeAgo;

    impl gateways::TimeAgoFormatter for StaticTimeAgo {
        fn relative(&self, _: Timestamp) -> String {
            "just now".into()
        }
    }

    #[derive(Debug, Default)]
    pub struct StaticViewerDirectory {
        pub recipients: RefCell<Vec<Id>>,
    }

    impl gateways::ViewerDirectory for StaticViewerDirectory {
        fn recipients_of(&self, _: &Comment) -> Vec<Id> {
            self.recipients.borrow().clone()
        }
    }

    #[derive(Debug, Default)]
    pub struct BackendFixture {
        pub db: MemoryDb,
        pub notify: RecordingNotifyGw,
        pub sanitizer: EscapingSanitizer,
        pub time_ago: StaticTimeAgo,
        pub viewer_directory: StaticViewerDirectory,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn add_user(&self, id: &str) -> User {
            let user = User::build().id(id).uid(id).name(id).finish();
            self.db.users.borrow_mut().push(user.clone());
            user
        }

        pub fn add_moment(&self, id: &str, owner: &str) {
            self.db.moments.borrow_mut().push(Moment {
                id: id.into(),
                owner_id: owner.into(),
            });
        }

        pub fn add_meeting(&self, meeting: Meeting) {
            self.db.meetings.borrow_mut().push(meeting);
        }

        pub fn create_comment(
            &self,
            kind: CommentableKind,
            commentable_id: &str,
            text: &str,
            acting_user: &User,
        ) -> Result<CommentView> {
            flows::create_comment(
                &self.db,
                &self.notify,
                &self.sanitizer,
                &self.time_ago,
                &self.viewer_directory,
                usecases::NewComment {
                    commentable: CommentableRef {
                        kind,
                        id: commentable_id.into(),
                    },
                    text: text.into(),
                },
                acting_user,
            )
        }

        pub fn delete_comment(&self, comment_id: &Id, acting_user: &User) -> Result<Id> {
            flows::delete_comment(&self.db, &self.notify, comment_id, acting_user)
        }

        pub fn load_comments(
            &self,
            kind: CommentableKind,
            commentable_id: &str,
            viewing_user: &User,
        ) -> Result<Vec<CommentView>> {
            flows::load_comments(
                &self.db,
                &self.sanitizer,
                &self.time_ago,
                &self.viewer_directory,
                &CommentableRef {
                    kind,
                    id: commentable_id.into(),
                },
                viewing_user,
            )
        }
    }
}
