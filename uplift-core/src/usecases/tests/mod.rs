use std::cell::RefCell;

use crate::{
    entities::*,
    gateways::notify::NotificationGateway,
    repositories::{CommentRepository, CommentableRepo, Error as RepoError, UserRepo},
};

type Result<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Default)]
pub struct MockDb {
    pub comments: RefCell<Vec<Comment>>,
    pub moments: RefCell<Vec<Moment>>,
    pub strategies: RefCell<Vec<Strategy>>,
    pub meetings: RefCell<Vec<Meeting>>,
    pub users: RefCell<Vec<User>>,
}

impl MockDb {
    pub fn add_comment(&self, comment: Comment) -> Comment {
        self.comments.borrow_mut().push(comment.clone());
        comment
    }

    pub fn add_moment(&self, id: &str, owner: &str) {
        self.moments.borrow_mut().push(Moment {
            id: id.into(),
            owner_id: owner.into(),
        });
    }

    pub fn add_strategy(&self, id: &str, owner: &str) {
        self.strategies.borrow_mut().push(Strategy {
            id: id.into(),
            owner_id: owner.into(),
        });
    }

    pub fn add_meeting(&self, meeting: Meeting) {
        self.meetings.borrow_mut().push(meeting);
    }

    pub fn add_user(&self, user: User) -> User {
        self.users.borrow_mut().push(user.clone());
        user
    }
}

impl CommentRepository for MockDb {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        let mut comments = self.comments.borrow_mut();
        if comments.iter().any(|c| c.id == comment.id) {
            return Err(RepoError::AlreadyExists);
        }
        comments.push(comment);
        Ok(())
    }

    fn load_comment(&self, id: &Id) -> Result<Comment> {
        self.comments
            .borrow()
            .iter()
            .find(|c| c.id == *id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn load_comments_of_commentable(&self, commentable: &CommentableRef) -> Result<Vec<Comment>> {
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

    fn delete_comment(&self, id: &Id) -> Result<()> {
        let mut comments = self.comments.borrow_mut();
        let index = comments
            .iter()
            .position(|c| c.id == *id)
            .ok_or(RepoError::NotFound)?;
        comments.remove(index);
        Ok(())
    }
}

impl CommentableRepo for MockDb {
    fn get_moment(&self, id: &Id) -> Result<Moment> {
        self.moments
            .borrow()
            .iter()
            .find(|m| m.id == *id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn get_strategy(&self, id: &Id) -> Result<Strategy> {
        self.strategies
            .borrow()
            .iter()
            .find(|s| s.id == *id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn get_meeting(&self, id: &Id) -> Result<Meeting> {
        self.meetings
            .borrow()
            .iter()
            .find(|m| m.id == *id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}

impl UserRepo for MockDb {
    fn get_user(&self, id: &Id) -> Result<User> {
        self.try_get_user(id)?.ok_or(RepoError::NotFound)
    }

    fn try_get_user(&self, id: &Id) -> Result<Option<User>> {
        Ok(self.users.borrow().iter().find(|u| u.id == *id).cloned())
    }
}

/// Notification gateway that records its calls. The removal store is
/// keyed by comment id and kind, so repeated removals collapse into
/// one record like they would in the real notification store.
#[derive(Debug, Default)]
pub struct RecordingNotificationGateway {
    pub created: RefCell<Vec<Id>>,
    pub removed: RefCell<Vec<(Id, CommentableKind)>>,
}

impl NotificationGateway for RecordingNotificationGateway {
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
