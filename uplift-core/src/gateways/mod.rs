// Outbound collaborator contracts. Implementations live outside of
// this crate and are injected by the application layer.

pub mod notify;

use crate::entities::*;

/// Cleans untrusted comment text before it is shown to other users.
pub trait TextSanitizer {
    fn clean(&self, text: &str) -> String;
}

/// Renders a creation timestamp as a human-relative, localized string.
pub trait TimeAgoFormatter {
    fn relative(&self, ts: Timestamp) -> String;
}

/// Resolves the users a comment notification has actually been
/// delivered to. The core intersects these recipients with its own
/// eligibility set, see [`crate::visibility::viewers`].
pub trait ViewerDirectory {
    fn recipients_of(&self, comment: &Comment) -> Vec<Id>;
}
