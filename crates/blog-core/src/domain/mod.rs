//! Domain entities - the core business objects.
//!
//! Fields are private: every assignment goes through a constructor or a
//! setter that runs the matching field validator first.

mod author;
mod post;

pub use author::{Author, AuthorChanges, AuthorId, NewAuthor};
pub use post::{Category, NewPost, Post, PostChanges, PostId};

/// A record whose identifier is assigned by storage on first save.
pub trait StoredRecord {
    fn record_id(&self) -> Option<uuid::Uuid>;

    /// True until storage has assigned an id.
    fn is_new(&self) -> bool {
        self.record_id().is_none()
    }
}
