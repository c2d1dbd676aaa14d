//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that storage must implement.

mod repository;

pub use repository::{AuthorRepository, BaseRepository, PostRepository};
