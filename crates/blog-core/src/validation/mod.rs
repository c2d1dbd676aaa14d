//! Field validators.
//!
//! Each validator is bound to one entity attribute. It either returns the
//! value to store (possibly normalized) or rejects the candidate with a
//! [`DomainError`](crate::DomainError). Entities call them from their
//! constructors and setters.

pub mod author;
pub mod post;

pub use author::AuthorNameLookup;
pub use post::{CLICKBAIT_PHRASES, PostRules, PostValidator};

use crate::error::DomainError;

fn reject(field: &'static str, reason: impl Into<String>) -> DomainError {
    let reason = reason.into();
    tracing::debug!(field, reason = %reason, "Rejected field value");
    DomainError::invalid(field, reason)
}
