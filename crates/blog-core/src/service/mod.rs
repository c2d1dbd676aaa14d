//! Record services - the write path between callers and storage.
//!
//! A service runs the entity validators before anything reaches a
//! repository, and maps storage failures back into [`DomainError`]s.
//!
//! [`DomainError`]: crate::DomainError

mod author_service;
mod post_service;

#[cfg(test)]
mod fakes;

pub use author_service::AuthorService;
pub use post_service::PostService;
