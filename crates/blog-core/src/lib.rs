//! # Blog Core
//!
//! The domain layer of the blog platform.
//! Authors and posts, the field validators that guard them, and the
//! repository ports storage must implement. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod validation;

pub use error::{DomainError, RepoError};
