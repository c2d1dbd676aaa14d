use async_trait::async_trait;

use crate::domain::{Author, AuthorId, Category, Post, PostId};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity. A record without an id is inserted and receives one;
    /// otherwise the stored row is updated.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. No validation runs on delete.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Author repository with domain-specific methods.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, AuthorId> {
    /// Find the author stored under exactly `name` (names are stored trimmed).
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    async fn list_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError>;
}
