//! In-memory author repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{Author, AuthorId};
use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, BaseRepository};

/// Authors kept in a HashMap behind an async RwLock.
///
/// Enforces the unique author name itself, the way the `authors.name`
/// index does in PostgreSQL. Data is lost on process restart.
pub struct InMemoryAuthorRepository {
    rows: RwLock<HashMap<AuthorId, Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl Default for InMemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Author, AuthorId> for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn save(&self, mut author: Author) -> Result<Author, RepoError> {
        let mut rows = self.rows.write().await;

        let id = match author.id() {
            Some(id) if rows.contains_key(&id) => id,
            Some(_) => return Err(RepoError::NotFound),
            None => Uuid::new_v4(),
        };

        let clash = rows
            .values()
            .any(|other| other.name() == author.name() && other.id() != Some(id));
        if clash {
            return Err(RepoError::Constraint(format!(
                "duplicate key value violates unique constraint on authors.name ({})",
                author.name()
            )));
        }

        author.assign_id(id);
        rows.insert(id, author.clone());
        tracing::debug!(author_id = %id, "Author stored in memory");
        Ok(author)
    }

    async fn delete(&self, id: AuthorId) -> Result<(), RepoError> {
        match self.rows.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.values().find(|author| author.name() == name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::domain::NewAuthor;

    fn nobody(_: &str) -> Result<Option<AuthorId>, RepoError> {
        Ok(None)
    }

    fn author(name: &str) -> Author {
        let input = NewAuthor {
            name: Some(name.to_string()),
            phone_number: None,
        };
        Author::new(&input, &nobody).unwrap()
    }

    #[tokio::test]
    async fn test_save_assigns_id() {
        let repo = InMemoryAuthorRepository::new();
        let saved = repo.save(author("Ada")).await.unwrap();

        let id = saved.id().expect("id assigned");
        assert_eq!(repo.find_by_id(id).await.unwrap(), Some(saved));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_by_name_is_exact() {
        let repo = InMemoryAuthorRepository::new();
        repo.save(author("Ada")).await.unwrap();

        assert!(repo.find_by_name("Ada").await.unwrap().is_some());
        assert!(repo.find_by_name("ada").await.unwrap().is_none());
        assert!(repo.find_by_name(" Ada").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unique_name_constraint() {
        let repo = InMemoryAuthorRepository::new();
        repo.save(author("Ada")).await.unwrap();

        // Validated against an empty lookup, so only storage can catch it.
        let err = repo.save(author("Ada")).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let repo = InMemoryAuthorRepository::new();
        let mut saved = repo.save(author("Ada")).await.unwrap();
        let id = saved.id().unwrap();

        saved.set_phone_number(Some("5550001111")).unwrap();
        let updated = repo.save(saved).await.unwrap();

        assert_eq!(updated.id(), Some(id));
        assert_eq!(repo.len().await, 1);
        assert_eq!(
            repo.find_by_id(id).await.unwrap().unwrap().phone_number(),
            Some("5550001111")
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryAuthorRepository::new();
        let saved = repo.save(author("Ada")).await.unwrap();
        let id = saved.id().unwrap();

        repo.delete(id).await.unwrap();
        assert!(repo.is_empty().await);
        assert!(matches!(repo.delete(id).await, Err(RepoError::NotFound)));
    }
}
