//! In-memory post repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{Category, Post, PostId};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

/// Posts kept in a HashMap behind an async RwLock.
pub struct InMemoryPostRepository {
    rows: RwLock<HashMap<PostId, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn save(&self, mut post: Post) -> Result<Post, RepoError> {
        let mut rows = self.rows.write().await;

        let id = match post.id() {
            Some(id) if rows.contains_key(&id) => id,
            Some(_) => return Err(RepoError::NotFound),
            None => Uuid::new_v4(),
        };

        post.assign_id(id);
        rows.insert(id, post.clone());
        tracing::debug!(post_id = %id, "Post stored in memory");
        Ok(post)
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        match self.rows.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError> {
        let rows = self.rows.read().await;
        let mut posts: Vec<Post> = rows
            .values()
            .filter(|post| post.category() == category)
            .cloned()
            .collect();
        posts.sort_by_key(|post| post.created_at());
        Ok(posts)
    }
}
