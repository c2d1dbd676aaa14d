//! Minimal repositories for service tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Author, AuthorId, Category, Post, PostId};
use crate::error::RepoError;
use crate::ports::{AuthorRepository, BaseRepository, PostRepository};

#[derive(Default)]
pub(crate) struct FakeAuthors {
    rows: Mutex<HashMap<AuthorId, Author>>,
    /// Report no name matches, as a stale read would.
    blind: bool,
    /// Updates fail as if the row was deleted after it was read.
    vanished: AtomicBool,
}

impl FakeAuthors {
    pub(crate) fn blind() -> Self {
        Self {
            blind: true,
            ..Default::default()
        }
    }

    pub(crate) fn vanish_on_save(&self) {
        self.vanished.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl BaseRepository<Author, AuthorId> for FakeAuthors {
    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, RepoError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, mut author: Author) -> Result<Author, RepoError> {
        if author.id().is_some() && self.vanished.load(Ordering::SeqCst) {
            return Err(RepoError::NotFound);
        }
        let mut rows = self.rows.lock().unwrap();
        let id = author.id().unwrap_or_else(Uuid::new_v4);
        if rows
            .values()
            .any(|other| other.name() == author.name() && other.id() != Some(id))
        {
            return Err(RepoError::Constraint("authors_name_key".into()));
        }
        author.assign_id(id);
        rows.insert(id, author.clone());
        Ok(author)
    }

    async fn delete(&self, id: AuthorId) -> Result<(), RepoError> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl AuthorRepository for FakeAuthors {
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        if self.blind {
            return Ok(None);
        }
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().find(|a| a.name() == name).cloned())
    }
}

#[derive(Default)]
pub(crate) struct FakePosts {
    rows: Mutex<HashMap<PostId, Post>>,
    vanished: AtomicBool,
}

impl FakePosts {
    pub(crate) fn vanish_on_save(&self) {
        self.vanished.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for FakePosts {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, mut post: Post) -> Result<Post, RepoError> {
        if post.id().is_some() && self.vanished.load(Ordering::SeqCst) {
            return Err(RepoError::NotFound);
        }
        let id = post.id().unwrap_or_else(Uuid::new_v4);
        post.assign_id(id);
        self.rows.lock().unwrap().insert(id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for FakePosts {
    async fn list_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .filter(|p| p.category() == category)
            .cloned()
            .collect())
    }
}
