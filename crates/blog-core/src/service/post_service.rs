use std::sync::Arc;

use crate::domain::{Category, NewPost, Post, PostChanges, PostId};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;
use crate::validation::PostValidator;

/// Creates, updates and deletes posts through a [`PostRepository`].
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    validator: PostValidator,
}

impl PostService {
    /// Service enforcing the default post rules.
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self::with_validator(posts, PostValidator::default())
    }

    pub fn with_validator(posts: Arc<dyn PostRepository>, validator: PostValidator) -> Self {
        Self { posts, validator }
    }

    pub async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let post = Post::new(&input, &self.validator)?;
        let post = self.posts.save(post).await?;

        tracing::info!(post_id = ?post.id(), category = %post.category(), "Post created");
        Ok(post)
    }

    pub async fn get_post(&self, id: PostId) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }

    pub async fn update_post(&self, id: PostId, changes: PostChanges) -> Result<Post, DomainError> {
        let mut post = self.get_post(id).await?;
        post.apply(&changes, &self.validator)?;
        self.posts
            .save(post)
            .await
            .map_err(|err| Self::missing_as_not_found(err, id))
    }

    pub async fn delete_post(&self, id: PostId) -> Result<(), DomainError> {
        self.posts
            .delete(id)
            .await
            .map_err(|err| Self::missing_as_not_found(err, id))?;

        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }

    pub async fn list_by_category(&self, category: Category) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.list_by_category(category).await?)
    }

    /// A row that vanished under us reads as a missing post.
    fn missing_as_not_found(err: RepoError, id: PostId) -> DomainError {
        match err {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "Post",
                id,
            },
            other => other.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fakes::FakePosts;

    fn service() -> PostService {
        PostService::new(Arc::new(FakePosts::default()))
    }

    fn draft(title: &str, category: &str) -> NewPost {
        NewPost {
            title: Some(title.to_string()),
            content: Some("c".repeat(250)),
            summary: Some("s".repeat(250)),
            category: Some(category.to_string()),
        }
    }

    #[tokio::test]
    async fn create_and_fetch() {
        let svc = service();

        let post = svc.create_post(draft("You Won't Believe This", "Fiction")).await.unwrap();
        let id = post.id().unwrap();

        assert_eq!(svc.get_post(id).await.unwrap(), post);
    }

    #[tokio::test]
    async fn invalid_post_is_never_saved() {
        let svc = service();

        let err = svc.create_post(draft("Boring Update", "Fiction")).await.unwrap_err();

        assert_eq!(err.field(), Some("title"));
        assert!(svc.list_by_category(Category::Fiction).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn resave_without_changes_is_idempotent() {
        let svc = service();
        let post = svc.create_post(draft("Secret Garden", "Fiction")).await.unwrap();
        let id = post.id().unwrap();

        let again = svc.update_post(id, PostChanges::default()).await.unwrap();
        let same_title = PostChanges {
            title: Some(post.title().to_string()),
            ..Default::default()
        };
        let again_titled = svc.update_post(id, same_title).await.unwrap();

        assert_eq!(again.title(), post.title());
        assert_eq!(again_titled.title(), post.title());
    }

    #[tokio::test]
    async fn rejected_update_is_not_saved() {
        let svc = service();
        let post = svc.create_post(draft("Top Picks", "Fiction")).await.unwrap();
        let id = post.id().unwrap();

        let changes = PostChanges {
            category: Some("Non-Fiction".into()),
            content: Some("short".into()),
            ..Default::default()
        };
        assert!(svc.update_post(id, changes).await.is_err());
        assert_eq!(svc.get_post(id).await.unwrap().category(), Category::Fiction);
    }

    #[tokio::test]
    async fn list_filters_by_category() {
        let svc = service();
        svc.create_post(draft("Top Fiction", "Fiction")).await.unwrap();
        svc.create_post(draft("Top Facts", "Non-Fiction")).await.unwrap();
        svc.create_post(draft("Guess Again", "Non-Fiction")).await.unwrap();

        let non_fiction = svc.list_by_category(Category::NonFiction).await.unwrap();
        assert_eq!(non_fiction.len(), 2);
        assert!(non_fiction.iter().all(|p| p.category() == Category::NonFiction));
    }

    #[tokio::test]
    async fn update_of_concurrently_deleted_post_is_not_found() {
        let posts = Arc::new(FakePosts::default());
        let svc = PostService::new(posts.clone());
        let post = svc.create_post(draft("Top Picks", "Fiction")).await.unwrap();
        let id = post.id().unwrap();

        posts.vanish_on_save();
        let err = svc.update_post(id, PostChanges::default()).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { entity_type: "Post", .. }));
    }

    #[tokio::test]
    async fn delete_removes_post() {
        let svc = service();
        let post = svc.create_post(draft("Guess Who", "Fiction")).await.unwrap();
        let id = post.id().unwrap();

        svc.delete_post(id).await.unwrap();

        assert!(matches!(svc.get_post(id).await, Err(DomainError::NotFound { .. })));
        assert!(matches!(svc.delete_post(id).await, Err(DomainError::NotFound { .. })));
    }
}
