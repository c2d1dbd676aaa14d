//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use blog_core::domain::{Author, Category, Post};
use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, PostRepository};

use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::post::{self, CategoryLabel, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL author repository.
pub type PostgresAuthorRepository = PostgresBaseRepository<AuthorEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        tracing::debug!(name, "Finding author by name");

        let result = AuthorEntity::find()
            .filter(author::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(category = %category, "Listing posts by category");

        let result = PostEntity::find()
            .filter(post::Column::Category.eq(CategoryLabel::from(category)))
            .order_by_asc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
