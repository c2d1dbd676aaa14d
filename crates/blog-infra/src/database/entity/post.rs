//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blog_core::domain::{Category, Post};

/// `posts.category` column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum CategoryLabel {
    #[sea_orm(string_value = "Fiction")]
    Fiction,
    #[sea_orm(string_value = "Non-Fiction")]
    NonFiction,
}

impl From<Category> for CategoryLabel {
    fn from(category: Category) -> Self {
        match category {
            Category::Fiction => CategoryLabel::Fiction,
            Category::NonFiction => CategoryLabel::NonFiction,
        }
    }
}

impl From<CategoryLabel> for Category {
    fn from(label: CategoryLabel) -> Self {
        match label {
            CategoryLabel::Fiction => Category::Fiction,
            CategoryLabel::NonFiction => Category::NonFiction,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    pub category: CategoryLabel,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Post::from_parts(
            model.id,
            model.title,
            model.content,
            model.summary,
            model.category.into(),
            model.created_at.into(),
            model.updated_at.into(),
        )
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: Set(post.id().unwrap_or_else(Uuid::new_v4)),
            title: Set(post.title().to_string()),
            content: Set(post.content().to_string()),
            summary: Set(post.summary().map(str::to_string)),
            category: Set(post.category().into()),
            created_at: Set(post.created_at().into()),
            updated_at: Set(post.updated_at().into()),
        }
    }
}
