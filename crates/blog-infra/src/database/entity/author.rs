//! Author entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blog_core::domain::Author;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique, column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub phone_number: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Author.
impl From<Model> for Author {
    fn from(model: Model) -> Self {
        Author::from_parts(
            model.id,
            model.name,
            model.phone_number,
            model.created_at.into(),
            model.updated_at.into(),
        )
    }
}

/// Conversion from Domain Author to SeaORM ActiveModel.
///
/// A not yet persisted author gets a fresh id here.
impl From<Author> for ActiveModel {
    fn from(author: Author) -> Self {
        Self {
            id: Set(author.id().unwrap_or_else(Uuid::new_v4)),
            name: Set(author.name().to_string()),
            phone_number: Set(author.phone_number().map(str::to_string)),
            created_at: Set(author.created_at().into()),
            updated_at: Set(author.updated_at().into()),
        }
    }
}
