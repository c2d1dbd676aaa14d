use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StoredRecord;
use crate::error::DomainError;
use crate::validation::PostValidator;

/// Post identifier, assigned by storage.
pub type PostId = Uuid;

/// Post category. Serialized with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Fiction")]
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Fiction, Category::NonFiction];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
        }
    }

    /// Exact, case-sensitive match against the labels.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post entity - represents a blog post or article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    id: Option<PostId>,
    title: String,
    content: String,
    summary: Option<String>,
    category: Category,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Initial field values for a new post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
}

/// Field assignments to apply to an existing post.
///
/// `None` leaves a field untouched; `summary: Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<Option<String>>,
    pub category: Option<String>,
}

impl Post {
    /// Create a new post, running every field validator in field order.
    pub fn new(input: &NewPost, rules: &PostValidator) -> Result<Self, DomainError> {
        let title = rules.validate_title(input.title.as_deref())?;
        let content = rules.validate_content(input.content.as_deref())?;
        let summary = rules.validate_summary(input.summary.as_deref())?;
        let category = rules.validate_category(input.category.as_deref())?;
        let now = Utc::now();
        Ok(Self {
            id: None,
            title,
            content,
            summary,
            category,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a post from a stored row. Performs no validation.
    pub fn from_parts(
        id: PostId,
        title: String,
        content: String,
        summary: Option<String>,
        category: Category,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            title,
            content,
            summary,
            category,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> Option<PostId> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_title(
        &mut self,
        candidate: Option<&str>,
        rules: &PostValidator,
    ) -> Result<(), DomainError> {
        self.title = rules.validate_title(candidate)?;
        self.touch();
        Ok(())
    }

    pub fn set_content(
        &mut self,
        candidate: Option<&str>,
        rules: &PostValidator,
    ) -> Result<(), DomainError> {
        self.content = rules.validate_content(candidate)?;
        self.touch();
        Ok(())
    }

    pub fn set_summary(
        &mut self,
        candidate: Option<&str>,
        rules: &PostValidator,
    ) -> Result<(), DomainError> {
        self.summary = rules.validate_summary(candidate)?;
        self.touch();
        Ok(())
    }

    pub fn set_category(
        &mut self,
        candidate: Option<&str>,
        rules: &PostValidator,
    ) -> Result<(), DomainError> {
        self.category = rules.validate_category(candidate)?;
        self.touch();
        Ok(())
    }

    /// Apply a set of changes field by field. Stops at the first rejected
    /// value; earlier fields of the batch stay applied on this copy, so
    /// callers discard the record on error.
    pub fn apply(&mut self, changes: &PostChanges, rules: &PostValidator) -> Result<(), DomainError> {
        if let Some(title) = changes.title.as_deref() {
            self.set_title(Some(title), rules)?;
        }
        if let Some(content) = changes.content.as_deref() {
            self.set_content(Some(content), rules)?;
        }
        if let Some(summary) = &changes.summary {
            self.set_summary(summary.as_deref(), rules)?;
        }
        if let Some(category) = changes.category.as_deref() {
            self.set_category(Some(category), rules)?;
        }
        Ok(())
    }

    /// Called by storage when the record is first persisted.
    pub fn assign_id(&mut self, id: PostId) {
        self.id = Some(id);
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl StoredRecord for Post {
    fn record_id(&self) -> Option<Uuid> {
        self.id
    }
}
