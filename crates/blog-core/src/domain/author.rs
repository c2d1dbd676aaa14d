use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StoredRecord;
use crate::error::DomainError;
use crate::validation::author::{self, AuthorNameLookup};

/// Author identifier, assigned by storage.
pub type AuthorId = Uuid;

/// Author entity - a person who writes posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: Option<AuthorId>,
    name: String,
    phone_number: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Initial field values for a new author.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAuthor {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

/// Field assignments to apply to an existing author.
///
/// `None` leaves a field untouched; `phone_number: Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct AuthorChanges {
    pub name: Option<String>,
    pub phone_number: Option<Option<String>>,
}

impl Author {
    /// Create a new, not yet persisted author.
    ///
    /// Runs the name validator (against `names`, with no id of its own yet)
    /// and then the phone number validator.
    pub fn new<L>(input: &NewAuthor, names: &L) -> Result<Self, DomainError>
    where
        L: AuthorNameLookup + ?Sized,
    {
        let name = author::validate_name(input.name.as_deref(), None, names)?;
        let phone_number = author::validate_phone_number(input.phone_number.as_deref())?;
        let now = Utc::now();
        Ok(Self {
            id: None,
            name,
            phone_number,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild an author from a stored row. Performs no validation.
    pub fn from_parts(
        id: AuthorId,
        name: String,
        phone_number: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            phone_number,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> Option<AuthorId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Assign a new name. The record's own id is excluded from the
    /// uniqueness check, so re-saving an unchanged name passes.
    pub fn set_name<L>(&mut self, candidate: Option<&str>, names: &L) -> Result<(), DomainError>
    where
        L: AuthorNameLookup + ?Sized,
    {
        self.name = author::validate_name(candidate, self.id, names)?;
        self.touch();
        Ok(())
    }

    pub fn set_phone_number(&mut self, candidate: Option<&str>) -> Result<(), DomainError> {
        self.phone_number = author::validate_phone_number(candidate)?;
        self.touch();
        Ok(())
    }

    /// Called by storage when the record is first persisted.
    pub fn assign_id(&mut self, id: AuthorId) {
        self.id = Some(id);
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl StoredRecord for Author {
    fn record_id(&self) -> Option<Uuid> {
        self.id
    }
}
