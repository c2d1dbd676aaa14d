use std::sync::Arc;

use crate::domain::{Author, AuthorChanges, AuthorId, NewAuthor};
use crate::error::{DomainError, RepoError};
use crate::ports::AuthorRepository;
use crate::validation::author::{self as author_rules, AuthorNameLookup};

/// Creates, updates and deletes authors through an [`AuthorRepository`].
#[derive(Clone)]
pub struct AuthorService {
    authors: Arc<dyn AuthorRepository>,
}

/// Uniqueness answer for a single name, fetched from the repository
/// before the synchronous validator runs.
struct ResolvedName {
    name: String,
    holder: Option<AuthorId>,
}

impl AuthorNameLookup for ResolvedName {
    fn find_id_by_name(&self, name: &str) -> Result<Option<AuthorId>, RepoError> {
        if name == self.name {
            Ok(self.holder)
        } else {
            Err(RepoError::Query(format!("author name '{name}' was not resolved")))
        }
    }
}

impl AuthorService {
    pub fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }

    pub async fn create_author(&self, input: NewAuthor) -> Result<Author, DomainError> {
        let names = self.resolve_name(input.name.as_deref()).await?;
        let author = Author::new(&input, &names)?;
        let author = self.persist(author).await?;

        tracing::info!(author_id = ?author.id(), name = author.name(), "Author created");
        Ok(author)
    }

    pub async fn get_author(&self, id: AuthorId) -> Result<Author, DomainError> {
        self.authors
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Author",
                id,
            })
    }

    /// Apply `changes` field by field; the first rejected value aborts the
    /// update and nothing is saved.
    pub async fn update_author(
        &self,
        id: AuthorId,
        changes: AuthorChanges,
    ) -> Result<Author, DomainError> {
        let mut author = self.get_author(id).await?;

        if let Some(name) = changes.name.as_deref() {
            let names = self.resolve_name(Some(name)).await?;
            author.set_name(Some(name), &names)?;
        }
        if let Some(phone_number) = &changes.phone_number {
            author.set_phone_number(phone_number.as_deref())?;
        }

        self.persist(author).await
    }

    pub async fn delete_author(&self, id: AuthorId) -> Result<(), DomainError> {
        self.authors
            .delete(id)
            .await
            .map_err(|err| Self::missing_as_not_found(err, id))?;

        tracing::info!(author_id = %id, "Author deleted");
        Ok(())
    }

    async fn resolve_name(&self, candidate: Option<&str>) -> Result<ResolvedName, DomainError> {
        let name = author_rules::normalize_name(candidate)?;
        let holder = self
            .authors
            .find_by_name(&name)
            .await?
            .and_then(|existing| existing.id());
        Ok(ResolvedName { name, holder })
    }

    /// Save, translating a storage-level unique violation (a writer that
    /// raced past the name check) into the same error the validator gives.
    async fn persist(&self, author: Author) -> Result<Author, DomainError> {
        let name = author.name().to_string();
        let id = author.id();
        self.authors.save(author).await.map_err(|err| match (err, id) {
            (RepoError::Constraint(detail), _) => {
                tracing::warn!(name = %name, detail = %detail, "Storage rejected author name");
                DomainError::duplicate(author_rules::NAME, name, "Author name must be unique.")
            }
            (err, Some(id)) => Self::missing_as_not_found(err, id),
            (other, None) => other.into(),
        })
    }

    /// A row that vanished under us reads as a missing author.
    fn missing_as_not_found(err: RepoError, id: AuthorId) -> DomainError {
        match err {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "Author",
                id,
            },
            other => other.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fakes::FakeAuthors;
    use uuid::Uuid;

    fn service(repo: FakeAuthors) -> AuthorService {
        AuthorService::new(Arc::new(repo))
    }

    fn named(name: &str) -> NewAuthor {
        NewAuthor {
            name: Some(name.to_string()),
            phone_number: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_trims() {
        let svc = service(FakeAuthors::default());

        let author = svc.create_author(named("  Octavia Butler ")).await.unwrap();

        assert!(author.id().is_some());
        assert_eq!(author.name(), "Octavia Butler");
    }

    #[tokio::test]
    async fn padded_duplicate_is_rejected_before_storage() {
        let svc = service(FakeAuthors::default());
        svc.create_author(named("Octavia Butler")).await.unwrap();

        let err = svc.create_author(named("  Octavia Butler  ")).await.unwrap_err();

        assert!(matches!(err, DomainError::DuplicateField { field: "name", .. }));
    }

    #[tokio::test]
    async fn storage_constraint_maps_to_duplicate() {
        let svc = service(FakeAuthors::blind());
        svc.create_author(named("Ursula")).await.unwrap();

        let err = svc.create_author(named("Ursula")).await.unwrap_err();

        assert!(matches!(err, DomainError::DuplicateField { field: "name", .. }));
    }

    #[tokio::test]
    async fn update_keeping_own_name_succeeds() {
        let svc = service(FakeAuthors::default());
        let author = svc.create_author(named("Ursula")).await.unwrap();
        let id = author.id().unwrap();

        let changes = AuthorChanges {
            name: Some("Ursula".into()),
            phone_number: Some(Some("1234567890".into())),
        };
        let updated = svc.update_author(id, changes).await.unwrap();

        assert_eq!(updated.name(), "Ursula");
        assert_eq!(updated.phone_number(), Some("1234567890"));
        assert!(updated.updated_at() >= author.updated_at());
    }

    #[tokio::test]
    async fn rejected_update_leaves_stored_record() {
        let svc = service(FakeAuthors::default());
        let author = svc.create_author(named("Ursula")).await.unwrap();
        let id = author.id().unwrap();

        let changes = AuthorChanges {
            name: Some("Ursula K.".into()),
            phone_number: Some(Some("not-digits".into())),
        };
        let err = svc.update_author(id, changes).await.unwrap_err();

        assert_eq!(err.field(), Some("phone_number"));
        assert_eq!(svc.get_author(id).await.unwrap().name(), "Ursula");
    }

    #[tokio::test]
    async fn update_of_concurrently_deleted_author_is_not_found() {
        let authors = Arc::new(FakeAuthors::default());
        let svc = AuthorService::new(authors.clone());
        let author = svc.create_author(named("Ursula")).await.unwrap();
        let id = author.id().unwrap();

        authors.vanish_on_save();
        let changes = AuthorChanges {
            phone_number: Some(Some("1234567890".into())),
            ..Default::default()
        };
        let err = svc.update_author(id, changes).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { entity_type: "Author", .. }));
    }

    #[tokio::test]
    async fn missing_author_is_not_found() {
        let svc = service(FakeAuthors::default());
        let id = Uuid::new_v4();

        assert!(matches!(
            svc.get_author(id).await,
            Err(DomainError::NotFound { entity_type: "Author", .. })
        ));
        assert!(matches!(
            svc.delete_author(id).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[test]
    fn resolved_name_refuses_other_names() {
        let names = ResolvedName {
            name: "Ada".into(),
            holder: None,
        };
        assert!(names.find_id_by_name("Ada").unwrap().is_none());
        assert!(names.find_id_by_name("Grace").is_err());
    }
}
