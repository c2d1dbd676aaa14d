//! Author field validators: unique trimmed name, optional 10-digit phone.

use super::reject;
use crate::domain::AuthorId;
use crate::error::{DomainError, RepoError};

pub const NAME: &str = "name";
pub const PHONE_NUMBER: &str = "phone_number";

const PHONE_NUMBER_DIGITS: usize = 10;

/// Read access to persisted author names, used by the uniqueness check.
///
/// Any `Fn(&str) -> Result<Option<AuthorId>, RepoError>` qualifies.
pub trait AuthorNameLookup {
    /// Id of the author stored under exactly `name`, if any.
    fn find_id_by_name(&self, name: &str) -> Result<Option<AuthorId>, RepoError>;
}

impl<F> AuthorNameLookup for F
where
    F: Fn(&str) -> Result<Option<AuthorId>, RepoError>,
{
    fn find_id_by_name(&self, name: &str) -> Result<Option<AuthorId>, RepoError> {
        self(name)
    }
}

/// Presence check and trimming, without the storage lookup.
pub fn normalize_name(candidate: Option<&str>) -> Result<String, DomainError> {
    match candidate.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(reject(NAME, "Author must have a name.")),
    }
}

/// Reject `name` when it is held by an author other than `self_id`.
pub fn ensure_unique_name(
    name: &str,
    self_id: Option<AuthorId>,
    holder: Option<AuthorId>,
) -> Result<(), DomainError> {
    match holder {
        Some(holder) if Some(holder) != self_id => {
            tracing::debug!(name, %holder, "Author name already taken");
            Err(DomainError::duplicate(
                NAME,
                name,
                "Author name must be unique.",
            ))
        }
        _ => Ok(()),
    }
}

/// Validate an author name and return the trimmed value to store.
///
/// `self_id` is the id of the record being validated (`None` while it is
/// being constructed); a match on that id is not a duplicate.
pub fn validate_name<L>(
    candidate: Option<&str>,
    self_id: Option<AuthorId>,
    names: &L,
) -> Result<String, DomainError>
where
    L: AuthorNameLookup + ?Sized,
{
    let name = normalize_name(candidate)?;
    let holder = names.find_id_by_name(&name)?;
    ensure_unique_name(&name, self_id, holder)?;
    Ok(name)
}

/// Validate an optional phone number. The literal string is stored.
pub fn validate_phone_number(candidate: Option<&str>) -> Result<Option<String>, DomainError> {
    let Some(phone) = candidate else {
        return Ok(None);
    };
    let well_formed =
        phone.chars().count() == PHONE_NUMBER_DIGITS && phone.chars().all(|c| c.is_ascii_digit());
    if !well_formed {
        return Err(reject(PHONE_NUMBER, "Phone number must be exactly 10 digits."));
    }
    Ok(Some(phone.to_string()))
}
