//! Post field validators: clickbait title, long-form content, short
//! summary, fixed category.

use super::reject;
use crate::domain::Category;
use crate::error::DomainError;

pub const TITLE: &str = "title";
pub const CONTENT: &str = "content";
pub const SUMMARY: &str = "summary";
pub const CATEGORY: &str = "category";

/// A title must contain at least one of these, verbatim.
pub const CLICKBAIT_PHRASES: &[&str] = &["Won't Believe", "Secret", "Top", "Guess"];

/// Immutable policy applied by [`PostValidator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRules {
    pub clickbait_phrases: &'static [&'static str],
    /// Minimum content length, in characters.
    pub min_content_chars: usize,
    /// Maximum summary length, in characters.
    pub max_summary_chars: usize,
}

impl Default for PostRules {
    fn default() -> Self {
        Self {
            clickbait_phrases: CLICKBAIT_PHRASES,
            min_content_chars: 250,
            max_summary_chars: 250,
        }
    }
}

/// Validates post fields against a fixed [`PostRules`].
///
/// The four checks are independent; none looks at another field.
#[derive(Debug, Clone, Default)]
pub struct PostValidator {
    rules: PostRules,
}

impl PostValidator {
    pub fn new(rules: PostRules) -> Self {
        Self { rules }
    }

    /// Returns the trimmed title. The phrase search runs on the untrimmed
    /// candidate.
    pub fn validate_title(&self, candidate: Option<&str>) -> Result<String, DomainError> {
        let Some(title) = candidate.filter(|t| !t.trim().is_empty()) else {
            return Err(reject(TITLE, "Post must have a title."));
        };
        let phrases = self.rules.clickbait_phrases;
        if !phrases.iter().any(|phrase| title.contains(phrase)) {
            return Err(reject(
                TITLE,
                format!(
                    "Title must be clickbait-y and contain one of: {}",
                    phrases.join(", ")
                ),
            ));
        }
        Ok(title.trim().to_string())
    }

    pub fn validate_content(&self, candidate: Option<&str>) -> Result<String, DomainError> {
        let min = self.rules.min_content_chars;
        match candidate {
            Some(content) if content.chars().count() >= min => Ok(content.to_string()),
            _ => Err(reject(
                CONTENT,
                format!("Content must be at least {min} characters long."),
            )),
        }
    }

    pub fn validate_summary(&self, candidate: Option<&str>) -> Result<Option<String>, DomainError> {
        let max = self.rules.max_summary_chars;
        match candidate {
            None => Ok(None),
            Some(summary) if summary.chars().count() > max => Err(reject(
                SUMMARY,
                format!("Summary must be at most {max} characters."),
            )),
            Some(summary) => Ok(Some(summary.to_string())),
        }
    }

    /// Exact, case-sensitive match; no trimming.
    pub fn validate_category(&self, candidate: Option<&str>) -> Result<Category, DomainError> {
        candidate
            .and_then(Category::from_label)
            .ok_or_else(|| reject(CATEGORY, "Category must be 'Fiction' or 'Non-Fiction'."))
    }
}
