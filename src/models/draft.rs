use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Note;

/// Maximum title length accepted by the service.
pub const TITLE_MAX_CHARS: usize = 225;
/// Maximum category length accepted by the service.
pub const CATEGORY_MAX_CHARS: usize = 100;

/// Pre-submit validation failure. Raised before any network call is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field(s) empty: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("{field} is too long (max {max} characters)")]
    TooLong { field: &'static str, max: usize },
}

/// Form state for creating or editing a note.
///
/// All fields are plain strings; empty means "not provided". The draft never
/// carries key points, which only the AI pathway produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub category: String,
}

impl NoteDraft {
    /// Pre-fill a draft from a note's current fields, for editing.
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            summary: note.summary.clone(),
            category: note.category.clone().unwrap_or_default(),
        }
    }

    /// Category as an optional value, omitting a blank entry.
    pub fn category_opt(&self) -> Option<String> {
        let category = self.category.trim();
        if category.is_empty() {
            None
        } else {
            Some(category.to_string())
        }
    }

    /// Check that required fields are present and lengths are within the
    /// service's limits. Title and content are required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.content.trim().is_empty() {
            missing.push("content");
        }
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        if self.title.chars().count() > TITLE_MAX_CHARS {
            return Err(ValidationError::TooLong {
                field: "title",
                max: TITLE_MAX_CHARS,
            });
        }
        if self.category.chars().count() > CATEGORY_MAX_CHARS {
            return Err(ValidationError::TooLong {
                field: "category",
                max: CATEGORY_MAX_CHARS,
            });
        }
        Ok(())
    }
}
