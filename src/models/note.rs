use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note as stored by the remote service. The client only ever holds a
/// cached copy; `id` and `created_at` are assigned server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// The service stores a summary for every note, defaulting to "".
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Only populated on AI-create responses; regular reads omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Summary text, treating the service's empty-string default as absent.
    pub fn summary_text(&self) -> Option<&str> {
        let summary = self.summary.trim();
        if summary.is_empty() {
            None
        } else {
            Some(summary)
        }
    }

    /// Key points, treating an absent or empty list as none.
    pub fn key_point_items(&self) -> Option<&[String]> {
        match self.key_points.as_deref() {
            Some(points) if !points.is_empty() => Some(points),
            _ => None,
        }
    }

    /// True if the note carries any AI-derived enrichment.
    pub fn is_ai_enhanced(&self) -> bool {
        self.key_point_items().is_some()
    }
}
