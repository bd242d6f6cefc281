//! Wire payloads for the note service API.

use serde::{Deserialize, Serialize};

use crate::models::Note;

/// Body for POST `/notes/` (manual create).
///
/// The summary is always sent, empty string allowed; the category is omitted
/// entirely when not provided. Key points are never part of a request.
#[derive(Debug, Clone, Serialize)]
pub struct NoteCreateRequest {
    pub title: String,
    pub content: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Body for POST `/notes/ai`. The service generates summary, category, and
/// key points itself; the request carries no such fields.
#[derive(Debug, Clone, Serialize)]
pub struct NoteCreateAiRequest {
    pub title: String,
    pub content: String,
    pub auto_summarize: bool,
    pub auto_categorize: bool,
}

/// Body for PUT `/notes/{id}`. Same shape as a manual create; key points
/// cannot be updated through this path.
#[derive(Debug, Clone, Serialize)]
pub struct NoteUpdateRequest {
    pub title: String,
    pub content: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Response to DELETE `/notes/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteAck {
    pub message: String,
    pub id: i64,
}

/// Response to POST `/notes/{id}/summarize`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub note: Note,
}

/// Response to POST `/notes/{id}/categorize`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategorizeResponse {
    pub category: String,
    pub note: Note,
}

/// Response to GET `/notes/{id}/key-points`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyPointsResponse {
    pub key_points: Vec<String>,
}
