//! Typed client for the note service HTTP API.
//!
//! `RemoteNoteClient` is the wire implementation; everything above it talks
//! to the `NoteApi` trait so tests can substitute an in-process fake.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod mock;
mod types;

pub use client::RemoteNoteClient;
pub use error::ApiError;
pub use types::{
    CategorizeResponse, DeleteAck, KeyPointsResponse, NoteCreateAiRequest, NoteCreateRequest,
    NoteUpdateRequest, SummarizeResponse,
};

use async_trait::async_trait;

use crate::models::Note;

/// Interface to the note service, one method per remote operation.
///
/// Each call is a single attempt: no retries, no per-call timeout override.
/// Failure handling belongs to the caller.
#[async_trait(?Send)]
pub trait NoteApi {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError>;
    async fn get_note(&self, id: i64) -> Result<Note, ApiError>;
    async fn create_note(&self, request: &NoteCreateRequest) -> Result<Note, ApiError>;
    async fn create_note_with_ai(&self, request: &NoteCreateAiRequest) -> Result<Note, ApiError>;
    async fn update_note(&self, id: i64, request: &NoteUpdateRequest) -> Result<Note, ApiError>;
    async fn delete_note(&self, id: i64) -> Result<DeleteAck, ApiError>;
    async fn summarize_note(&self, id: i64) -> Result<SummarizeResponse, ApiError>;
    async fn categorize_note(&self, id: i64) -> Result<CategorizeResponse, ApiError>;
    async fn get_key_points(&self, id: i64) -> Result<KeyPointsResponse, ApiError>;
}
