//! HTTP implementation of the note service client.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::models::Note;

use super::types::{
    CategorizeResponse, DeleteAck, KeyPointsResponse, NoteCreateAiRequest, NoteCreateRequest,
    NoteUpdateRequest, SummarizeResponse,
};
use super::{ApiError, NoteApi};

/// Typed wrapper over the note service's HTTP API. Holds a connection pool
/// and the base URL; no other state.
pub struct RemoteNoteClient {
    client: Client,
    base_url: String,
}

impl RemoteNoteClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check a response's status and decode its body, mapping both failure
    /// modes to the matching `ApiError` variant.
    async fn decode<T: DeserializeOwned>(
        operation: &'static str,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Remote {
                operation,
                status,
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { operation, source })
    }
}

#[async_trait(?Send)]
impl NoteApi for RemoteNoteClient {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let operation = "list";
        debug!("GET /notes/");
        let response = self
            .client
            .get(self.url("/notes/"))
            .send()
            .await
            .map_err(|source| ApiError::Network { operation, source })?;
        Self::decode(operation, response).await
    }

    async fn get_note(&self, id: i64) -> Result<Note, ApiError> {
        let operation = "get";
        debug!("GET /notes/{}", id);
        let response = self
            .client
            .get(self.url(&format!("/notes/{}", id)))
            .send()
            .await
            .map_err(|source| ApiError::Network { operation, source })?;
        Self::decode(operation, response).await
    }

    async fn create_note(&self, request: &NoteCreateRequest) -> Result<Note, ApiError> {
        let operation = "create";
        debug!("POST /notes/");
        let response = self
            .client
            .post(self.url("/notes/"))
            .json(request)
            .send()
            .await
            .map_err(|source| ApiError::Network { operation, source })?;
        Self::decode(operation, response).await
    }

    async fn create_note_with_ai(&self, request: &NoteCreateAiRequest) -> Result<Note, ApiError> {
        let operation = "create_with_ai";
        debug!("POST /notes/ai");
        let response = self
            .client
            .post(self.url("/notes/ai"))
            .json(request)
            .send()
            .await
            .map_err(|source| ApiError::Network { operation, source })?;
        Self::decode(operation, response).await
    }

    async fn update_note(&self, id: i64, request: &NoteUpdateRequest) -> Result<Note, ApiError> {
        let operation = "update";
        debug!("PUT /notes/{}", id);
        let response = self
            .client
            .put(self.url(&format!("/notes/{}", id)))
            .json(request)
            .send()
            .await
            .map_err(|source| ApiError::Network { operation, source })?;
        Self::decode(operation, response).await
    }

    async fn delete_note(&self, id: i64) -> Result<DeleteAck, ApiError> {
        let operation = "delete";
        debug!("DELETE /notes/{}", id);
        let response = self
            .client
            .delete(self.url(&format!("/notes/{}", id)))
            .send()
            .await
            .map_err(|source| ApiError::Network { operation, source })?;
        Self::decode(operation, response).await
    }

    async fn summarize_note(&self, id: i64) -> Result<SummarizeResponse, ApiError> {
        let operation = "summarize";
        debug!("POST /notes/{}/summarize", id);
        let response = self
            .client
            .post(self.url(&format!("/notes/{}/summarize", id)))
            .send()
            .await
            .map_err(|source| ApiError::Network { operation, source })?;
        Self::decode(operation, response).await
    }

    async fn categorize_note(&self, id: i64) -> Result<CategorizeResponse, ApiError> {
        let operation = "categorize";
        debug!("POST /notes/{}/categorize", id);
        let response = self
            .client
            .post(self.url(&format!("/notes/{}/categorize", id)))
            .send()
            .await
            .map_err(|source| ApiError::Network { operation, source })?;
        Self::decode(operation, response).await
    }

    async fn get_key_points(&self, id: i64) -> Result<KeyPointsResponse, ApiError> {
        let operation = "key_points";
        debug!("GET /notes/{}/key-points", id);
        let response = self
            .client
            .get(self.url(&format!("/notes/{}/key-points", id)))
            .send()
            .await
            .map_err(|source| ApiError::Network { operation, source })?;
        Self::decode(operation, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client =
            RemoteNoteClient::new("http://localhost:8000/", Duration::from_secs(30)).unwrap();
        assert_eq!(client.url("/notes/"), "http://localhost:8000/notes/");
        assert_eq!(client.url("/notes/3"), "http://localhost:8000/notes/3");
    }
}
