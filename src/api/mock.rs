//! In-process fake of the note service for tests.
//!
//! Serves notes from an in-memory list and records every request it
//! receives, including serialized bodies, so tests can assert on exactly
//! what would have gone over the wire.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use serde_json::Value;

use crate::models::Note;

use super::types::{
    CategorizeResponse, DeleteAck, KeyPointsResponse, NoteCreateAiRequest, NoteCreateRequest,
    NoteUpdateRequest, SummarizeResponse,
};
use super::{ApiError, NoteApi};

pub const MOCK_SUMMARY: &str = "generated summary";
pub const MOCK_CATEGORY: &str = "Ideas";

pub fn mock_key_points() -> Vec<String> {
    vec!["point one".to_string(), "point two".to_string()]
}

/// Build a plain note for test fixtures.
pub fn sample_note(id: i64, title: &str, content: &str, category: Option<&str>) -> Note {
    Note {
        id,
        title: title.to_string(),
        content: content.to_string(),
        summary: String::new(),
        category: category.map(|c| c.to_string()),
        key_points: None,
        created_at: Utc::now(),
    }
}

#[derive(Default)]
struct MockState {
    notes: RefCell<Vec<Note>>,
    requests: RefCell<Vec<(String, Value)>>,
    failing: RefCell<Vec<&'static str>>,
    next_id: Cell<i64>,
}

/// Cloneable handle to shared mock state: clone one copy into the store and
/// keep the other for assertions.
#[derive(Clone, Default)]
pub struct MockApi {
    state: Rc<MockState>,
}

impl MockApi {
    pub fn with_notes(notes: Vec<Note>) -> Self {
        let next_id = notes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        let api = MockApi::default();
        *api.state.notes.borrow_mut() = notes;
        api.state.next_id.set(next_id);
        api
    }

    /// Make every subsequent call to `operation` fail with a 500.
    pub fn fail_operation(&self, operation: &'static str) {
        self.state.failing.borrow_mut().push(operation);
    }

    pub fn requests(&self) -> Vec<(String, Value)> {
        self.state.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.borrow().len()
    }

    /// Body of the last recorded request for `operation`, if any.
    pub fn last_body(&self, operation: &str) -> Option<Value> {
        self.state
            .requests
            .borrow()
            .iter()
            .rev()
            .find(|(op, _)| op == operation)
            .map(|(_, body)| body.clone())
    }

    pub fn notes(&self) -> Vec<Note> {
        self.state.notes.borrow().clone()
    }

    fn record(&self, operation: &str, body: Value) {
        self.state
            .requests
            .borrow_mut()
            .push((operation.to_string(), body));
    }

    fn check(&self, operation: &'static str) -> Result<(), ApiError> {
        if self.state.failing.borrow().contains(&operation) {
            return Err(ApiError::Remote {
                operation,
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "mock failure".to_string(),
            });
        }
        Ok(())
    }

    fn not_found(operation: &'static str) -> ApiError {
        ApiError::Remote {
            operation,
            status: StatusCode::NOT_FOUND,
            message: "Note not found".to_string(),
        }
    }

    fn take_id(&self) -> i64 {
        let id = self.state.next_id.get().max(1);
        self.state.next_id.set(id + 1);
        id
    }
}

#[async_trait(?Send)]
impl NoteApi for MockApi {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        self.record("list", Value::Null);
        self.check("list")?;
        Ok(self.state.notes.borrow().clone())
    }

    async fn get_note(&self, id: i64) -> Result<Note, ApiError> {
        self.record("get", Value::Null);
        self.check("get")?;
        self.state
            .notes
            .borrow()
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("get"))
    }

    async fn create_note(&self, request: &NoteCreateRequest) -> Result<Note, ApiError> {
        self.record("create", serde_json::to_value(request).unwrap());
        self.check("create")?;
        let note = Note {
            id: self.take_id(),
            title: request.title.clone(),
            content: request.content.clone(),
            summary: request.summary.clone(),
            category: request.category.clone(),
            key_points: None,
            created_at: Utc::now(),
        };
        self.state.notes.borrow_mut().push(note.clone());
        Ok(note)
    }

    async fn create_note_with_ai(&self, request: &NoteCreateAiRequest) -> Result<Note, ApiError> {
        self.record("create_with_ai", serde_json::to_value(request).unwrap());
        self.check("create_with_ai")?;
        let note = Note {
            id: self.take_id(),
            title: request.title.clone(),
            content: request.content.clone(),
            summary: MOCK_SUMMARY.to_string(),
            category: Some(MOCK_CATEGORY.to_string()),
            key_points: Some(mock_key_points()),
            created_at: Utc::now(),
        };
        // The stored copy has no key points; only the create response does.
        let mut stored = note.clone();
        stored.key_points = None;
        self.state.notes.borrow_mut().push(stored);
        Ok(note)
    }

    async fn update_note(&self, id: i64, request: &NoteUpdateRequest) -> Result<Note, ApiError> {
        self.record("update", serde_json::to_value(request).unwrap());
        self.check("update")?;
        let mut notes = self.state.notes.borrow_mut();
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Self::not_found("update"))?;
        note.title = request.title.clone();
        note.content = request.content.clone();
        note.summary = request.summary.clone();
        note.category = request.category.clone();
        Ok(note.clone())
    }

    async fn delete_note(&self, id: i64) -> Result<DeleteAck, ApiError> {
        self.record("delete", Value::Null);
        self.check("delete")?;
        let mut notes = self.state.notes.borrow_mut();
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Err(Self::not_found("delete"));
        }
        Ok(DeleteAck {
            message: "Note deleted successfully".to_string(),
            id,
        })
    }

    async fn summarize_note(&self, id: i64) -> Result<SummarizeResponse, ApiError> {
        self.record("summarize", Value::Null);
        self.check("summarize")?;
        let mut notes = self.state.notes.borrow_mut();
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Self::not_found("summarize"))?;
        note.summary = MOCK_SUMMARY.to_string();
        Ok(SummarizeResponse {
            summary: MOCK_SUMMARY.to_string(),
            note: note.clone(),
        })
    }

    async fn categorize_note(&self, id: i64) -> Result<CategorizeResponse, ApiError> {
        self.record("categorize", Value::Null);
        self.check("categorize")?;
        let mut notes = self.state.notes.borrow_mut();
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Self::not_found("categorize"))?;
        note.category = Some(MOCK_CATEGORY.to_string());
        Ok(CategorizeResponse {
            category: MOCK_CATEGORY.to_string(),
            note: note.clone(),
        })
    }

    async fn get_key_points(&self, id: i64) -> Result<KeyPointsResponse, ApiError> {
        self.record("key_points", Value::Null);
        self.check("key_points")?;
        if !self.state.notes.borrow().iter().any(|n| n.id == id) {
            return Err(Self::not_found("key_points"));
        }
        Ok(KeyPointsResponse {
            key_points: mock_key_points(),
        })
    }
}
