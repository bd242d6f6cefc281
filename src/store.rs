//! Owned container for the authoritative note collection.
//!
//! All mutation goes through `NoteStore`'s methods, which take `&mut self`,
//! so there is exactly one writer. The store never patches the collection in
//! place: after every successful mutation it re-fetches the whole list, so a
//! caller observes either the pre-mutation collection or the fully
//! server-confirmed post-mutation one.

use log::{debug, warn};
use thiserror::Error;

use crate::api::{ApiError, NoteApi, NoteCreateAiRequest, NoteCreateRequest, NoteUpdateRequest};
use crate::models::{Note, NoteDraft, ValidationError};

/// Which store operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Fetch,
    Create,
    Update,
    Delete,
    Summarize,
    Categorize,
    KeyPoints,
}

impl OperationKind {
    /// Phrase used in user-facing "Failed to ..." messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fetch => "fetch notes",
            Self::Create => "create note",
            Self::Update => "update note",
            Self::Delete => "delete note",
            Self::Summarize => "summarize note",
            Self::Categorize => "categorize note",
            Self::KeyPoints => "extract key points",
        }
    }
}

/// Failure signal for a store operation. Remote errors never leave the store
/// raw; each operation wraps its own failure with the operation kind.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to {}", .kind.label())]
    OperationFailed {
        kind: OperationKind,
        #[source]
        source: ApiError,
    },
}

impl StoreError {
    /// The failed operation, when the error came from a remote call.
    pub fn failed_kind(&self) -> Option<OperationKind> {
        match self {
            Self::OperationFailed { kind, .. } => Some(*kind),
            Self::Validation(_) => None,
        }
    }
}

fn failed(kind: OperationKind, source: ApiError) -> StoreError {
    warn!("{}: {}", kind.label(), source);
    StoreError::OperationFailed { kind, source }
}

/// In-memory note collection, kept in server response order and replaced
/// wholesale by each successful refresh.
pub struct NoteStore {
    api: Box<dyn NoteApi>,
    collection: Vec<Note>,
    loading: bool,
    issued_seq: u64,
    applied_seq: u64,
}

impl NoteStore {
    pub fn new(api: Box<dyn NoteApi>) -> Self {
        Self {
            api,
            collection: Vec::new(),
            loading: false,
            issued_seq: 0,
            applied_seq: 0,
        }
    }

    /// The cached collection, in server response order.
    pub fn notes(&self) -> &[Note] {
        &self.collection
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn find(&self, id: i64) -> Option<&Note> {
        self.collection.iter().find(|n| n.id == id)
    }

    /// Fetch all notes and replace the collection. On failure the collection
    /// is left untouched.
    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        let seq = self.begin_refresh();
        match self.api.list_notes().await {
            Ok(notes) => {
                self.apply_refresh(seq, notes);
                Ok(())
            }
            Err(source) => {
                self.loading = false;
                Err(failed(OperationKind::Fetch, source))
            }
        }
    }

    fn begin_refresh(&mut self) -> u64 {
        self.loading = true;
        self.issued_seq += 1;
        self.issued_seq
    }

    /// Apply a completed fetch unless a later-issued refresh already landed.
    /// Responses arrive in completion order, not issue order; the sequence
    /// check keeps a slow early fetch from clobbering a newer one.
    fn apply_refresh(&mut self, seq: u64, notes: Vec<Note>) -> bool {
        self.loading = false;
        if seq <= self.applied_seq {
            debug!(
                "dropping stale refresh #{} (latest applied #{})",
                seq, self.applied_seq
            );
            return false;
        }
        self.applied_seq = seq;
        self.collection = notes;
        true
    }

    /// Create a note from the draft. With `use_ai` the service generates the
    /// summary, category, and key points itself and the request carries no
    /// such fields; otherwise the draft's summary and category are sent as
    /// supplied. Triggers a refresh on success.
    pub async fn create(&mut self, draft: &NoteDraft, use_ai: bool) -> Result<(), StoreError> {
        draft.validate()?;

        let result = if use_ai {
            let request = NoteCreateAiRequest {
                title: draft.title.clone(),
                content: draft.content.clone(),
                auto_summarize: true,
                auto_categorize: true,
            };
            self.api.create_note_with_ai(&request).await.map(drop)
        } else {
            let request = NoteCreateRequest {
                title: draft.title.clone(),
                content: draft.content.clone(),
                summary: draft.summary.clone(),
                category: draft.category_opt(),
            };
            self.api.create_note(&request).await.map(drop)
        };

        match result {
            Ok(()) => self.refresh().await,
            Err(source) => Err(failed(OperationKind::Create, source)),
        }
    }

    /// Update a note's title, content, summary, and category. Key points are
    /// never part of an update. Triggers a refresh on success.
    pub async fn update(&mut self, id: i64, draft: &NoteDraft) -> Result<(), StoreError> {
        draft.validate()?;

        let request = NoteUpdateRequest {
            title: draft.title.clone(),
            content: draft.content.clone(),
            summary: draft.summary.clone(),
            category: draft.category_opt(),
        };

        match self.api.update_note(id, &request).await {
            Ok(_) => self.refresh().await,
            Err(source) => Err(failed(OperationKind::Update, source)),
        }
    }

    /// Delete a note. Triggers a refresh on success.
    pub async fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        match self.api.delete_note(id).await {
            Ok(_) => self.refresh().await,
            Err(source) => Err(failed(OperationKind::Delete, source)),
        }
    }

    /// Ask the service to generate a summary for an existing note. The
    /// service stores the result, so a refresh follows.
    pub async fn summarize(&mut self, id: i64) -> Result<String, StoreError> {
        let response = self
            .api
            .summarize_note(id)
            .await
            .map_err(|source| failed(OperationKind::Summarize, source))?;
        self.refresh().await?;
        Ok(response.summary)
    }

    /// Ask the service to suggest and store a category for an existing note.
    pub async fn categorize(&mut self, id: i64) -> Result<String, StoreError> {
        let response = self
            .api
            .categorize_note(id)
            .await
            .map_err(|source| failed(OperationKind::Categorize, source))?;
        self.refresh().await?;
        Ok(response.category)
    }

    /// Extract key points for a note. Read-only: the collection is not
    /// touched and no refresh happens.
    pub async fn key_points(&self, id: i64) -> Result<Vec<String>, StoreError> {
        let response = self
            .api
            .get_key_points(id)
            .await
            .map_err(|source| failed(OperationKind::KeyPoints, source))?;
        Ok(response.key_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{mock_key_points, sample_note, MockApi, MOCK_CATEGORY, MOCK_SUMMARY};

    fn store_with(api: &MockApi) -> NoteStore {
        NoteStore::new(Box::new(api.clone()))
    }

    fn draft(title: &str, content: &str) -> NoteDraft {
        NoteDraft {
            title: title.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_collection() {
        let api = MockApi::with_notes(vec![sample_note(1, "a", "x", None)]);
        let mut store = store_with(&api);
        assert!(store.notes().is_empty());

        store.refresh().await.unwrap();
        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.notes()[0].id, 1);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_collection() {
        let api = MockApi::with_notes(vec![sample_note(1, "a", "x", None)]);
        let mut store = store_with(&api);
        store.refresh().await.unwrap();
        let before = store.notes().to_vec();

        api.fail_operation("list");
        let err = store.refresh().await.unwrap_err();
        assert_eq!(err.failed_kind(), Some(OperationKind::Fetch));
        assert_eq!(store.notes(), before.as_slice());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_create_manual_sends_draft_fields() {
        let api = MockApi::default();
        let mut store = store_with(&api);

        let mut d = draft("X", "Y");
        d.summary = String::new();
        d.category = String::new();
        store.create(&d, false).await.unwrap();

        let body = api.last_body("create").unwrap();
        assert_eq!(body["title"], "X");
        assert_eq!(body["content"], "Y");
        assert_eq!(body["summary"], "");
        assert!(body.get("category").is_none());

        // Refresh ran and picked up the created note.
        assert_eq!(store.notes().len(), 1);
    }

    #[tokio::test]
    async fn test_create_ai_sends_no_manual_fields() {
        let api = MockApi::default();
        let mut store = store_with(&api);

        let mut d = draft("X", "Y");
        d.summary = "typed earlier".to_string();
        d.category = "typed earlier".to_string();
        store.create(&d, true).await.unwrap();

        assert!(api.last_body("create").is_none());
        let body = api.last_body("create_with_ai").unwrap();
        assert_eq!(body["auto_summarize"], true);
        assert_eq!(body["auto_categorize"], true);
        assert!(body.get("summary").is_none());
        assert!(body.get("category").is_none());
        assert!(body.get("key_points").is_none());
    }

    #[tokio::test]
    async fn test_create_validation_issues_no_call() {
        let api = MockApi::default();
        let mut store = store_with(&api);

        let err = store.create(&NoteDraft::default(), true).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_create_leaves_collection_unchanged() {
        let api = MockApi::with_notes(vec![sample_note(1, "a", "x", None)]);
        let mut store = store_with(&api);
        store.refresh().await.unwrap();
        let before = store.notes().to_vec();

        api.fail_operation("create");
        let err = store.create(&draft("X", "Y"), false).await.unwrap_err();
        assert_eq!(err.failed_kind(), Some(OperationKind::Create));
        assert_eq!(store.notes(), before.as_slice());
    }

    #[tokio::test]
    async fn test_update_triggers_refresh() {
        let api = MockApi::with_notes(vec![sample_note(1, "old", "x", Some("personal"))]);
        let mut store = store_with(&api);
        store.refresh().await.unwrap();

        let mut d = draft("new title", "new content");
        d.summary = "s".to_string();
        store.update(1, &d).await.unwrap();

        assert_eq!(store.notes()[0].title, "new title");
        assert_eq!(store.notes()[0].summary, "s");
        // Category was blank in the draft, so the request omitted it.
        let body = api.last_body("update").unwrap();
        assert!(body.get("category").is_none());
        assert!(body.get("key_points").is_none());
    }

    #[tokio::test]
    async fn test_failed_update_leaves_collection_unchanged() {
        let api = MockApi::with_notes(vec![sample_note(1, "old", "x", None)]);
        let mut store = store_with(&api);
        store.refresh().await.unwrap();
        let before = store.notes().to_vec();

        api.fail_operation("update");
        let err = store.update(1, &draft("new", "y")).await.unwrap_err();
        assert_eq!(err.failed_kind(), Some(OperationKind::Update));
        assert_eq!(store.notes(), before.as_slice());
    }

    #[tokio::test]
    async fn test_delete_removes_note() {
        let api = MockApi::with_notes(vec![
            sample_note(1, "a", "x", None),
            sample_note(2, "b", "y", None),
        ]);
        let mut store = store_with(&api);
        store.refresh().await.unwrap();

        store.delete(1).await.unwrap();
        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.notes()[0].id, 2);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_note() {
        let api = MockApi::with_notes(vec![sample_note(1, "a", "x", None)]);
        let mut store = store_with(&api);
        store.refresh().await.unwrap();

        api.fail_operation("delete");
        let err = store.delete(1).await.unwrap_err();
        assert_eq!(err.failed_kind(), Some(OperationKind::Delete));
        assert!(store.find(1).is_some());
    }

    #[tokio::test]
    async fn test_failed_refresh_after_successful_create() {
        // Known gap, kept: the mutation landed remotely but the store still
        // shows pre-mutation data when the follow-up fetch fails.
        let api = MockApi::default();
        let mut store = store_with(&api);
        store.refresh().await.unwrap();

        api.fail_operation("list");
        let err = store.create(&draft("X", "Y"), false).await.unwrap_err();
        assert_eq!(err.failed_kind(), Some(OperationKind::Fetch));
        assert!(store.notes().is_empty());
        assert_eq!(api.notes().len(), 1);
    }

    #[tokio::test]
    async fn test_stale_refresh_is_dropped() {
        let api = MockApi::default();
        let mut store = store_with(&api);

        // Two refreshes issued, completing out of order: the first-issued
        // result arrives last and must not clobber the newer one.
        let first = store.begin_refresh();
        let second = store.begin_refresh();

        assert!(store.apply_refresh(second, vec![sample_note(2, "new", "y", None)]));
        assert!(!store.apply_refresh(first, vec![sample_note(1, "old", "x", None)]));

        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.notes()[0].id, 2);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_summarize_refreshes_collection() {
        let api = MockApi::with_notes(vec![sample_note(1, "a", "x", None)]);
        let mut store = store_with(&api);
        store.refresh().await.unwrap();
        assert_eq!(store.notes()[0].summary_text(), None);

        let summary = store.summarize(1).await.unwrap();
        assert_eq!(summary, MOCK_SUMMARY);
        assert_eq!(store.notes()[0].summary_text(), Some(MOCK_SUMMARY));
    }

    #[tokio::test]
    async fn test_categorize_refreshes_collection() {
        let api = MockApi::with_notes(vec![sample_note(1, "a", "x", None)]);
        let mut store = store_with(&api);
        store.refresh().await.unwrap();

        let category = store.categorize(1).await.unwrap();
        assert_eq!(category, MOCK_CATEGORY);
        assert_eq!(store.notes()[0].category.as_deref(), Some(MOCK_CATEGORY));
    }

    #[tokio::test]
    async fn test_key_points_does_not_mutate() {
        let api = MockApi::with_notes(vec![sample_note(1, "a", "x", None)]);
        let mut store = store_with(&api);
        store.refresh().await.unwrap();
        let before = store.notes().to_vec();

        let points = store.key_points(1).await.unwrap();
        assert_eq!(points, mock_key_points());
        assert_eq!(store.notes(), before.as_slice());
        // No refresh was issued for a read-only call.
        let refreshes = api
            .requests()
            .iter()
            .filter(|(op, _)| op == "list")
            .count();
        assert_eq!(refreshes, 1);
    }
}
