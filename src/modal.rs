//! Dialog workflow state machine.
//!
//! One tagged state instead of independent open/closed flags, so
//! contradictory combinations (edit and view both "open") cannot be
//! represented. The controller owns the draft being edited and the
//! AI-augmentation toggle; on submit it delegates to the store.

use crate::models::{Note, NoteDraft};
use crate::store::{NoteStore, StoreError};

/// Which dialog is active. Exactly one variant at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState {
    Closed,
    Creating,
    Editing(Note),
    Viewing(Note),
}

impl ModalState {
    pub fn is_closed(&self) -> bool {
        matches!(self, ModalState::Closed)
    }
}

/// Coordinates create/edit/view dialogs against the store.
pub struct ModalController {
    state: ModalState,
    draft: NoteDraft,
    use_ai: bool,
}

impl ModalController {
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
            draft: NoteDraft::default(),
            use_ai: true,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut NoteDraft {
        &mut self.draft
    }

    pub fn use_ai(&self) -> bool {
        self.use_ai
    }

    /// Toggle AI augmentation. Only meaningful while creating; the draft's
    /// summary and category keep their last-entered values either way and
    /// are merely withheld from submission while the toggle is on.
    pub fn set_use_ai(&mut self, on: bool) {
        self.use_ai = on;
    }

    /// Open the create dialog with a fresh draft. AI augmentation defaults
    /// to on.
    pub fn open_create(&mut self) {
        self.state = ModalState::Creating;
        self.draft = NoteDraft::default();
        self.use_ai = true;
    }

    /// Open the edit dialog pre-filled from the note's current fields.
    /// Editing never re-invokes AI.
    pub fn open_edit(&mut self, note: Note) {
        self.draft = NoteDraft::from_note(&note);
        self.use_ai = false;
        self.state = ModalState::Editing(note);
    }

    pub fn open_view(&mut self, note: Note) {
        self.state = ModalState::Viewing(note);
    }

    /// Close whatever dialog is open and discard the draft. Never touches
    /// the store.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
        self.draft = NoteDraft::default();
    }

    pub fn cancel(&mut self) {
        self.close();
    }

    /// From the view dialog, switch to editing the same note. Returns false
    /// in any other state.
    pub fn edit_current(&mut self) -> bool {
        match &self.state {
            ModalState::Viewing(note) => {
                let note = note.clone();
                self.open_edit(note);
                true
            }
            _ => false,
        }
    }

    /// The draft as it would be submitted: while creating with AI on, the
    /// summary and category are omitted (the service generates them).
    pub fn effective_draft(&self) -> NoteDraft {
        let mut draft = self.draft.clone();
        if matches!(self.state, ModalState::Creating) && self.use_ai {
            draft.summary = String::new();
            draft.category = String::new();
        }
        draft
    }

    /// Submit the draft. From `Creating` this creates, from `Editing` it
    /// updates; on success the dialog closes, on failure it stays open with
    /// the draft retained so the caller can surface the error and retry.
    /// In any other state this is a no-op.
    pub async fn submit(&mut self, store: &mut NoteStore) -> Result<(), StoreError> {
        match &self.state {
            ModalState::Creating => {
                let draft = self.effective_draft();
                store.create(&draft, self.use_ai).await?;
                self.close();
                Ok(())
            }
            ModalState::Editing(note) => {
                let id = note.id;
                store.update(id, &self.draft).await?;
                self.close();
                Ok(())
            }
            ModalState::Closed | ModalState::Viewing(_) => Ok(()),
        }
    }
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new()
    }
}
