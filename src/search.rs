//! Free-text projection over the note collection.
//!
//! A pure function of (notes, query): no state, no caching. Callers rerun it
//! whenever either input changes.

use crate::models::Note;

/// Filter notes by a case-insensitive substring match against title,
/// content, or category. An empty query (after trimming) returns the whole
/// collection; relative order is always preserved.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    let query = query.trim();
    if query.is_empty() {
        return notes.iter().collect();
    }

    let needle = query.to_lowercase();
    notes.iter().filter(|note| matches(note, &needle)).collect()
}

fn matches(note: &Note, needle: &str) -> bool {
    note.title.to_lowercase().contains(needle)
        || note.content.to_lowercase().contains(needle)
        || note
            .category
            .as_deref()
            .is_some_and(|category| category.to_lowercase().contains(needle))
}
