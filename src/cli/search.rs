use anyhow::Result;

use crate::search::filter_notes;
use crate::store::NoteStore;

use super::display::print_note_card;

/// Execute the search command. An empty query lists everything.
pub async fn run_search(store: &mut NoteStore, query: &str) -> Result<()> {
    store.refresh().await?;

    let matches = filter_notes(store.notes(), query);
    if matches.is_empty() {
        if query.trim().is_empty() {
            println!("No notes yet.");
        } else {
            println!("No notes found. Try a different search term.");
        }
        return Ok(());
    }

    for note in &matches {
        print_note_card(note);
    }
    println!("{} of {} note(s).", matches.len(), store.notes().len());

    Ok(())
}
