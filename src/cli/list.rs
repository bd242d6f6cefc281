use anyhow::Result;

use crate::store::NoteStore;

use super::display::print_note_card;

/// Execute the list command
pub async fn run_list(store: &mut NoteStore) -> Result<()> {
    store.refresh().await?;

    if store.notes().is_empty() {
        println!("No notes yet. Create your first note to get started.");
        return Ok(());
    }

    for note in store.notes() {
        print_note_card(note);
    }
    println!("{} note(s).", store.notes().len());

    Ok(())
}
