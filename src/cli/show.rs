use anyhow::Result;

use crate::store::NoteStore;

use super::display::print_note_detail;

/// Execute the show command
pub async fn run_show(store: &mut NoteStore, id: i64) -> Result<()> {
    store.refresh().await?;

    match store.find(id) {
        Some(note) => print_note_detail(note),
        None => println!("No note found with ID: {}", id),
    }

    Ok(())
}
