use anyhow::Result;

use crate::store::NoteStore;

use super::ui::confirm;

/// Execute the delete command
pub async fn run_delete(store: &mut NoteStore, id: i64, force: bool) -> Result<()> {
    store.refresh().await?;

    let Some(note) = store.find(id) else {
        println!("No note found with ID: {}", id);
        return Ok(());
    };
    let title = note.title.clone();

    if !force && !confirm(&format!("Delete \"{}\"?", title), false)? {
        println!("Cancelled.");
        return Ok(());
    }

    store.delete(id).await?;
    println!("Deleted: {}", title);

    Ok(())
}
