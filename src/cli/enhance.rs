//! AI enrichment commands for existing notes.
//!
//! Summarize and categorize change the note server-side, so the store
//! refreshes after them; key-point extraction is read-only.

use anyhow::Result;

use crate::store::NoteStore;

/// Execute the summarize command
pub async fn run_summarize(store: &mut NoteStore, id: i64) -> Result<()> {
    let summary = store.summarize(id).await?;
    println!("{}", summary);
    Ok(())
}

/// Execute the categorize command
pub async fn run_categorize(store: &mut NoteStore, id: i64) -> Result<()> {
    let category = store.categorize(id).await?;
    println!("Category: {}", category);
    Ok(())
}

/// Execute the key-points command
pub async fn run_key_points(store: &NoteStore, id: i64) -> Result<()> {
    let points = store.key_points(id).await?;
    if points.is_empty() {
        println!("No key points.");
        return Ok(());
    }
    for (i, point) in points.iter().enumerate() {
        println!("{}. {}", i + 1, point);
    }
    Ok(())
}
