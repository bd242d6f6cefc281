//! Create and edit dialogs.
//!
//! Both flows drive the modal controller: dialog state, draft, and AI
//! toggle live there. The prompts here only collect input and surface
//! failures; a failed submit keeps the dialog open with the draft retained
//! so the user can retry or cancel.

use anyhow::Result;

use crate::modal::{ModalController, ModalState};
use crate::store::NoteStore;

use super::ui::{confirm, prompt_field, FormResult};

/// Execute the add command
pub async fn run_add(
    store: &mut NoteStore,
    title: Option<String>,
    content: Option<String>,
    summary: Option<String>,
    category: Option<String>,
    no_ai: bool,
) -> Result<()> {
    let mut controller = ModalController::new();
    controller.open_create();

    // Supplying manual fields, like unticking the box, switches AI off.
    if no_ai || summary.is_some() || category.is_some() {
        controller.set_use_ai(false);
    }

    let non_interactive = title.is_some() && content.is_some();
    {
        let draft = controller.draft_mut();
        if let Some(title) = title {
            draft.title = title;
        }
        if let Some(content) = content {
            draft.content = content;
        }
        if let Some(summary) = summary {
            draft.summary = summary;
        }
        if let Some(category) = category {
            draft.category = category;
        }
    }

    if non_interactive {
        controller.submit(store).await?;
        println!("Created.");
        return Ok(());
    }

    form_loop(store, &mut controller, "Created.").await
}

/// Execute the edit command
pub async fn run_edit(store: &mut NoteStore, id: i64) -> Result<()> {
    store.refresh().await?;

    let Some(note) = store.find(id) else {
        println!("No note found with ID: {}", id);
        return Ok(());
    };

    let mut controller = ModalController::new();
    controller.open_edit(note.clone());
    form_loop(store, &mut controller, "Saved.").await
}

/// Prompt for the draft's fields and submit, repeating on failure until the
/// user gives up. The controller must be in `Creating` or `Editing`.
pub(super) async fn form_loop(
    store: &mut NoteStore,
    controller: &mut ModalController,
    done: &str,
) -> Result<()> {
    loop {
        if !collect_fields(controller)? {
            controller.cancel();
            println!("Cancelled.");
            return Ok(());
        }

        match controller.submit(store).await {
            Ok(()) => {
                println!("{}", done);
                return Ok(());
            }
            Err(e) => {
                eprintln!("\n{:#}", anyhow::Error::from(e));
                // Draft stays in the controller; retry re-prompts with the
                // entered values as defaults.
                if !confirm("Try again?", true)? {
                    controller.cancel();
                    println!("Cancelled.");
                    return Ok(());
                }
            }
        }
    }
}

/// Walk the form fields. Returns false if the user cancelled.
fn collect_fields(controller: &mut ModalController) -> Result<bool> {
    let editing = matches!(controller.state(), ModalState::Editing(_));
    let current = controller.draft().clone();

    let title = match prompt_field("title", Some(&current.title))? {
        FormResult::Value(v) => v,
        FormResult::Cancelled => return Ok(false),
    };
    let content = match prompt_field("content", Some(&current.content))? {
        FormResult::Value(v) => v,
        FormResult::Cancelled => return Ok(false),
    };
    controller.draft_mut().title = title;
    controller.draft_mut().content = content;

    // Editing never re-invokes AI; creating asks, defaulting to on.
    if !editing {
        let use_ai = confirm(
            "Generate summary and category with AI?",
            controller.use_ai(),
        )?;
        controller.set_use_ai(use_ai);
    }

    // While the AI toggle is on the summary/category fields are not
    // collected; toggling it off re-exposes their last-entered values.
    if editing || !controller.use_ai() {
        let summary = match prompt_field("summary", Some(&current.summary))? {
            FormResult::Value(v) => v,
            FormResult::Cancelled => return Ok(false),
        };
        let category = match prompt_field("category", Some(&current.category))? {
            FormResult::Value(v) => v,
            FormResult::Cancelled => return Ok(false),
        };
        controller.draft_mut().summary = summary;
        controller.draft_mut().category = category;
    }

    Ok(true)
}
