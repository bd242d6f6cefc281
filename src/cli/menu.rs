//! Main menu for echonotes
//!
//! Uses inquire for clean, reliable terminal interaction. The menu drives
//! the same modal controller the rest of the view layer uses: selecting a
//! note opens the view dialog, from which edit and delete are reachable.

use anyhow::{anyhow, Result};
use inquire::{Select, Text};
use std::io::{self, IsTerminal};

use crate::modal::{ModalController, ModalState};
use crate::search::filter_notes;
use crate::store::NoteStore;

use super::display::{note_line, print_note_detail};
use super::note_form::form_loop;
use super::ui::{clear_screen, confirm, minimal_render_config, wait_for_continue};

/// Menu options with type-safe variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Browse,
    Search,
    NewNote,
    Quit,
}

impl MenuOption {
    const ALL: &'static [MenuOption] = &[
        MenuOption::Browse,
        MenuOption::Search,
        MenuOption::NewNote,
        MenuOption::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuOption::Browse => "Browse",
            MenuOption::Search => "Search",
            MenuOption::NewNote => "New Note",
            MenuOption::Quit => "Quit",
        }
    }

    fn from_label(s: &str) -> Option<MenuOption> {
        MenuOption::ALL.iter().find(|opt| opt.label() == s).copied()
    }
}

/// Run the interactive main menu
pub async fn run_menu(store: &mut NoteStore) -> Result<()> {
    // TTY check: interactive menu requires a terminal
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "Interactive menu requires a terminal. Use subcommands for non-interactive use:\n  \
            echonotes list\n  \
            echonotes search <query>\n  \
            echonotes add --title <title> --content <content>\n  \
            Run 'echonotes --help' for all options."
        ));
    }

    let mut controller = ModalController::new();
    let menu_labels: Vec<&str> = MenuOption::ALL.iter().map(|opt| opt.label()).collect();

    loop {
        let _ = clear_screen();

        let selection = Select::new("echonotes", menu_labels.clone())
            .with_render_config(minimal_render_config())
            .with_page_size(menu_labels.len())
            .with_vim_mode(true)
            .prompt_skippable();

        // Handle prompt errors (Ctrl+C, terminal issues) - exit gracefully
        let selection = match selection {
            Ok(sel) => sel,
            Err(_) => return Ok(()),
        };

        let Some(choice_label) = selection else {
            // User pressed Escape
            return Ok(());
        };

        let Some(choice) = MenuOption::from_label(choice_label) else {
            continue;
        };

        if choice == MenuOption::Quit {
            return Ok(());
        }

        let _ = clear_screen();

        if let Err(e) = execute_choice(store, &mut controller, choice).await {
            eprintln!("\nError: {:#}", e);
            wait_for_continue();
        }
    }
}

async fn execute_choice(
    store: &mut NoteStore,
    controller: &mut ModalController,
    choice: MenuOption,
) -> Result<()> {
    match choice {
        MenuOption::Browse => browse(store, controller, "").await,
        MenuOption::Search => {
            let query = prompt_for_input("search: ")?;
            browse(store, controller, &query).await
        }
        MenuOption::NewNote => {
            controller.open_create();
            form_loop(store, controller, "Created.").await?;
            wait_for_continue();
            Ok(())
        }
        MenuOption::Quit => Ok(()),
    }
}

/// List notes (optionally filtered) and open whichever one is picked.
async fn browse(store: &mut NoteStore, controller: &mut ModalController, query: &str) -> Result<()> {
    loop {
        store.refresh().await?;

        let note = {
            let matches = filter_notes(store.notes(), query);
            if matches.is_empty() {
                if query.trim().is_empty() {
                    println!("No notes yet.");
                } else {
                    println!("No notes found. Try a different search term.");
                }
                wait_for_continue();
                return Ok(());
            }

            let labels: Vec<String> = matches.iter().map(|n| note_line(n)).collect();
            let selection = Select::new("notes", labels.clone())
                .with_render_config(minimal_render_config())
                .with_vim_mode(true)
                .prompt_skippable()?;

            let Some(selected) = selection else {
                return Ok(());
            };
            let idx = labels.iter().position(|l| *l == selected).unwrap_or(0);
            matches[idx].clone()
        };

        controller.open_view(note);
        view_note(store, controller).await?;
    }
}

/// Detail view plus its action menu. Returns once the dialog is closed.
async fn view_note(store: &mut NoteStore, controller: &mut ModalController) -> Result<()> {
    const ACTIONS: &[&str] = &[
        "Edit",
        "Summarize",
        "Categorize",
        "Key Points",
        "Delete",
        "Close",
    ];

    loop {
        let ModalState::Viewing(note) = controller.state() else {
            return Ok(());
        };
        let note = note.clone();

        let _ = clear_screen();
        print_note_detail(&note);

        let choice = Select::new("action", ACTIONS.to_vec())
            .with_render_config(minimal_render_config())
            .with_vim_mode(true)
            .prompt_skippable()?;

        match choice {
            Some("Edit") => {
                controller.edit_current();
                form_loop(store, controller, "Saved.").await?;
                wait_for_continue();
                return Ok(());
            }
            Some("Summarize") => {
                match store.summarize(note.id).await {
                    Ok(summary) => println!("\n{}", summary),
                    Err(e) => eprintln!("\nError: {:#}", anyhow::Error::from(e)),
                }
                wait_for_continue();
                reopen_view(store, controller, note.id);
            }
            Some("Categorize") => {
                match store.categorize(note.id).await {
                    Ok(category) => println!("\nCategory: {}", category),
                    Err(e) => eprintln!("\nError: {:#}", anyhow::Error::from(e)),
                }
                wait_for_continue();
                reopen_view(store, controller, note.id);
            }
            Some("Key Points") => {
                match store.key_points(note.id).await {
                    Ok(points) => {
                        println!();
                        for (i, point) in points.iter().enumerate() {
                            println!("{}. {}", i + 1, point);
                        }
                    }
                    Err(e) => eprintln!("\nError: {:#}", anyhow::Error::from(e)),
                }
                wait_for_continue();
            }
            Some("Delete") => {
                if confirm(&format!("Delete \"{}\"?", note.title), false)? {
                    match store.delete(note.id).await {
                        Ok(()) => {
                            controller.close();
                            println!("Deleted.");
                            wait_for_continue();
                            return Ok(());
                        }
                        Err(e) => {
                            eprintln!("\nError: {:#}", anyhow::Error::from(e));
                            wait_for_continue();
                        }
                    }
                }
            }
            _ => {
                // Close or Escape
                controller.close();
                return Ok(());
            }
        }
    }
}

/// Re-open the view dialog on the refreshed copy of a note, or close the
/// dialog if the note is gone.
fn reopen_view(store: &NoteStore, controller: &mut ModalController, id: i64) {
    match store.find(id) {
        Some(note) => controller.open_view(note.clone()),
        None => controller.close(),
    }
}

/// Prompt for text input, returning empty string on cancel
fn prompt_for_input(label: &str) -> Result<String> {
    let result = Text::new(label)
        .with_render_config(minimal_render_config())
        .prompt_skippable()?;
    Ok(result.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_option_roundtrip() {
        for opt in MenuOption::ALL {
            let label = opt.label();
            let recovered = MenuOption::from_label(label);
            assert_eq!(recovered, Some(*opt), "Failed roundtrip for {:?}", opt);
        }
    }

    #[test]
    fn test_menu_option_from_invalid_label() {
        assert_eq!(MenuOption::from_label("Invalid"), None);
        assert_eq!(MenuOption::from_label(""), None);
    }
}
