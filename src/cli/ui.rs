//! Shared UI primitives for echonotes
//!
//! Conventions:
//! - Prompts: lowercase with colon and space: `title: `
//! - Feedback: single word when possible: `Created.`

use anyhow::Result;
use crossterm::{
    cursor,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use inquire::{ui::RenderConfig, Confirm, InquireError, Text};
use std::io::{self, Write};

/// Clear the terminal screen and move cursor to top-left
pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

/// Get a minimal render config for inquire prompts
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Prompt for yes/no confirmation. Escape falls back to the default.
pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    let result = Confirm::new(prompt)
        .with_render_config(minimal_render_config())
        .with_default(default)
        .prompt_skippable()?;
    Ok(result.unwrap_or(default))
}

/// Wait for the user to press enter before returning to the menu
pub fn wait_for_continue() {
    println!();
    let _ = Text::new("[enter]")
        .with_render_config(minimal_render_config())
        .prompt_skippable();
}

/// Result type for form inputs that can be cancelled
pub enum FormResult<T> {
    Value(T),
    Cancelled,
}

/// Prompt for a field with optional current value
/// Format: `field [current]: ` or `field: ` if no current value
/// Empty input keeps the current value; `-` clears it.
pub fn prompt_field(field: &str, current: Option<&str>) -> Result<FormResult<String>> {
    let has_value = current.map(|v| !v.is_empty()).unwrap_or(false);
    let prompt = match current {
        Some(val) if !val.is_empty() => {
            format!("{} [{}] (- clears): ", field, truncate_for_display(val, 30))
        }
        _ => format!("{}: ", field),
    };

    let result = Text::new(&prompt)
        .with_render_config(minimal_render_config())
        .prompt();

    match result {
        Ok(input) => {
            let input = input.trim();
            if input == "-" && has_value {
                Ok(FormResult::Value(String::new()))
            } else if input.is_empty() {
                Ok(FormResult::Value(current.unwrap_or("").to_string()))
            } else {
                Ok(FormResult::Value(input.to_string()))
            }
        }
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            Ok(FormResult::Cancelled)
        }
        Err(e) => Err(e.into()),
    }
}

/// Truncate string for display in prompts
pub fn truncate_for_display(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}
