use clap::{Args, Parser, Subcommand};

pub mod delete;
pub mod display;
pub mod enhance;
pub mod list;
pub mod menu;
pub mod note_form;
pub mod search;
pub mod show;
pub mod ui;

pub use delete::run_delete;
pub use enhance::{run_categorize, run_key_points, run_summarize};
pub use list::run_list;
pub use menu::run_menu;
pub use note_form::{run_add, run_edit};
pub use search::run_search;
pub use show::run_show;

#[derive(Parser)]
#[command(name = "echonotes")]
#[command(about = "AI-assisted note manager for the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all notes
    List,
    /// Search notes by title, content, or category
    Search(SearchArgs),
    /// Show full details for a note
    Show(NoteIdArgs),
    /// Create a new note
    Add(AddArgs),
    /// Edit an existing note
    Edit(NoteIdArgs),
    /// Delete a note
    Delete(DeleteArgs),
    /// Generate and store a summary for a note
    Summarize(NoteIdArgs),
    /// Suggest and store a category for a note
    Categorize(NoteIdArgs),
    /// Extract key points from a note
    KeyPoints(NoteIdArgs),
}

#[derive(Args)]
pub struct SearchArgs {
    /// Search query (matched against title, content, and category)
    #[arg(default_value = "")]
    pub query: String,
}

#[derive(Args)]
pub struct NoteIdArgs {
    /// Note ID
    pub id: i64,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub content: Option<String>,
    /// Manual summary (disables AI generation)
    #[arg(short, long)]
    pub summary: Option<String>,
    /// Manual category (disables AI generation)
    #[arg(short = 'g', long)]
    pub category: Option<String>,
    /// Skip AI summary/category generation
    #[arg(long)]
    pub no_ai: bool,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Note ID
    pub id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}
