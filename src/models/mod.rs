pub mod draft;
pub mod note;

pub use draft::{NoteDraft, ValidationError, CATEGORY_MAX_CHARS, TITLE_MAX_CHARS};
pub use note::Note;
