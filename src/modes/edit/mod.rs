mod export;
mod selection;

pub use export::{copy_confirmation, copy_to_clipboard, to_clipboard_text};
pub use selection::Selection;
