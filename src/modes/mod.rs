//! The filtering core. It knows nothing about the terminal.
//!
//! - [`FileRecord`] an enumerated file, its name and its relative path,
//! - [`FilterEngine`] owns the pattern and the matching files. [`FilterPattern`] is the compiled pattern and [`MatchSet`] its result,
//! - `edit` holds the [`Selection`] of the matches and the export of the selection to the clipboard,
//! - `collaborators` are the traits the host must implement: [`FileEnumerator`], [`ClipboardWriter`] and [`PatternPrompt`],
//! - [`InputMode`] tells what the next typed line is used for.

mod collaborators;
mod edit;
mod filter;
mod fs;
mod mode;

pub use collaborators::{ClipboardWriter, FileEnumerator, PatternPrompt};
pub use edit::*;
pub use filter::*;
pub use fs::*;
pub use mode::InputMode;
