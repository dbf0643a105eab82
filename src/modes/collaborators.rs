//! What the filtering core expects from its host.
//!
//! The terminal application implements them in `crate::io`,
//! the tests implement them in memory.

use anyhow::Result;

use crate::modes::FileRecord;

/// Lists every file of the workspace at call time.
pub trait FileEnumerator {
    /// # Errors
    ///
    /// Host defined. The engine reports them as [`crate::common::FilterError::Enumeration`].
    fn enumerate_files(&self) -> Result<Vec<FileRecord>>;
}

/// Writes some text to the clipboard.
pub trait ClipboardWriter {
    /// # Errors
    ///
    /// May fail if the clipboard can't be reached.
    fn write_clipboard(&mut self, text: &str) -> Result<()>;
}

/// Asks the user for a new pattern.
pub trait PatternPrompt {
    /// Returns `None` if the user cancelled. An empty string is a valid answer
    /// which clears the filter.
    ///
    /// # Errors
    ///
    /// May fail if the input can't be read.
    fn prompt_for_pattern(&mut self) -> Result<Option<String>>;
}
