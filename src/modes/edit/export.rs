use crate::common::{FilterError, FilterResult, PATH_COPIED};
use crate::modes::{ClipboardWriter, FileRecord};
use crate::log_line;

/// Relative paths of the selection joined by a newline, in the same order.
///
/// # Errors
///
/// Fails with [`FilterError::EmptySelection`] if nothing is selected.
pub fn to_clipboard_text<'a, I>(selection: I) -> FilterResult<String>
where
    I: IntoIterator<Item = &'a FileRecord>,
{
    let paths: Vec<&str> = selection
        .into_iter()
        .map(FileRecord::relative_path)
        .collect();
    if paths.is_empty() {
        return Err(FilterError::EmptySelection);
    }
    Ok(paths.join("\n"))
}

/// Copy the relative paths of the selection to the clipboard.
/// Nothing is written if the selection is empty.
/// Returns the number of copied paths.
///
/// # Errors
///
/// Fails with [`FilterError::EmptySelection`] if nothing is selected
/// or if the clipboard couldn't be written.
pub fn copy_to_clipboard<'a, I>(
    selection: I,
    clipboard: &mut dyn ClipboardWriter,
) -> anyhow::Result<usize>
where
    I: IntoIterator<Item = &'a FileRecord>,
{
    let records: Vec<&FileRecord> = selection.into_iter().collect();
    let text = to_clipboard_text(records.iter().copied())?;
    clipboard.write_clipboard(&text)?;
    log_line!("copied to clipboard: {text}");
    Ok(records.len())
}

/// Message displayed once `count` paths have been copied.
pub fn copy_confirmation(count: usize) -> String {
    if count == 1 {
        PATH_COPIED.to_owned()
    } else {
        format!("{count} file paths copied to clipboard")
    }
}
