use anyhow::Result;

use crate::app::{Redraw, Status};
use crate::log_info;

/// Links typed commands to custom actions.
/// It mutates `Status`.
pub struct EventAction {}

impl EventAction {
    /// Set the filter pattern. An empty pattern clears it.
    pub fn filter(status: &mut Status, pattern: &str) -> Result<()> {
        status.set_pattern(pattern)
    }

    /// Open the pattern prompt. The next line will be the pattern.
    pub fn prompt_pattern(status: &mut Status) -> Result<()> {
        status.prompt_pattern();
        Ok(())
    }

    /// Clear the filter.
    pub fn clear(status: &mut Status) -> Result<()> {
        status.clear_filter();
        Ok(())
    }

    /// Display the matches again.
    pub fn list(status: &mut Status) -> Result<()> {
        status.set_redraw(Redraw::Matches);
        Ok(())
    }

    pub fn toggle(status: &mut Status, indexes: &[usize]) -> Result<()> {
        status.toggle(indexes)
    }

    pub fn select_all(status: &mut Status) -> Result<()> {
        status.select_all();
        Ok(())
    }

    pub fn unselect(status: &mut Status) -> Result<()> {
        status.unselect();
        Ok(())
    }

    /// Copy the relative path of a match to the clipboard.
    pub fn copy_one(status: &mut Status, index: usize) -> Result<()> {
        status.copy_one(index)
    }

    /// Copy the relative paths of every selected match to the clipboard.
    pub fn copy_selected(status: &mut Status) -> Result<()> {
        status.copy_selected()
    }

    pub fn open(status: &mut Status, index: usize) -> Result<()> {
        status.open(index)
    }

    /// Enumerate the files again, keeping the current filter.
    pub fn refresh(status: &mut Status) -> Result<()> {
        status.refresh()
    }

    pub fn help(status: &mut Status) -> Result<()> {
        status.set_redraw(Redraw::Help);
        Ok(())
    }

    /// Once a quit event is received, we change a flag and break the main loop.
    pub fn quit(status: &mut Status) -> Result<()> {
        log_info!("quit requested");
        status.quit();
        Ok(())
    }
}
