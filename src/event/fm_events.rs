use anyhow::Result;

use crate::modes::{FileRecord, ScanTicket};

/// Internal and user events.
pub enum FmEvents {
    /// A line typed by the user, without its line ending.
    Line(String),
    /// The user closed the input (Ctrl+D).
    EndOfInput,
    /// An enumeration of the workspace completed for this ticket.
    Scanned {
        ticket: ScanTicket,
        universe: Result<Vec<FileRecord>>,
    },
    /// The matches of the engine changed, every view should be redrawn.
    ResultChanged,
}
