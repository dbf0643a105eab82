//! Everything about IO.
//! It's responsible for the argument parsing, the display, the logs and every collaborator
//! the filtering core needs from the outside world.
//!
//! - [`args::Args`] the argument parser from execution of ffilter,
//! - `commands` execution of external programs,
//! - [`display::Display`] the displayer itself. Everything is written line by line to a writer, usually stdout,
//! - `log` contains a few functions to setup, read & write to logs. Logs are disabled by default and require the argument flag `-l` to be enabled,
//! - [`opener::Opener`] opens the matches with the configured program,
//! - [`clipboard::SystemClipboard`] writes the clipboard of the session,
//! - [`walker::WorkspaceWalker`] enumerates the files of the workspace,
//! - [`prompt::LinePrompt`] asks for a pattern on the terminal.

mod args;
mod clipboard;
mod commands;
mod display;
mod log;
mod opener;
mod prompt;
mod walker;

pub use args::Args;
pub use clipboard::SystemClipboard;
pub use commands::execute;
pub use display::Display;
pub use log::{set_loggers, write_log_info_once, write_log_line};
pub use opener::Opener;
pub use prompt::{parse_prompt_answer, LinePrompt};
pub use walker::WorkspaceWalker;
