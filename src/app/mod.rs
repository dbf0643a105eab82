//! Everything about the application itself.
//!
//! - [`application::FM`] the application: it reads the events, dispatch them and displays the result,
//! - [`application::run_once`] filters once and prints the matches,
//! - [`status::Status`] the mutable state of the application: the engine, the selection, the clipboard and the status line.

mod application;
mod status;

pub use application::{run_once, FM};
pub use status::{Level, Message, Redraw, Status};
