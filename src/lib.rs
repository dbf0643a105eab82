//! ffilter: filter the files of a workspace with a regular expression.
//!
//! The filtering core lives in [`modes`] and knows nothing about the terminal:
//! a [`modes::FilterEngine`] holds the pattern and its matches, the matches are
//! selected and exported to the clipboard as newline separated relative paths.
//! The host (enumerating the files, writing the clipboard, asking for a pattern)
//! is implemented in [`io`] and driven by the event loop of [`app`].
pub mod app;
pub mod common;
pub mod config;
pub mod event;
pub mod io;
pub mod modes;
