//! Utiliy functions, constants & errors.
//!
//! - `utils` holds a few functions which are used at various places, mostly to convert paths to displayable strings.
//! - `constant_strings_paths` holds every static string used to define paths and static messages (help, status line etc.)
//! - `error` holds [`FilterError`], the errors of the filtering core.

mod constant_strings_paths;
mod error;
mod utils;

pub use constant_strings_paths::*;
pub use error::{FilterError, FilterResult};
pub use utils::*;
