use std::fmt;

use crate::common::{COMMAND_PROMPT, PATTERN_EXAMPLE, PATTERN_PLACEHOLDER, PATTERN_PROMPT};

/// What the next typed line will be used for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    /// The line is parsed as an action.
    #[default]
    Command,
    /// The line is a new filter pattern.
    Pattern,
}

impl InputMode {
    /// Prompt displayed before reading the line.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Command => COMMAND_PROMPT,
            Self::Pattern => PATTERN_PROMPT,
        }
    }

    /// Lines displayed above the prompt.
    pub fn help_lines(&self) -> &'static [&'static str] {
        match self {
            Self::Command => &[],
            Self::Pattern => &[PATTERN_PLACEHOLDER, PATTERN_EXAMPLE],
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Command => write!(f, "Command"),
            Self::Pattern => write!(f, "Pattern"),
        }
    }
}
