use thiserror::Error;

/// Errors of the filtering core.
///
/// Each of them is terminal to the action which triggered it only:
/// the stored pattern and matches are never left half updated.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The typed pattern isn't a valid regular expression.
    /// The stored pattern and matches are left unchanged.
    #[error("Invalid regular expression: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// Nothing was selected when copying the selection.
    /// It's a normal outcome and should be reported as a warning.
    #[error("No files selected")]
    EmptySelection,
    /// The files couldn't be listed. The matches are emptied.
    #[error("Couldn't list the files: {0}")]
    Enumeration(String),
}

impl FilterError {
    /// True if the error is a simple warning and not a real failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::EmptySelection)
    }
}

pub type FilterResult<T> = Result<T, FilterError>;
