use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::common::{FilterError, FilterResult};
use crate::modes::FileRecord;

/// A typed filter, compiled once.
///
/// An empty source means "no filter active": it matches nothing.
/// Matching is always case insensitive.
#[derive(Clone, Debug, Default)]
pub struct FilterPattern {
    source: String,
    regex: Option<Regex>,
}

impl FilterPattern {
    /// Compile a pattern typed by the user.
    ///
    /// # Errors
    ///
    /// Fails with [`FilterError::InvalidPattern`] if `source` is not empty and
    /// can't be parsed as a regular expression.
    pub fn parse(source: &str) -> FilterResult<Self> {
        if source.is_empty() {
            return Ok(Self::default());
        }
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map_err(|source_error| FilterError::InvalidPattern {
                pattern: source.to_owned(),
                source: source_error,
            })?;
        Ok(Self {
            source: source.to_owned(),
            regex: Some(regex),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True if the regex matches the name or the relative path of the record.
    /// An empty pattern never matches.
    pub fn is_match(&self, record: &FileRecord) -> bool {
        let Some(regex) = &self.regex else {
            return false;
        };
        regex.is_match(record.name()) || regex.is_match(record.relative_path())
    }
}

impl fmt::Display for FilterPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    fn record(relative: &str) -> FileRecord {
        FileRecord::new(PathBuf::from("/ws").join(relative), Path::new(relative))
    }

    #[test]
    fn empty_pattern_matches_nothing() {
        let pattern = FilterPattern::parse("").unwrap();
        assert!(pattern.is_empty());
        assert!(!pattern.is_match(&record("README.md")));
    }

    #[test]
    fn matching_ignores_case() {
        let pattern = FilterPattern::parse("readme").unwrap();
        assert!(pattern.is_match(&record("README.md")));
        let pattern = FilterPattern::parse("\\.MD$").unwrap();
        assert!(pattern.is_match(&record("docs/guide.md")));
    }

    #[test]
    fn name_or_relative_path_is_enough() {
        let anchored_on_path = FilterPattern::parse("^src/").unwrap();
        assert!(anchored_on_path.is_match(&record("src/index.ts")));
        assert!(!anchored_on_path.is_match(&record("lib/src.ts")));

        let anchored_on_name = FilterPattern::parse("^index").unwrap();
        assert!(anchored_on_name.is_match(&record("src/index.ts")));
    }

    #[test]
    fn invalid_pattern_is_reported_with_its_source() {
        let Err(FilterError::InvalidPattern { pattern, .. }) = FilterPattern::parse("[a-") else {
            panic!("[a- should be rejected");
        };
        assert_eq!(pattern, "[a-");
    }
}
