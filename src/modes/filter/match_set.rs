use std::slice::Iter;

use crate::modes::{FileRecord, FilterPattern};

/// The current result of a filter, in enumeration order.
///
/// It's rebuilt wholesale every time the pattern changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSet {
    content: Vec<FileRecord>,
}

impl MatchSet {
    /// Keep every record of the universe matched by `pattern`, preserving their order.
    pub fn from_universe<I>(pattern: &FilterPattern, universe: I) -> Self
    where
        I: IntoIterator<Item = FileRecord>,
    {
        if pattern.is_empty() {
            return Self::default();
        }
        Self {
            content: universe
                .into_iter()
                .filter(|record| pattern.is_match(record))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FileRecord> {
        self.content.get(index)
    }

    pub fn iter(&self) -> Iter<'_, FileRecord> {
        self.content.iter()
    }

    pub fn as_slice(&self) -> &[FileRecord] {
        &self.content
    }

    /// Relative paths of every match, in order.
    pub fn relative_paths(&self) -> Vec<&str> {
        self.content.iter().map(FileRecord::relative_path).collect()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a FileRecord;
    type IntoIter = Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
