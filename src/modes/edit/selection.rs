use crate::modes::{FileRecord, MatchSet};

/// Matches chosen by the user, in the order they were chosen.
///
/// Holds indexes into the current [`MatchSet`]. It must be reset
/// every time the matches change since the indexes would be meaningless.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    content: Vec<usize>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.content.contains(&index)
    }

    /// Select or unselect a match.
    /// Returns false if the index is out of the matches.
    pub fn toggle(&mut self, index: usize, matches: &MatchSet) -> bool {
        if index >= matches.len() {
            return false;
        }
        if let Some(position) = self.content.iter().position(|&selected| selected == index) {
            self.content.remove(position);
        } else {
            self.content.push(index);
        }
        true
    }

    /// Select every match, in display order.
    pub fn select_all(&mut self, matches: &MatchSet) {
        self.content = (0..matches.len()).collect();
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// The selected records, in selection order.
    pub fn records<'a>(&self, matches: &'a MatchSet) -> Vec<&'a FileRecord> {
        self.content
            .iter()
            .filter_map(|&index| matches.get(index))
            .collect()
    }
}
