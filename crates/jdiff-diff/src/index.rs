//! Path index: lookup from path string to leaf line.

use std::collections::HashMap;

use jdiff_types::Line;

/// Leaf lines of one side, keyed by path.
///
/// Only addressable lines are indexed: value lines with a non-empty path.
/// Structural lines and a root leaf are never matched across sides.
#[derive(Debug, Default)]
pub struct PathIndex<'a> {
    by_path: HashMap<&'a str, &'a Line>,
}

impl<'a> PathIndex<'a> {
    /// Build the index for one flattened document.
    pub fn build(lines: &'a [Line]) -> Self {
        let by_path = lines
            .iter()
            .filter(|line| line.is_addressable())
            .map(|line| (line.path.as_str(), line))
            .collect();
        Self { by_path }
    }

    /// The leaf line at `path`, if any.
    pub fn get(&self, path: &str) -> Option<&'a Line> {
        self.by_path.get(path).copied()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    /// Number of indexed leaves.
    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    /// Indexed paths in no particular order.
    pub fn paths(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.by_path.keys().copied()
    }
}
