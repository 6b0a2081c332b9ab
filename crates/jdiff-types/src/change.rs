use std::fmt;

use serde::{Deserialize, Serialize};

use crate::line::Line;

/// Which half of a side-by-side diff a line belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The old document.
    Left,
    /// The new document.
    Right,
}

impl Side {
    /// The classification for a path that exists only on this side.
    pub fn missing_counterpart(self) -> ChangeType {
        match self {
            Side::Left => ChangeType::Removed,
            Side::Right => ChangeType::Added,
        }
    }
}

/// Classification of a leaf line relative to the other side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    Added,
    Removed,
    Modified,
    Unchanged,
}

impl ChangeType {
    /// Returns `true` for everything except [`ChangeType::Unchanged`].
    pub fn is_change(self) -> bool {
        !matches!(self, ChangeType::Unchanged)
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChangeType::Added => "added",
            ChangeType::Removed => "removed",
            ChangeType::Modified => "modified",
            ChangeType::Unchanged => "unchanged",
        };
        f.write_str(s)
    }
}

/// A flattened line plus its change classification.
///
/// Structural lines always have `change == None`. So does the root value line,
/// except in whole-document mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiffLine {
    #[serde(flatten)]
    pub line: Line,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<ChangeType>,
}

impl DiffLine {
    /// Wrap a line without a classification.
    pub fn neutral(line: Line) -> Self {
        Self { line, change: None }
    }

    pub fn with_change(line: Line, change: ChangeType) -> Self {
        Self {
            line,
            change: Some(change),
        }
    }

    /// Returns `true` if the line carries anything other than `Unchanged`.
    pub fn is_changed(&self) -> bool {
        self.change.is_some_and(ChangeType::is_change)
    }

    /// Returns `true` if the line is classified as `change`.
    pub fn is(&self, change: ChangeType) -> bool {
        self.change == Some(change)
    }
}
