//! Structural diff: compare two JSON documents line by line, matched by path.
//!
//! Both documents are flattened independently. Each leaf line is then looked
//! up by path in the other side's index: a missing counterpart is `Removed`
//! (left) or `Added` (right), a counterpart with a different value is
//! `Modified`, and anything else is `Unchanged`. Structural lines are never
//! classified.
//!
//! Array elements are matched by position, so inserting an element shifts
//! every later path and reports the tail as modified. No content-aware
//! alignment is attempted.

use jdiff_types::{ChangeType, DiffLine, Line, Side};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::{DiffConfig, DiffMode};
use crate::equality::values_equal;
use crate::error::DiffResult;
use crate::flatten::flatten_with;
use crate::index::PathIndex;

/// The two annotated sides of a structural diff.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StructuralDiff {
    /// Lines of the old document.
    pub left: Vec<DiffLine>,
    /// Lines of the new document.
    pub right: Vec<DiffLine>,
}

impl StructuralDiff {
    /// Returns `true` if no line on either side is classified as a change.
    pub fn is_empty(&self) -> bool {
        !self
            .left
            .iter()
            .chain(&self.right)
            .any(DiffLine::is_changed)
    }

    /// Lines of one side.
    pub fn side(&self, side: Side) -> &[DiffLine] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Number of lines on `side` classified as `change`.
    pub fn count(&self, side: Side, change: ChangeType) -> usize {
        self.side(side).iter().filter(|l| l.is(change)).count()
    }

    /// Number of removed leaves (left side).
    pub fn removals(&self) -> usize {
        self.count(Side::Left, ChangeType::Removed)
    }

    /// Number of added leaves (right side).
    pub fn additions(&self) -> usize {
        self.count(Side::Right, ChangeType::Added)
    }

    /// Number of modified leaves. Equal on both sides in smart mode.
    pub fn modifications(&self) -> usize {
        self.count(Side::Left, ChangeType::Modified)
    }

    /// Removed plus modified lines on the left.
    pub fn left_changes(&self) -> usize {
        self.left.iter().filter(|l| l.is_changed()).count()
    }

    /// Added plus modified lines on the right.
    pub fn right_changes(&self) -> usize {
        self.right.iter().filter(|l| l.is_changed()).count()
    }
}

/// Diff two documents with the default configuration.
pub fn diff_values(old: &Value, new: &Value) -> DiffResult<StructuralDiff> {
    diff_values_with(old, new, &DiffConfig::default())
}

/// Diff two documents using the mode, indentation and depth limit in `config`.
pub fn diff_values_with(old: &Value, new: &Value, config: &DiffConfig) -> DiffResult<StructuralDiff> {
    let old_lines = flatten_with(old, config)?;
    let new_lines = flatten_with(new, config)?;

    let diff = match config.mode {
        DiffMode::Smart => diff_lines(old_lines, new_lines),
        DiffMode::Whole => diff_whole(!values_equal(old, new), old_lines, new_lines),
    };

    debug!(
        mode = ?config.mode,
        old_lines = diff.left.len(),
        new_lines = diff.right.len(),
        removals = diff.removals(),
        additions = diff.additions(),
        modifications = diff.modifications(),
        "computed structural diff"
    );
    Ok(diff)
}

/// Classify two already-flattened documents against each other by path.
pub fn diff_lines(old_lines: Vec<Line>, new_lines: Vec<Line>) -> StructuralDiff {
    let (left_changes, right_changes) = {
        let old_index = PathIndex::build(&old_lines);
        let new_index = PathIndex::build(&new_lines);
        (
            classify_all(&old_lines, &new_index, Side::Left),
            classify_all(&new_lines, &old_index, Side::Right),
        )
    };

    StructuralDiff {
        left: attach(old_lines, left_changes),
        right: attach(new_lines, right_changes),
    }
}

fn classify_all(lines: &[Line], other: &PathIndex<'_>, side: Side) -> Vec<Option<ChangeType>> {
    lines.iter().map(|line| classify(line, other, side)).collect()
}

fn classify(line: &Line, other: &PathIndex<'_>, side: Side) -> Option<ChangeType> {
    if !line.is_addressable() {
        return None;
    }
    let change = match other.get(line.path.as_str()) {
        None => side.missing_counterpart(),
        Some(counterpart) => match (&line.value, &counterpart.value) {
            (Some(a), Some(b)) if values_equal(a, b) => ChangeType::Unchanged,
            _ => ChangeType::Modified,
        },
    };
    Some(change)
}

/// Whole-document mode: every leaf, a root leaf included, is marked when the
/// documents differ anywhere, and left unchanged otherwise.
fn diff_whole(differ: bool, old_lines: Vec<Line>, new_lines: Vec<Line>) -> StructuralDiff {
    let mark = |side: Side, lines: Vec<Line>| -> Vec<DiffLine> {
        lines
            .into_iter()
            .map(|line| {
                if !line.is_value() {
                    DiffLine::neutral(line)
                } else if differ {
                    DiffLine::with_change(line, side.missing_counterpart())
                } else {
                    DiffLine::with_change(line, ChangeType::Unchanged)
                }
            })
            .collect()
    };

    StructuralDiff {
        left: mark(Side::Left, old_lines),
        right: mark(Side::Right, new_lines),
    }
}

fn attach(lines: Vec<Line>, changes: Vec<Option<ChangeType>>) -> Vec<DiffLine> {
    lines
        .into_iter()
        .zip(changes)
        .map(|(line, change)| DiffLine { line, change })
        .collect()
}
