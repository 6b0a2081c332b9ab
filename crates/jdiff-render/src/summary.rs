//! Per-side headings: title plus a change counter.

use std::fmt;

use jdiff_diff::{CodeDiff, StructuralDiff};
use serde::Serialize;

use crate::config::Titles;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SideSummary {
    pub title: String,
    pub count: usize,
    /// Singular or plural noun matching `count`.
    pub noun: &'static str,
}

impl SideSummary {
    /// Old side of a structural diff: removed plus modified leaves.
    pub fn left(diff: &StructuralDiff, titles: &Titles) -> Self {
        let count = diff.left_changes();
        Self {
            title: titles.old.clone(),
            count,
            noun: plural(count, "removal", "removals"),
        }
    }

    /// New side of a structural diff: added plus modified leaves.
    pub fn right(diff: &StructuralDiff, titles: &Titles) -> Self {
        let count = diff.right_changes();
        Self {
            title: titles.new.clone(),
            count,
            noun: plural(count, "addition", "additions"),
        }
    }

    /// Both sides of a code diff, counted in lines.
    pub fn code(diff: &CodeDiff, titles: &Titles) -> (Self, Self) {
        let lines = |title: &str, count: usize| Self {
            title: title.to_string(),
            count,
            noun: plural(count, "line", "lines"),
        };
        (
            lines(&titles.old, diff.left.len()),
            lines(&titles.new, diff.right.len()),
        )
    }

    /// The counter text, e.g. `3 removals`.
    pub fn label(&self) -> String {
        format!("{} {}", self.count, self.noun)
    }
}

impl fmt::Display for SideSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.label())
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}
