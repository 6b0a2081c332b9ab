//! Diff engine for jdiff.
//!
//! Flattens two JSON documents into renderable lines and classifies every
//! leaf line against the other document, for side-by-side display.
//!
//! # Key Types
//!
//! - [`flatten`] / [`flatten_with`] -- Document to ordered [`Line`](jdiff_types::Line) sequence
//! - [`PathIndex`] -- Path to leaf line lookup for one side
//! - [`StructuralDiff`] -- Path-matched diff (added/removed/modified/unchanged leaves)
//! - [`CodeDiff`] / [`CodeLine`] -- Text diff of pretty-printed documents
//! - [`FieldChange`] -- One entry of an audit change set
//! - [`DiffConfig`] / [`DiffMode`] -- Engine configuration

pub mod changes;
pub mod code_diff;
pub mod config;
pub mod equality;
pub mod error;
pub mod flatten;
pub mod index;
pub mod structural;

#[cfg(test)]
pub(crate) mod test_support;

pub use changes::{parse_changes, split_changes, FieldChange};
pub use code_diff::{diff_code, pretty_lines, CodeDiff, CodeLine};
pub use config::{DiffConfig, DiffMode};
pub use equality::values_equal;
pub use error::{DiffError, DiffResult};
pub use flatten::{flatten, flatten_with};
pub use index::PathIndex;
pub use structural::{diff_lines, diff_values, diff_values_with, StructuralDiff};
