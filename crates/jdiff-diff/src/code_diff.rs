//! Code diff: line-by-line comparison of pretty-printed documents.
//!
//! Both documents are serialized with two-space indentation and compared as
//! text using the `similar` crate (Myers diff algorithm). Unlike the
//! structural diff, lines are not matched by path: a line is removed or added
//! purely by its text.

use jdiff_types::ChangeType;
use serde::Serialize;
use serde_json::Value;
use similar::{ChangeTag, TextDiff};
use tracing::debug;

use crate::error::DiffResult;

/// One line of pretty-printed JSON with its classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CodeLine {
    /// 1-based position within its own side.
    pub line_number: usize,
    pub text: String,
    /// `Removed` (left), `Added` (right) or `Unchanged`.
    pub change: ChangeType,
}

/// The result of diffing two pretty-printed documents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CodeDiff {
    pub left: Vec<CodeLine>,
    pub right: Vec<CodeLine>,
}

impl CodeDiff {
    /// Returns `true` if the two documents print identically.
    pub fn is_empty(&self) -> bool {
        self.additions() == 0 && self.deletions() == 0
    }

    /// Number of lines added on the right.
    pub fn additions(&self) -> usize {
        self.right
            .iter()
            .filter(|l| l.change == ChangeType::Added)
            .count()
    }

    /// Number of lines removed on the left.
    pub fn deletions(&self) -> usize {
        self.left
            .iter()
            .filter(|l| l.change == ChangeType::Removed)
            .count()
    }
}

/// Pretty-print a document into lines. `null` prints as no lines at all.
pub fn pretty_lines(value: &Value) -> DiffResult<Vec<String>> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    let text = serde_json::to_string_pretty(value)?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Compute a text diff between the pretty-printed forms of two documents.
pub fn diff_code(old: &Value, new: &Value) -> DiffResult<CodeDiff> {
    let old_lines = pretty_lines(old)?;
    let new_lines = pretty_lines(new)?;

    let mut left = unchanged(&old_lines);
    let mut right = unchanged(&new_lines);

    let old_text = join(&old_lines);
    let new_text = join(&new_lines);
    let text_diff = TextDiff::from_lines(&old_text, &new_text);

    for change in text_diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Equal => {}
            ChangeTag::Delete => {
                if let Some(line) = change.old_index().and_then(|i| left.get_mut(i)) {
                    line.change = ChangeType::Removed;
                }
            }
            ChangeTag::Insert => {
                if let Some(line) = change.new_index().and_then(|i| right.get_mut(i)) {
                    line.change = ChangeType::Added;
                }
            }
        }
    }

    let diff = CodeDiff { left, right };
    debug!(
        old_lines = diff.left.len(),
        new_lines = diff.right.len(),
        additions = diff.additions(),
        deletions = diff.deletions(),
        "computed code diff"
    );
    Ok(diff)
}

fn unchanged(lines: &[String]) -> Vec<CodeLine> {
    lines
        .iter()
        .enumerate()
        .map(|(i, text)| CodeLine {
            line_number: i + 1,
            text: text.clone(),
            change: ChangeType::Unchanged,
        })
        .collect()
}

fn join(lines: &[String]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn changed_texts(lines: &[CodeLine]) -> Vec<&str> {
        lines
            .iter()
            .filter(|l| l.change != ChangeType::Unchanged)
            .map(|l| l.text.as_str())
            .collect()
    }

    #[test]
    fn identical_documents_no_diff() {
        let value = json!({"a": 1, "b": [true, null]});
        let diff = diff_code(&value, &value).unwrap();
        assert!(diff.is_empty());
        assert_eq!(diff.left.len(), diff.right.len());
    }

    #[test]
    fn pretty_print_uses_two_spaces() {
        let lines = pretty_lines(&json!({"a": {"b": 1}})).unwrap();
        assert_eq!(lines, vec!["{", "  \"a\": {", "    \"b\": 1", "  }", "}"]);
    }

    #[test]
    fn null_document_has_no_lines() {
        assert!(pretty_lines(&json!(null)).unwrap().is_empty());

        let diff = diff_code(&json!(null), &json!({"a": 1})).unwrap();
        assert!(diff.left.is_empty());
        assert_eq!(diff.additions(), 3);
    }

    #[test]
    fn single_value_change() {
        let diff = diff_code(&json!({"a": 1, "b": 2}), &json!({"a": 1, "b": 3})).unwrap();
        assert_eq!(changed_texts(&diff.left), vec!["  \"b\": 2"]);
        assert_eq!(changed_texts(&diff.right), vec!["  \"b\": 3"]);
    }

    #[test]
    fn key_addition_touches_previous_comma() {
        let diff = diff_code(&json!({"a": 1}), &json!({"a": 1, "b": 2})).unwrap();
        assert_eq!(diff.deletions(), 1);
        assert_eq!(changed_texts(&diff.right), vec!["  \"a\": 1,", "  \"b\": 2"]);
    }

    #[test]
    fn array_insertion_is_aligned() {
        let diff = diff_code(&json!([1, 2, 3]), &json!([1, 9, 2, 3])).unwrap();
        assert_eq!(diff.deletions(), 0);
        assert_eq!(changed_texts(&diff.right), vec!["  9,"]);
    }

    #[test]
    fn line_numbers_are_per_side() {
        let diff = diff_code(&json!({"a": 1}), &json!([1, 2])).unwrap();
        for (i, line) in diff.left.iter().enumerate() {
            assert_eq!(line.line_number, i + 1);
        }
        for (i, line) in diff.right.iter().enumerate() {
            assert_eq!(line.line_number, i + 1);
        }
    }
}
