//! The renderer contract: classified lines to display segments.
//!
//! A rendered line carries everything a front end needs to draw one row: the
//! line number, a `+`/`-`/space prefix glyph, a background, and the content
//! split into typed segments. Concatenating the segment texts reproduces the
//! line's content exactly.

use jdiff_types::{ChangeType, DiffLine, Side};
use serde::Serialize;
use serde_json::Value;

use crate::config::RenderConfig;
use crate::sensitive::{detect_sensitive, SensitiveKind};

/// Row background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    None,
    Removed,
    Added,
}

/// What a piece of line content represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Indent,
    Key,
    Colon,
    Bracket,
    String,
    Number,
    Boolean,
    Null,
    Comma,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
    /// Set on the value of a changed line.
    pub emphasized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<SensitiveKind>,
}

impl Segment {
    fn plain(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            emphasized: false,
            sensitive: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedLine {
    pub line_number: usize,
    pub glyph: char,
    pub background: Background,
    pub segments: Vec<Segment>,
}

impl RenderedLine {
    /// The line content without styling.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// The sensitive marker of the value segment, if any.
    pub fn sensitive(&self) -> Option<SensitiveKind> {
        self.segments.iter().find_map(|s| s.sensitive)
    }
}

/// Background and glyph for a line's change on `side`.
///
/// A modified line reads as removed on the left and added on the right.
pub fn highlight(change: Option<ChangeType>, side: Side) -> (Background, char) {
    match (side, change) {
        (Side::Left, Some(ChangeType::Removed | ChangeType::Modified)) => (Background::Removed, '-'),
        (Side::Right, Some(ChangeType::Added | ChangeType::Modified)) => (Background::Added, '+'),
        _ => (Background::None, ' '),
    }
}

/// Render every line of one side.
pub fn render_side(lines: &[DiffLine], side: Side, config: &RenderConfig) -> Vec<RenderedLine> {
    lines
        .iter()
        .map(|line| render_line(line, side, config))
        .collect()
}

/// Split one classified line into display segments.
pub fn render_line(diff_line: &DiffLine, side: Side, config: &RenderConfig) -> RenderedLine {
    let line = &diff_line.line;
    let (background, glyph) = highlight(diff_line.change, side);

    let content = line.content.as_str();
    let body_start = content.len() - content.trim_start().len();
    let mut segments = Vec::new();
    if body_start > 0 {
        segments.push(Segment::plain(SegmentKind::Indent, &content[..body_start]));
    }

    let mut rest = &content[body_start..];
    if let Some(key) = &line.key {
        let quoted = Value::from(key.as_str()).to_string();
        if let Some(after) = rest
            .strip_prefix(quoted.as_str())
            .and_then(|r| r.strip_prefix(": "))
        {
            segments.push(Segment::plain(SegmentKind::Key, quoted));
            segments.push(Segment::plain(SegmentKind::Colon, ": "));
            rest = after;
        }
    }

    let (body, comma) = match rest.strip_suffix(',') {
        Some(body) if line.has_trailing_comma() => (body, true),
        _ => (rest, false),
    };

    if !body.is_empty() {
        let segment = match &line.value {
            Some(value) if line.is_value() => Segment {
                kind: value_kind(value),
                text: body.to_string(),
                emphasized: diff_line.is_changed(),
                sensitive: if config.detect_sensitive {
                    detect_sensitive(value)
                } else {
                    None
                },
            },
            _ => Segment::plain(SegmentKind::Bracket, body),
        };
        segments.push(segment);
    }
    if comma {
        segments.push(Segment::plain(SegmentKind::Comma, ","));
    }

    RenderedLine {
        line_number: line.line_number,
        glyph,
        background,
        segments,
    }
}

fn value_kind(value: &Value) -> SegmentKind {
    match value {
        Value::Null => SegmentKind::Null,
        Value::Bool(_) => SegmentKind::Boolean,
        Value::Number(_) => SegmentKind::Number,
        Value::String(_) => SegmentKind::String,
        // Leaf lines never hold containers.
        Value::Array(_) | Value::Object(_) => SegmentKind::Bracket,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jdiff_diff::{diff_values, diff_values_with, DiffConfig};
    use serde_json::json;

    fn kinds(line: &RenderedLine) -> Vec<SegmentKind> {
        line.segments.iter().map(|s| s.kind).collect()
    }

    fn render_all(old: Value, new: Value) -> (Vec<RenderedLine>, Vec<RenderedLine>) {
        let diff = diff_values(&old, &new).unwrap();
        let config = RenderConfig::default();
        (
            render_side(&diff.left, Side::Left, &config),
            render_side(&diff.right, Side::Right, &config),
        )
    }

    #[test]
    fn plain_text_round_trips_content() {
        let old = json!({"a": [1, {"b": "x,"}], "c": null, "d": {}});
        let diff = diff_values(&old, &json!({})).unwrap();
        let config = RenderConfig::default();
        for line in &diff.left {
            assert_eq!(render_line(line, Side::Left, &config).plain_text(), line.line.content);
        }
    }

    #[test]
    fn key_value_segments() {
        let (left, _) = render_all(json!({"a": 1, "b": "x"}), json!({"a": 1, "b": "x"}));
        assert_eq!(
            kinds(&left[1]),
            vec![
                SegmentKind::Indent,
                SegmentKind::Key,
                SegmentKind::Colon,
                SegmentKind::Number,
                SegmentKind::Comma,
            ]
        );
        assert_eq!(left[1].segments[1].text, "\"a\"");
        assert_eq!(
            kinds(&left[2]),
            vec![SegmentKind::Indent, SegmentKind::Key, SegmentKind::Colon, SegmentKind::String]
        );
        assert_eq!(kinds(&left[0]), vec![SegmentKind::Bracket]);
    }

    #[test]
    fn header_line_segments() {
        let (left, _) = render_all(json!({"stops": [true]}), json!({}));
        assert_eq!(
            kinds(&left[1]),
            vec![SegmentKind::Indent, SegmentKind::Key, SegmentKind::Colon, SegmentKind::Bracket]
        );
        assert_eq!(kinds(&left[2]), vec![SegmentKind::Indent, SegmentKind::Boolean]);
    }

    #[test]
    fn array_leaf_has_no_key() {
        let (left, _) = render_all(json!([null, 2]), json!([null, 2]));
        assert_eq!(
            kinds(&left[1]),
            vec![SegmentKind::Indent, SegmentKind::Null, SegmentKind::Comma]
        );
    }

    #[test]
    fn modified_line_glyphs_and_backgrounds() {
        let (left, right) = render_all(json!({"a": 1}), json!({"a": 2}));
        assert_eq!(left[1].glyph, '-');
        assert_eq!(left[1].background, Background::Removed);
        assert_eq!(right[1].glyph, '+');
        assert_eq!(right[1].background, Background::Added);
        assert!(left[1].segments.iter().any(|s| s.emphasized));
    }

    #[test]
    fn unchanged_and_structural_lines_are_plain() {
        let (left, right) = render_all(json!({"a": 1}), json!({"a": 1, "b": 2}));
        for line in &left {
            assert_eq!(line.glyph, ' ');
            assert_eq!(line.background, Background::None);
            assert!(line.segments.iter().all(|s| !s.emphasized));
        }
        assert_eq!(right[0].glyph, ' ');
        assert_eq!(right[2].glyph, '+');
    }

    #[test]
    fn whole_mode_marks_left_removed() {
        let diff = diff_values_with(&json!({"a": 1}), &json!({"a": 2}), &DiffConfig::whole()).unwrap();
        let rendered = render_line(&diff.left[1], Side::Left, &RenderConfig::default());
        assert_eq!(rendered.glyph, '-');
    }

    #[test]
    fn sensitive_values_are_marked() {
        let (left, _) = render_all(
            json!({"ssn": "XXX-XX-1234", "key": "[REDACTED]", "name": "Acme"}),
            json!({}),
        );
        assert_eq!(left[1].sensitive(), Some(SensitiveKind::Masked));
        assert_eq!(left[2].sensitive(), Some(SensitiveKind::Redacted));
        assert_eq!(left[3].sensitive(), None);
    }

    #[test]
    fn sensitive_detection_can_be_disabled() {
        let diff = diff_values(&json!({"pw": "****"}), &json!({})).unwrap();
        let config = RenderConfig {
            detect_sensitive: false,
            ..Default::default()
        };
        assert_eq!(render_line(&diff.left[1], Side::Left, &config).sensitive(), None);
    }

    #[test]
    fn highlight_table() {
        assert_eq!(highlight(None, Side::Left), (Background::None, ' '));
        assert_eq!(highlight(Some(ChangeType::Unchanged), Side::Right), (Background::None, ' '));
        assert_eq!(highlight(Some(ChangeType::Removed), Side::Left), (Background::Removed, '-'));
        assert_eq!(highlight(Some(ChangeType::Added), Side::Right), (Background::Added, '+'));
        assert_eq!(highlight(Some(ChangeType::Added), Side::Left), (Background::None, ' '));
    }
}
