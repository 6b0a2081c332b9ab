use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path::JsonPath;

/// Whether a line is a delimiter/header or a leaf value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Opening or closing bracket, or an object key header (`"key": {`).
    Structural,
    /// A primitive or null leaf.
    Value,
}

/// One flattened row of a JSON document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// 1-based position within its own sequence.
    pub line_number: usize,
    /// Display text including indentation, key prefix and trailing comma.
    pub content: String,
    /// Location of the value this line belongs to.
    pub path: JsonPath,
    /// The object key this line represents, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Raw leaf value. Only present on [`LineKind::Value`] lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub kind: LineKind,
    /// Nesting depth.
    pub indent: usize,
}

impl Line {
    /// Create a structural line.
    pub fn structural(
        line_number: usize,
        content: impl Into<String>,
        path: JsonPath,
        key: Option<String>,
        indent: usize,
    ) -> Self {
        Self {
            line_number,
            content: content.into(),
            path,
            key,
            value: None,
            kind: LineKind::Structural,
            indent,
        }
    }

    /// Create a leaf value line.
    pub fn value(
        line_number: usize,
        content: impl Into<String>,
        path: JsonPath,
        key: Option<String>,
        value: Value,
        indent: usize,
    ) -> Self {
        Self {
            line_number,
            content: content.into(),
            path,
            key,
            value: Some(value),
            kind: LineKind::Value,
            indent,
        }
    }

    pub fn is_structural(&self) -> bool {
        self.kind == LineKind::Structural
    }

    pub fn is_value(&self) -> bool {
        self.kind == LineKind::Value
    }

    /// Returns `true` if the line can be matched against the other side.
    ///
    /// Only leaf lines below the root are addressable.
    pub fn is_addressable(&self) -> bool {
        self.is_value() && !self.path.is_root()
    }

    /// Whether the rendered content ends with a separating comma.
    pub fn has_trailing_comma(&self) -> bool {
        self.content.ends_with(',')
    }
}
