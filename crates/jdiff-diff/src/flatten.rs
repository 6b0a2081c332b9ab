//! Flattening: turn a JSON document into an ordered sequence of lines.
//!
//! The walk is depth-first in document order. Every container contributes one
//! opening and one closing structural line; every leaf contributes one value
//! line. A container stored under an object key opens with a header line
//! (`"key": {`) instead of a bare bracket.

use jdiff_types::{JsonPath, Line};
use serde_json::Value;

use crate::config::DiffConfig;
use crate::error::{DiffError, DiffResult};

/// Flatten a document with the default configuration.
pub fn flatten(value: &Value) -> DiffResult<Vec<Line>> {
    flatten_with(value, &DiffConfig::default())
}

/// Flatten a document using the indentation and depth limit from `config`.
pub fn flatten_with(value: &Value, config: &DiffConfig) -> DiffResult<Vec<Line>> {
    let mut flattener = Flattener::new(config);
    flattener.visit(value, JsonPath::root(), None, 0, false)?;
    Ok(flattener.lines)
}

/// Accumulates lines while walking a document.
///
/// Line numbers are derived from the number of lines already emitted, so a
/// single flattener numbers one document sequentially from 1.
struct Flattener<'c> {
    config: &'c DiffConfig,
    lines: Vec<Line>,
}

impl<'c> Flattener<'c> {
    fn new(config: &'c DiffConfig) -> Self {
        Self {
            config,
            lines: Vec::new(),
        }
    }

    fn next_line_number(&self) -> usize {
        self.lines.len() + 1
    }

    fn pad(&self, indent: usize) -> String {
        " ".repeat(indent * self.config.indent_width)
    }

    fn visit(
        &mut self,
        value: &Value,
        path: JsonPath,
        key: Option<&str>,
        indent: usize,
        trailing_comma: bool,
    ) -> DiffResult<()> {
        match value {
            Value::Object(map) => {
                self.open(&path, key, indent, '{')?;
                let len = map.len();
                for (i, (child_key, child)) in map.iter().enumerate() {
                    self.visit(
                        child,
                        path.key(child_key),
                        Some(child_key.as_str()),
                        indent + 1,
                        i + 1 < len,
                    )?;
                }
                self.close(path, indent, '}', trailing_comma);
            }
            Value::Array(items) => {
                self.open(&path, key, indent, '[')?;
                let len = items.len();
                for (i, child) in items.iter().enumerate() {
                    self.visit(child, path.index(i), None, indent + 1, i + 1 < len)?;
                }
                self.close(path, indent, ']', trailing_comma);
            }
            leaf => {
                let content = format!(
                    "{}{}{}{}",
                    self.pad(indent),
                    key_prefix(key),
                    leaf,
                    comma(trailing_comma)
                );
                let line = Line::value(
                    self.next_line_number(),
                    content,
                    path,
                    key.map(str::to_string),
                    leaf.clone(),
                    indent,
                );
                self.lines.push(line);
            }
        }
        Ok(())
    }

    fn open(
        &mut self,
        path: &JsonPath,
        key: Option<&str>,
        indent: usize,
        bracket: char,
    ) -> DiffResult<()> {
        // Containers nest one level per indent step.
        if indent >= self.config.max_depth {
            return Err(DiffError::DepthLimitExceeded {
                path: path.clone(),
                limit: self.config.max_depth,
            });
        }
        let content = format!("{}{}{}", self.pad(indent), key_prefix(key), bracket);
        let line = Line::structural(
            self.next_line_number(),
            content,
            path.clone(),
            key.map(str::to_string),
            indent,
        );
        self.lines.push(line);
        Ok(())
    }

    fn close(&mut self, path: JsonPath, indent: usize, bracket: char, trailing_comma: bool) {
        let content = format!("{}{}{}", self.pad(indent), bracket, comma(trailing_comma));
        let line = Line::structural(self.next_line_number(), content, path, None, indent);
        self.lines.push(line);
    }
}

fn key_prefix(key: Option<&str>) -> String {
    match key {
        Some(k) => format!("{}: ", Value::from(k)),
        None => String::new(),
    }
}

fn comma(trailing: bool) -> &'static str {
    if trailing {
        ","
    } else {
        ""
    }
}
