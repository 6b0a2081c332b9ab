use serde::{Deserialize, Serialize};

/// How leaf lines are classified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffMode {
    /// Match leaves by path and compare their values.
    #[default]
    Smart,
    /// Mark every leaf on both sides if the documents differ at all.
    Whole,
}

/// Configuration for flattening and diffing.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Leaf classification strategy.
    pub mode: DiffMode,
    /// Maximum container nesting before flattening fails.
    pub max_depth: usize,
    /// Spaces per nesting level in rendered line content.
    pub indent_width: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            mode: DiffMode::Smart,
            max_depth: 128,
            indent_width: 2,
        }
    }
}

impl DiffConfig {
    /// Default configuration with the whole-document mode selected.
    pub fn whole() -> Self {
        Self {
            mode: DiffMode::Whole,
            ..Default::default()
        }
    }
}
