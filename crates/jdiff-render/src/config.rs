use serde::{Deserialize, Serialize};

use crate::window::Viewport;

/// Panel headings for the two sides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Titles {
    pub old: String,
    pub new: String,
}

impl Default for Titles {
    fn default() -> Self {
        Self {
            old: "Previous Version".into(),
            new: "Current Version".into(),
        }
    }
}

/// Configuration for turning diff lines into display output.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub titles: Titles,
    /// Either side longer than this switches to windowed output.
    pub virtualize_threshold: usize,
    /// Estimated height of one row, in pixels.
    pub row_height: usize,
    /// Rows rendered beyond each edge of the visible window.
    pub overscan: usize,
    /// Attach sensitive-value markers to masked or redacted leaves.
    pub detect_sensitive: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            titles: Titles::default(),
            virtualize_threshold: 500,
            row_height: 24,
            overscan: 10,
            detect_sensitive: true,
        }
    }
}

impl RenderConfig {
    /// The viewport geometry described by this configuration.
    pub fn viewport(&self) -> Viewport {
        Viewport {
            row_height: self.row_height,
            overscan: self.overscan,
        }
    }
}
