use std::fs;
use std::path::Path;

use anyhow::Context;
use jdiff_diff::DiffConfig;
use jdiff_render::RenderConfig;
use serde::{Deserialize, Serialize};

/// Settings file layout: one table per crate configuration.
///
/// ```toml
/// [diff]
/// mode = "whole"
///
/// [render]
/// virtualize_threshold = 200
/// titles = { old = "Before", new = "After" }
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub diff: DiffConfig,
    pub render: RenderConfig,
}

impl Settings {
    /// Load settings from `path`, or defaults when no file is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        let settings: Settings = toml::from_str(&text)
            .with_context(|| format!("parsing settings {}", path.display()))?;
        anyhow::ensure!(
            settings.render.row_height > 0,
            "invalid settings {}: render.row_height must be at least 1",
            path.display()
        );
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jdiff_diff::DiffMode;
    use std::io::Write;

    fn write_settings(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn no_file_gives_defaults() {
        let s = Settings::load(None).unwrap();
        assert_eq!(s.diff.mode, DiffMode::Smart);
        assert_eq!(s.render.virtualize_threshold, 500);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_settings(
            r#"
            [diff]
            mode = "whole"

            [render]
            titles = { old = "Before" }
            "#,
        );
        let s = Settings::load(Some(file.path())).unwrap();
        assert_eq!(s.diff.mode, DiffMode::Whole);
        assert_eq!(s.diff.max_depth, 128);
        assert_eq!(s.render.titles.old, "Before");
        assert_eq!(s.render.titles.new, "Current Version");
        assert_eq!(s.render.overscan, 10);
    }

    #[test]
    fn empty_file_is_default() {
        let file = write_settings("");
        let s = Settings::load(Some(file.path())).unwrap();
        assert_eq!(s.render.row_height, 24);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/jdiff.toml"))).unwrap_err();
        assert!(err.to_string().contains("reading settings"));
    }

    #[test]
    fn zero_row_height_is_rejected() {
        let file = write_settings("[render]\nrow_height = 0\n");
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("row_height must be at least 1"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_settings("[diff]\nmax_depth = \"deep\"\n");
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("parsing settings"));
    }
}
