//! Rendering contract for jdiff.
//!
//! Turns classified diff lines into display segments. Also provides the
//! pieces a front end needs around them: sensitive-value markers, per-side
//! summaries, and viewport windowing for large diffs.
//!
//! # Key Types
//!
//! - [`RenderedLine`] / [`Segment`] -- One display row split into typed pieces
//! - [`SensitiveKind`] -- Masked or redacted leaf values
//! - [`SideSummary`] -- Panel title plus change counter
//! - [`Viewport`] / [`Layout`] -- Windowed rendering of large diffs
//! - [`RenderConfig`] -- Titles, thresholds and viewport geometry

pub mod config;
pub mod segment;
pub mod sensitive;
pub mod summary;
pub mod window;

pub use config::{RenderConfig, Titles};
pub use segment::{highlight, render_line, render_side, Background, RenderedLine, Segment, SegmentKind};
pub use sensitive::{detect_sensitive, SensitiveKind};
pub use summary::SideSummary;
pub use window::{window, Layout, Viewport};
