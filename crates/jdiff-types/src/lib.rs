//! Foundation types for jdiff.
//!
//! This crate provides the line model shared by the diff engine and the
//! renderer. Every other jdiff crate depends on `jdiff-types`.
//!
//! # Key Types
//!
//! - [`JsonPath`] -- Dot/bracket location of a value inside a document
//! - [`Line`] / [`LineKind`] -- One flattened, renderable row of a document
//! - [`DiffLine`] -- A line annotated with its [`ChangeType`]
//! - [`Side`] -- Which half of a side-by-side diff a line belongs to

pub mod change;
pub mod line;
pub mod path;

pub use change::{ChangeType, DiffLine, Side};
pub use line::{Line, LineKind};
pub use path::JsonPath;
