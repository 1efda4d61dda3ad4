//! # Snapshot Testing Support
//!
//! Utilities for testing conversions via snapshot assertions and invariant
//! checks.
//!
//! - **`normalize`**: a compact, stable text outline of a parsed document
//!   for `insta` snapshots
//! - **`invariants`**: structural checks on rendered HTML (one container per
//!   code block, balanced highlight spans, no front matter leaking)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
