//! # Block Parsing
//!
//! Two-phase block parsing over the lines of a document.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` of local facts (blank, heading, fence marker, list marker)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` state machine
//!    (`None | Fence | List`) emits `Block`s as they close
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `BlockKind`
//! - **`kinds`**: block syntax with owned delimiters (BlockQuote, CodeFence, Heading, ListItem)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - Every line is consumed by exactly one parsing decision

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{Block, BlockKind};
