//! # Inline Rendering
//!
//! Inline markup of headings, list items and paragraphs, rendered straight
//! to HTML.
//!
//! ## Pass Order
//!
//! 1. smart quotes folded
//! 2. code spans (raw zones) parked as placeholders
//! 3. images, then links (link text gets emphasis)
//! 4. raw HTML tags parked
//! 5. bold, then italic
//! 6. blockquote prefix
//! 7. placeholders restored, newest first
//!
//! Parking a rendered fragment behind a placeholder is what keeps later
//! passes from matching inside it.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod placeholders;

pub use parser::render_inline;
pub use placeholders::Placeholders;
