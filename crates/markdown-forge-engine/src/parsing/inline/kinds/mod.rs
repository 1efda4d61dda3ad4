//! # Inline Kinds
//!
//! Inline constructs, each owning its syntax delimiters and its markup.
//!
//! - **`CodeSpan`**: `` `code` ``, a raw zone that suppresses other parsing
//! - **`Link`**: `[text](url)` and `![alt](url)`
//! - **`RawHtml`**: tags already present in the text
//! - **`Emphasis`**: `**bold**`, `__bold__`, `*italic*`, `_italic_`

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod raw_html;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
pub use raw_html::RawHtml;
