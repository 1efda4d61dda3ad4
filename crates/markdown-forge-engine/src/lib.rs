//! # markdown-forge-engine
//!
//! Markdown to HTML conversion with highlighted code blocks and typed front
//! matter.
//!
//! ```text
//! markdown ──► parsing (front matter split, line classify, block build,
//!              inline render) ──► ParsedDoc ──► render ──► HTML
//!                   │
//!                   └──► metadata ──► Metadata
//! ```
//!
//! ```
//! use markdown_forge_engine::{RenderOptions, convert_markdown_to_html_with, extract_metadata};
//!
//! let md = "---\ntitle: Hi\n---\n# Hi\nSome *text*.";
//! let options = RenderOptions { copy_script: false, ..RenderOptions::default() };
//!
//! let html = convert_markdown_to_html_with(md, &options).unwrap();
//! assert_eq!(html, "<h1>Hi</h1>\n<p>Some <i>text</i>.</p>\n");
//!
//! let metadata = extract_metadata(md);
//! assert_eq!(metadata.get("title").and_then(|v| v.as_str()), Some("Hi"));
//! ```

pub mod error;
pub mod metadata;
pub mod parsing;
pub mod quotes;
pub mod render;

pub use error::ParseError;
pub use metadata::{Metadata, MetadataValue};
pub use parsing::{
    ParsedDoc,
    blocks::{Block, BlockKind},
    front_matter::FrontMatter,
    inline::render_inline,
    parse_document,
};
pub use render::{RenderOptions, render_block, render_document};

/// Convert a Markdown document to HTML with default options.
pub fn convert_markdown_to_html(markdown: &str) -> Result<String, ParseError> {
    convert_markdown_to_html_with(markdown, &RenderOptions::default())
}

pub fn convert_markdown_to_html_with(
    markdown: &str,
    options: &RenderOptions,
) -> Result<String, ParseError> {
    let doc = parse_document(markdown)?;
    Ok(render_document(&doc, options))
}

/// Front matter of a document as typed metadata. Documents without front
/// matter give an empty map.
pub fn extract_metadata(markdown: &str) -> Metadata {
    let text = parsing::document_text(markdown);
    let lines: Vec<&str> = text.split('\n').collect();
    FrontMatter::split(&lines)
        .map(|(front, _)| front.metadata())
        .unwrap_or_default()
}
