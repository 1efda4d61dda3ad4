//! # HTML Serialization
//!
//! Block elements to HTML. Text blocks carry pre-rendered inline HTML and
//! are only wrapped here; code blocks go through the highlighter.

pub mod code;
pub mod script;

use std::collections::BTreeMap;

use crate::parsing::{
    ParsedDoc,
    blocks::{Block, BlockKind},
};

pub use script::COPY_SCRIPT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append the copy-to-clipboard script after the last block.
    pub copy_script: bool,
    /// Highlight fenced code with a known language tag.
    pub highlight_code: bool,
    /// Extra fence tag aliases, consulted before the built-in ones.
    pub language_aliases: BTreeMap<String, String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            copy_script: true,
            highlight_code: true,
            language_aliases: BTreeMap::new(),
        }
    }
}

/// `<tag>content</tag>`
pub fn element(tag: &str, content: &str) -> String {
    format!("<{tag}>{content}</{tag}>")
}

pub fn render_block(block: &Block, options: &RenderOptions) -> String {
    let tag = block.kind.tag();
    match block.kind {
        BlockKind::Code => code::container(block, options),
        BlockKind::UnorderedList | BlockKind::OrderedList => {
            format!("<{tag}>\n{}\n</{tag}>\n", block.content)
        }
        BlockKind::ListItem => element(tag, &block.content),
        BlockKind::Heading(_) | BlockKind::Paragraph => {
            format!("{}\n", element(tag, &block.content))
        }
    }
}

pub fn render_document(doc: &ParsedDoc, options: &RenderOptions) -> String {
    let mut html: String = doc
        .blocks
        .iter()
        .map(|block| render_block(block, options))
        .collect();
    if options.copy_script {
        html.push_str(COPY_SCRIPT);
    }
    html
}
