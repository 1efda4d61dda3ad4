use html_escape::{encode_double_quoted_attribute, encode_text};
use markdown_forge_syntax::registry;

use super::RenderOptions;
use crate::parsing::blocks::Block;

pub const CONTAINER_CLASS: &str = "md-code-container";
pub const CODE_CLASS: &str = "md-code";

/// `md-code-<tag>`, or `md-code` when the fence has no tag.
pub fn code_class(language: Option<&str>) -> String {
    match language {
        Some(tag) => format!("{CODE_CLASS}-{}", encode_double_quoted_attribute(tag)),
        None => CODE_CLASS.to_string(),
    }
}

/// A code block wrapped in its container with a Copy button.
pub fn container(block: &Block, options: &RenderOptions) -> String {
    format!(
        concat!(
            "<div class=\"{container}\">\n",
            "<button onclick=\"copyToClipboard(this)\">Copy</button>\n",
            "<pre><code class=\"{class}\">{code}</code></pre>\n",
            "</div>\n",
        ),
        container = CONTAINER_CLASS,
        class = code_class(block.language.as_deref()),
        code = highlight(block, options),
    )
}

/// Highlighted HTML for a code block, or escaped plain text when the tag is
/// missing or unknown, or highlighting is off.
pub fn highlight(block: &Block, options: &RenderOptions) -> String {
    let plain = || encode_text(&block.content).into_owned();
    if !options.highlight_code {
        return plain();
    }
    let Some(tag) = block.language.as_deref() else {
        return plain();
    };

    let registry = registry();
    let key = registry.resolve_with(tag, &options.language_aliases);
    registry.highlight_code(&key, &block.content).unwrap_or_else(|| {
        log::debug!("no highlighter for language tag {tag:?}, emitting plain text");
        plain()
    })
}
