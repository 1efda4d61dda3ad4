pub mod blocks;
pub mod front_matter;
pub mod inline;
pub mod snapshot;

use std::borrow::Cow;

use crate::error::ParseError;
use crate::quotes;

use blocks::{Block, BlockBuilder, MarkdownLineClassifier};
use front_matter::FrontMatter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub front_matter: Option<FrontMatter>,
    pub blocks: Vec<Block>,
}

/// Leading whitespace removed and smart quotes folded. Both the block parser
/// and the metadata extractor see the document through this.
pub fn document_text(markdown: &str) -> Cow<'_, str> {
    quotes::normalize(markdown.trim_start())
}

pub fn parse_document(markdown: &str) -> Result<ParsedDoc, ParseError> {
    if markdown.is_empty() {
        return Err(ParseError::InvalidInput("empty markdown document".into()));
    }

    let text = document_text(markdown);
    let lines: Vec<&str> = text.split('\n').collect();

    let (front_matter, body_start) = match FrontMatter::split(&lines) {
        Some((front, body_start)) => (Some(front), body_start),
        None => (None, 0),
    };

    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();
    for (index, line) in lines.iter().enumerate().skip(body_start) {
        if !builder.push(&classifier.classify(index, line)) {
            break;
        }
    }

    Ok(ParsedDoc {
        front_matter,
        blocks: builder.finish(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocks::BlockKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_is_rejected() {
        assert_eq!(
            parse_document(""),
            Err(ParseError::InvalidInput("empty markdown document".into()))
        );
    }

    #[test]
    fn blank_lines_only() {
        let doc = parse_document("\n\n\n").expect("non-empty input");
        assert!(doc.blocks.is_empty());
        assert_eq!(doc.front_matter, None);
    }

    #[test]
    fn heading_then_paragraph() {
        let doc = parse_document("# Title\nBody text.").expect("parses");
        assert_eq!(
            doc.blocks,
            vec![
                Block::new(BlockKind::Heading(1), "Title"),
                Block::new(BlockKind::Paragraph, "Body text."),
            ]
        );
    }

    #[test]
    fn front_matter_after_leading_blank_lines() {
        let doc = parse_document("\n\n---\ntitle: x\n---\n# Hi").expect("parses");
        assert_eq!(
            doc.front_matter,
            Some(FrontMatter {
                lines: vec!["title: x".into()]
            })
        );
        assert_eq!(doc.blocks, vec![Block::new(BlockKind::Heading(1), "Hi")]);
    }

    #[test]
    fn single_rule_is_a_paragraph() {
        let doc = parse_document("---\ntext").expect("parses");
        assert_eq!(doc.front_matter, None);
        assert_eq!(
            doc.blocks,
            vec![
                Block::new(BlockKind::Paragraph, "---"),
                Block::new(BlockKind::Paragraph, "text"),
            ]
        );
    }

    #[test]
    fn rule_later_in_document_stays_text() {
        let doc = parse_document("intro\n---\nmore\n---").expect("parses");
        assert_eq!(doc.front_matter, None);
        assert_eq!(doc.blocks.len(), 4);
    }

    #[test]
    fn smart_quotes_are_folded_in_code() {
        let doc = parse_document("```js\nlet s = \u{201C}x\u{201D};\n```").expect("parses");
        assert_eq!(doc.blocks, vec![Block::code("let s = \"x\";", Some("js".into()))]);
    }

    #[test]
    fn crlf_lines() {
        let doc = parse_document("# A\r\n```\r\ncode\r\n```\r\n").expect("parses");
        assert_eq!(
            doc.blocks,
            vec![
                Block::new(BlockKind::Heading(1), "A"),
                Block::code("code", None),
            ]
        );
    }
}
