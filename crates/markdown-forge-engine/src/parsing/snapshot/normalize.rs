use std::fmt;

use crate::parsing::{ParsedDoc, blocks::BlockKind};

/// One line per front matter entry and per block:
///
/// ```text
/// front: title: Hi
/// h1: Hi
/// code(js): const x = 1;⏎x++;
/// ```
pub struct Snap {
    pub lines: Vec<String>,
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

pub fn normalize(doc: &ParsedDoc) -> Snap {
    let front = doc
        .front_matter
        .iter()
        .flat_map(|front| front.lines.iter())
        .map(|line| format!("front: {line}"));

    let blocks = doc.blocks.iter().map(|b| {
        let label = match (b.kind, b.language.as_deref()) {
            (BlockKind::Code, Some(lang)) => format!("code({lang})"),
            (kind, _) => kind.tag().to_string(),
        };
        format!("{label}: {}", b.content.replace('\n', "⏎"))
    });

    Snap {
        lines: front.chain(blocks).collect(),
    }
}
