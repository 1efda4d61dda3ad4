use std::collections::HashSet;

use crate::parsing::inline::render_inline;
use crate::render;

use super::{
    classify::LineClass,
    kinds::{CodeFence, FenceKind, ListKind},
    types::{Block, BlockKind},
};

#[derive(Debug)]
enum LeafState {
    None,
    Fence {
        kind: FenceKind,
        language: Option<String>,
        lines: Vec<String>,
    },
    List {
        kind: ListKind,
        items: Vec<Block>,
    },
}

/// Block construction state machine (phase 2).
///
/// Every line is consumed exactly once. A line that would be consumed twice
/// halts the builder, which then ignores further input.
pub struct BlockBuilder {
    leaf: LeafState,
    consumed: HashSet<usize>,
    halted: bool,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            consumed: HashSet::new(),
            halted: false,
            out: vec![],
        }
    }

    /// Feed the next line. Returns `false` once the builder has halted.
    pub fn push(&mut self, c: &LineClass) -> bool {
        if self.halted {
            return false;
        }
        if !self.consumed.insert(c.index) {
            log::warn!(
                "line {} ({:?}) has already been processed, stopping",
                c.index + 1,
                c.trimmed
            );
            self.halted = true;
            return false;
        }

        if self.in_fence() {
            self.consume_fence_line(c);
            return true;
        }

        if self.extend_list(c) {
            return true;
        }
        self.flush_list();

        if c.is_blank {
            return true;
        }

        if let Some((level, text)) = c.heading {
            self.out
                .push(Block::new(BlockKind::Heading(level), render_inline(text)));
        } else if let Some(sig) = c.fence_sig {
            self.leaf = LeafState::Fence {
                kind: CodeFence::kind(sig),
                language: CodeFence::language(c.trimmed, sig),
                lines: vec![],
            };
        } else if let Some((kind, text)) = c.list {
            self.leaf = LeafState::List {
                kind,
                items: vec![list_item(text)],
            };
        } else {
            self.out
                .push(Block::new(BlockKind::Paragraph, render_inline(c.trimmed)));
        }
        true
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        self.flush_fence();
        self.out
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence { kind, lines, .. } = &mut self.leaf else {
            return;
        };
        if !CodeFence::closes(*kind, c.fence_sig) {
            lines.push(c.raw.to_string());
            return;
        }
        if let LeafState::Fence {
            language, lines, ..
        } = std::mem::replace(&mut self.leaf, LeafState::None)
        {
            self.out.push(Block::code(lines.join("\n"), language));
        }
    }

    /// Add `c` to the open list when it carries the same marker kind.
    fn extend_list(&mut self, c: &LineClass) -> bool {
        match (&mut self.leaf, c.list) {
            (LeafState::List { kind, items }, Some((line_kind, text))) if *kind == line_kind => {
                items.push(list_item(text));
                true
            }
            _ => false,
        }
    }

    fn flush_list(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::List { kind, items } = prev {
            let content: String = items
                .iter()
                .map(|item| render::element(item.kind.tag(), &item.content))
                .collect();
            self.out.push(Block::new(BlockKind::list(kind), content));
        } else {
            self.leaf = prev; // put back non-list leaf (e.g. fence)
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            language, lines, ..
        } = prev
        {
            log::debug!(
                "unterminated code fence ({} lines), closing at end of document",
                lines.len()
            );
            self.out.push(Block::code(lines.join("\n"), language));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn list_item(text: &str) -> Block {
    Block::new(BlockKind::ListItem, render_inline(text))
}
