//! Block-level segmenter.
//!
//! The block parser is line-oriented and recognizes:
//! - Fenced code blocks (with a language tag)
//! - Opaque passthrough markers (`{{kind payload}}`)
//! - ATX headings
//! - Horizontal rules
//! - Block quotes (one block per `> ` line)
//! - List items (one block per item)
//! - Pipe tables
//! - Paragraphs

mod model;
mod opaque;
mod parser;
mod table;

pub use model::{Block, DEFAULT_CODE_LANGUAGE, blocks_to_markup};
pub use opaque::{OpaqueMarker, parse_opaque_marker};
pub use parser::BlockParser;
pub use table::{is_separator_row, is_table_line, split_row};

/// A run of consecutive list items of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRun {
    /// Index of the first item in the block slice.
    pub start: usize,
    /// One past the last item.
    pub end: usize,
    /// Whether the items are numbered.
    pub ordered: bool,
    /// Number of the first item (ordered runs only).
    pub first_index: Option<u32>,
}

/// Find the list a block at `start` belongs to.
///
/// The segmenter emits one block per list item; renderers call this to
/// group neighbouring items of the same kind into one list container.
/// Returns `None` if `blocks[start]` is not a list item.
pub fn list_run(blocks: &[Block], start: usize) -> Option<ListRun> {
    let Some(Block::ListItem { ordered, index, .. }) = blocks.get(start) else {
        return None;
    };

    let end = blocks[start..]
        .iter()
        .position(|b| !matches!(b, Block::ListItem { ordered: o, .. } if o == ordered))
        .map_or(blocks.len(), |n| start + n);

    Some(ListRun {
        start,
        end,
        ordered: *ordered,
        first_index: if *ordered { *index } else { None },
    })
}

/// Iterate over every list run in a block sequence.
pub fn list_runs(blocks: &[Block]) -> impl Iterator<Item = ListRun> + '_ {
    let mut i = 0;
    std::iter::from_fn(move || {
        while i < blocks.len() {
            if let Some(run) = list_run(blocks, i) {
                i = run.end;
                return Some(run);
            }
            i += 1;
        }
        None
    })
}
