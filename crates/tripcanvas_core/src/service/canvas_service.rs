//! Canvas engine: pure operations over one activity's block sequence.
//!
//! # Invariants
//! - Inputs are never modified; each call returns a new sequence.
//! - New blocks are always appended at the end.
//! - Updates and removals keep every other block's position and id.
//! - Unknown ids (or a text update aimed at an image) are no-ops.

use crate::model::block::CanvasBlock;
use crate::model::ids::new_block_id;

/// Appends a new empty text block.
pub fn append_text(blocks: &[CanvasBlock]) -> Vec<CanvasBlock> {
    append_block(blocks, CanvasBlock::text(new_block_id()))
}

/// Appends a new image block holding `image_ref`.
pub fn append_image(blocks: &[CanvasBlock], image_ref: impl Into<String>) -> Vec<CanvasBlock> {
    append_block(blocks, CanvasBlock::image(new_block_id(), image_ref))
}

/// Appends a prebuilt block.
pub fn append_block(blocks: &[CanvasBlock], block: CanvasBlock) -> Vec<CanvasBlock> {
    let mut next = Vec::with_capacity(blocks.len() + 1);
    next.extend_from_slice(blocks);
    next.push(block);
    next
}

/// Replaces the content of the text block with `block_id`.
pub fn update_text(
    blocks: &[CanvasBlock],
    block_id: &str,
    new_content: impl Into<String>,
) -> Vec<CanvasBlock> {
    let mut next = blocks.to_vec();
    let target = next.iter_mut().find_map(|block| match block {
        CanvasBlock::Text { id, content } if id.as_str() == block_id => Some(content),
        _ => None,
    });
    if let Some(content) = target {
        *content = new_content.into();
    }
    next
}

/// Removes the block with `block_id`.
pub fn remove(blocks: &[CanvasBlock], block_id: &str) -> Vec<CanvasBlock> {
    blocks
        .iter()
        .filter(|block| block.id() != block_id)
        .cloned()
        .collect()
}

/// Block that should receive input focus after a change: the last block, if
/// it is an empty text block.
pub fn focus_target(blocks: &[CanvasBlock]) -> Option<&str> {
    blocks
        .last()
        .filter(|block| block.is_empty_text())
        .map(CanvasBlock::id)
}
