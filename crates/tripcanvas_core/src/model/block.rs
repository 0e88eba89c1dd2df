//! Canvas block model.
//!
//! # Responsibility
//! - Represent one unit of an activity's free-form note.
//!
//! # Invariants
//! - A block is either text or image; there is no mixed shape.
//! - Image references are fixed at creation; only text content mutates.
//! - Block order lives in the containing sequence, never in the block.

use super::ids::{new_block_id, BlockId};
use serde::{Deserialize, Serialize};

/// Closed set of block kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Text,
    Image,
}

/// One text or image block of a note canvas.
///
/// Serialized with a `type` tag (`text` / `image`) and the payload as
/// `content` or `url`. A block read without an id gets a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CanvasBlock {
    Text {
        #[serde(default = "new_block_id")]
        id: BlockId,
        #[serde(default)]
        content: String,
    },
    Image {
        #[serde(default = "new_block_id")]
        id: BlockId,
        #[serde(default)]
        url: String,
    },
}

impl CanvasBlock {
    /// Creates an empty text block.
    pub fn text(id: impl Into<BlockId>) -> Self {
        Self::Text {
            id: id.into(),
            content: String::new(),
        }
    }

    /// Creates an image block holding an opaque image reference.
    pub fn image(id: impl Into<BlockId>, url: impl Into<String>) -> Self {
        Self::Image {
            id: id.into(),
            url: url.into(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Text { id, .. } | Self::Image { id, .. } => id,
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Text { .. } => BlockKind::Text,
            Self::Image { .. } => BlockKind::Image,
        }
    }

    /// Returns whether this is a text block with no content yet.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text { content, .. } if content.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{BlockKind, CanvasBlock};

    #[test]
    fn text_block_wire_shape() {
        let block = CanvasBlock::Text {
            id: "b1".to_string(),
            content: "hello".to_string(),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json, serde_json::json!({"type": "text", "id": "b1", "content": "hello"}));
    }

    #[test]
    fn image_block_wire_shape() {
        let block = CanvasBlock::image("b2", "blob:photo");
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json, serde_json::json!({"type": "image", "id": "b2", "url": "blob:photo"}));
    }

    #[test]
    fn text_block_without_content_reads_as_empty() {
        let block: CanvasBlock =
            serde_json::from_value(serde_json::json!({"id": "b3", "type": "text"})).unwrap();
        assert!(block.is_empty_text());
        assert_eq!(block.kind(), BlockKind::Text);
        assert_eq!(block.id(), "b3");
    }
}
