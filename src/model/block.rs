use std::fmt;

use uuid::Uuid;

/// Opaque unique identifier for a block. Assigned at creation, stable for
/// the block's lifetime, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> BlockId {
        BlockId(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        BlockId::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sub-variant of a short input block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Number,
    Email,
    Phone,
}

/// Emphasis weight for text-like blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
}

/// The closed set of block variants. Adding a variant is a compile-time
/// exhaustiveness failure at every dispatch site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    InputShort(InputKind),
    InputLong,
    Text,
    Label,
    Heading1,
    Heading2,
    Heading3,
    Divider,
}

impl BlockKind {
    /// The variant substituted when the list would otherwise become empty,
    /// and the variant created by Enter.
    pub const DEFAULT: BlockKind = BlockKind::Text;

    /// Whether Enter may split this variant's content at the caret.
    /// Checked against the pre-edit variant.
    pub fn splittable(self) -> bool {
        match self {
            BlockKind::InputShort(_)
            | BlockKind::InputLong
            | BlockKind::Text
            | BlockKind::Label
            | BlockKind::Heading1
            | BlockKind::Heading2
            | BlockKind::Heading3
            | BlockKind::Divider => true,
        }
    }

    /// Whether the block carries editable text. A divider has none, so
    /// typing into it is ignored and Enter always appends.
    pub fn is_text_bearing(self) -> bool {
        match self {
            BlockKind::InputShort(_)
            | BlockKind::InputLong
            | BlockKind::Text
            | BlockKind::Label
            | BlockKind::Heading1
            | BlockKind::Heading2
            | BlockKind::Heading3 => true,
            BlockKind::Divider => false,
        }
    }

    /// Placeholder text shown dim while the block is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            BlockKind::InputShort(_) | BlockKind::InputLong => "Type placeholder text",
            BlockKind::Text => "Type '/' to insert blocks",
            BlockKind::Label => "Label",
            BlockKind::Heading1 => "Heading 1",
            BlockKind::Heading2 => "Heading 2",
            BlockKind::Heading3 => "Heading 3",
            BlockKind::Divider => "",
        }
    }
}

/// One addressable unit of content in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
    /// Plain text captured so far
    pub value: String,
    pub weight: Weight,
    /// Char-length cap for short inputs
    pub max_len: Option<usize>,
}

impl Block {
    /// Build a block of the given variant with a freshly generated id.
    pub fn new(kind: BlockKind, value: impl Into<String>) -> Block {
        Block {
            id: BlockId::new(),
            kind,
            value: value.into(),
            weight: Weight::Normal,
            max_len: match kind {
                BlockKind::InputShort(_) => Some(255),
                _ => None,
            },
        }
    }

    /// A fresh empty block of the default variant.
    pub fn default_block() -> Block {
        Block::new(BlockKind::DEFAULT, "")
    }

    pub fn is_default_variant(&self) -> bool {
        self.kind == BlockKind::DEFAULT
    }
}

/// Partial update merged into the block with a matching id.
/// `None` fields leave the existing value untouched.
#[derive(Debug, Clone)]
pub struct BlockPatch {
    pub id: BlockId,
    pub value: Option<String>,
    pub weight: Option<Weight>,
    pub max_len: Option<usize>,
}

impl BlockPatch {
    pub fn value(id: BlockId, value: impl Into<String>) -> BlockPatch {
        BlockPatch {
            id,
            value: Some(value.into()),
            weight: None,
            max_len: None,
        }
    }

    /// Apply this patch onto a block in place.
    pub(crate) fn merge_into(&self, block: &mut Block) {
        if let Some(value) = &self.value {
            block.value = value.clone();
        }
        if let Some(weight) = self.weight {
            block.weight = weight;
        }
        if let Some(max_len) = self.max_len {
            block.max_len = Some(max_len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_across_calls() {
        let a = Block::new(BlockKind::Text, "");
        let b = Block::new(BlockKind::Text, "");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn short_inputs_get_a_length_cap() {
        let block = Block::new(BlockKind::InputShort(InputKind::Email), "");
        assert_eq!(block.max_len, Some(255));
        let block = Block::new(BlockKind::Heading1, "");
        assert_eq!(block.max_len, None);
    }

    #[test]
    fn default_block_is_empty_text() {
        let block = Block::default_block();
        assert_eq!(block.kind, BlockKind::Text);
        assert!(block.value.is_empty());
        assert!(block.is_default_variant());
    }

    #[test]
    fn divider_bears_no_text() {
        assert!(!BlockKind::Divider.is_text_bearing());
        assert!(BlockKind::Heading3.is_text_bearing());
        assert!(BlockKind::InputShort(InputKind::Phone).is_text_bearing());
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut block = Block::new(BlockKind::Label, "hello");
        let patch = BlockPatch::value(block.id, "world");
        patch.merge_into(&mut block);
        assert_eq!(block.value, "world");
        assert_eq!(block.weight, Weight::Normal);
    }
}
