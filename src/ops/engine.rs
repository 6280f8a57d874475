use crate::model::BlockKind;
use crate::util::unicode;

/// A text selection in byte offsets into the active buffer. A collapsed
/// caret has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn caret(offset: usize) -> Selection {
        Selection {
            start: offset,
            end: offset,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// Capability for reading the caret from the active editing surface,
/// injected so the split/merge decisions are testable without a live
/// surface. `None` means no active selection range.
pub trait CursorProbe {
    fn selection(&self) -> Option<Selection>;
}

/// What an Enter keypress does to the current block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnterOutcome {
    /// Caret mid-text: the prefix stays in the current block's buffer
    /// (committed on next blur) and the suffix becomes the value of a new
    /// default-variant block inserted immediately after.
    Split { kept: String, moved: String },
    /// Empty text or caret at position 0: insert a new empty
    /// default-variant block after the current one, text untouched.
    Append,
    /// The variant does not participate in Enter handling.
    Ignored,
}

/// Decide what Enter does, given the block's pre-edit variant, its raw
/// buffered text, and the caret. A failed caret read counts as offset 0,
/// preferring the append path over an incorrect split.
pub fn on_enter(kind: BlockKind, text: &str, probe: &dyn CursorProbe) -> EnterOutcome {
    if !kind.splittable() {
        return EnterOutcome::Ignored;
    }

    let caret = probe.selection().map_or(0, |s| s.start).min(text.len());
    if text.is_empty() || caret == 0 {
        return EnterOutcome::Append;
    }

    let split = unicode::snap_to_char_boundary(text, caret);
    if split == 0 {
        return EnterOutcome::Append;
    }
    EnterOutcome::Split {
        kept: text[..split].to_string(),
        moved: text[split..].to_string(),
    }
}

/// Whether a Backspace keypress triggers merge-removal of the current
/// block: only with a collapsed selection at the very beginning. A failed
/// caret read counts as offset 0.
pub fn backspace_merges(probe: &dyn CursorProbe) -> bool {
    match probe.selection() {
        Some(sel) => sel.start == 0 && sel.end == 0,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Probe stub with a fixed answer.
    struct FixedProbe(Option<Selection>);

    impl CursorProbe for FixedProbe {
        fn selection(&self) -> Option<Selection> {
            self.0
        }
    }

    fn at(offset: usize) -> FixedProbe {
        FixedProbe(Some(Selection::caret(offset)))
    }

    #[test]
    fn enter_mid_text_splits_at_the_caret() {
        let outcome = on_enter(BlockKind::Text, "HelloWorld", &at(5));
        assert_eq!(
            outcome,
            EnterOutcome::Split {
                kept: "Hello".into(),
                moved: "World".into(),
            }
        );
    }

    #[test]
    fn enter_at_end_moves_nothing() {
        let outcome = on_enter(BlockKind::Text, "Hello", &at(5));
        assert_eq!(
            outcome,
            EnterOutcome::Split {
                kept: "Hello".into(),
                moved: "".into(),
            }
        );
    }

    #[test]
    fn enter_on_empty_text_appends() {
        assert_eq!(on_enter(BlockKind::Text, "", &at(0)), EnterOutcome::Append);
    }

    #[test]
    fn enter_at_position_zero_appends() {
        assert_eq!(
            on_enter(BlockKind::Heading2, "Hello", &at(0)),
            EnterOutcome::Append
        );
    }

    #[test]
    fn enter_with_failed_caret_read_appends() {
        let probe = FixedProbe(None);
        assert_eq!(
            on_enter(BlockKind::Text, "Hello", &probe),
            EnterOutcome::Append
        );
    }

    #[test]
    fn enter_caret_past_end_is_clamped() {
        let outcome = on_enter(BlockKind::Label, "hi", &at(99));
        assert_eq!(
            outcome,
            EnterOutcome::Split {
                kept: "hi".into(),
                moved: "".into(),
            }
        );
    }

    #[test]
    fn enter_splits_on_grapheme_safe_boundary() {
        // Caret byte offset inside a multi-byte char snaps left
        let text = "a\u{4F60}b"; // a 你 b — 你 is 3 bytes at offset 1
        let outcome = on_enter(BlockKind::Text, text, &at(2));
        assert_eq!(
            outcome,
            EnterOutcome::Split {
                kept: "a".into(),
                moved: "\u{4F60}b".into(),
            }
        );
    }

    #[test]
    fn backspace_merges_only_at_collapsed_zero() {
        assert!(backspace_merges(&at(0)));
        assert!(!backspace_merges(&at(3)));
        assert!(!backspace_merges(&FixedProbe(Some(Selection {
            start: 0,
            end: 4
        }))));
        assert!(backspace_merges(&FixedProbe(None)));
    }

    #[test]
    fn every_variant_participates_in_enter() {
        use crate::model::InputKind;
        for kind in [
            BlockKind::InputShort(InputKind::Email),
            BlockKind::InputLong,
            BlockKind::Text,
            BlockKind::Label,
            BlockKind::Heading1,
            BlockKind::Heading2,
            BlockKind::Heading3,
            BlockKind::Divider,
        ] {
            assert_ne!(on_enter(kind, "", &at(0)), EnterOutcome::Ignored);
        }
    }
}
