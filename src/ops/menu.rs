use crate::model::{self, Block, MenuOption, MenuSection};
use crate::ops::engine::CursorProbe;

/// Direction for selection movement while the menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMove {
    Up,
    Down,
}

/// Result of re-evaluating an open menu against the edited text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTransition {
    Stay,
    Closed,
}

/// The transient `/`-menu session overlaying one block. Exists only while
/// the trigger character is live in the buffer; there is no persistent
/// closed state to carry around, so "closed" is simply the absence of a
/// session.
#[derive(Debug, Clone)]
pub struct SlashMenu {
    /// Byte offset immediately after the typed `/`. The trigger character
    /// itself lives at `start - 1`.
    start: usize,
    /// Derived substring between `start` and the caret
    filter: String,
    /// 0-based index into the flattened filtered option list
    selected: usize,
    /// Filtered, sectioned options for the current filter
    sections: Vec<MenuSection>,
}

impl SlashMenu {
    fn open_at(start: usize) -> SlashMenu {
        SlashMenu {
            start,
            filter: String::new(),
            selected: 0,
            sections: model::filter_catalog(""),
        }
    }

    /// Trigger detection on a text change while no session is active.
    /// Opens iff the character immediately left of the caret is the
    /// trigger `/` (which covers the buffer being exactly `/`).
    pub fn detect(text: &str, probe: &dyn CursorProbe) -> Option<SlashMenu> {
        let caret = probe.selection().map_or(0, |s| s.start).min(text.len());
        if caret > 0 && text.is_char_boundary(caret) && text[..caret].ends_with('/') {
            return Some(SlashMenu::open_at(caret));
        }
        None
    }

    /// Re-derive the filter after a text or caret change. Closes when the
    /// caret moved strictly left of `start` or the character preceding the
    /// tracked span stopped being the trigger (the `/` got deleted).
    pub fn refresh(&mut self, text: &str, probe: &dyn CursorProbe) -> MenuTransition {
        let caret = crate::util::unicode::snap_to_char_boundary(
            text,
            probe.selection().map_or(0, |s| s.start).min(text.len()),
        );
        if caret < self.start {
            return MenuTransition::Closed;
        }
        if self.start > text.len()
            || !text.is_char_boundary(self.start)
            || !text[..self.start].ends_with('/')
        {
            return MenuTransition::Closed;
        }

        let filter = text[self.start..caret].to_string();
        if filter != self.filter {
            self.filter = filter;
            self.sections = model::filter_catalog(&self.filter);
            self.selected = 0;
        }
        MenuTransition::Stay
    }

    /// Advance or retreat the selection, wrapping at both ends modulo the
    /// flattened filtered option count.
    pub fn move_selection(&mut self, direction: MenuMove) {
        let count = self.option_count();
        if count == 0 {
            return;
        }
        self.selected = match direction {
            MenuMove::Down => {
                if self.selected + 1 >= count {
                    0
                } else {
                    self.selected + 1
                }
            }
            MenuMove::Up => {
                if self.selected == 0 {
                    count - 1
                } else {
                    self.selected - 1
                }
            }
        };
    }

    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn option_count(&self) -> usize {
        model::option_count(&self.sections)
    }

    pub fn selected_option(&self) -> Option<&MenuOption> {
        model::option_at(&self.sections, self.selected)
    }

    /// Build the block the selection commits to. `None` when the filtered
    /// list is empty — commit must be a guarded no-op then.
    pub fn commit(&self) -> Option<Block> {
        self.selected_option().map(MenuOption::build_block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockKind, InputKind};
    use crate::ops::engine::Selection;

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
    fn lone_slash_opens_with_start_after_trigger() {
        let menu = SlashMenu::detect("/", &at(1)).expect("menu should open");
        assert_eq!(menu.start(), 1);
        assert_eq!(menu.filter_text(), "");
        assert_eq!(menu.option_count(), 11);
    }

    #[test]
    fn slash_after_text_opens() {
        let menu = SlashMenu::detect("note/", &at(5)).expect("menu should open");
        assert_eq!(menu.start(), 5);
    }

    #[test]
    fn non_trigger_text_does_not_open() {
        assert!(SlashMenu::detect("hello", &at(5)).is_none());
        assert!(SlashMenu::detect("", &at(0)).is_none());
        // Slash present but not immediately left of the caret
        assert!(SlashMenu::detect("/x", &at(2)).is_none());
    }

    #[test]
    fn failed_caret_read_does_not_open() {
        assert!(SlashMenu::detect("/", &FixedProbe(None)).is_none());
    }

    #[test]
    fn typing_narrows_the_filter() {
        let mut menu = SlashMenu::detect("/", &at(1)).unwrap();
        assert_eq!(menu.refresh("/em", &at(3)), MenuTransition::Stay);
        assert_eq!(menu.filter_text(), "em");
        assert_eq!(menu.option_count(), 1);
        assert_eq!(menu.selected_option().unwrap().label, "Email");
    }

    #[test]
    fn caret_left_of_start_closes() {
        let mut menu = SlashMenu::detect("/", &at(1)).unwrap();
        assert_eq!(menu.refresh("/", &at(0)), MenuTransition::Closed);
    }

    #[test]
    fn deleting_the_trigger_closes() {
        let mut menu = SlashMenu::detect("a/", &at(2)).unwrap();
        // Backspace removed the slash; caret stayed at start via clamping
        assert_eq!(menu.refresh("a", &at(1)), MenuTransition::Closed);
    }

    #[test]
    fn filter_change_resets_selection() {
        let mut menu = SlashMenu::detect("/", &at(1)).unwrap();
        menu.move_selection(MenuMove::Down);
        menu.move_selection(MenuMove::Down);
        assert_eq!(menu.selected_index(), 2);
        menu.refresh("/h", &at(2));
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn selection_wraps_at_both_ends() {
        let mut menu = SlashMenu::detect("/", &at(1)).unwrap();
        menu.refresh("/hea", &at(4));
        assert_eq!(menu.option_count(), 3);

        menu.move_selection(MenuMove::Down);
        menu.move_selection(MenuMove::Down);
        assert_eq!(menu.selected_index(), 2);
        menu.move_selection(MenuMove::Down);
        assert_eq!(menu.selected_index(), 0);
        menu.move_selection(MenuMove::Up);
        assert_eq!(menu.selected_index(), 2);
    }

    #[test]
    fn commit_on_empty_filtered_list_is_none() {
        let mut menu = SlashMenu::detect("/", &at(1)).unwrap();
        menu.refresh("/zzz", &at(4));
        assert_eq!(menu.option_count(), 0);
        assert!(menu.commit().is_none());
        // Arrows on an empty list stay put
        menu.move_selection(MenuMove::Down);
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn commit_builds_the_selected_variant() {
        let mut menu = SlashMenu::detect("/", &at(1)).unwrap();
        menu.refresh("/em", &at(3));
        let block = menu.commit().expect("one option left");
        assert_eq!(block.kind, BlockKind::InputShort(InputKind::Email));
        assert!(block.value.is_empty());
    }

    #[test]
    fn sections_flatten_in_order_for_selection() {
        let menu = SlashMenu::detect("/", &at(1)).unwrap();
        // Index 5 is the first layout option, Heading 1
        let option = model::option_at(menu.sections(), 5).unwrap();
        assert_eq!(option.label, "Heading 1");
    }
}
