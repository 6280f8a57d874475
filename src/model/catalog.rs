use crate::model::block::{Block, BlockKind, InputKind};

/// One selectable entry in the slash menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub kind: BlockKind,
    pub label: &'static str,
    /// Single-cell glyph shown in the option row
    pub icon: &'static str,
}

impl MenuOption {
    /// Build a fresh empty block of this option's variant, carrying the
    /// sub-variant for short inputs.
    pub fn build_block(&self) -> Block {
        Block::new(self.kind, "")
    }
}

/// A labeled group of options, rendered with its own header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub label: &'static str,
    pub options: Vec<MenuOption>,
}

/// The full option catalog, in display order.
pub fn catalog() -> Vec<MenuSection> {
    vec![
        MenuSection {
            label: "Input blocks",
            options: vec![
                MenuOption {
                    kind: BlockKind::InputShort(InputKind::Text),
                    label: "Short answer",
                    icon: "\u{2500}",
                },
                MenuOption {
                    kind: BlockKind::InputLong,
                    label: "Long answer",
                    icon: "\u{2630}",
                },
                MenuOption {
                    kind: BlockKind::InputShort(InputKind::Number),
                    label: "Number",
                    icon: "#",
                },
                MenuOption {
                    kind: BlockKind::InputShort(InputKind::Email),
                    label: "Email",
                    icon: "@",
                },
                MenuOption {
                    kind: BlockKind::InputShort(InputKind::Phone),
                    label: "Phone number",
                    icon: "\u{260E}",
                },
            ],
        },
        MenuSection {
            label: "Layout blocks",
            options: vec![
                MenuOption {
                    kind: BlockKind::Heading1,
                    label: "Heading 1",
                    icon: "H",
                },
                MenuOption {
                    kind: BlockKind::Heading2,
                    label: "Heading 2",
                    icon: "H",
                },
                MenuOption {
                    kind: BlockKind::Heading3,
                    label: "Heading 3",
                    icon: "H",
                },
                MenuOption {
                    kind: BlockKind::Label,
                    label: "Label",
                    icon: "\u{25AB}",
                },
                MenuOption {
                    kind: BlockKind::Text,
                    label: "Text",
                    icon: "T",
                },
                MenuOption {
                    kind: BlockKind::Divider,
                    label: "Divider",
                    icon: "\u{2015}",
                },
            ],
        },
    ]
}

/// Filter the catalog with a case-insensitive substring match against
/// option labels. Sections left with zero options are dropped; section
/// and option order is preserved otherwise.
pub fn filter_catalog(query: &str) -> Vec<MenuSection> {
    let needle = query.trim().to_lowercase();
    catalog()
        .into_iter()
        .filter_map(|section| {
            let options: Vec<MenuOption> = section
                .options
                .into_iter()
                .filter(|o| o.label.to_lowercase().contains(&needle))
                .collect();
            if options.is_empty() {
                None
            } else {
                Some(MenuSection {
                    label: section.label,
                    options,
                })
            }
        })
        .collect()
}

/// Total option count across sections (the flattened length).
pub fn option_count(sections: &[MenuSection]) -> usize {
    sections.iter().map(|s| s.options.len()).sum()
}

/// The `index`-th option of the flattened, sectioned list.
pub fn option_at(sections: &[MenuSection], index: usize) -> Option<&MenuOption> {
    sections.iter().flat_map(|s| s.options.iter()).nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_keeps_everything() {
        let sections = filter_catalog("");
        assert_eq!(sections.len(), 2);
        assert_eq!(option_count(&sections), 11);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let sections = filter_catalog("sh");
        assert_eq!(option_count(&sections), 1);
        assert_eq!(option_at(&sections, 0).unwrap().label, "Short answer");

        let sections = filter_catalog("SHORT");
        assert_eq!(option_count(&sections), 1);
    }

    #[test]
    fn filter_trims_whitespace() {
        let sections = filter_catalog("  email ");
        assert_eq!(option_count(&sections), 1);
        assert_eq!(option_at(&sections, 0).unwrap().label, "Email");
    }

    #[test]
    fn emptied_sections_are_dropped() {
        // "head" matches only layout blocks
        let sections = filter_catalog("head");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label, "Layout blocks");
        assert_eq!(sections[0].options.len(), 3);
    }

    #[test]
    fn no_match_yields_empty_list() {
        let sections = filter_catalog("zzz");
        assert!(sections.is_empty());
        assert_eq!(option_count(&sections), 0);
        assert!(option_at(&sections, 0).is_none());
    }

    #[test]
    fn email_option_carries_sub_variant() {
        let sections = filter_catalog("email");
        let option = option_at(&sections, 0).unwrap();
        let block = option.build_block();
        assert_eq!(block.kind, BlockKind::InputShort(InputKind::Email));
        assert!(block.value.is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let sections = filter_catalog("n");
        let labels: Vec<&str> = sections
            .iter()
            .flat_map(|s| s.options.iter().map(|o| o.label))
            .collect();
        // Relative order must match the catalog
        assert_eq!(
            labels,
            vec![
                "Short answer",
                "Long answer",
                "Number",
                "Phone number",
                "Heading 1",
                "Heading 2",
                "Heading 3",
            ]
        );
    }
}
