use ratatui::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub input_fg: Color,
    pub input_border: Color,
    pub selection_bg: Color,
    pub section_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            input_fg: Color::Rgb(0x99, 0x97, 0x9E),
            input_border: Color::Rgb(0x3C, 0x42, 0x57),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            section_fg: Color::Rgb(0xCC, 0x66, 0xFF),
        }
    }
}
