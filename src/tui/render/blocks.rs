use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{BlockKind, Weight};
use crate::tui::app::App;

/// Render the block list, one row per block. The focused row shows the
/// live edit buffer with a caret glyph; every other row shows the
/// committed store value.
pub fn render_blocks(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible = area.height as usize;
    if visible == 0 {
        return;
    }

    // Keep the focused row inside the scroll window
    if app.focused < app.scroll_offset {
        app.scroll_offset = app.focused;
    } else if app.focused >= app.scroll_offset + visible {
        app.scroll_offset = app.focused - visible + 1;
    }

    let bg = app.theme.background;
    let blocks = app.store.snapshot();
    let mut lines: Vec<Line> = Vec::new();

    for (index, block) in blocks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible)
    {
        let focused = index == app.focused;
        let marker_style = if focused {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(bg)
        };
        let marker = if focused { " \u{25B6} " } else { "   " };
        let mut spans: Vec<Span> = vec![Span::styled(marker, marker_style)];

        if block.kind == BlockKind::Divider {
            let rule_width = (area.width as usize).saturating_sub(6);
            spans.push(Span::styled(
                "\u{2500}".repeat(rule_width),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
            lines.push(Line::from(spans));
            continue;
        }

        let text = if focused { &app.edit.buffer } else { &block.value };
        let mut style = content_style(app, block.kind, focused);
        if block.weight == Weight::Bold {
            style = style.add_modifier(Modifier::BOLD);
        }

        if text.is_empty() && !focused {
            spans.push(Span::styled(
                block.kind.placeholder(),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        } else if focused {
            // Split at the caret and paint the caret glyph between halves
            let caret = app.edit.caret.min(app.edit.buffer.len());
            spans.push(Span::styled(app.edit.buffer[..caret].to_string(), style));
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
            spans.push(Span::styled(app.edit.buffer[caret..].to_string(), style));
            if app.edit.buffer.is_empty() {
                spans.push(Span::styled(
                    block.kind.placeholder(),
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }
        } else {
            spans.push(Span::styled(text.clone(), style));
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

fn content_style(app: &App, kind: BlockKind, focused: bool) -> Style {
    let bg = app.theme.background;
    let fg = match kind {
        BlockKind::InputShort(_) | BlockKind::InputLong => app.theme.input_fg,
        BlockKind::Label => app.theme.section_fg,
        _ if focused => app.theme.text_bright,
        _ => app.theme.text,
    };
    let style = Style::default().fg(fg).bg(bg);
    match kind {
        BlockKind::Heading1 | BlockKind::Heading2 | BlockKind::Heading3 | BlockKind::Label => {
            style.add_modifier(Modifier::BOLD)
        }
        _ => style,
    }
}
