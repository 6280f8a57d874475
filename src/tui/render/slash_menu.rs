use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::MenuOption;
use crate::tui::app::App;

const MAX_VISIBLE: usize = 10;
const INNER_WIDTH: u16 = 32;

enum Row<'a> {
    Section(&'a str),
    Option { flat: usize, option: &'a MenuOption },
}

/// Render the slash menu popup, anchored under the focused block row.
pub fn render_slash_menu(frame: &mut Frame, app: &App, area: Rect) {
    let Some(menu) = &app.menu else {
        return;
    };

    let bg = app.theme.background;
    let dim = app.theme.dim;
    let highlight = app.theme.highlight;
    let sel_bg = app.theme.selection_bg;

    // Flatten sections into rows; options keep their flat index so the
    // selection can be located inside the window.
    let mut rows: Vec<Row> = Vec::new();
    let mut flat = 0;
    for section in menu.sections() {
        rows.push(Row::Section(section.label));
        for option in &section.options {
            rows.push(Row::Option { flat, option });
            flat += 1;
        }
    }

    let selected_row = rows
        .iter()
        .position(|r| matches!(r, Row::Option { flat, .. } if *flat == menu.selected_index()))
        .unwrap_or(0);

    let visible = rows.len().clamp(1, MAX_VISIBLE);
    let scroll = if selected_row >= visible {
        selected_row - visible + 1
    } else {
        0
    };

    let mut lines: Vec<Line> = Vec::new();
    if rows.is_empty() {
        lines.push(Line::from(Span::styled(
            " No search result",
            Style::default().fg(dim).bg(bg),
        )));
    }
    for row in rows.iter().skip(scroll).take(visible) {
        match row {
            Row::Section(label) => {
                lines.push(Line::from(Span::styled(
                    format!(" {label}"),
                    Style::default()
                        .fg(app.theme.section_fg)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            Row::Option { flat, option } => {
                let is_selected = *flat == menu.selected_index();
                let row_bg = if is_selected { sel_bg } else { bg };
                let indicator = if is_selected { " \u{25B6} " } else { "   " };
                let indicator_style = if is_selected {
                    Style::default()
                        .fg(highlight)
                        .bg(row_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().bg(row_bg)
                };
                let label_style = if is_selected {
                    Style::default()
                        .fg(app.theme.text_bright)
                        .bg(row_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(app.theme.text).bg(row_bg)
                };
                let used = 3 + 2 + option.label.chars().count();
                let pad = (INNER_WIDTH as usize).saturating_sub(used);
                lines.push(Line::from(vec![
                    Span::styled(indicator, indicator_style),
                    Span::styled(format!("{} ", option.icon), Style::default().fg(dim).bg(row_bg)),
                    Span::styled(option.label, label_style),
                    Span::styled(" ".repeat(pad), Style::default().bg(row_bg)),
                ]));
            }
        }
    }

    let popup_h = (lines.len() as u16) + 2;
    let popup_w = INNER_WIDTH + 2;

    // Anchor below the focused row; flip above when there is no room.
    let focused_row = (app.focused - app.scroll_offset.min(app.focused)) as u16;
    let anchor_y = area.y + focused_row + 1;
    let y = if anchor_y + popup_h <= area.y + area.height {
        anchor_y
    } else {
        area.y + focused_row.saturating_sub(popup_h)
    };
    let x = (area.x + 3).min(area.right().saturating_sub(popup_w));
    let popup = Rect::new(
        x,
        y,
        popup_w.min(area.width),
        popup_h.min(area.height),
    );

    frame.render_widget(Clear, popup);
    let title = if menu.filter_text().is_empty() {
        " blocks ".to_string()
    } else {
        format!(" /{} ", menu.filter_text())
    };
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.input_border).bg(bg))
                .title(Span::styled(title, Style::default().fg(highlight).bg(bg))),
        ),
        popup,
    );
}
