use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(msg) = &app.status_message {
        Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    } else {
        let hint = if app.menu.is_some() {
            "\u{2191}\u{2193} select  Enter insert  Esc close"
        } else {
            "Enter new block  / insert menu  Ctrl+Q quit"
        };
        let hint_width = hint.chars().count();
        let padding = width.saturating_sub(hint_width);
        Line::from(vec![
            Span::styled(" ".repeat(padding), Style::default().bg(bg)),
            Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)),
        ])
    };

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(bg)),
        area,
    );
}
