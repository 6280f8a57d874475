pub mod blocks;
pub mod slash_menu;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title (2 rows) | block list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + separator
            Constraint::Min(1),    // block list
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    blocks::render_blocks(frame, app, chunks[1]);

    // Slash menu overlay (rendered on top of the block list)
    if app.menu.is_some() {
        slash_menu::render_slash_menu(frame, app, chunks[1]);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

fn render_title(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let bg = app.theme.background;
    let title = Line::from(vec![
        Span::styled(
            " blockform ",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} blocks", app.store.len()),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]);
    let sep = Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    frame.render_widget(
        Paragraph::new(vec![title, sep]).style(Style::default().bg(bg)),
        area,
    );
}
