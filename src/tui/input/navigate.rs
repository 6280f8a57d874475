use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, FocusDir};

/// ArrowUp/ArrowDown move focus between blocks in list order, clamped at
/// the ends. Only reachable while no slash menu is open.
pub(super) fn handle_focus_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_focus(FocusDir::Up),
        KeyCode::Down => app.move_focus(FocusDir::Down),
        _ => {}
    }
}
