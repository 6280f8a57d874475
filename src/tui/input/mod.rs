mod edit;
mod menu;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

/// Handle a key event. An open slash menu gets first refusal on
/// navigation and commit keys; everything else flows to the edit surface.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        app.should_quit = true;
        return;
    }

    if app.menu.is_some() && menu::handle_menu_key(app, key) {
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Down => navigate::handle_focus_key(app, key),
        _ => edit::handle_edit_key(app, key),
    }
}
