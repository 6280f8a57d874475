use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::menu::MenuMove;

use crate::tui::app::{App, CaretTarget};

/// Handle a key while the slash menu is open. Returns true when the key
/// was consumed; unconsumed keys keep flowing to the edit surface, which
/// is what lets typing refine the filter.
pub(super) fn handle_menu_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.menu = None;
            true
        }
        KeyCode::Up => {
            if let Some(menu) = &mut app.menu {
                menu.move_selection(MenuMove::Up);
            }
            true
        }
        KeyCode::Down => {
            if let Some(menu) = &mut app.menu {
                menu.move_selection(MenuMove::Down);
            }
            true
        }
        KeyCode::Enter => {
            commit_selection(app);
            true
        }
        _ => false,
    }
}

/// Replace the focused block with the selected option's block. The
/// trigger text and filter are discarded with the old block; the fresh
/// block starts empty with the caret at its start. With no matching
/// options there is nothing to commit and the menu stays open.
fn commit_selection(app: &mut App) {
    let Some(menu) = &app.menu else {
        return;
    };
    let Some(block) = menu.commit() else {
        return;
    };
    let new_id = block.id;
    app.store.replace(app.edit.block_id, block);
    app.menu = None;
    app.focus_id(new_id, CaretTarget::Start);
}
