use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{Block, BlockKind};
use crate::ops::engine::{self, EnterOutcome};
use crate::util::unicode;

use crate::tui::app::{App, CaretTarget};

pub(super) fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => insert_char(app, c),
        KeyCode::Backspace => handle_backspace(app),
        KeyCode::Delete => delete_forward(app),
        KeyCode::Enter => {
            // Shift+Enter is reserved for soft line breaks; pass it through
            if !key.modifiers.contains(KeyModifiers::SHIFT) {
                handle_enter(app);
            }
        }
        KeyCode::Left => {
            app.edit.caret =
                unicode::prev_grapheme_boundary(&app.edit.buffer, app.edit.caret).unwrap_or(0);
            app.sync_menu_after_caret_move();
        }
        KeyCode::Right => {
            app.edit.caret = unicode::next_grapheme_boundary(&app.edit.buffer, app.edit.caret)
                .unwrap_or(app.edit.buffer.len());
            app.sync_menu_after_caret_move();
        }
        KeyCode::Home => {
            app.edit.caret = 0;
            app.sync_menu_after_caret_move();
        }
        KeyCode::End => {
            app.edit.caret = app.edit.buffer.len();
            app.sync_menu_after_caret_move();
        }
        _ => {}
    }
}

fn insert_char(app: &mut App, c: char) {
    let block = app.focused_block();
    if !block.kind.is_text_bearing() {
        return;
    }
    if let Some(max) = block.max_len
        && app.edit.buffer.chars().count() >= max
    {
        return;
    }
    let caret = app.edit.caret;
    app.edit.buffer.insert(caret, c);
    app.edit.caret = caret + c.len_utf8();
    app.sync_menu_after_edit();
}

fn delete_forward(app: &mut App) {
    let caret = app.edit.caret;
    if caret >= app.edit.buffer.len() {
        return;
    }
    let next = unicode::next_grapheme_boundary(&app.edit.buffer, caret)
        .unwrap_or(app.edit.buffer.len());
    app.edit.buffer.replace_range(caret..next, "");
    app.sync_menu_after_edit();
}

/// Backspace either deletes the grapheme before the caret, or, at the
/// very start of the block, merges it into the previous one: remaining
/// text is appended to the previous block's value, the block is removed,
/// and focus lands at the end of the merged text.
fn handle_backspace(app: &mut App) {
    if !engine::backspace_merges(&app.edit) {
        let caret = app.edit.caret;
        let prev = unicode::prev_grapheme_boundary(&app.edit.buffer, caret).unwrap_or(0);
        app.edit.buffer.replace_range(prev..caret, "");
        app.edit.caret = prev;
        app.sync_menu_after_edit();
        return;
    }

    if app.focused == 0 {
        return;
    }
    let removed = app.edit.block_id;
    let previous = app.store.blocks()[app.focused - 1].id;
    if !app.edit.buffer.is_empty() {
        app.store.append_to_previous(removed, &app.edit.buffer);
        // The trailing text now lives in the previous block; drop it here
        // so blur-commit cannot write it back.
        app.edit.buffer.clear();
    }
    app.store.remove(removed);
    app.focus_id(previous, CaretTarget::End);
}

/// Enter splits the focused block at the caret, or appends an empty text
/// block after it when there is nothing to carry over.
fn handle_enter(app: &mut App) {
    let kind = app.focused_block().kind;
    match engine::on_enter(kind, &app.edit.buffer, &app.edit) {
        EnterOutcome::Split { kept, moved } => {
            app.edit.buffer = kept;
            app.edit.caret = app.edit.caret.min(app.edit.buffer.len());
            app.commit_buffer();
            let new_block = Block::new(BlockKind::DEFAULT, moved);
            let new_id = new_block.id;
            app.store.insert_after(new_block, Some(app.edit.block_id));
            app.focus_id(new_id, CaretTarget::Start);
        }
        EnterOutcome::Append => {
            let new_block = Block::new(BlockKind::DEFAULT, String::new());
            let new_id = new_block.id;
            app.store.insert_after(new_block, Some(app.edit.block_id));
            app.focus_id(new_id, CaretTarget::Start);
        }
        EnterOutcome::Ignored => {}
    }
}
