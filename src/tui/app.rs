use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{BlockId, BlockPatch};
use crate::ops::engine::{CursorProbe, Selection};
use crate::ops::menu::{MenuTransition, SlashMenu};
use crate::ops::store::BlockStore;

use super::input;
use super::render;
use super::theme::Theme;

/// Error type for the TUI boundary
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Direction of cross-block focus movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDir {
    Up,
    Down,
}

/// Where a deferred caret placement should land within the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretTarget {
    Start,
    End,
}

/// A caret placement scheduled for the top of the next event-loop
/// iteration, after the surface has been re-laid-out. Guarded by a
/// generation counter: a placement superseded by a later focus change is
/// a no-op, and last write wins.
#[derive(Debug, Clone, Copy)]
pub struct PendingCaret {
    pub generation: u64,
    pub target: CaretTarget,
}

/// Transient editing buffer for the focused block. Uncommitted text lives
/// here; it reconciles into the store on blur (focus change) or on
/// structural operations, never on every keystroke.
#[derive(Debug, Clone)]
pub struct EditSurface {
    pub block_id: BlockId,
    pub buffer: String,
    /// Collapsed caret, byte offset into `buffer`
    pub caret: usize,
}

impl EditSurface {
    fn for_block(block_id: BlockId, value: &str) -> EditSurface {
        EditSurface {
            block_id,
            buffer: value.to_string(),
            caret: value.len(),
        }
    }
}

impl CursorProbe for EditSurface {
    fn selection(&self) -> Option<Selection> {
        Some(Selection::caret(self.caret))
    }
}

/// Main application state
pub struct App {
    pub store: BlockStore,
    /// Index of the focused block within the current snapshot
    pub focused: usize,
    pub edit: EditSurface,
    /// Open slash-menu session for the focused block, if any
    pub menu: Option<SlashMenu>,
    pub pending_caret: Option<PendingCaret>,
    pub caret_generation: u64,
    /// First visible block row
    pub scroll_offset: usize,
    pub should_quit: bool,
    pub theme: Theme,
    pub status_message: Option<String>,
}

impl App {
    pub fn new() -> App {
        let store = BlockStore::new();
        let first = &store.blocks()[0];
        let edit = EditSurface::for_block(first.id, &first.value);
        App {
            store,
            focused: 0,
            edit,
            menu: None,
            pending_caret: None,
            caret_generation: 0,
            scroll_offset: 0,
            should_quit: false,
            theme: Theme::default(),
            status_message: None,
        }
    }

    /// The focused block in the current snapshot.
    pub fn focused_block(&self) -> &crate::model::Block {
        let index = self.focused.min(self.store.len() - 1);
        &self.store.blocks()[index]
    }

    /// Blur-commit: reconcile the transient buffer into the store. No-op
    /// when nothing changed or the block vanished.
    pub fn commit_buffer(&mut self) {
        let unchanged = self
            .store
            .get(self.edit.block_id)
            .is_none_or(|b| b.value == self.edit.buffer);
        if unchanged {
            return;
        }
        self.store
            .update(BlockPatch::value(self.edit.block_id, self.edit.buffer.clone()));
    }

    /// Move focus to the block at `index`, committing the old buffer
    /// first and scheduling the caret for the target position. Any open
    /// menu belongs to the old surface and dies with it.
    pub fn focus_index(&mut self, index: usize, caret: CaretTarget) {
        self.commit_buffer();
        self.menu = None;
        self.focused = index.min(self.store.len() - 1);
        let block = &self.store.blocks()[self.focused];
        self.edit = EditSurface::for_block(block.id, &block.value);
        self.schedule_caret(caret);
    }

    /// Move focus to the block with `id`; falls back to clamping the
    /// current index when the id is gone.
    pub fn focus_id(&mut self, id: BlockId, caret: CaretTarget) {
        match self.store.position(id) {
            Some(index) => self.focus_index(index, caret),
            None => self.focus_index(self.focused, caret),
        }
    }

    /// Clamped ArrowUp/ArrowDown movement across surfaces in list order.
    /// Disabled by the caller while a menu is open.
    pub fn move_focus(&mut self, direction: FocusDir) {
        let last = self.store.len() - 1;
        let target = match direction {
            FocusDir::Up => self.focused.saturating_sub(1),
            FocusDir::Down => (self.focused + 1).min(last),
        };
        if target != self.focused {
            self.focus_index(target, CaretTarget::End);
        }
    }

    /// Phase one of caret placement: record the target and bump the
    /// generation so any earlier pending placement is superseded.
    pub fn schedule_caret(&mut self, target: CaretTarget) {
        self.caret_generation += 1;
        self.pending_caret = Some(PendingCaret {
            generation: self.caret_generation,
            target,
        });
    }

    /// Phase two, run at the top of each event-loop iteration: apply the
    /// pending placement unless it went stale or a menu opened meanwhile.
    pub fn apply_pending_caret(&mut self) {
        let Some(pending) = self.pending_caret.take() else {
            return;
        };
        if pending.generation != self.caret_generation || self.menu.is_some() {
            return;
        }
        self.edit.caret = match pending.target {
            CaretTarget::Start => 0,
            CaretTarget::End => self.edit.buffer.len(),
        };
    }

    /// Re-evaluate the slash menu after the buffer's text changed:
    /// refresh an open session (possibly closing it), or detect a fresh
    /// trigger when none is active.
    pub fn sync_menu_after_edit(&mut self) {
        match &mut self.menu {
            Some(menu) => {
                if menu.refresh(&self.edit.buffer, &self.edit) == MenuTransition::Closed {
                    self.menu = None;
                }
            }
            None => {
                self.menu = SlashMenu::detect(&self.edit.buffer, &self.edit);
            }
        }
    }

    /// Re-evaluate an open slash menu after a caret-only move (ArrowLeft
    /// and friends). Never opens a session — only text changes do that.
    pub fn sync_menu_after_caret_move(&mut self) {
        if let Some(menu) = &mut self.menu
            && menu.refresh(&self.edit.buffer, &self.edit) == MenuTransition::Closed
        {
            self.menu = None;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

/// Run the TUI application
pub fn run() -> Result<(), AppError> {
    let mut app = App::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), AppError> {
    loop {
        app.apply_pending_caret();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
