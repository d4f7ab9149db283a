//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Single-threaded: one event is fully applied by `update()` before the next
//! is read, so `App` needs no locking. Frames are drawn only after an event
//! or a resize; the loop otherwise sleeps in `poll`.
//!
//! ## Editor Hand-over
//!
//! `Effect::LaunchEditor` is the one place the loop blocks on something
//! other than the keyboard. The terminal is put back into cooked mode on the
//! main screen, the editor runs with our stdio, then raw mode and the
//! alternate screen are restored. The editor's outcome is fed back in as
//! `Action::EditorFinished` like any other event.
//!
//! While the editor runs, keys go to the editor, not to us: there is no way
//! to quit the browser mid-edit.

mod component;
mod components;
mod event;
mod ui;

use std::io::{self, stdout};
use std::path::Path;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, info};
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::editor::EditorLauncher;
use crate::core::error::NotesError;
use crate::core::state::App;
use crate::tui::components::NoteListState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long to sleep waiting for input between checks.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core browse state)
#[derive(Default)]
pub struct TuiState {
    pub note_list: NoteListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Map a decoded key to the browse action it triggers.
fn action_for(event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Up => Some(Action::MoveUp),
        TuiEvent::Down => Some(Action::MoveDown),
        TuiEvent::Left => Some(Action::MoveLeft),
        TuiEvent::Right => Some(Action::MoveRight),
        TuiEvent::Confirm => Some(Action::Confirm),
        TuiEvent::Edit => Some(Action::Edit),
        TuiEvent::New => Some(Action::NewNote),
        TuiEvent::Cancel => Some(Action::Cancel),
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Resize => None,
    }
}

/// Run the browser until the user quits.
pub fn run(mut app: App, editor: &dyn EditorLauncher) -> io::Result<()> {
    let mut terminal = ratatui::try_init()?;
    let _terminal_mode_guard = TerminalModeGuard::new();
    let mut tui = TuiState::new();

    let result = event_loop(&mut terminal, &mut app, &mut tui, editor);

    ratatui::restore();
    info!("Browser closed");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    editor: &dyn EditorLauncher,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
            // The banner has been on screen once
            if app.error.is_some() {
                update(app, Action::ErrorShown);
            }
        }

        // Process first event + drain everything already queued before drawing
        let mut next = poll_event_timeout(IDLE_POLL)?;
        while let Some(event) = next {
            needs_redraw = true;
            if let Some(action) = action_for(event) {
                match update(app, action) {
                    Effect::Quit => return Ok(()),
                    Effect::LaunchEditor(path) => {
                        let outcome = hand_over_terminal(terminal, editor, &path)?;
                        update(app, Action::EditorFinished(outcome));
                    }
                    Effect::None => {}
                }
            }
            next = poll_event_immediate()?;
        }
    }
}

/// Give the terminal to the editor, wait for it, and take the terminal back.
///
/// Only terminal errors are returned as `Err`; the editor's own outcome is
/// passed back for `Action::EditorFinished`.
fn hand_over_terminal(
    terminal: &mut DefaultTerminal,
    editor: &dyn EditorLauncher,
    path: &Path,
) -> io::Result<Result<(), NotesError>> {
    debug!("Suspending TUI for editor on {}", path.display());
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;

    let outcome = editor.launch(path);

    enable_raw_mode()?;
    execute!(terminal.backend_mut(), EnterAlternateScreen, Hide)?;
    terminal.clear()?;
    debug!("TUI resumed, editor outcome ok={}", outcome.is_ok());
    Ok(outcome)
}
