//! # Actions
//!
//! Everything that can happen in the browser becomes an `Action`.
//! User presses Enter? That's `Action::Confirm`.
//! Editor exits? That's `Action::EditorFinished(outcome)`.
//!
//! `update()` applies one action to the state and returns an `Effect` for
//! the event loop to carry out. Store reads happen inline through the
//! `NoteStore` trait; anything that needs the terminal (the editor) is
//! returned as an effect instead.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! | Action         | Focus     | Effect on state                               |
//! |----------------|-----------|-----------------------------------------------|
//! | `Up`/`Down`    | Notebooks | move `cursor_notebook`, clamped               |
//! | `Up`/`Down`    | Notes     | move `cursor_note`, clamped                   |
//! | `Left`         | any       | focus notebooks                               |
//! | `Right`        | Notebooks | focus notes if a notebook is selected         |
//! | `Confirm`      | Notebooks | select notebook under cursor, load its notes  |
//! | `Confirm`      | Notes     | toggle full display of the note under cursor  |
//! | `Edit`         | Notes     | `Effect::LaunchEditor` for the cursor note    |
//! | `NewNote`      | any       | create a note in the selected notebook, edit  |
//! | `Cancel`       | Notebooks | clear both selections                         |
//! | `Cancel`       | Notes     | clear the selected note                       |
//! | `EditorFinished` | any     | record failure, reload selected notebook      |

use std::path::PathBuf;

use log::{debug, info, warn};

use crate::core::error::NotesError;
use crate::core::state::{App, Focus};

#[derive(Debug)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Confirm,
    Edit,
    NewNote,
    Cancel,
    Quit,
    /// The editor launched by `Effect::LaunchEditor` has returned.
    EditorFinished(Result<(), NotesError>),
    /// The banner has been drawn once.
    ErrorShown,
}

/// What the event loop must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Hand the terminal to the editor for this file, then send
    /// `Action::EditorFinished`.
    LaunchEditor(PathBuf),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} (focus={:?})", action, app.focus);
    match action {
        Action::MoveUp => {
            match app.focus {
                Focus::Notebooks => app.cursor_notebook = app.cursor_notebook.saturating_sub(1),
                Focus::Notes => app.cursor_note = app.cursor_note.saturating_sub(1),
            }
            Effect::None
        }
        Action::MoveDown => {
            match app.focus {
                Focus::Notebooks => {
                    app.cursor_notebook = step_down(app.cursor_notebook, app.notebooks.len());
                }
                Focus::Notes => {
                    app.cursor_note = step_down(app.cursor_note, app.selected_notes().len());
                }
            }
            Effect::None
        }
        Action::MoveLeft => {
            app.focus = Focus::Notebooks;
            Effect::None
        }
        Action::MoveRight => {
            if app.selected_notebook.is_some() && app.focus != Focus::Notes {
                app.focus = Focus::Notes;
                app.cursor_note = 0;
            }
            Effect::None
        }
        Action::Confirm => {
            match app.focus {
                Focus::Notebooks => select_notebook(app),
                Focus::Notes => toggle_note(app),
            }
            Effect::None
        }
        Action::Edit => match (app.focus, app.note_under_cursor()) {
            (Focus::Notes, Some(note)) => Effect::LaunchEditor(note.path.clone()),
            _ => Effect::None,
        },
        Action::NewNote => {
            let Some(name) = app.selected().map(|nb| nb.name.clone()) else {
                return Effect::None;
            };
            match app.store.create_note(&name) {
                Ok(path) => Effect::LaunchEditor(path),
                Err(e) => {
                    warn!("Failed to create note in '{}': {}", name, e);
                    app.push_error(e.to_string());
                    Effect::None
                }
            }
        }
        Action::Cancel => {
            match app.focus {
                Focus::Notebooks => {
                    app.selected_notebook = None;
                    app.selected_note = None;
                }
                Focus::Notes => app.selected_note = None,
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
        Action::EditorFinished(outcome) => {
            if let Err(e) = outcome {
                app.push_error(e.to_string());
            }
            // The editor may have changed anything in the notebook
            if let Err(e) = app.reload_selected() {
                app.push_error(e.to_string());
            }
            Effect::None
        }
        Action::ErrorShown => {
            app.error = None;
            Effect::None
        }
    }
}

fn step_down(cursor: usize, len: usize) -> usize {
    (cursor + 1).min(len.saturating_sub(1))
}

fn select_notebook(app: &mut App) {
    if app.cursor_notebook >= app.notebooks.len() {
        return;
    }
    if app.selected_notebook != Some(app.cursor_notebook) {
        app.cursor_note = 0;
    }
    app.selected_note = None;
    app.selected_notebook = Some(app.cursor_notebook);
    info!("Selected notebook '{}'", app.notebooks[app.cursor_notebook].name);
    if let Err(e) = app.reload_selected() {
        app.push_error(e.to_string());
    }
}

fn toggle_note(app: &mut App) {
    if app.note_under_cursor().is_none() {
        return;
    }
    app.selected_note = match app.selected_note {
        Some(i) if i == app.cursor_note => None,
        _ => Some(app.cursor_note),
    };
}
