//! # Browse State
//!
//! Everything the browser knows, in one struct. No terminal types here;
//! presentation-only state (scroll offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: Box<dyn NoteStore>        // where notes come from
//! ├── notebooks: Vec<Notebook>         // fixed after startup
//! ├── cursor_notebook: usize           // row under the cursor, left pane
//! ├── cursor_note: usize               // row under the cursor, right pane
//! ├── selected_notebook: Option<usize> // whose notes are loaded and shown
//! ├── selected_note: Option<usize>     // shown in full instead of preview
//! ├── focus: Focus                     // pane receiving up/down
//! └── error: Option<String>            // banner text, shown once
//! ```
//!
//! Selection is stored as plain indices, independent of the cursors: moving
//! the cursor never changes what is selected.
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::{debug, warn};

use crate::core::error::NotesError;
use crate::core::note::{Note, Notebook};
use crate::core::store::NoteStore;

/// Which pane receives directional input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Notebooks,
    Notes,
}

pub struct App {
    pub store: Box<dyn NoteStore>,
    pub notebooks: Vec<Notebook>,
    pub cursor_notebook: usize,
    pub cursor_note: usize,
    pub selected_notebook: Option<usize>,
    pub selected_note: Option<usize>,
    pub focus: Focus,
    /// Surfaced in the banner on the next frame, then cleared.
    pub error: Option<String>,
}

impl App {
    /// Build the initial state from the store's notebook list.
    ///
    /// Fails if the notebooks can't be listed: there is nothing to browse.
    pub fn new(store: Box<dyn NoteStore>) -> Result<Self, NotesError> {
        let notebooks = store.list_notebooks()?;
        Ok(Self {
            store,
            notebooks,
            cursor_notebook: 0,
            cursor_note: 0,
            selected_notebook: None,
            selected_note: None,
            focus: Focus::default(),
            error: None,
        })
    }

    pub fn selected(&self) -> Option<&Notebook> {
        self.selected_notebook.and_then(|i| self.notebooks.get(i))
    }

    /// Notes of the selected notebook, newest first. Empty if none selected.
    pub fn selected_notes(&self) -> &[Note] {
        self.selected().map(|nb| nb.notes.as_slice()).unwrap_or(&[])
    }

    pub fn note_under_cursor(&self) -> Option<&Note> {
        self.selected_notes().get(self.cursor_note)
    }

    /// Re-read the selected notebook's notes and repair cursor/selection.
    ///
    /// On failure the notebook is left with no notes.
    pub fn reload_selected(&mut self) -> Result<(), NotesError> {
        let Some(index) = self.selected_notebook else {
            return Ok(());
        };
        let Some(notebook) = self.notebooks.get_mut(index) else {
            return Ok(());
        };

        let result = self.store.load_notes(&notebook.name);
        let outcome = match result {
            Ok(notes) => {
                notebook.set_notes(notes);
                debug!("Reloaded '{}': {} notes", notebook.name, notebook.notes.len());
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load notebook '{}': {}", notebook.name, e);
                notebook.notes.clear();
                Err(e)
            }
        };

        let count = notebook.notes.len();
        self.cursor_note = self.cursor_note.min(count.saturating_sub(1));
        if self.selected_note.is_some_and(|i| i >= count) {
            self.selected_note = None;
        }
        outcome
    }

    /// Queue a message for the banner, joining it to any not yet shown.
    pub fn push_error(&mut self, message: String) {
        self.error = Some(match self.error.take() {
            Some(existing) => format!("{existing}; {message}"),
            None => message,
        });
    }
}
