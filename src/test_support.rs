//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::{NaiveDate, TimeDelta};

use crate::core::editor::EditorLauncher;
use crate::core::error::NotesError;
use crate::core::note::{Note, Notebook, note_file_name};
use crate::core::state::App;
use crate::core::store::NoteStore;

#[derive(Default)]
struct Shelf {
    notebooks: BTreeMap<String, Vec<(String, String)>>,
    unavailable: bool,
    created: i64,
}

/// An in-memory store. Clones share the same contents, so a test can keep
/// a handle and change notes after the `App` has taken ownership.
#[derive(Clone, Default)]
pub struct MemoryStore {
    shelf: Rc<RefCell<Shelf>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notebook(self, name: &str, notes: &[(&str, &str)]) -> Self {
        self.shelf.borrow_mut().notebooks.insert(
            name.to_string(),
            notes
                .iter()
                .map(|(n, c)| (n.to_string(), c.to_string()))
                .collect(),
        );
        self
    }

    /// Make every call fail with `StoreUnavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.shelf.borrow_mut().unavailable = unavailable;
    }

    pub fn write_note(&self, notebook: &str, name: &str, content: &str) {
        let mut shelf = self.shelf.borrow_mut();
        let notes = shelf.notebooks.entry(notebook.to_string()).or_default();
        notes.retain(|(n, _)| n != name);
        notes.push((name.to_string(), content.to_string()));
    }

    fn path_of(notebook: &str, name: &str) -> PathBuf {
        PathBuf::from("/mem").join(notebook).join(name)
    }

    fn check(&self, path: &str) -> Result<(), NotesError> {
        if self.shelf.borrow().unavailable {
            return Err(NotesError::store(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }
        Ok(())
    }
}

impl NoteStore for MemoryStore {
    fn list_notebooks(&self) -> Result<Vec<Notebook>, NotesError> {
        self.check("/mem")?;
        Ok(self
            .shelf
            .borrow()
            .notebooks
            .keys()
            .map(|name| Notebook::new(name.as_str()))
            .collect())
    }

    fn load_notes(&self, notebook: &str) -> Result<Vec<Note>, NotesError> {
        self.check(notebook)?;
        let shelf = self.shelf.borrow();
        let notes = shelf.notebooks.get(notebook).ok_or_else(|| {
            NotesError::store(
                notebook,
                io::Error::new(io::ErrorKind::NotFound, "no such notebook"),
            )
        })?;
        Ok(notes
            .iter()
            .map(|(name, content)| Note::new(name, content, Self::path_of(notebook, name)))
            .collect())
    }

    fn create_note(&self, notebook: &str) -> Result<PathBuf, NotesError> {
        self.check(notebook)?;
        let created = {
            let mut shelf = self.shelf.borrow_mut();
            shelf.created += 1;
            shelf.created
        };
        let base = NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        let name = note_file_name(base + TimeDelta::seconds(created));
        self.write_note(notebook, &name, "");
        Ok(Self::path_of(notebook, &name))
    }
}

/// An editor that records the paths it was asked to open.
#[derive(Clone, Default)]
pub struct RecordingEditor {
    pub opened: Rc<RefCell<Vec<PathBuf>>>,
    pub fail: bool,
}

impl RecordingEditor {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl EditorLauncher for RecordingEditor {
    fn launch(&self, path: &Path) -> Result<(), NotesError> {
        self.opened.borrow_mut().push(path.to_path_buf());
        if self.fail {
            return Err(NotesError::LaunchFailed {
                editor: "recording".to_string(),
                cause: io::Error::other("exited with exit status: 1"),
            });
        }
        Ok(())
    }
}

/// The store behind `test_app`: `work` holds the two notes from the
/// classic example, `ideas` holds one.
pub fn test_store() -> MemoryStore {
    MemoryStore::new()
        .with_notebook(
            "work",
            &[
                ("20240101120000.md", "hello"),
                ("20240102090000.md", "world"),
            ],
        )
        .with_notebook("ideas", &[("20231105081500.md", "a better mousetrap")])
}

/// Creates a test App over `test_store()`.
pub fn test_app() -> App {
    test_app_with(test_store())
}

pub fn test_app_with(store: MemoryStore) -> App {
    match App::new(Box::new(store)) {
        Ok(app) => app,
        Err(e) => panic!("test store failed: {e}"),
    }
}
