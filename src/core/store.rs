//! # Note Store
//!
//! Filesystem layout:
//!
//! ```text
//! ~/.notes/                   root
//! ├── work/                   notebook
//! │   ├── 20240101120000.md   note
//! │   └── 20240102090000.md
//! └── ideas/
//! ```
//!
//! Every read is synchronous. Notebooks are small and local, so the browser
//! just blocks on them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use log::{debug, info};

use crate::core::error::NotesError;
use crate::core::note::{Note, Notebook, note_file_name};

/// Where notes live. The browser and the write flow only see this trait.
pub trait NoteStore {
    /// Immediate subdirectories of the root, sorted by name, notes not loaded.
    fn list_notebooks(&self) -> Result<Vec<Notebook>, NotesError>;

    /// Every note in `notebook`, fully read. Order is unspecified.
    fn load_notes(&self, notebook: &str) -> Result<Vec<Note>, NotesError>;

    /// Create an empty note stamped with the current time and return its path.
    fn create_note(&self, notebook: &str) -> Result<PathBuf, NotesError>;
}

pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a note named after `now`. Refuses to clobber an existing note.
    pub fn create_note_at(&self, notebook: &str, now: NaiveDateTime) -> Result<PathBuf, NotesError> {
        let dir = self.root.join(notebook);
        create_notebook_dir(&dir).map_err(|e| NotesError::store(&dir, e))?;

        let path = dir.join(note_file_name(now));
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| NotesError::store(&path, e))?;

        info!("Created note {}", path.display());
        Ok(path)
    }
}

impl NoteStore for FsStore {
    fn list_notebooks(&self) -> Result<Vec<Notebook>, NotesError> {
        let entries = fs::read_dir(&self.root).map_err(|e| NotesError::store(&self.root, e))?;

        let mut notebooks = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| NotesError::store(&self.root, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| NotesError::store(entry.path(), e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if file_type.is_dir() && !is_hidden(&name) {
                notebooks.push(Notebook::new(name));
            }
        }
        notebooks.sort_by(|a, b| a.name.cmp(&b.name));

        debug!("Found {} notebooks under {}", notebooks.len(), self.root.display());
        Ok(notebooks)
    }

    fn load_notes(&self, notebook: &str) -> Result<Vec<Note>, NotesError> {
        let dir = self.root.join(notebook);
        let entries = fs::read_dir(&dir).map_err(|e| NotesError::store(&dir, e))?;

        let mut notes = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| NotesError::store(&dir, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| NotesError::store(&path, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !file_type.is_file() || is_hidden(&name) {
                continue;
            }
            // Non-UTF-8 bytes are shown as replacement characters
            let bytes = fs::read(&path).map_err(|e| NotesError::store(&path, e))?;
            let content = String::from_utf8_lossy(&bytes).into_owned();
            notes.push(Note::new(name, content, path));
        }

        debug!("Loaded {} notes from {}", notes.len(), dir.display());
        Ok(notes)
    }

    fn create_note(&self, notebook: &str) -> Result<PathBuf, NotesError> {
        self.create_note_at(notebook, Local::now().naive_local())
    }
}

/// Dotfiles are editor swap files and the like, never notes or notebooks.
fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

#[cfg(unix)]
fn create_notebook_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_notebook_dir(dir: &Path) -> io::Result<()> {
    fs::DirBuilder::new().recursive(true).create(dir)
}
