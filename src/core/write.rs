//! # Write Flow
//!
//! `notes <notebook>`: create a note, open it in the editor, report the path.
//! No interactive state here, so every error is simply returned.

use std::path::PathBuf;

use log::info;

use crate::core::editor::EditorLauncher;
use crate::core::error::NotesError;
use crate::core::store::NoteStore;

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Write(String),
}

impl Mode {
    /// Zero positional arguments browse, one writes, more is a usage error.
    pub fn from_args(args: &[String]) -> Result<Self, NotesError> {
        match args {
            [] => Ok(Mode::Browse),
            [notebook] => {
                validate_notebook_name(notebook)?;
                Ok(Mode::Write(notebook.clone()))
            }
            _ => Err(NotesError::Usage(format!(
                "expected at most one notebook, got {}",
                args.len()
            ))),
        }
    }
}

/// A notebook is a single directory directly under the root.
pub fn validate_notebook_name(name: &str) -> Result<(), NotesError> {
    let invalid = name.trim().is_empty()
        || name.contains(['/', '\\'])
        || name == "."
        || name == ".."
        || name.starts_with('.');
    if invalid {
        return Err(NotesError::Usage(format!("invalid notebook name '{name}'")));
    }
    Ok(())
}

/// Create a note in `notebook` and run the editor on it.
pub fn write_note(
    store: &dyn NoteStore,
    editor: &dyn EditorLauncher,
    notebook: &str,
) -> Result<PathBuf, NotesError> {
    validate_notebook_name(notebook)?;
    let path = store.create_note(notebook)?;
    editor.launch(&path)?;
    info!("Wrote note {}", path.display());
    Ok(path)
}
