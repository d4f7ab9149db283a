//! # Editor Launcher
//!
//! Runs the user's editor on a note and waits for it to exit.
//!
//! The child inherits stdin/stdout/stderr, so whoever calls `launch` from
//! inside the TUI must hand the terminal over first (see `tui::run`).

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use log::{info, warn};

use crate::core::error::NotesError;

/// Used when `EDITOR` is unset or empty.
pub const DEFAULT_EDITOR: &str = "vim";

/// Opens a file in an editor, blocking until the editor exits.
pub trait EditorLauncher {
    fn launch(&self, path: &Path) -> Result<(), NotesError>;
}

/// Spawns `program <path>` as a child process.
pub struct CommandEditor {
    program: String,
}

impl CommandEditor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn failed(&self, cause: io::Error) -> NotesError {
        NotesError::LaunchFailed {
            editor: self.program.clone(),
            cause,
        }
    }
}

impl EditorLauncher for CommandEditor {
    fn launch(&self, path: &Path) -> Result<(), NotesError> {
        info!("Launching editor '{}' on {}", self.program, path.display());

        let status = Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| self.failed(e))?;

        if !status.success() {
            warn!("Editor '{}' exited with {}", self.program, status);
            return Err(self.failed(io::Error::other(format!("exited with {status}"))));
        }
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_successful_editor() {
        let editor = CommandEditor::new("true");
        assert!(editor.launch(Path::new("/tmp/unused.md")).is_ok());
    }

    #[test]
    fn test_non_zero_exit_is_launch_failure() {
        let editor = CommandEditor::new("false");
        let err = editor.launch(Path::new("/tmp/unused.md")).unwrap_err();
        match err {
            NotesError::LaunchFailed { editor, cause } => {
                assert_eq!(editor, "false");
                assert!(cause.to_string().contains("exited with"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_binary_is_launch_failure() {
        let editor = CommandEditor::new("definitely-not-an-editor-4d1f");
        let err = editor.launch(Path::new("/tmp/unused.md")).unwrap_err();
        assert!(matches!(err, NotesError::LaunchFailed { .. }));
    }
}
