//! # Errors
//!
//! Everything that can go wrong in the notes tool, in one enum.
//!
//! Whether an error is fatal depends on where it happens, not on its kind:
//! the write flow and startup bail out on anything, the browser turns
//! steady-state failures into a banner message and keeps going.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum NotesError {
    /// Notebook or note enumeration, read, or write failed.
    StoreUnavailable { path: PathBuf, source: io::Error },
    /// A note filename is not a `YYYYMMDDHHMMSS` timestamp.
    CorruptNoteName(String),
    /// The editor could not be started, or exited unsuccessfully.
    LaunchFailed { editor: String, cause: io::Error },
    /// Wrong arguments on the command line.
    Usage(String),
    /// The terminal could not be set up, drawn to, or restored.
    Terminal(io::Error),
}

impl NotesError {
    pub fn store(path: impl Into<PathBuf>, source: io::Error) -> Self {
        NotesError::StoreUnavailable {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for NotesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotesError::StoreUnavailable { path, source } => {
                write!(f, "note store unavailable at {}: {source}", path.display())
            }
            NotesError::CorruptNoteName(name) => {
                write!(f, "note name '{name}' is not a YYYYMMDDHHMMSS timestamp")
            }
            NotesError::LaunchFailed { editor, cause } => {
                write!(f, "editor '{editor}' failed: {cause}")
            }
            NotesError::Usage(msg) => write!(f, "usage error: {msg}"),
            NotesError::Terminal(e) => write!(f, "terminal error: {e}"),
        }
    }
}

impl std::error::Error for NotesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotesError::StoreUnavailable { source, .. } => Some(source),
            NotesError::LaunchFailed { cause, .. } => Some(cause),
            NotesError::Terminal(e) => Some(e),
            NotesError::CorruptNoteName(_) | NotesError::Usage(_) => None,
        }
    }
}
