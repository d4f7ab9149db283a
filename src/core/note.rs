//! # Notes and Notebooks
//!
//! A note is an opaque string living in a file whose name is its creation
//! time (`20240102090000.md`). A notebook is a directory of notes.
//!
//! Because the timestamp is fixed-width, sorting filenames descending is the
//! same as sorting notes newest-first. Nothing else about a note's content
//! is interpreted.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::core::error::NotesError;

/// `chrono` format of the timestamp embedded in every note filename.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
/// Extension given to newly created notes.
pub const NOTE_EXTENSION: &str = "md";
/// How timestamps are shown in the browser.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maximum characters of a note shown as a one-line preview.
pub const PREVIEW_CHARS: usize = 50;
/// Appended to a preview that was cut at `PREVIEW_CHARS`.
pub const PREVIEW_ELLIPSIS: &str = "...";
/// Stands in for a run of line breaks inside a preview.
pub const PREVIEW_SEPARATOR: &str = " ... ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub name: String,
    pub content: String,
    pub path: PathBuf,
}

impl Note {
    pub fn new(name: impl Into<String>, content: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            path: path.into(),
        }
    }

    /// Creation time derived from the filename.
    pub fn timestamp(&self) -> Result<NaiveDateTime, NotesError> {
        parse_timestamp(&self.name)
    }

    /// The timestamp as shown in the note pane.
    ///
    /// Corrupt names degrade to the raw filename rather than failing.
    pub fn display_time(&self) -> String {
        match self.timestamp() {
            Ok(ts) => ts.format(DISPLAY_FORMAT).to_string(),
            Err(_) => format!("{} (timestamp unknown)", self.name),
        }
    }

    pub fn preview(&self) -> String {
        preview(&self.content, PREVIEW_CHARS)
    }
}

/// Parse a note filename (`20240102090000.md`) into its creation time.
pub fn parse_timestamp(file_name: &str) -> Result<NaiveDateTime, NotesError> {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    NaiveDateTime::parse_from_str(stem, TIMESTAMP_FORMAT)
        .map_err(|_| NotesError::CorruptNoteName(file_name.to_string()))
}

/// Filename for a note created at `now`.
pub fn note_file_name(now: NaiveDateTime) -> String {
    format!("{}.{}", now.format(TIMESTAMP_FORMAT), NOTE_EXTENSION)
}

/// One-line preview: trimmed, line-break runs collapsed, cut at `budget` chars.
pub fn preview(content: &str, budget: usize) -> String {
    let collapsed = content
        .trim()
        .split(['\n', '\r'])
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(PREVIEW_SEPARATOR);

    if collapsed.chars().count() > budget {
        let cut: String = collapsed.chars().take(budget).collect();
        format!("{cut}{PREVIEW_ELLIPSIS}")
    } else {
        collapsed
    }
}

/// A notebook directory. `notes` stays empty until the notebook is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notebook {
    pub name: String,
    pub notes: Vec<Note>,
}

impl Notebook {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notes: Vec::new(),
        }
    }

    /// Replace the notes, newest first.
    pub fn set_notes(&mut self, mut notes: Vec<Note>) {
        notes.sort_by(|a, b| b.name.cmp(&a.name));
        self.notes = notes;
    }
}
