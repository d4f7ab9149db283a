//! # Configuration
//!
//! There is no config file. Settings resolve with a fixed override order:
//! defaults → `.env` → env vars → CLI flags.
//!
//! | Setting | CLI      | Env         | Default    |
//! |---------|----------|-------------|------------|
//! | root    | `--root` | `NOTES_DIR` | `~/.notes` |
//! | editor  |          | `EDITOR`    | `vim`      |

use std::path::{Path, PathBuf};

use log::debug;

use crate::core::editor::DEFAULT_EDITOR;
use crate::core::error::NotesError;

pub const NOTES_DIR_VAR: &str = "NOTES_DIR";
pub const EDITOR_VAR: &str = "EDITOR";
/// Directory under the home directory holding all notebooks.
pub const DEFAULT_ROOT_DIR: &str = ".notes";

/// Concrete settings, no Options left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub root: PathBuf,
    pub editor: String,
}

/// Resolve against the real process environment.
pub fn resolve(cli_root: Option<&Path>) -> Result<ResolvedConfig, NotesError> {
    resolve_from(cli_root, |key| std::env::var(key).ok(), dirs::home_dir())
}

/// Resolve with an injected environment lookup and home directory.
pub fn resolve_from(
    cli_root: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
    home: Option<PathBuf>,
) -> Result<ResolvedConfig, NotesError> {
    let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    // Root: CLI → env → ~/.notes
    let root = match cli_root {
        Some(path) => path.to_path_buf(),
        None => match non_empty(NOTES_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => home
                .map(|h| h.join(DEFAULT_ROOT_DIR))
                .ok_or_else(|| {
                    NotesError::store(
                        DEFAULT_ROOT_DIR,
                        std::io::Error::new(std::io::ErrorKind::NotFound, "no home directory"),
                    )
                })?,
        },
    };

    // Editor: env → vim
    let editor = non_empty(EDITOR_VAR).unwrap_or_else(|| DEFAULT_EDITOR.to_string());

    let config = ResolvedConfig { root, editor };
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Where the debug log is written, if a cache directory exists.
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("notes").join("notes.log"))
}
