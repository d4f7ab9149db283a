//! End-to-end tests of the `notes` binary's non-interactive paths.
//!
//! Every test runs with HOME, the cache dir, and the notes root pointed into
//! a fresh temp directory, and with `EDITOR` set to something that exits
//! immediately.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn home(&self) -> &Path {
        self.dir.path()
    }

    fn notes_dir(&self) -> PathBuf {
        self.home().join("notes")
    }

    fn cmd(&self, editor: &str) -> Command {
        let mut cmd = Command::cargo_bin("notes").expect("Failed to find notes binary");
        cmd.current_dir(self.home())
            .env("HOME", self.home())
            .env("XDG_CACHE_HOME", self.home().join("cache"))
            .env("NOTES_DIR", self.notes_dir())
            .env("EDITOR", editor);
        cmd
    }

    /// Every file and directory under HOME, relative.
    fn tree(&self) -> Vec<PathBuf> {
        fn walk(dir: &Path, base: &Path, out: &mut Vec<PathBuf>) {
            for entry in fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                out.push(path.strip_prefix(base).unwrap().to_path_buf());
                if path.is_dir() {
                    walk(&path, base, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(self.home(), self.home(), &mut out);
        out
    }
}

fn created_path(stdout: &[u8]) -> PathBuf {
    let text = String::from_utf8_lossy(stdout);
    let line = text
        .lines()
        .find_map(|l| l.strip_prefix("Created: "))
        .expect("no Created: line");
    PathBuf::from(line.trim())
}

fn is_timestamp_note(path: &Path) -> bool {
    let name = path.file_name().unwrap().to_string_lossy();
    let Some(stem) = name.strip_suffix(".md") else {
        return false;
    };
    stem.len() == 14 && stem.chars().all(|c| c.is_ascii_digit())
}

// ============================================================================
// Usage
// ============================================================================

#[test]
fn test_two_arguments_fail_without_touching_filesystem() {
    let env = TestEnv::new();

    env.cmd("true")
        .args(["work", "extra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("usage error"));

    assert!(env.tree().is_empty(), "created {:?}", env.tree());
}

#[test]
fn test_path_like_notebook_is_rejected() {
    let env = TestEnv::new();

    env.cmd("true")
        .arg("../escape")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid notebook name"));

    assert!(!env.notes_dir().exists());
}

// ============================================================================
// Write mode
// ============================================================================

#[test]
fn test_write_creates_empty_timestamped_note() {
    let env = TestEnv::new();

    let output = env.cmd("true").arg("work").assert().success();

    let path = created_path(&output.get_output().stdout);
    assert_eq!(path.parent().unwrap(), env.notes_dir().join("work"));
    assert!(is_timestamp_note(&path), "bad name: {}", path.display());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_write_into_existing_notebook_keeps_old_notes() {
    let env = TestEnv::new();
    let work = env.notes_dir().join("work");
    fs::create_dir_all(&work).unwrap();
    fs::write(work.join("20240101120000.md"), "hello").unwrap();

    env.cmd("true").arg("work").assert().success();

    assert_eq!(fs::read_dir(&work).unwrap().count(), 2);
    assert_eq!(
        fs::read_to_string(work.join("20240101120000.md")).unwrap(),
        "hello"
    );
}

#[test]
fn test_editor_failure_exits_non_zero() {
    let env = TestEnv::new();

    env.cmd("false")
        .arg("work")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Created:").not())
        .stderr(predicate::str::contains("Error: editor 'false' failed"));
}

#[test]
fn test_missing_editor_exits_non_zero() {
    let env = TestEnv::new();

    env.cmd("no-such-editor-7c2a")
        .arg("work")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-editor-7c2a"));
}

#[cfg(unix)]
#[test]
fn test_editor_is_given_the_created_path() {
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnv::new();
    let record = env.home().join("opened.txt");
    let script = env.home().join("fake-editor.sh");
    fs::write(
        &script,
        format!("#!/bin/sh\nprintf '%s' \"$1\" > '{}'\n", record.display()),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let output = env
        .cmd(script.to_str().unwrap())
        .arg("journal")
        .assert()
        .success();

    let path = created_path(&output.get_output().stdout);
    assert_eq!(PathBuf::from(fs::read_to_string(&record).unwrap()), path);
}

#[test]
fn test_root_flag_overrides_env() {
    let env = TestEnv::new();
    let other = env.home().join("elsewhere");

    let output = env
        .cmd("true")
        .arg("--root")
        .arg(&other)
        .arg("work")
        .assert()
        .success();

    let path = created_path(&output.get_output().stdout);
    assert!(path.starts_with(other.join("work")));
    assert!(!env.notes_dir().exists());
}

// ============================================================================
// Browse mode
// ============================================================================

#[test]
fn test_browse_with_missing_root_fails_before_terminal_setup() {
    let env = TestEnv::new();

    env.cmd("true")
        .assert()
        .failure()
        .stderr(predicate::str::contains("note store unavailable"));
}
