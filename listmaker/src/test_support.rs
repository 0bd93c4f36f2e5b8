//! Test-only helpers: scripted console input and temporary lists directories.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::input::InputReader;
use crate::io::list_store::{ListStore, SaveMode};
use crate::session::ListSession;

/// Input reader fed with `lines` (each newline-terminated) and writing to a
/// byte buffer.
pub fn scripted_reader(lines: &[&str]) -> InputReader<Cursor<Vec<u8>>, Vec<u8>> {
    let mut script = String::new();
    for line in lines {
        script.push_str(line);
        script.push('\n');
    }
    InputReader::new(Cursor::new(script.into_bytes()), Vec::new())
}

/// A temporary `lists/` directory with helpers to seed list files.
pub struct TempLists {
    dir: TempDir,
}

impl TempLists {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp lists dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn store(&self) -> ListStore {
        ListStore::new(self.path(), "txt", SaveMode::DeleteThenWrite)
    }

    /// Fresh session saving into this directory.
    pub fn session(&self) -> ListSession {
        ListSession::new(self.store())
    }

    /// Write `items` to `file_name`, newline-terminated, and return its path.
    pub fn seed(&self, file_name: &str, items: &[&str]) -> Result<PathBuf> {
        let path = self.path().join(file_name);
        let mut contents = String::new();
        for item in items {
            contents.push_str(item);
            contents.push('\n');
        }
        fs::write(&path, contents).with_context(|| format!("seed {}", path.display()))?;
        Ok(path)
    }
}
