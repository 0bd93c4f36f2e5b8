//! Plain-text list files: one item per line, no header, no escaping.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ListError, ListResult};
use crate::io::config::ListMakerConfig;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// How an existing backing file is replaced on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Delete the old file, then write the new one. A crash in between loses
    /// the list.
    DeleteThenWrite,
    /// Write `<file>.tmp`, then rename it over the old file.
    TempThenRename,
}

/// Where saved lists live and how they are written.
#[derive(Debug, Clone)]
pub struct ListStore {
    dir: PathBuf,
    extension: String,
    mode: SaveMode,
}

impl ListStore {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>, mode: SaveMode) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
            mode,
        }
    }

    pub fn from_config(config: &ListMakerConfig, cwd: &Path) -> Self {
        let mode = if config.atomic_save {
            SaveMode::TempThenRename
        } else {
            SaveMode::DeleteThenWrite
        };
        Self::new(config.lists_path(cwd), config.extension.clone(), mode)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Backing file for a list name: `<dir>/<name>.<extension>`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, self.extension))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).exists()
    }

    /// Write a list under a name that has no backing file yet.
    ///
    /// Uses `create_new`, so a file that appeared since the caller checked is
    /// never overwritten.
    pub fn create(&self, name: &str, items: &[String]) -> ListResult<PathBuf> {
        let path = self.path_for(name);
        self.ensure_dir()?;
        debug!(path = %path.display(), items = items.len(), "creating list file");
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|err| ListError::io(&path, err))?;
        write_items(file, items).map_err(|err| ListError::io(&path, err))?;
        Ok(path)
    }

    /// Fully rewrite the backing file of an existing list name.
    pub fn replace(&self, name: &str, items: &[String]) -> ListResult<PathBuf> {
        let path = self.path_for(name);
        self.ensure_dir()?;
        debug!(path = %path.display(), items = items.len(), mode = ?self.mode, "replacing list file");
        match self.mode {
            SaveMode::DeleteThenWrite => {
                match fs::remove_file(&path) {
                    Ok(()) => {}
                    Err(err) if err.kind() == io::ErrorKind::NotFound => {
                        debug!(path = %path.display(), "no previous file to delete");
                    }
                    Err(err) => return Err(ListError::io(&path, err)),
                }
                let file = File::create(&path).map_err(|err| ListError::io(&path, err))?;
                write_items(file, items).map_err(|err| ListError::io(&path, err))?;
            }
            SaveMode::TempThenRename => {
                let tmp_path = path.with_extension(format!("{}.tmp", self.extension));
                let file = File::create(&tmp_path).map_err(|err| ListError::io(&tmp_path, err))?;
                if let Err(err) = write_items(file, items) {
                    let _ = fs::remove_file(&tmp_path);
                    return Err(ListError::io(&tmp_path, err));
                }
                fs::rename(&tmp_path, &path).map_err(|err| ListError::io(&path, err))?;
            }
        }
        Ok(path)
    }

    fn ensure_dir(&self) -> ListResult<()> {
        fs::create_dir_all(&self.dir).map_err(|err| ListError::io(&self.dir, err))
    }
}

/// Read a list file, one item per line, in file order.
pub fn read_list(path: &Path) -> ListResult<Vec<String>> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ListError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ListError::io(path, err),
    })?;
    let items = BufReader::new(file)
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .map_err(|err| ListError::io(path, err))?;
    debug!(path = %path.display(), items = items.len(), "list file read");
    Ok(items)
}

fn write_items(file: File, items: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    for item in items {
        writer.write_all(item.as_bytes())?;
        writer.write_all(LINE_ENDING.as_bytes())?;
    }
    writer.flush()?;
    writer.into_inner().map_err(|err| err.into_error())?.sync_all()
}
