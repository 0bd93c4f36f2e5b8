//! List session: the active list and its relationship with a backing file.
//!
//! Combines pure [`ListState`] bookkeeping with [`ListStore`] persistence.
//! Failed loads and saves leave the in-memory list untouched.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::list::{Lifecycle, ListState};
use crate::core::name::list_name_from_path;
use crate::error::ListResult;
use crate::io::list_store::{ListStore, read_list};

#[derive(Debug, Clone)]
pub struct ListSession {
    state: ListState,
    store: ListStore,
}

impl ListSession {
    /// Empty, unnamed, clean session saving into `store`.
    pub fn new(store: ListStore) -> Self {
        Self {
            state: ListState::new(),
            store,
        }
    }

    pub fn items(&self) -> &[String] {
        self.state.items()
    }

    pub fn name(&self) -> Option<&str> {
        self.state.name()
    }

    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.state.lifecycle()
    }

    pub fn store(&self) -> &ListStore {
        &self.store
    }

    /// Replace the list with the contents of `path`.
    ///
    /// The list name becomes the file's base name without extension.
    pub fn load(&mut self, path: &Path) -> ListResult<&[String]> {
        let items = read_list(path)?;
        let name = list_name_from_path(path);
        info!(path = %path.display(), name = %name, items = items.len(), "list loaded");
        self.state.mark_loaded(name, items);
        Ok(self.state.items())
    }

    /// Persist the list and return the path written.
    ///
    /// A named list rewrites `<lists>/<name>.<ext>` in full. An unnamed list
    /// asks `resolve_new_name` for a name, re-asking while the name already
    /// has a file; the resolver receives the previously rejected name.
    pub fn save<F>(&mut self, mut resolve_new_name: F) -> ListResult<PathBuf>
    where
        F: FnMut(Option<&str>) -> ListResult<String>,
    {
        if let Some(name) = self.state.name().map(str::to_string) {
            let path = self.store.replace(&name, self.state.items())?;
            info!(path = %path.display(), items = self.state.len(), "list saved");
            self.state.mark_saved(name);
            return Ok(path);
        }

        let mut rejected: Option<String> = None;
        loop {
            let name = resolve_new_name(rejected.as_deref())?;
            if self.store.exists(&name) {
                warn!(name = %name, "list file already exists, asking for another name");
                rejected = Some(name);
                continue;
            }
            let path = self.store.create(&name, self.state.items())?;
            info!(path = %path.display(), items = self.state.len(), "new list saved");
            self.state.mark_saved(name);
            return Ok(path);
        }
    }

    pub fn add(&mut self, item: impl Into<String>) {
        self.state.add(item);
        debug!(len = self.state.len(), "item added");
    }

    /// Remove the item at 1-based `index`; callers check emptiness first.
    pub fn delete_at(&mut self, index: usize) -> ListResult<String> {
        let removed = self.state.delete_at(index)?;
        debug!(index, len = self.state.len(), "item deleted");
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.state.clear();
        debug!("list cleared");
    }
}
