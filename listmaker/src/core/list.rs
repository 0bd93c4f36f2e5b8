//! In-memory list state with dirty tracking.
//!
//! Every mutation marks the list dirty; only a successful load or save
//! (via [`ListState::mark_loaded`] / [`ListState::mark_saved`]) clears it.

use crate::error::{ListError, ListResult};

/// Lifecycle of a list session as seen by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Nothing loaded or saved yet, no pending edits.
    Unsaved,
    /// Loaded or saved, no edits since.
    Clean,
    /// Edited since the last load/save (or since start).
    Dirty,
}

/// Ordered list items plus the active list name and dirty flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    items: Vec<String>,
    name: Option<String>,
    dirty: bool,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        match (self.dirty, self.name.is_some()) {
            (true, _) => Lifecycle::Dirty,
            (false, true) => Lifecycle::Clean,
            (false, false) => Lifecycle::Unsaved,
        }
    }

    /// Append to the end of the list.
    pub fn add(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
        self.dirty = true;
    }

    /// Remove the item at a 1-based display index.
    ///
    /// Later items shift down by one position.
    pub fn delete_at(&mut self, index: usize) -> ListResult<String> {
        let len = self.items.len();
        if index == 0 || index > len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        let removed = self.items.remove(index - 1);
        self.dirty = true;
        Ok(removed)
    }

    /// Empty the list. Marks dirty even when already empty.
    pub fn clear(&mut self) {
        self.items.clear();
        self.dirty = true;
    }

    /// Replace contents with freshly loaded items.
    pub fn mark_loaded(&mut self, name: String, items: Vec<String>) {
        self.items = items;
        self.name = Some(name);
        self.dirty = false;
    }

    /// Record a successful save under `name`.
    pub fn mark_saved(&mut self, name: String) {
        self.name = Some(name);
        self.dirty = false;
    }
}
