//! I/O helpers for list sessions.

pub mod chooser;
pub mod config;
pub mod input;
pub mod list_store;
