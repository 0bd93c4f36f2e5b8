//! Console list manager backed by plain text files.
//!
//! A list is an ordered set of text items, stored one item per line. The
//! crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (list state and dirty tracking,
//!   input validation rules, list naming). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (validated console input, list
//!   files, configuration, file selection).
//!
//! [`session`] ties list state to its backing file; [`console`] drives a
//! session from an interactive menu.

pub mod console;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
