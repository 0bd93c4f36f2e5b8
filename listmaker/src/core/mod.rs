//! Deterministic, pure logic for list sessions.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod header;
pub mod list;
pub mod name;
pub mod rules;
