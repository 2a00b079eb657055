//! In-memory backend for the Rollcall directory.
//!
//! A reference implementation of [`rollcall_core::store::DirectoryStore`]
//! over plain hash maps. Nothing is persisted; the intended uses are tests
//! and fixtures. Build it up with the `insert_*` methods, then hand out
//! shared references (or clone it) for querying.

mod store;

pub use store::MemoryStore;

#[cfg(test)]
mod tests;
