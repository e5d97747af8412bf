//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite table:
//! - snippets(keyword, message, hidden)

pub mod schema;
pub mod sqlite;

pub use sqlite::{Listing, SnippetStore, StoreOptions};
