//! # Snippets - named text fragments in a SQLite table
//!
//! Snippets provides:
//! - A single-table store keyed by keyword, with atomic upsert
//! - Sorted catalog and case-sensitive substring search
//! - Hide/show visibility for listings
//! - A command dispatcher shared by the CLI and its tests

pub mod snippet;
pub mod storage;
pub mod commands;
pub mod output;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use snippet::{Snippet, Visibility};
pub use storage::{Listing, SnippetStore, StoreOptions};
pub use commands::{Command, Outcome, dispatch};

/// Result type alias for snippet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for snippet operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),
}
