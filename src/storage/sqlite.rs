//! SQLite storage implementation

use std::path::Path;
use std::time::Duration;
use rusqlite::{Connection, params, OptionalExtension};
use tracing::{debug, info};
use crate::{Result, Error};
use crate::snippet::{Snippet, Visibility};
use super::schema;

/// Default time to wait on a locked database before failing
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Connection settings applied when a store is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    pub busy_timeout: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { busy_timeout: DEFAULT_BUSY_TIMEOUT }
    }
}

/// Which rows catalog and search consider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Listing {
    #[default]
    All,
    VisibleOnly,
}

/// SQLite-backed storage for snippets
pub struct SnippetStore {
    conn: Connection,
}

impl SnippetStore {
    /// Open a database file (creates it and its directory if missing)
    pub fn open(path: &Path, options: &StoreOptions) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!("Connecting to {}", path.display());
        let conn = Connection::open(path)?;
        conn.busy_timeout(options.busy_timeout)?;
        let store = Self { conn };
        store.initialize_schema()?;
        debug!("Database connection established");
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Release the connection, surfacing any error from closing it
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::Storage(e))
    }

    // ========== Snippet Operations ==========

    /// Store a snippet, overwriting message and hidden if the keyword exists
    pub fn put(&self, name: &str, message: &str, visibility: Visibility) -> Result<Snippet> {
        if name.is_empty() {
            return Err(Error::InvalidInput("snippet name must not be empty".to_string()));
        }
        if message.is_empty() {
            return Err(Error::InvalidInput("snippet text must not be empty".to_string()));
        }

        let hidden = visibility.is_hidden();
        info!("Storing snippet {:?}: {:?} (hidden: {})", name, message, hidden);

        let tx = self.conn.unchecked_transaction()?;
        tx.execute(schema::UPSERT_SNIPPET, params![name, message, hidden])?;
        tx.commit()?;

        debug!("Snippet stored successfully");
        Ok(Snippet::new(name, message, hidden))
    }

    /// Retrieve the message stored under `name`
    pub fn get(&self, name: &str) -> Result<Option<String>> {
        Ok(self.get_snippet(name)?.map(|snippet| snippet.message))
    }

    /// Retrieve the full row stored under `name`
    pub fn get_snippet(&self, name: &str) -> Result<Option<Snippet>> {
        info!("Retrieving snippet {:?}", name);

        let tx = self.conn.unchecked_transaction()?;
        let snippet = tx
            .query_row(
                "SELECT keyword, message, hidden FROM snippets WHERE keyword = ?1",
                [name],
                row_to_snippet,
            )
            .optional()?;
        tx.commit()?;

        match &snippet {
            Some(_) => debug!("Retrieved snippet successfully"),
            None => debug!("No snippet named {:?}", name),
        }
        Ok(snippet)
    }

    /// All keywords, sorted ascending
    pub fn catalog(&self) -> Result<Vec<String>> {
        self.catalog_with(Listing::All)
    }

    /// Keywords sorted ascending, optionally skipping hidden snippets
    pub fn catalog_with(&self, listing: Listing) -> Result<Vec<String>> {
        info!("Listing keywords ({:?})", listing);

        let sql = match listing {
            Listing::All => "SELECT keyword FROM snippets ORDER BY keyword",
            Listing::VisibleOnly => "SELECT keyword FROM snippets WHERE hidden = 0 ORDER BY keyword",
        };

        let tx = self.conn.unchecked_transaction()?;
        let keywords = {
            let mut stmt = tx.prepare(sql)?;
            let keywords = stmt
                .query_map([], |row| row.get(0))?
                .collect::<rusqlite::Result<Vec<String>>>()?;
            keywords
        };
        tx.commit()?;

        debug!("Catalog holds {} keywords", keywords.len());
        Ok(keywords)
    }

    /// Snippets whose message contains `query` (case-sensitive)
    pub fn search(&self, query: &str) -> Result<Vec<Snippet>> {
        self.search_with(query, Listing::All)
    }

    /// Substring search, optionally skipping hidden snippets.
    ///
    /// Uses `instr` rather than `LIKE`: matching is case-sensitive and `%`/`_`
    /// in the query are literal characters.
    pub fn search_with(&self, query: &str, listing: Listing) -> Result<Vec<Snippet>> {
        info!("Searching snippets for {:?} ({:?})", query, listing);

        let sql = match listing {
            Listing::All => {
                "SELECT keyword, message, hidden FROM snippets
                 WHERE instr(message, ?1) > 0
                 ORDER BY keyword"
            }
            Listing::VisibleOnly => {
                "SELECT keyword, message, hidden FROM snippets
                 WHERE instr(message, ?1) > 0 AND hidden = 0
                 ORDER BY keyword"
            }
        };

        let tx = self.conn.unchecked_transaction()?;
        let snippets = {
            let mut stmt = tx.prepare(sql)?;
            let snippets = stmt
                .query_map([query], row_to_snippet)?
                .collect::<rusqlite::Result<Vec<Snippet>>>()?;
            snippets
        };
        tx.commit()?;

        debug!("Search matched {} snippets", snippets.len());
        Ok(snippets)
    }

    /// Remove the snippet named `name`, if any. Always echoes the name back.
    pub fn delete(&self, name: &str) -> Result<String> {
        info!("Deleting snippet {:?}", name);

        let tx = self.conn.unchecked_transaction()?;
        let removed = tx.execute("DELETE FROM snippets WHERE keyword = ?1", [name])?;
        tx.commit()?;

        debug!("Removed {} rows for {:?}", removed, name);
        Ok(name.to_string())
    }

    /// Count all snippets
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM snippets", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Helper to convert a row to a Snippet
fn row_to_snippet(row: &rusqlite::Row) -> rusqlite::Result<Snippet> {
    Ok(Snippet {
        name: row.get(0)?,
        message: row.get(1)?,
        hidden: row.get(2)?,
    })
}
