//! Command dispatch: one parsed command, one store operation

use serde::Serialize;
use tracing::debug;
use crate::Result;
use crate::snippet::{Snippet, Visibility};
use crate::storage::{Listing, SnippetStore};

/// A parsed subcommand with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Put {
        name: String,
        message: String,
        visibility: Visibility,
    },
    Get {
        name: String,
    },
    Catalog {
        listing: Listing,
    },
    Search {
        query: String,
        listing: Listing,
    },
    Delete {
        name: String,
    },
}

impl Command {
    /// Subcommand name, as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Command::Put { .. } => "put",
            Command::Get { .. } => "get",
            Command::Catalog { .. } => "catalog",
            Command::Search { .. } => "search",
            Command::Delete { .. } => "delete",
        }
    }
}

/// Result of a dispatched command, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Stored(Snippet),
    Retrieved {
        name: String,
        /// `None` when no snippet has this name
        message: Option<String>,
    },
    Catalog {
        keywords: Vec<String>,
    },
    Matches {
        query: String,
        snippets: Vec<Snippet>,
    },
    Deleted {
        name: String,
    },
}

/// Run `command` against `store`
pub fn dispatch(store: &SnippetStore, command: Command) -> Result<Outcome> {
    debug!("Dispatching {} command", command.name());

    let outcome = match command {
        Command::Put { name, message, visibility } => {
            Outcome::Stored(store.put(&name, &message, visibility)?)
        }
        Command::Get { name } => {
            let message = store.get(&name)?;
            Outcome::Retrieved { name, message }
        }
        Command::Catalog { listing } => {
            let keywords = store.catalog_with(listing)?;
            debug!("Catalog lists {} snippets", keywords.len());
            Outcome::Catalog { keywords }
        }
        Command::Search { query, listing } => {
            let snippets = store.search_with(&query, listing)?;
            Outcome::Matches { query, snippets }
        }
        Command::Delete { name } => Outcome::Deleted {
            name: store.delete(&name)?,
        },
    };

    Ok(outcome)
}
