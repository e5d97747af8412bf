//! Snippet - the single stored entity

use serde::{Deserialize, Serialize};

/// A named text fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Unique keyword
    pub name: String,
    /// Snippet text
    pub message: String,
    /// Excluded from visible-only listings when set
    pub hidden: bool,
}

impl Snippet {
    pub fn new(name: impl Into<String>, message: impl Into<String>, hidden: bool) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            hidden,
        }
    }
}

/// Requested visibility for a `put`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Hidden,
    Shown,
    #[default]
    Unspecified,
}

impl Visibility {
    /// Build from the mutually exclusive `--hide` / `--show` switches.
    ///
    /// `hide` wins if both are somehow set; the CLI rejects that combination
    /// before it gets here.
    pub fn from_flags(hide: bool, show: bool) -> Self {
        match (hide, show) {
            (true, _) => Visibility::Hidden,
            (false, true) => Visibility::Shown,
            (false, false) => Visibility::Unspecified,
        }
    }

    /// Value written to the `hidden` column. Unspecified means visible.
    pub fn is_hidden(self) -> bool {
        matches!(self, Visibility::Hidden)
    }
}
