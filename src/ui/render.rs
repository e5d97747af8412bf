//! Human-readable rendering of command outcomes

use owo_colors::OwoColorize;
use crate::commands::Outcome;
use crate::ui::{snippet_table, theme, Icons, Theme};

/// Shown when `get` finds nothing
pub const NOT_FOUND: &str = "404: Snippet Not Found";

pub struct Renderer<'a> {
    theme: &'a Theme,
}

impl<'a> Renderer<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn render(&self, outcome: &Outcome) -> String {
        let t = self.theme;
        match outcome {
            Outcome::Stored(snippet) => {
                let mut line = format!(
                    "{} {}",
                    Icons::CHECK,
                    format!("Stored {:?} as {:?}", snippet.message, snippet.name).style(t.changed.clone())
                );
                if snippet.hidden {
                    line.push_str(&format!(" {} {}", Icons::LOCK, "(hidden)".style(t.hidden.clone())));
                }
                line
            }
            Outcome::Retrieved { message: Some(message), .. } => {
                format!("{} {:?}", "Retrieved snippet:".style(t.label.clone()), message)
            }
            Outcome::Retrieved { message: None, name } => {
                format!(
                    "{} {} {}",
                    Icons::CROSS,
                    NOT_FOUND.style(t.missing.clone()),
                    format!("({})", name).style(t.quiet.clone())
                )
            }
            Outcome::Catalog { keywords } if keywords.is_empty() => {
                format!("{} {}", Icons::EMPTY, "No snippets stored.".style(t.quiet.clone()))
            }
            Outcome::Catalog { keywords } => keywords.join("\n"),
            Outcome::Matches { query, snippets } if snippets.is_empty() => format!(
                "{} {}",
                Icons::EMPTY,
                format!("No snippets contain {:?}.", query).style(t.quiet.clone())
            ),
            Outcome::Matches { query, snippets } => {
                let summary = if snippets.len() == 1 { "snippet contains" } else { "snippets contain" };
                format!(
                    "{} {}\n{}",
                    Icons::SEARCH.style(t.accent.clone()),
                    format!("{} {} {:?}", snippets.len(), summary, query).style(t.summary.clone()),
                    snippet_table(snippets)
                )
            }
            Outcome::Deleted { name } => format!(
                "{} {}",
                Icons::DEL,
                format!("Deleted {:?}", name).style(t.changed.clone())
            ),
        }
    }
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().missing.clone()));
}
