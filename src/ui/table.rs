use tabled::{settings::Style, Table, Tabled};
use crate::snippet::Snippet;

#[derive(Tabled)]
pub struct SnippetRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Snippet")]
    pub message: String,
    #[tabled(rename = "Hidden")]
    pub hidden: String,
}

impl From<&Snippet> for SnippetRow {
    fn from(snippet: &Snippet) -> Self {
        Self {
            name: snippet.name.clone(),
            message: snippet.message.clone(),
            hidden: if snippet.hidden { "yes" } else { "no" }.to_string(),
        }
    }
}

/// Rounded table of snippets; empty string for no rows
pub fn snippet_table(snippets: &[Snippet]) -> String {
    if snippets.is_empty() {
        return String::new();
    }

    let rows: Vec<SnippetRow> = snippets.iter().map(SnippetRow::from).collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_headers_and_rows() {
        let table = snippet_table(&[
            Snippet::new("greet", "hello world", false),
            Snippet::new("secret", "hush", true),
        ]);

        assert!(table.contains("Name"));
        assert!(table.contains("Snippet"));
        assert!(table.contains("hello world"));
        assert!(table.contains("secret"));
        assert!(table.contains("yes"));
        assert!(table.starts_with('╭'));
    }

    #[test]
    fn test_empty_table() {
        assert!(snippet_table(&[]).is_empty());
    }
}
