//! Database schema definitions

/// SQL to create the snippets table
pub const CREATE_SNIPPETS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS snippets (
    keyword TEXT PRIMARY KEY,
    message TEXT NOT NULL,
    hidden BOOLEAN NOT NULL DEFAULT 0
)
"#;

/// Insert a snippet, or overwrite message and hidden of an existing keyword
pub const UPSERT_SNIPPET: &str = r#"
INSERT INTO snippets (keyword, message, hidden)
VALUES (?1, ?2, ?3)
ON CONFLICT(keyword) DO UPDATE SET
    message = excluded.message,
    hidden = excluded.hidden
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_SNIPPETS_TABLE]
}
