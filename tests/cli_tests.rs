//! CLI integration tests
//!
//! Drive the built `snippets` binary against a database in a temp directory.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn snippets(dir: &Path, db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_snippets"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .arg("--database")
        .arg(db)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn setup() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("snippets.db");
    (temp_dir, db_path)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_put_get_delete_roundtrip() {
    let (dir, db) = setup();

    let put = snippets(dir.path(), &db, &["put", "hi", "hello"]);
    assert!(put.status.success());
    assert!(stdout(&put).contains("Stored \"hello\" as \"hi\""));

    let get = snippets(dir.path(), &db, &["get", "hi"]);
    assert!(get.status.success());
    assert!(stdout(&get).contains("Retrieved snippet: \"hello\""));

    let again = snippets(dir.path(), &db, &["put", "hi", "hello again"]);
    assert!(again.status.success());
    let get = snippets(dir.path(), &db, &["get", "hi"]);
    assert!(stdout(&get).contains("\"hello again\""));

    let delete = snippets(dir.path(), &db, &["delete", "hi"]);
    assert!(delete.status.success());
    assert!(stdout(&delete).contains("Deleted \"hi\""));

    let missing = snippets(dir.path(), &db, &["get", "hi"]);
    assert!(missing.status.success(), "not-found must still exit 0");
    assert!(stdout(&missing).contains("404: Snippet Not Found"));
}

#[test]
fn test_delete_missing_succeeds() {
    let (dir, db) = setup();

    for _ in 0..2 {
        let delete = snippets(dir.path(), &db, &["delete", "never-stored"]);
        assert!(delete.status.success());
        assert!(stdout(&delete).contains("Deleted \"never-stored\""));
    }
}

#[test]
fn test_catalog_lists_sorted_keywords() {
    let (dir, db) = setup();

    let empty = snippets(dir.path(), &db, &["catalog"]);
    assert!(empty.status.success());
    assert!(stdout(&empty).contains("No snippets stored."));

    snippets(dir.path(), &db, &["put", "zulu", "z"]);
    snippets(dir.path(), &db, &["put", "alpha", "a"]);
    snippets(dir.path(), &db, &["put", "mike", "m", "--hide"]);

    let catalog = snippets(dir.path(), &db, &["catalog"]);
    let lines: Vec<String> = stdout(&catalog).lines().map(str::to_string).collect();
    assert_eq!(lines, vec!["alpha", "mike", "zulu"]);

    let visible = snippets(dir.path(), &db, &["catalog", "--visible-only"]);
    let lines: Vec<String> = stdout(&visible).lines().map(str::to_string).collect();
    assert_eq!(lines, vec!["alpha", "zulu"]);
}

#[test]
fn test_search_matches_substring() {
    let (dir, db) = setup();

    snippets(dir.path(), &db, &["put", "greet", "hello world"]);
    snippets(dir.path(), &db, &["put", "farewell", "goodbye world"]);

    let hello = stdout(&snippets(dir.path(), &db, &["search", "hello"]));
    assert!(hello.contains("greet"));
    assert!(!hello.contains("farewell"));

    let world = stdout(&snippets(dir.path(), &db, &["search", "world"]));
    assert!(world.contains("2 snippets contain \"world\""));
    assert!(world.contains("greet"));
    assert!(world.contains("farewell"));
}

#[test]
fn test_show_flag_does_not_hide() {
    let (dir, db) = setup();

    snippets(dir.path(), &db, &["put", "note", "visible text", "--show"]);

    let visible = stdout(&snippets(dir.path(), &db, &["catalog", "--visible-only"]));
    assert_eq!(visible.trim(), "note");
}

#[test]
fn test_hide_and_show_conflict() {
    let (dir, db) = setup();

    let output = snippets(dir.path(), &db, &["put", "x", "y", "--hide", "--show"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!db.exists(), "argument errors must not touch the store");
}

#[test]
fn test_malformed_input_is_rejected() {
    let (dir, db) = setup();

    assert_eq!(snippets(dir.path(), &db, &["put", "only-name"]).status.code(), Some(2));
    assert_eq!(snippets(dir.path(), &db, &["put", "", "text"]).status.code(), Some(2));
    assert_eq!(snippets(dir.path(), &db, &["frobnicate"]).status.code(), Some(2));
    assert_eq!(snippets(dir.path(), &db, &["get"]).status.code(), Some(2));
}

#[test]
fn test_json_output() {
    let (dir, db) = setup();

    let put = snippets(dir.path(), &db, &["--json", "put", "hi", "hello", "--hide"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&put)).unwrap();
    assert_eq!(value["ok"], true);
    assert_eq!(value["command"], "put");
    assert_eq!(value["data"]["kind"], "stored");
    assert_eq!(value["data"]["hidden"], true);

    let missing = snippets(dir.path(), &db, &["get", "nobody", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&missing)).unwrap();
    assert_eq!(value["data"]["kind"], "retrieved");
    assert!(value["data"]["message"].is_null());
}

#[test]
fn test_config_file_supplies_database() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("snippets.toml");
    std::fs::write(&config_path, "database = \"from-config.db\"\nlog_file = \"snippets.log\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_snippets"))
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .args(["put", "cfg", "configured"])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    assert!(temp_dir.path().join("from-config.db").exists());

    let log = std::fs::read_to_string(temp_dir.path().join("snippets.log")).unwrap();
    assert!(log.contains("Storing snippet"));
}

#[test]
fn test_unopenable_database_fails() {
    let (dir, _) = setup();
    // A directory cannot be opened as a database file
    let output = snippets(dir.path(), dir.path(), &["catalog"]);
    assert_eq!(output.status.code(), Some(1));

    // Reported once, not once by the logger and again by the CLI
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr was: {stderr}");
}

#[test]
fn test_locked_database_fails_after_timeout() {
    let (dir, db) = setup();
    std::fs::write(dir.path().join("snippets.toml"), "busy_timeout_ms = 200\n").unwrap();

    assert!(snippets(dir.path(), &db, &["put", "hi", "hello"]).status.success());

    let holder = rusqlite::Connection::open(&db).unwrap();
    holder.execute_batch("BEGIN EXCLUSIVE").unwrap();

    let output = snippets(dir.path(), &db, &["get", "hi"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("database is locked"));

    holder.execute_batch("ROLLBACK").unwrap();
    assert!(snippets(dir.path(), &db, &["get", "hi"]).status.success());
}
