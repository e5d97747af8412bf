//! Output modes: themed text for people, a JSON envelope for scripts

use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json { OutputMode::Json } else { OutputMode::Human }
    }

    pub fn is_human(self) -> bool {
        matches!(self, OutputMode::Human)
    }
}

/// `{"ok": true, "command": ..., "data": ...}`
pub fn success_envelope<T: Serialize>(command: &str, data: &T) -> serde_json::Result<String> {
    let data = serde_json::to_value(data)?;
    serde_json::to_string_pretty(&json!({
        "ok": true,
        "command": command,
        "data": data,
    }))
}

/// `{"ok": false, "command": ..., "error": ...}`
pub fn error_envelope(command: &str, error: &str) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&json!({
        "ok": false,
        "command": command,
        "error": error,
    }))
}
