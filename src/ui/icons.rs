pub struct Icons;

impl Icons {
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const SEARCH: &str = "🔍";
    pub const DEL: &str = "🗑️";
    pub const EMPTY: &str = "∅";
    pub const LOCK: &str = "🔒";
}
