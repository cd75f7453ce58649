use serde::{Deserialize, Serialize};

/// Descriptive metadata for one gym machine, keyed by its canonical
/// lowercase name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub key: String,
    pub description: String,
    /// Target muscle group.
    pub category: String,
    pub exercises: Vec<String>,
    /// Tutorial links, roughly parallel to `exercises`.
    pub references: Vec<String>,
}

pub trait KnowledgeBase {
    /// Exact match on a normalized key. Callers lowercase before calling.
    fn lookup(&self, label: &str) -> Option<&KnowledgeEntry>;
}
