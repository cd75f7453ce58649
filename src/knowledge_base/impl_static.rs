use crate::knowledge_base::interface::{KnowledgeBase, KnowledgeEntry};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use url::Url;

const BUILTIN_DATASET: &str = include_str!("machines.json");

#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("failed to read knowledge base: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed knowledge base dataset: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate machine key {0:?}")]
    DuplicateKey(String),

    #[error("machine key {0:?} is not canonical (must be non-empty, trimmed and lowercase)")]
    NonCanonicalKey(String),

    #[error("machine {0:?} has no exercises")]
    EmptyExercises(String),

    #[error("machine {key:?} has malformed reference url {url:?}: {source}")]
    MalformedReference {
        key: String,
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Deserialize)]
struct Dataset {
    version: u32,
    machines: Vec<KnowledgeEntry>,
}

/// Read-only machine catalog built once at startup.
#[derive(Debug, Clone)]
pub struct KnowledgeBaseStatic {
    version: u32,
    entries: HashMap<String, KnowledgeEntry>,
}

impl KnowledgeBaseStatic {
    pub fn new(version: u32, machines: Vec<KnowledgeEntry>) -> Result<Self, KnowledgeBaseError> {
        let mut entries = HashMap::with_capacity(machines.len());

        for entry in machines {
            validate(&entry)?;

            if entries.contains_key(&entry.key) {
                return Err(KnowledgeBaseError::DuplicateKey(entry.key));
            }
            entries.insert(entry.key.clone(), entry);
        }

        Ok(Self { version, entries })
    }

    pub fn builtin() -> Result<Self, KnowledgeBaseError> {
        Self::from_json_str(BUILTIN_DATASET)
    }

    pub fn from_json_str(json: &str) -> Result<Self, KnowledgeBaseError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Self::new(dataset.version, dataset.machines)
    }

    pub fn from_path(path: &Path) -> Result<Self, KnowledgeBaseError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Registered keys in sorted order.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.entries.keys().cloned().collect();
        labels.sort();
        labels
    }
}

impl KnowledgeBase for KnowledgeBaseStatic {
    fn lookup(&self, label: &str) -> Option<&KnowledgeEntry> {
        self.entries.get(label)
    }
}

fn validate(entry: &KnowledgeEntry) -> Result<(), KnowledgeBaseError> {
    if entry.key.is_empty() || entry.key != entry.key.trim().to_lowercase() {
        return Err(KnowledgeBaseError::NonCanonicalKey(entry.key.clone()));
    }

    if entry.exercises.is_empty() {
        return Err(KnowledgeBaseError::EmptyExercises(entry.key.clone()));
    }

    for reference in &entry.references {
        Url::parse(reference).map_err(|source| KnowledgeBaseError::MalformedReference {
            key: entry.key.clone(),
            url: reference.clone(),
            source,
        })?;
    }

    Ok(())
}
