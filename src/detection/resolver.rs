use crate::knowledge_base::interface::{KnowledgeBase, KnowledgeEntry};
use crate::prediction_client::interface::{PredictionResult, UNKNOWN_LABEL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDetection {
    pub display_label: String,
    pub entry: Option<KnowledgeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Detected(ResolvedDetection),
    Failed { error_detail: String },
}

/// Knowledge base keys are lowercase.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Joins a prediction against the knowledge base. Failed predictions never
/// reach the knowledge base; an unrecognized label still resolves, just
/// without an entry.
pub fn resolve(knowledge_base: &dyn KnowledgeBase, result: &PredictionResult) -> Resolution {
    if !result.succeeded {
        return Resolution::Failed {
            error_detail: result
                .error_detail
                .clone()
                .unwrap_or_else(|| "unknown error".to_string()),
        };
    }

    let display_label = result
        .raw_label
        .clone()
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

    let entry = knowledge_base
        .lookup(&normalize_label(&display_label))
        .cloned();

    Resolution::Detected(ResolvedDetection {
        display_label,
        entry,
    })
}
