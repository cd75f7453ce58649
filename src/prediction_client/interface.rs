use crate::image_source::interface::SelectedImage;
use thiserror::Error;

/// Label used when the server answers with no `detected_machine`, or an empty one.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Outcome of one submission. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionResult {
    pub raw_label: Option<String>,
    pub succeeded: bool,
    pub error_detail: Option<String>,
}

impl PredictionResult {
    pub fn success(label: &str) -> Self {
        Self {
            raw_label: Some(label.to_string()),
            succeeded: true,
            error_detail: None,
        }
    }

    pub fn failure(detail: &str) -> Self {
        Self {
            raw_label: None,
            succeeded: false,
            error_detail: Some(detail.to_string()),
        }
    }
}

impl From<Result<String, PredictionError>> for PredictionResult {
    fn from(result: Result<String, PredictionError>) -> Self {
        match result {
            Ok(label) => PredictionResult::success(&label),
            Err(e) => PredictionResult::failure(&e.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("could not read image: {0}")]
    ReadImage(#[from] std::io::Error),

    #[error("image is {size} bytes, the limit is {limit} bytes")]
    ImageTooLarge { size: u64, limit: u64 },

    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("response is not valid json: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("response is not a json object")]
    NotAnObject,

    #[error("detected_machine is not a string: {0}")]
    LabelNotAString(String),
}

pub trait PredictionClient {
    /// One attempt, no retries. Failures come back inside the result.
    fn submit(&self, image: &SelectedImage) -> PredictionResult;
}
