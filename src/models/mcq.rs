use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One answer choice as the model is instructed to emit it: the `option`
/// text and an `is_correct` marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McqOption {
    pub option: String,
    pub is_correct: bool,
}

/// A single multiple-choice question. The normalizer guarantees exactly
/// four options with exactly one marked correct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McQuestion {
    pub question: String,
    pub options: Vec<McqOption>,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Topic,
    Pdf,
}

/// Response envelope returned by both generation flows. `total_questions`
/// reflects the normalized count, which may be less than the requested
/// count in `metadata` when the model under-delivers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McqResponse {
    pub questions: Vec<McQuestion>,
    pub generated_at: DateTime<Utc>,
    pub source_type: SourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub total_questions: usize,
    pub metadata: JsonValue,
}
