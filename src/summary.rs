//! SummaryResult - the structured record printed for every invocation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Placeholder accuracy reported until a real score is computed
pub const ACCURACY_PLACEHOLDER: f64 = 0.85;

/// Runtime metrics attached to a summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Metrics {
    /// Resident memory change across the analysis call, in megabytes
    pub memory_usage: f64,
    /// Constant placeholder, not a measured quantity
    pub accuracy_score: f64,
    /// Wall-clock time of the whole summarization, in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<f64>,
    /// Whitespace-separated word count of the input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_count: Option<usize>,
}

impl Metrics {
    pub fn new(memory_usage: f64) -> Self {
        Self {
            memory_usage,
            accuracy_score: ACCURACY_PLACEHOLDER,
            processing_time_ms: None,
            word_count: None,
            sentence_count: None,
        }
    }
}

/// Extractive summary of one input text.
///
/// Built once per invocation and serialized as a single JSON line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SummaryResult {
    /// First sentence of the input
    pub title: String,
    /// Leading sentences joined by single spaces
    pub summary: String,
    /// Noun phrase heads and named entities, deduplicated
    pub keywords: Vec<String>,
    /// Estimated reading time in seconds
    pub duration: f64,
    pub metrics: Metrics,
}

impl SummaryResult {
    /// Check if the input produced any content
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.summary.is_empty() && self.keywords.is_empty()
    }

    /// Serialize as one line of JSON
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
