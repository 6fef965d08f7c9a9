use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::codes::ErrorCode;

/// Serialized snapshot of an exception
///
/// Optional fields are omitted from JSON when absent, so the serialized form
/// carries exactly the annotations supplied at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExceptionRecord {
    /// Variant type tag
    pub name: String,
    /// Human-readable error message
    pub message: String,
    /// Short human label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Plain-language message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple: Option<String>,
    /// Error code for programmatic handling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    /// Stack trace captured at construction, removed when redacted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// Text of the wrapped cause
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// HTTP status code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ExceptionRecord {
    /// Drop the stack trace, keeping every other field
    pub fn redacted(mut self) -> Self {
        self.stack = None;
        self
    }
}
