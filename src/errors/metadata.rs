use std::error::Error as StdError;
use std::fmt;

use super::codes::ErrorCode;

/// Boxed underlying cause carried by a [`CausedException`](super::CausedException).
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Optional construction-time annotations shared by every exception variant.
///
/// Each field is `Some` only when the caller set it, so an empty label stays
/// distinguishable from no label at all. Variants read the keys they know and
/// ignore the rest.
#[derive(Default)]
pub struct Metadata {
    pub label: Option<String>,
    pub simple: Option<String>,
    pub code: Option<ErrorCode>,
    pub error: Option<BoxError>,
    pub status: Option<u16>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_simple(mut self, simple: impl Into<String>) -> Self {
        self.simple = Some(simple.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<ErrorCode>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<BoxError>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

impl fmt::Debug for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metadata")
            .field("label", &self.label)
            .field("simple", &self.simple)
            .field("code", &self.code)
            .field("error", &self.error.as_ref().map(|e| e.to_string()))
            .field("status", &self.status)
            .finish()
    }
}
