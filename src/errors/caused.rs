use std::error::Error as StdError;
use std::fmt;

use super::base::{BaseException, Exception};
use super::metadata::{BoxError, Metadata};
use super::record::ExceptionRecord;

/// Exception wrapping a lower-level cause.
#[derive(Debug)]
pub struct CausedException {
    base: BaseException,
    error: Option<BoxError>,
}

impl CausedException {
    pub const NAME: &'static str = "CausedException";

    #[track_caller]
    pub fn new(message: impl Into<String>, metadata: Metadata) -> Self {
        Self::named(Self::NAME, message, metadata)
    }

    #[track_caller]
    pub fn named(name: &'static str, message: impl Into<String>, mut metadata: Metadata) -> Self {
        let error = metadata.error.take();
        Self {
            base: BaseException::named(name, message, metadata),
            error,
        }
    }

    pub fn error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.error.as_deref()
    }

    /// Replace the wrapped cause and return it
    pub fn set_error(&mut self, error: impl Into<BoxError>) -> &(dyn StdError + Send + Sync + 'static) {
        &**self.error.insert(error.into())
    }
}

impl fmt::Display for CausedException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

impl StdError for CausedException {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.error
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

impl Exception for CausedException {
    fn base(&self) -> &BaseException {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseException {
        &mut self.base
    }

    fn serialize(&self) -> ExceptionRecord {
        ExceptionRecord {
            error: self.error.as_ref().map(|e| e.to_string()),
            ..self.base.snapshot()
        }
    }
}
