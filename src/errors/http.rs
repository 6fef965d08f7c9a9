use std::error::Error as StdError;
use std::fmt;

use axum::http::StatusCode;
use tracing::debug;

use super::base::{BaseException, Exception};
use super::kinds::{to_status_code, HttpExceptionKind, StatusError};
use super::metadata::Metadata;
use super::record::ExceptionRecord;
use crate::config::DeploymentMode;

/// Exception carrying an HTTP status, rendered to clients via `to_response`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpException {
    base: BaseException,
    status: Option<u16>,
}

impl HttpException {
    pub const NAME: &'static str = "HttpException";

    /// Plain HTTP exception with no default status
    #[track_caller]
    pub fn new(message: impl Into<String>, metadata: Metadata) -> Self {
        Self::named(Self::NAME, None, message, metadata)
    }

    /// Exception of kind `K`, defaulting to `K::DEFAULT_STATUS`
    #[track_caller]
    pub fn of<K: HttpExceptionKind>(message: impl Into<String>, metadata: Metadata) -> Self {
        Self::named(K::NAME, K::DEFAULT_STATUS, message, metadata)
    }

    /// `metadata.status` wins over `default_status`
    #[track_caller]
    pub fn named(
        name: &'static str,
        default_status: Option<u16>,
        message: impl Into<String>,
        metadata: Metadata,
    ) -> Self {
        let status = metadata.status.or(default_status);
        Self {
            base: BaseException::named(name, message, metadata),
            status,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Alias of [`status`](Self::status) for frameworks expecting `statusCode`
    pub fn status_code(&self) -> Option<u16> {
        self.status()
    }

    /// Alias of [`set_status`](Self::set_status)
    pub fn set_status_code(&mut self, status: u16) {
        self.set_status(status);
    }

    /// The status as an [`http::StatusCode`](StatusCode), if set and valid
    pub fn http_status(&self) -> Result<Option<StatusCode>, StatusError> {
        self.status.map(to_status_code).transpose()
    }

    /// Client-facing snapshot; the stack is kept only in development
    pub fn to_response(&self, mode: DeploymentMode) -> ExceptionRecord {
        let record = self.serialize();
        if mode.keeps_stack() {
            record
        } else {
            debug!(exception = self.base.name(), "Redacting stack from response");
            record.redacted()
        }
    }

    /// [`to_response`](Self::to_response) using the `APP_ENV` deployment mode
    pub fn to_response_from_env(&self) -> ExceptionRecord {
        self.to_response(DeploymentMode::from_env())
    }
}

impl fmt::Display for HttpException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

impl StdError for HttpException {}

impl Exception for HttpException {
    fn base(&self) -> &BaseException {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseException {
        &mut self.base
    }

    fn serialize(&self) -> ExceptionRecord {
        ExceptionRecord {
            status: self.status,
            ..self.base.snapshot()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::kinds::{InternalServerError, NotFound};
    use serde_json::json;

    struct ServerFault;

    impl HttpExceptionKind for ServerFault {
        const NAME: &'static str = "ServerFault";
        const DEFAULT_STATUS: Option<u16> = Some(500);
    }

    #[test]
    fn test_default_status_applies() {
        let err = HttpException::of::<ServerFault>("crashed", Metadata::new());
        assert_eq!(err.name(), "ServerFault");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_metadata_status_overrides_default() {
        let err = HttpException::of::<ServerFault>("missing", Metadata::new().with_status(404));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_no_default_and_no_metadata_status() {
        let err = HttpException::new("unknown", Metadata::new());
        assert_eq!(err.name(), "HttpException");
        assert_eq!(err.status(), None);
        assert_eq!(err.http_status(), Ok(None));

        let value = serde_json::to_value(err.serialize()).unwrap();
        assert!(!value.as_object().unwrap().contains_key("status"));
    }

    #[test]
    fn test_status_code_alias() {
        let mut err = HttpException::of::<InternalServerError>("nope", Metadata::new());
        err.set_status_code(401);
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.status_code(), Some(401));

        err.set_status(403);
        assert_eq!(err.status_code(), Some(403));

        err.clear_status();
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_http_status_validation() {
        let err = HttpException::of::<NotFound>("missing", Metadata::new());
        assert_eq!(err.http_status(), Ok(Some(StatusCode::NOT_FOUND)));

        let err = HttpException::new("weird", Metadata::new().with_status(42));
        assert_eq!(err.http_status(), Err(StatusError::Invalid(42)));
    }

    #[test]
    fn test_serialize_includes_status() {
        let err = HttpException::of::<NotFound>(
            "Card not found: abc123",
            Metadata::new().with_code("CARD_NOT_FOUND"),
        );
        let value = serde_json::to_value(err.serialize()).unwrap();
        assert_eq!(value["name"], json!("NotFound"));
        assert_eq!(value["status"], json!(404));
        assert_eq!(value["code"], json!("CARD_NOT_FOUND"));
        assert!(value["stack"].is_string());
    }

    #[test]
    fn test_to_response_keeps_stack_in_development() {
        let err = HttpException::of::<NotFound>("missing", Metadata::new().with_label("Lookup"));
        let record = err.to_response(DeploymentMode::Development);
        assert_eq!(record.stack.as_deref(), Some(err.base().stack()));
        assert_eq!(record, err.serialize());
    }

    #[test]
    fn test_to_response_redacts_stack_otherwise() {
        let err = HttpException::of::<NotFound>(
            "missing",
            Metadata::new().with_label("Lookup").with_simple("Nothing here").with_code(7),
        );
        let value = serde_json::to_value(err.to_response(DeploymentMode::Production)).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "NotFound",
                "message": "missing",
                "label": "Lookup",
                "simple": "Nothing here",
                "code": 7,
                "status": 404,
            })
        );
    }
}
