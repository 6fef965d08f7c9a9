//! Structured exception types: a base error annotated with a label, a
//! plain-language message and a code, a variant wrapping an underlying cause,
//! and an HTTP variant that renders client-safe JSON responses.

pub mod config;
pub mod errors;
pub mod logging;

pub use config::{DeploymentMode, ResponseConfig};
pub use errors::{
    kinds, BaseException, BoxError, CausedException, ErrorCode, Exception, ExceptionRecord,
    ExceptionResponse, HttpException, HttpExceptionKind, Metadata, StatusError,
};
