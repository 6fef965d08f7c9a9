//! Annotated exception types and their HTTP rendering

pub mod base;
pub mod caused;
pub mod codes;
pub mod http;
pub mod kinds;
pub mod metadata;
pub mod record;
pub mod response;

pub use base::{BaseException, Exception};
pub use caused::CausedException;
pub use codes::ErrorCode;
pub use http::HttpException;
pub use kinds::{HttpExceptionKind, StatusError};
pub use metadata::{BoxError, Metadata};
pub use record::ExceptionRecord;
pub use response::ExceptionResponse;
