use axum::http::StatusCode;
use thiserror::Error;

/// A named HTTP exception variant with a default status.
///
/// `HttpException::of::<K>` tags the exception with `K::NAME` and resolves its
/// status to `K::DEFAULT_STATUS` unless the metadata carries one.
pub trait HttpExceptionKind {
    const NAME: &'static str;
    const DEFAULT_STATUS: Option<u16>;
}

/// Raised when a numeric status cannot be used as an HTTP status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("invalid HTTP status code: {0}")]
    Invalid(u16),
}

/// Convert a numeric status into an [`http::StatusCode`](axum::http::StatusCode)
pub fn to_status_code(status: u16) -> Result<StatusCode, StatusError> {
    StatusCode::from_u16(status).map_err(|_| StatusError::Invalid(status))
}

macro_rules! http_kind {
    ($(#[$doc:meta])* $kind:ident => $status:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $kind;

        impl HttpExceptionKind for $kind {
            const NAME: &'static str = stringify!($kind);
            const DEFAULT_STATUS: Option<u16> = Some($status);
        }
    };
}

http_kind!(
    /// Malformed or invalid input
    BadRequest => 400
);
http_kind!(
    /// Missing or invalid credentials
    Unauthorized => 401
);
http_kind!(Forbidden => 403);
http_kind!(NotFound => 404);
http_kind!(Conflict => 409);
http_kind!(
    /// Input validation failed
    UnprocessableEntity => 422
);
http_kind!(
    /// Rate limit exceeded
    TooManyRequests => 429
);
http_kind!(InternalServerError => 500);
http_kind!(
    /// Upstream dependency failure
    BadGateway => 502
);
http_kind!(
    /// Database or dependency unavailable
    ServiceUnavailable => 503
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_default_statuses() {
        assert_eq!(BadRequest::DEFAULT_STATUS, Some(400));
        assert_eq!(Unauthorized::DEFAULT_STATUS, Some(401));
        assert_eq!(Forbidden::DEFAULT_STATUS, Some(403));
        assert_eq!(NotFound::DEFAULT_STATUS, Some(404));
        assert_eq!(Conflict::DEFAULT_STATUS, Some(409));
        assert_eq!(UnprocessableEntity::DEFAULT_STATUS, Some(422));
        assert_eq!(TooManyRequests::DEFAULT_STATUS, Some(429));
        assert_eq!(InternalServerError::DEFAULT_STATUS, Some(500));
        assert_eq!(BadGateway::DEFAULT_STATUS, Some(502));
        assert_eq!(ServiceUnavailable::DEFAULT_STATUS, Some(503));
    }

    #[test]
    fn test_kind_names_match_type_names() {
        assert_eq!(NotFound::NAME, "NotFound");
        assert_eq!(TooManyRequests::NAME, "TooManyRequests");
    }

    #[test]
    fn test_to_status_code() {
        assert_eq!(to_status_code(404), Ok(StatusCode::NOT_FOUND));
        assert_eq!(to_status_code(42), Err(StatusError::Invalid(42)));
        assert_eq!(
            to_status_code(1000).unwrap_err().to_string(),
            "invalid HTTP status code: 1000"
        );
    }
}
