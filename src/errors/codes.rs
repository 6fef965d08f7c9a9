use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Machine-readable error code attached to an exception.
///
/// Serializes untagged, so clients see either a plain JSON string or number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorCode {
    /// Symbolic code such as `"CARD_NOT_FOUND"`
    Text(String),

    /// Numeric code such as `7`
    Number(i64),

    /// Non-integer numeric code such as `1.5`
    Float(f64),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(code) => write!(f, "{}", code),
            Self::Number(code) => write!(f, "{}", code),
            Self::Float(code) => write!(f, "{}", code),
        }
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        Self::Text(code.to_string())
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        Self::Text(code)
    }
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        Self::Number(code)
    }
}

impl From<i32> for ErrorCode {
    fn from(code: i32) -> Self {
        Self::Number(i64::from(code))
    }
}

impl From<f64> for ErrorCode {
    fn from(code: f64) -> Self {
        Self::Float(code)
    }
}

impl From<u16> for ErrorCode {
    fn from(code: u16) -> Self {
        Self::Number(i64::from(code))
    }
}
