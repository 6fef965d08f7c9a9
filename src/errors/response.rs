use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use super::base::Exception;
use super::http::HttpException;
use super::kinds::to_status_code;
use super::record::ExceptionRecord;
use crate::config::ResponseConfig;

/// HTTP response rendered from an [`HttpException`]
#[derive(Debug, Clone, PartialEq)]
pub struct ExceptionResponse {
    pub status: StatusCode,
    pub body: ExceptionRecord,
}

impl HttpException {
    /// Render for a client, redacting the stack and resolving the status per `config`
    pub fn respond(&self, config: &ResponseConfig) -> ExceptionResponse {
        let fallback = to_status_code(config.fallback_status).unwrap_or_else(|e| {
            warn!(error = %e, "Configured fallback status is invalid, using 500");
            StatusCode::INTERNAL_SERVER_ERROR
        });

        let status = match self.http_status() {
            Ok(Some(status)) => status,
            Ok(None) => fallback,
            Err(e) => {
                warn!(
                    exception = self.name(),
                    error = %e,
                    "Exception carries an invalid status, using fallback"
                );
                fallback
            }
        };

        ExceptionResponse {
            status,
            body: self.to_response(config.deployment_mode),
        }
    }
}

impl IntoResponse for ExceptionResponse {
    fn into_response(self) -> Response {
        let code = self.body.code.as_ref().map(|c| c.to_string());
        if self.status.is_server_error() {
            error!(
                exception = %self.body.name,
                status = %self.status.as_u16(),
                code = ?code,
                detail = %self.body.message,
                "Responding with server error"
            );
        } else if self.status.is_client_error() {
            warn!(
                exception = %self.body.name,
                status = %self.status.as_u16(),
                code = ?code,
                "Responding with client error"
            );
        }

        (self.status, Json(self.body)).into_response()
    }
}

impl IntoResponse for HttpException {
    fn into_response(self) -> Response {
        let config = ResponseConfig::from_process_env().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load response configuration, using defaults");
            ResponseConfig::default()
        });

        self.respond(&config).into_response()
    }
}
