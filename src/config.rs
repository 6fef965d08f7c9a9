use anyhow::{Context, Result};
use std::env;

/// Environment variable holding the deployment mode
pub const DEPLOYMENT_MODE_VAR: &str = "APP_ENV";

/// Environment variable holding the status used when an exception has none
pub const FALLBACK_STATUS_VAR: &str = "HTTP_EXCEPTION_FALLBACK_STATUS";

const DEFAULT_FALLBACK_STATUS: u16 = 500;

/// Whether the running environment is development-like.
///
/// Only the literal value `development` counts; anything else, including an
/// unset variable, is treated as production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeploymentMode {
    Development,
    #[default]
    Production,
}

impl DeploymentMode {
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("development") => Self::Development,
            _ => Self::Production,
        }
    }

    pub fn from_env() -> Self {
        Self::from_value(env::var(DEPLOYMENT_MODE_VAR).ok().as_deref())
    }

    /// Stack traces are only exposed in development
    pub fn keeps_stack(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Settings governing how HTTP exceptions render as responses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseConfig {
    pub deployment_mode: DeploymentMode,
    pub fallback_status: u16,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            deployment_mode: DeploymentMode::Production,
            fallback_status: DEFAULT_FALLBACK_STATUS,
        }
    }
}

impl ResponseConfig {
    /// Load `.env` if present, then read the process environment.
    ///
    /// Call once at startup; `.env` values are written into the process
    /// environment.
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_process_env()
    }

    /// Read the process environment only, without touching `.env`
    pub fn from_process_env() -> Result<Self> {
        Ok(ResponseConfig {
            deployment_mode: DeploymentMode::from_env(),
            fallback_status: env::var(FALLBACK_STATUS_VAR)
                .unwrap_or_else(|_| DEFAULT_FALLBACK_STATUS.to_string())
                .parse()
                .context("HTTP_EXCEPTION_FALLBACK_STATUS must be a valid status code")?,
        })
    }
}
