//! Error mapping for the HTTP layer.
//!
//! Transport errors surface as the domain's [`FetchError`] so the stores
//! never see `reqwest` types.

use lumiere_commerce::FetchError;
use thiserror::Error;

/// Translate a `reqwest` failure into a [`FetchError`].
pub(crate) fn map_reqwest_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(e.to_string())
    } else if e.is_connect() {
        FetchError::Connection(e.to_string())
    } else if e.is_decode() || e.is_body() {
        FetchError::InvalidPayload(e.to_string())
    } else if let Some(status) = e.status() {
        FetchError::Http {
            status: status.as_u16(),
            message: e.to_string(),
        }
    } else {
        FetchError::Request(e.to_string())
    }
}

/// Errors loading an [`ApiConfig`](crate::ApiConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Not valid TOML for the config schema.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is present but unusable.
    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
