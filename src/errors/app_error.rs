use thiserror::Error;

use super::response::Response;
use super::BoxError;

/// Structured application error.
///
/// Carries a stable numeric code, the message shown to API consumers, and
/// optionally the low-level error that triggered it. The wrapped source is
/// diagnostic-only; `code` and `msg` alone determine client-visible behavior.
#[derive(Debug, Error)]
#[error("{msg}")]
pub struct AppError {
    /// Stable error code from [`super::codes`]
    pub code: i32,
    /// Human-readable message
    pub msg: String,
    /// Underlying low-level error, kept for logs and non-release responses
    #[source]
    pub source: Option<BoxError>,
}

impl AppError {
    /// Create a new error
    pub fn new(code: i32, msg: impl Into<String>, source: Option<BoxError>) -> Self {
        Self {
            code,
            msg: msg.into(),
            source,
        }
    }

    /// Rebuild a carrier from a response envelope, e.g. when the reply of a
    /// dependent node must be re-raised as a local error.
    pub fn from_response(resp: &Response) -> Self {
        Self {
            code: resp.code,
            msg: resp.msg.clone(),
            source: Some(resp.error.clone().into()),
        }
    }

    /// Attach the low-level error behind this failure, replacing any
    /// previously attached one.
    pub fn with_source(mut self, raw: impl Into<BoxError>) -> Self {
        self.source = Some(raw.into());
        self
    }
}
