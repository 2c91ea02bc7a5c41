use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::{codes, AppError, BoxError};
use crate::config::RunMode;

/// Response envelope returned to API clients.
///
/// `code` is the only field client logic should branch on; `msg` and `error`
/// are for humans and logs. `error` carries the raw diagnostic text and is
/// omitted from the wire format when empty.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Response {
    /// Stable error code from [`codes`]
    pub code: i32,
    /// Human-readable message
    pub msg: String,
    /// Raw diagnostic text, populated only outside release mode
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl Response {
    /// Envelope for a failed database operation. An empty `msg` falls back to
    /// a fixed default.
    pub fn db_error(msg: impl Into<String>, source: Option<BoxError>, mode: RunMode) -> Self {
        let mut msg = msg.into();
        if msg.is_empty() {
            msg = "database operation failed".to_string();
        }
        Self::error(codes::CODE_DB_ERROR, msg, source, mode)
    }

    /// Envelope for malformed request parameters. An empty `msg` falls back
    /// to a fixed default.
    pub fn param_error(msg: impl Into<String>, source: Option<BoxError>, mode: RunMode) -> Self {
        let mut msg = msg.into();
        if msg.is_empty() {
            msg = "invalid parameter".to_string();
        }
        Self::error(codes::CODE_PARAM_ERR, msg, source, mode)
    }

    /// Reduce any error into a client-consumable envelope.
    ///
    /// A structured [`AppError`] in `source` overrides the caller-supplied
    /// defaults: its code and message replace them, and its own wrapped error
    /// becomes the diagnostic source. In release mode the diagnostic text
    /// stays out of the envelope and is only emitted to the logs.
    pub fn error(
        default_code: i32,
        default_msg: impl Into<String>,
        source: Option<BoxError>,
        mode: RunMode,
    ) -> Self {
        let mut code = default_code;
        let mut msg = default_msg.into();

        let source = match source.map(|raw| raw.downcast::<AppError>()) {
            Some(Ok(app)) => {
                let app = *app;
                code = app.code;
                msg = app.msg;
                app.source
            }
            Some(Err(raw)) => Some(raw),
            None => None,
        };

        let mut resp = Response {
            code,
            msg,
            error: String::new(),
        };

        if let Some(raw) = source {
            if mode.is_release() {
                debug!(
                    code = resp.code,
                    error = %raw,
                    "Suppressed underlying error in release mode"
                );
            } else {
                resp.error = raw.to_string();
            }
        }

        resp
    }
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(codes::http_status(self.code))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}
