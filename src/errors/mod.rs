//! Error carrier and client-facing response envelope

pub mod app_error;
pub mod codes;
pub mod response;

pub use app_error::AppError;
pub use response::Response;

/// Boxed low-level error wrapped by an [`AppError`] or handed to the
/// response reducer directly.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
