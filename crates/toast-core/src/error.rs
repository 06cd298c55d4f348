//! Error types for toast-core

use thiserror::Error;

/// Result type alias for toast-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort a validation run
///
/// These never leave [`Validator::verify`](crate::Validator::verify); they
/// are folded into a degraded report.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings document parsed but is not a JSON object
    #[error("toast-config.json must contain a JSON object, found {found}")]
    SettingsNotObject { found: &'static str },
}
