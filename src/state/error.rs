//! State management-specific error types.

use crate::signup::SignupError;

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The network worker is gone or was never started
    #[error("Network worker unavailable")]
    NetworkUnavailable,

    /// A form edit was rejected
    #[error("Form error: {0}")]
    Form(#[from] SignupError),
}
