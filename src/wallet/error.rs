//! Wallet-specific error types.

use std::time::Duration;

/// Message shown when a failure does not carry one of its own.
pub const FALLBACK_MESSAGE: &str = "Registration failed. Please try again.";

/// Message shown when the wallet service cannot be reached.
pub const CONNECTION_MESSAGE: &str = "Unable to reach the wallet service. Please try again.";

/// Message shown when the wallet does not answer within the timeout.
pub const TIMEOUT_MESSAGE: &str = "Registration timed out. Please try again.";

/// Errors that can occur while creating or using the wallet.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// No wallet is available to handle the request
    #[error("Wallet not initialized")]
    NotInitialized,

    /// The wallet refused the request
    #[error("Wallet rejected the request: {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },

    /// The wallet service answered with an error status
    #[error("Wallet API error (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// The wallet did not answer in time
    #[error("Wallet request timed out after {0:?}")]
    Timeout(Duration),

    /// The wallet could not be prepared for use
    #[error("Wallet initialization failed: {0}")]
    Initialization(String),
}

impl WalletError {
    /// Return the message to show the user for a failed registration.
    ///
    pub fn user_message(&self) -> String {
        match self {
            WalletError::NotInitialized => self.to_string(),
            WalletError::Timeout(_) => TIMEOUT_MESSAGE.to_string(),
            WalletError::HttpRequest(e) if e.is_timeout() => TIMEOUT_MESSAGE.to_string(),
            WalletError::HttpRequest(e) if e.is_connect() => CONNECTION_MESSAGE.to_string(),
            WalletError::Rejected { message } | WalletError::Api { message, .. } => message
                .as_deref()
                .map(str::trim)
                .filter(|message| !message.is_empty())
                .unwrap_or(FALLBACK_MESSAGE)
                .to_string(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}
