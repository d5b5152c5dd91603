//! Membership wallet module.
//!
//! This module contains the wallet capability used to register new members:
//! - `Wallet` trait that the registration form depends on
//! - `SaccoWallet`, the HTTP-backed wallet service implementation
//! - `WalletProvider`, which owns the one-time wallet initialization
//! - Wallet error handling

mod client;
mod error;
mod provider;

pub use error::{WalletError, CONNECTION_MESSAGE, FALLBACK_MESSAGE, TIMEOUT_MESSAGE};
pub use provider::{WalletProvider, WalletStatus};

use client::{Client, NewMember};
use log::*;
use std::future::Future;

/// Capability to register a new member account.
///
pub trait Wallet: Send + Sync {
    fn register(
        &self,
        name: &str,
        email: &str,
        phone_number: &str,
        membership_type: &str,
    ) -> impl Future<Output = Result<(), WalletError>> + Send;
}

/// Wallet backed by the SACCO wallet HTTP service.
///
pub struct SaccoWallet {
    client: Client,
}

impl SaccoWallet {
    /// Returns a new, not yet initialized instance.
    ///
    pub fn new(base_url: &str, api_key: Option<&str>) -> Result<SaccoWallet, WalletError> {
        debug!("Initializing wallet client for {}...", base_url);
        Ok(SaccoWallet {
            client: Client::new(base_url, api_key)?,
        })
    }

    /// Verify that the wallet service is reachable.
    ///
    pub async fn initialize(&self) -> Result<(), WalletError> {
        info!("Connecting to wallet at {}...", self.client.base_url());
        self.client.health().await.map_err(|e| {
            WalletError::Initialization(format!(
                "{} did not respond: {}",
                self.client.base_url(),
                e
            ))
        })?;
        info!("Wallet ready.");
        Ok(())
    }

    /// Create and initialize a wallet in one step.
    ///
    pub async fn connect(base_url: &str, api_key: Option<&str>) -> Result<SaccoWallet, WalletError> {
        let wallet = SaccoWallet::new(base_url, api_key)?;
        wallet.initialize().await?;
        Ok(wallet)
    }
}

impl Wallet for SaccoWallet {
    async fn register(
        &self,
        name: &str,
        email: &str,
        phone_number: &str,
        membership_type: &str,
    ) -> Result<(), WalletError> {
        debug!("Registering {} member <{}>...", membership_type, email);
        self.client
            .create_member(&NewMember {
                name,
                email,
                phone_number,
                membership_type,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use fake::uuid::UUIDv4;
    use fake::Fake;
    use httpmock::MockServer;
    use serde_json::json;
    use uuid::Uuid;

    #[tokio::test]
    async fn initialize_success() -> Result<()> {
        let token: Uuid = UUIDv4.fake();

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/health")
                    .header("Authorization", &format!("Bearer {}", &token));
                then.status(200).json_body(json!({ "status": "ok" }));
            })
            .await;

        SaccoWallet::connect(&server.base_url(), Some(&token.to_string())).await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn initialize_failure() -> Result<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/health");
                then.status(503);
            })
            .await;

        let result = SaccoWallet::connect(&server.base_url(), None).await;
        mock.assert_async().await;
        assert!(matches!(result, Err(WalletError::Initialization(_))));
        Ok(())
    }

    #[tokio::test]
    async fn register_success() -> Result<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/members").json_body(json!({
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "phoneNumber": "+1 555-1234",
                    "membershipType": "premium",
                }));
                then.status(201).json_body(json!({ "id": "m-1" }));
            })
            .await;

        let wallet = SaccoWallet::new(&format!("{}/", server.base_url()), None)?;
        wallet
            .register("Jane Doe", "jane@example.com", "+1 555-1234", "premium")
            .await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn register_rejected_with_message() -> Result<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/members");
                then.status(409).json_body(json!({ "message": "Email taken" }));
            })
            .await;

        let wallet = SaccoWallet::new(&server.base_url(), None)?;
        let error = wallet
            .register("Jane Doe", "jane@example.com", "555-1234", "regular")
            .await
            .unwrap_err();
        mock.assert_async().await;
        assert!(matches!(error, WalletError::Api { status: 409, .. }));
        assert_eq!(error.user_message(), "Email taken");
        Ok(())
    }

    #[tokio::test]
    async fn register_rejected_without_message() -> Result<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/members");
                then.status(500).body("internal error");
            })
            .await;

        let wallet = SaccoWallet::new(&server.base_url(), None)?;
        let error = wallet
            .register("Jane Doe", "jane@example.com", "555-1234", "regular")
            .await
            .unwrap_err();
        mock.assert_async().await;
        assert_eq!(error.user_message(), FALLBACK_MESSAGE);
        Ok(())
    }

    #[tokio::test]
    async fn register_unreachable_service() -> Result<()> {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let base_url = format!("http://{}", listener.local_addr()?);
        drop(listener);

        let wallet = SaccoWallet::new(&base_url, None)?;
        let error = wallet
            .register("Jane Doe", "jane@example.com", "555-1234", "regular")
            .await
            .unwrap_err();
        assert!(matches!(error, WalletError::HttpRequest(_)));
        assert_eq!(error.user_message(), CONNECTION_MESSAGE);
        Ok(())
    }
}
