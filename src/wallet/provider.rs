//! One-time wallet initialization and its observable status.

use super::error::WalletError;
use log::*;
use std::future::Future;
use std::sync::Arc;

/// Specifying the wallet status shown to the user.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum WalletStatus {
    Connecting,
    Ready,
    Unavailable(String),
}

/// Owns the wallet created at application start and shares it read-only.
///
pub struct WalletProvider<W> {
    wallet: Option<Arc<W>>,
    loading: bool,
    error: Option<WalletError>,
}

impl<W> Default for WalletProvider<W> {
    fn default() -> Self {
        WalletProvider {
            wallet: None,
            loading: true,
            error: None,
        }
    }
}

impl<W> WalletProvider<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the wallet factory once. Later calls leave the outcome of the
    /// first one in place.
    ///
    pub async fn initialize<F, Fut>(&mut self, factory: F) -> &mut Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<W, WalletError>>,
    {
        if !self.loading {
            debug!("Skipping wallet initialization: already attempted.");
            return self;
        }
        match factory().await {
            Ok(wallet) => self.wallet = Some(Arc::new(wallet)),
            Err(e) => {
                error!("Failed to initialize wallet: {}", e);
                self.error = Some(e);
            }
        }
        self.loading = false;
        self
    }

    pub fn wallet(&self) -> Option<Arc<W>> {
        self.wallet.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&WalletError> {
        self.error.as_ref()
    }

    pub fn status(&self) -> WalletStatus {
        match (&self.wallet, &self.error) {
            (Some(_), _) => WalletStatus::Ready,
            (None, Some(e)) => WalletStatus::Unavailable(e.to_string()),
            (None, None) if self.loading => WalletStatus::Connecting,
            (None, None) => WalletStatus::Unavailable(WalletError::NotInitialized.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_provider_starts_loading() {
        let provider: WalletProvider<u8> = WalletProvider::new();
        assert!(provider.is_loading());
        assert!(provider.wallet().is_none());
        assert!(provider.error().is_none());
        assert_eq!(provider.status(), WalletStatus::Connecting);
    }

    #[tokio::test]
    async fn test_provider_initialize_success() {
        let mut provider: WalletProvider<u8> = WalletProvider::new();
        provider.initialize(|| async { Ok(7) }).await;
        assert!(!provider.is_loading());
        assert_eq!(provider.wallet().as_deref(), Some(&7));
        assert_eq!(provider.status(), WalletStatus::Ready);
    }

    #[tokio::test]
    async fn test_provider_initialize_failure() {
        let mut provider: WalletProvider<u8> = WalletProvider::new();
        provider
            .initialize(|| async {
                Err(WalletError::Initialization("connection refused".to_string()))
            })
            .await;
        assert!(!provider.is_loading());
        assert!(provider.wallet().is_none());
        assert!(matches!(
            provider.error(),
            Some(WalletError::Initialization(_))
        ));
        assert!(matches!(provider.status(), WalletStatus::Unavailable(reason) if reason.contains("connection refused")));
    }

    #[tokio::test]
    async fn test_provider_initializes_once() {
        let mut provider: WalletProvider<u8> = WalletProvider::new();
        provider.initialize(|| async { Ok(1) }).await;
        provider.initialize(|| async { Ok(2) }).await;
        assert_eq!(provider.wallet().as_deref(), Some(&1));
    }
}
