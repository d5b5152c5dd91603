//! Hands validated registrations to the wallet.

use super::form::Registration;
use crate::wallet::{Wallet, WalletError};
use log::*;
use std::sync::Arc;
use std::time::Duration;

/// Submits registrations to an injected wallet, bounding each call by an
/// optional timeout. A missing wallet fails without any call being made.
///
pub struct Registrar<W> {
    wallet: Option<Arc<W>>,
    timeout: Option<Duration>,
}

impl<W: Wallet> Registrar<W> {
    pub fn new(wallet: Option<Arc<W>>, timeout: Option<Duration>) -> Self {
        Registrar { wallet, timeout }
    }

    pub fn has_wallet(&self) -> bool {
        self.wallet.is_some()
    }

    /// Register the member with the wallet.
    ///
    pub async fn register(&self, registration: &Registration) -> Result<(), WalletError> {
        let wallet = self.wallet.as_ref().ok_or(WalletError::NotInitialized)?;
        info!(
            "Submitting {} membership registration...",
            registration.membership_type
        );
        let call = wallet.register(
            &registration.name,
            &registration.email,
            &registration.phone_number,
            registration.membership_type.as_str(),
        );
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| WalletError::Timeout(limit))?,
            None => call.await,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::signup::form::MembershipType;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Wallet double that records calls and answers with a fixed outcome.
    ///
    pub(crate) struct StubWallet {
        calls: AtomicUsize,
        received: Mutex<Vec<(String, String, String, String)>>,
        rejection: Option<Option<String>>,
        delay: Duration,
    }

    impl StubWallet {
        pub(crate) fn accepting() -> Self {
            StubWallet {
                calls: AtomicUsize::new(0),
                received: Mutex::new(vec![]),
                rejection: None,
                delay: Duration::ZERO,
            }
        }

        pub(crate) fn rejecting(message: Option<&str>) -> Self {
            StubWallet {
                rejection: Some(message.map(str::to_string)),
                ..StubWallet::accepting()
            }
        }

        pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub(crate) fn received(&self) -> Vec<(String, String, String, String)> {
            self.received.lock().unwrap().clone()
        }
    }

    impl Wallet for StubWallet {
        async fn register(
            &self,
            name: &str,
            email: &str,
            phone_number: &str,
            membership_type: &str,
        ) -> Result<(), WalletError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.received.lock().unwrap().push((
                name.to_string(),
                email.to_string(),
                phone_number.to_string(),
                membership_type.to_string(),
            ));
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            match &self.rejection {
                None => Ok(()),
                Some(message) => Err(WalletError::Rejected {
                    message: message.clone(),
                }),
            }
        }
    }

    fn registration() -> Registration {
        Registration {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: "555-1234".to_string(),
            membership_type: MembershipType::Premium,
        }
    }

    #[tokio::test]
    async fn test_register_passes_fields_through() {
        let wallet = Arc::new(StubWallet::accepting());
        let registrar = Registrar::new(Some(wallet.clone()), None);
        assert!(registrar.has_wallet());
        registrar.register(&registration()).await.unwrap();
        assert_eq!(
            wallet.received(),
            vec![(
                "Jane Doe".to_string(),
                "jane@example.com".to_string(),
                "555-1234".to_string(),
                "premium".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_register_without_wallet() {
        let registrar: Registrar<StubWallet> = Registrar::new(None, None);
        assert!(!registrar.has_wallet());
        let result = registrar.register(&registration()).await;
        assert!(matches!(result, Err(WalletError::NotInitialized)));
    }

    #[tokio::test]
    async fn test_register_times_out() {
        let wallet = Arc::new(StubWallet::accepting().with_delay(Duration::from_millis(500)));
        let registrar = Registrar::new(Some(wallet.clone()), Some(Duration::from_millis(20)));
        let result = registrar.register(&registration()).await;
        assert!(matches!(result, Err(WalletError::Timeout(_))));
        assert_eq!(wallet.calls(), 1);
    }

    #[tokio::test]
    async fn test_register_rejection_propagates() {
        let wallet = Arc::new(StubWallet::rejecting(Some("Email taken")));
        let registrar = Registrar::new(Some(wallet), Some(Duration::from_secs(5)));
        let error = registrar.register(&registration()).await.unwrap_err();
        assert_eq!(error.user_message(), "Email taken");
    }
}
