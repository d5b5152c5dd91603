use crate::signup::{Registrar, Registration};
use crate::state::State;
use crate::wallet::{Wallet, WalletProvider};
use anyhow::Result;
use log::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    Register(Registration),
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a, W> {
    state: &'a Arc<Mutex<State>>,
    provider: &'a WalletProvider<W>,
    register_timeout: Option<Duration>,
}

impl<'a, W: Wallet> Handler<'a, W> {
    /// Return new instance with reference to state and the wallet provider.
    ///
    pub fn new(
        state: &'a Arc<Mutex<State>>,
        provider: &'a WalletProvider<W>,
        register_timeout: Option<Duration>,
    ) -> Self {
        Handler {
            state,
            provider,
            register_timeout,
        }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::Register(registration) => self.register(registration).await?,
        }
        Ok(())
    }

    /// Register the member with the wallet and report the outcome to the
    /// form. The state stays unlocked while the wallet call is in flight.
    ///
    async fn register(&mut self, registration: Registration) -> Result<()> {
        let registrar = Registrar::new(self.provider.wallet(), self.register_timeout);
        let outcome = registrar.register(&registration).await;
        let mut state = self.state.lock().await;
        state.finish_registration(outcome);
        Ok(())
    }
}
