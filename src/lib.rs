//! Terminal registration screen for the SACCO membership wallet.
//!
//! The [`signup`] module holds the form validation and submission logic and
//! does not depend on the terminal. The remaining modules wire it to a wallet
//! service and a `ratatui` user interface.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod signup;
pub mod state;
pub mod ui;
pub mod wallet;
