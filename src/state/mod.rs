//! Application state management module.
//!
//! This module contains the state of the terminal application, including:
//! - Main `State` struct wrapping the registration form controller
//! - Focus order of the registration screen
//! - State error handling

mod error;
mod navigation;

pub use error::StateError;
pub use navigation::FormFocus;

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
