//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: wallet registration calls
//! - Terminal events: user input on the registration screen

pub mod network;
pub mod terminal;
