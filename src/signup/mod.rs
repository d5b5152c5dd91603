//! Member registration module.
//!
//! This module contains the registration core, independent of any terminal:
//! - Form values and field identifiers
//! - Client-side validation
//! - The form controller and its submission state machine
//! - Wallet invocation and screen navigation seams

mod controller;
mod error;
mod form;
mod navigation;
mod registrar;
mod validator;

pub use controller::{FormController, SubmissionState, DEFAULT_REDIRECT_DELAY, SUCCESS_MESSAGE};
pub use error::SignupError;
pub use form::{Field, FormData, MembershipType, Registration};
pub use navigation::{Navigator, Route, ScheduledNavigation};
pub use registrar::Registrar;
pub use validator::{validate, FieldErrors};
