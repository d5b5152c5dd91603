//! Registration form controller.
//!
//! Owns the form values, the per-field errors, and the submission state
//! machine:
//!
//! ```text
//! Idle --submit--> Validating --errors--> Idle
//!                  Validating --ok-----> Submitting --ok----> Succeeded
//!                                        Submitting --error-> Failed --edit/submit--> Idle
//! ```
//!
//! Submitting happens in two halves so that the wallet call can run away from
//! the thread that owns the controller: [`FormController::begin_submit`]
//! validates and hands out the payload, [`FormController::finish_submit`]
//! applies the outcome.

use super::form::{Field, FormData, Registration};
use super::navigation::{Navigator, Route, ScheduledNavigation};
use super::registrar::Registrar;
use super::validator::{validate, FieldErrors};
use super::SignupError;
use crate::wallet::{Wallet, WalletError};
use log::*;
use std::sync::Arc;
use std::time::Duration;

pub const SUCCESS_MESSAGE: &str = "Registration successful! Redirecting to login...";

/// Delay between a successful registration and the move to the login screen.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Specifying the submission lifecycle of the form.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Succeeded { message: String },
    Failed { message: String },
}

impl SubmissionState {
    /// Whether a new submission may start from this state.
    ///
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn general_error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Succeeded { message } => Some(message),
            _ => None,
        }
    }
}

/// Drives the registration form from input events to a wallet registration.
///
pub struct FormController {
    form: FormData,
    errors: FieldErrors,
    state: SubmissionState,
    navigator: Arc<dyn Navigator>,
    redirect_delay: Duration,
    pending_navigation: Option<ScheduledNavigation>,
}

impl FormController {
    /// Return a controller with an empty form.
    ///
    pub fn new(navigator: Arc<dyn Navigator>, redirect_delay: Duration) -> Self {
        FormController {
            form: FormData::default(),
            errors: FieldErrors::default(),
            state: SubmissionState::Idle,
            navigator,
            redirect_delay,
            pending_navigation: None,
        }
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn general_error(&self) -> Option<&str> {
        self.state.general_error()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.state.success_message()
    }

    pub fn pending_navigation(&self) -> Option<Route> {
        self.pending_navigation.as_ref().map(ScheduledNavigation::route)
    }

    /// Apply a single field edit. The edited field loses its error message
    /// without being re-validated; other fields keep theirs. Editing after a
    /// failed submission returns the form to idle.
    ///
    pub fn on_field_change(&mut self, field: Field, value: &str) -> Result<(), SignupError> {
        self.form.set(field, value)?;
        if self.errors.clear(field) {
            trace!("Cleared error for field '{}'.", field.key());
        }
        if matches!(self.state, SubmissionState::Failed { .. }) {
            self.state = SubmissionState::Idle;
        }
        Ok(())
    }

    /// Same as [`FormController::on_field_change`] for events that carry the
    /// field key as text.
    ///
    pub fn on_named_change(&mut self, key: &str, value: &str) -> Result<(), SignupError> {
        self.on_field_change(key.parse()?, value)
    }

    /// Validate the form and, if it passes, move to submitting and return the
    /// payload to register. Returns `None` when the submission was ignored or
    /// failed validation.
    ///
    pub fn begin_submit(&mut self) -> Option<Registration> {
        if !self.state.accepts_submit() {
            debug!("Ignoring submit request while {:?}.", self.state);
            return None;
        }

        self.state = SubmissionState::Validating;
        self.errors = validate(&self.form);
        if !self.errors.is_empty() {
            debug!(
                "Registration form has {} invalid field(s).",
                self.errors.len()
            );
            self.state = SubmissionState::Idle;
            return None;
        }

        self.state = SubmissionState::Submitting;
        Some(Registration::from(&self.form))
    }

    /// Apply the outcome of the wallet call started by
    /// [`FormController::begin_submit`].
    ///
    pub fn finish_submit(&mut self, outcome: Result<(), WalletError>) {
        self.apply_outcome(outcome, true);
    }

    /// Apply the outcome for a form that is no longer on screen. A success
    /// is recorded without scheduling the redirect.
    ///
    pub fn finish_submit_offscreen(&mut self, outcome: Result<(), WalletError>) {
        self.apply_outcome(outcome, false);
    }

    fn apply_outcome(&mut self, outcome: Result<(), WalletError>, redirect: bool) {
        if !self.state.is_submitting() {
            warn!(
                "Discarding registration outcome received while {:?}.",
                self.state
            );
            return;
        }

        match outcome {
            Ok(()) => {
                info!("Registration successful.");
                self.form.reset();
                self.state = SubmissionState::Succeeded {
                    message: SUCCESS_MESSAGE.to_string(),
                };
                if redirect {
                    self.pending_navigation = Some(ScheduledNavigation::schedule(
                        Arc::clone(&self.navigator),
                        Route::Login,
                        self.redirect_delay,
                    ));
                }
            }
            Err(e) => {
                error!("Registration error: {}", e);
                self.state = SubmissionState::Failed {
                    message: e.user_message(),
                };
            }
        }
    }

    /// Run a whole submission against the registrar. Returns whether the
    /// wallet was asked to register.
    ///
    pub async fn submit<W: Wallet>(&mut self, registrar: &Registrar<W>) -> bool {
        let registration = match self.begin_submit() {
            Some(registration) => registration,
            None => return false,
        };
        let outcome = registrar.register(&registration).await;
        self.finish_submit(outcome);
        true
    }

    /// Drop the redirect scheduled by a successful registration, if any.
    ///
    pub fn cancel_pending_navigation(&mut self) {
        if let Some(pending) = self.pending_navigation.take() {
            debug!("Cancelling redirect to {}.", pending.route().path());
            pending.cancel();
        }
    }
}
