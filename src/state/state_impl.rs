use super::error::StateError;
use super::navigation::FormFocus;
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::signup::{FormController, Navigator, Route, SubmissionState};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use crate::wallet::{WalletError, WalletStatus};
use log::*;
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Duration;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    navigator: Arc<dyn Navigator>,
    redirect_delay: Duration,
    controller: FormController,
    route: Route,
    focus: FormFocus,
    wallet_status: WalletStatus,
    spinner_index: usize,
    terminal_size: Rect,
    theme: Theme,
}

impl State {
    /// Return new state showing an empty registration form.
    ///
    pub fn new(
        net_sender: Option<NetworkEventSender>,
        navigator: Arc<dyn Navigator>,
        redirect_delay: Duration,
        theme: Theme,
    ) -> Self {
        State {
            net_sender,
            controller: FormController::new(Arc::clone(&navigator), redirect_delay),
            navigator,
            redirect_delay,
            route: Route::Signup,
            focus: FormFocus::Name,
            wallet_status: WalletStatus::Connecting,
            spinner_index: 0,
            terminal_size: Rect::default(),
            theme,
        }
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        self
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    pub fn get_wallet_status(&self) -> &WalletStatus {
        &self.wallet_status
    }

    pub fn set_wallet_status(&mut self, status: WalletStatus) -> &mut Self {
        debug!("Wallet status changed to {:?}.", status);
        self.wallet_status = status;
        self
    }

    pub fn current_route(&self) -> Route {
        self.route
    }

    /// Show another screen. Leaving the registration screen cancels a pending
    /// redirect, and arriving at it replaces a form that already registered
    /// with a fresh one.
    ///
    pub fn navigate(&mut self, route: Route) -> &mut Self {
        if route == self.route {
            return self;
        }
        info!("Navigating to {}...", route.path());
        if self.route == Route::Signup {
            self.controller.cancel_pending_navigation();
        }
        if route == Route::Signup
            && matches!(self.controller.state(), SubmissionState::Succeeded { .. })
        {
            self.controller = FormController::new(Arc::clone(&self.navigator), self.redirect_delay);
            self.focus = FormFocus::Name;
        }
        self.route = route;
        self
    }

    pub fn current_focus(&self) -> FormFocus {
        self.focus
    }

    pub fn next_focus(&mut self) -> &mut Self {
        self.focus = self.focus.next();
        self
    }

    pub fn previous_focus(&mut self) -> &mut Self {
        self.focus = self.focus.previous();
        self
    }

    /// Append a character to the focused text field.
    ///
    pub fn add_form_char(&mut self, c: char) -> Result<(), StateError> {
        if let Some(field) = self.focus.field().filter(|_| self.focus.is_text_input()) {
            let mut value = self.controller.form().value(field).to_owned();
            value.push(c);
            self.controller.on_field_change(field, &value)?;
        }
        Ok(())
    }

    /// Remove the last character of the focused text field.
    ///
    pub fn remove_form_char(&mut self) -> Result<(), StateError> {
        if let Some(field) = self.focus.field().filter(|_| self.focus.is_text_input()) {
            let mut value = self.controller.form().value(field).to_owned();
            if value.pop().is_some() {
                self.controller.on_field_change(field, &value)?;
            }
        }
        Ok(())
    }

    /// Switch to the other membership tier.
    ///
    pub fn toggle_membership(&mut self) -> Result<(), StateError> {
        let next = self.controller.form().membership_type.toggle();
        self.controller
            .on_field_change(crate::signup::Field::MembershipType, next.as_str())?;
        Ok(())
    }

    /// Act on the focused element.
    ///
    pub fn activate_focus(&mut self) -> Result<(), StateError> {
        match self.focus {
            FormFocus::Submit => {
                self.submit()?;
            }
            FormFocus::MembershipType => self.toggle_membership()?,
            FormFocus::SignIn => {
                self.navigate(Route::Login);
            }
            FormFocus::Terms => {
                self.navigate(Route::Terms);
            }
            FormFocus::Privacy => {
                self.navigate(Route::Privacy);
            }
            FormFocus::Name | FormFocus::Email | FormFocus::PhoneNumber => {
                self.next_focus();
            }
        }
        Ok(())
    }

    /// Validate the form and hand the registration to the network worker.
    /// Returns whether a registration was sent.
    ///
    pub fn submit(&mut self) -> Result<bool, StateError> {
        let registration = match self.controller.begin_submit() {
            Some(registration) => registration,
            None => return Ok(false),
        };
        let sent = match &self.net_sender {
            Some(sender) => sender.send(NetworkEvent::Register(registration)).is_ok(),
            None => false,
        };
        if !sent {
            self.controller.finish_submit(Err(WalletError::NotInitialized));
            return Err(StateError::NetworkUnavailable);
        }
        Ok(true)
    }

    /// Apply the outcome of a registration sent by [`State::submit`].
    ///
    /// The redirect to login is only scheduled while the form is on screen.
    ///
    pub fn finish_registration(&mut self, outcome: Result<(), WalletError>) -> &mut Self {
        if self.route == Route::Signup {
            self.controller.finish_submit(outcome);
        } else {
            debug!("Registration finished while showing {}.", self.route.path());
            self.controller.finish_submit_offscreen(outcome);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signup::{Field, MembershipType, SUCCESS_MESSAGE};
    use std::sync::mpsc;

    struct Harness {
        state: State,
        net_rx: mpsc::Receiver<NetworkEvent>,
        route_rx: mpsc::Receiver<Route>,
    }

    fn harness(redirect_delay: Duration) -> Harness {
        let (net_tx, net_rx) = mpsc::channel();
        let (route_tx, route_rx) = mpsc::channel::<Route>();
        let state = State::new(
            Some(net_tx),
            Arc::new(route_tx),
            redirect_delay,
            Theme::default(),
        );
        Harness {
            state,
            net_rx,
            route_rx,
        }
    }

    fn type_str(state: &mut State, text: &str) {
        for c in text.chars() {
            state.add_form_char(c).unwrap();
        }
    }

    fn fill_valid(state: &mut State) {
        type_str(state, "Jane Doe");
        state.next_focus();
        type_str(state, "jane@example.com");
        state.next_focus();
        type_str(state, "555-1234");
        state.next_focus();
        state.activate_focus().unwrap();
        state.next_focus();
        assert_eq!(state.current_focus(), FormFocus::Submit);
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut h = harness(Duration::from_millis(10));
        type_str(&mut h.state, "Jan");
        h.state.remove_form_char().unwrap();
        assert_eq!(h.state.controller().form().name, "Ja");

        h.state.next_focus();
        h.state.next_focus();
        h.state.next_focus();
        type_str(&mut h.state, "ignored");
        assert_eq!(h.state.controller().form().membership_type, MembershipType::Regular);
    }

    #[test]
    fn test_submit_sends_single_registration() {
        let mut h = harness(Duration::from_millis(10));
        fill_valid(&mut h.state);

        assert!(h.state.submit().unwrap());
        assert!(!h.state.submit().unwrap());
        assert!(h.state.controller().is_submitting());

        match h.net_rx.try_recv() {
            Ok(NetworkEvent::Register(registration)) => {
                assert_eq!(registration.email, "jane@example.com");
                assert_eq!(registration.membership_type, MembershipType::Premium);
            }
            other => panic!("expected registration event, got {:?}", other),
        }
        assert!(h.net_rx.try_recv().is_err());
    }

    #[test]
    fn test_invalid_submit_sends_nothing() {
        let mut h = harness(Duration::from_millis(10));
        assert!(!h.state.submit().unwrap());
        assert!(h.net_rx.try_recv().is_err());
        assert!(h.state.controller().errors().contains(Field::Email));
    }

    #[test]
    fn test_submit_without_network_fails() {
        let (route_tx, _route_rx) = mpsc::channel::<Route>();
        let mut state = State::new(
            None,
            Arc::new(route_tx),
            Duration::from_millis(10),
            Theme::default(),
        );
        fill_valid(&mut state);
        assert!(matches!(state.submit(), Err(StateError::NetworkUnavailable)));
        assert_eq!(
            state.controller().general_error(),
            Some("Wallet not initialized")
        );
    }

    #[test]
    fn test_successful_registration_redirects_to_login() {
        let mut h = harness(Duration::from_millis(10));
        fill_valid(&mut h.state);
        h.state.submit().unwrap();
        h.state.finish_registration(Ok(()));
        assert_eq!(h.state.controller().success_message(), Some(SUCCESS_MESSAGE));

        let route = h
            .route_rx
            .recv_timeout(Duration::from_secs(2))
            .unwrap();
        assert_eq!(route, Route::Login);
        h.state.navigate(route);
        assert_eq!(h.state.current_route(), Route::Login);

        h.state.navigate(Route::Signup);
        assert_eq!(h.state.controller().state(), &SubmissionState::Idle);
        assert_eq!(h.state.current_focus(), FormFocus::Name);
    }

    #[test]
    fn test_leaving_screen_cancels_redirect() {
        let mut h = harness(Duration::from_millis(100));
        fill_valid(&mut h.state);
        h.state.submit().unwrap();
        h.state.finish_registration(Ok(()));

        h.state.navigate(Route::Terms);
        assert!(h
            .route_rx
            .recv_timeout(Duration::from_millis(300))
            .is_err());
        assert_eq!(h.state.current_route(), Route::Terms);
    }

    #[test]
    fn test_success_while_away_does_not_redirect() {
        let mut h = harness(Duration::from_millis(50));
        fill_valid(&mut h.state);
        h.state.submit().unwrap();

        h.state.navigate(Route::Terms);
        h.state.finish_registration(Ok(()));
        assert!(h
            .route_rx
            .recv_timeout(Duration::from_millis(250))
            .is_err());
        assert_eq!(h.state.current_route(), Route::Terms);

        h.state.navigate(Route::Signup);
        assert_eq!(h.state.controller().state(), &SubmissionState::Idle);
        assert_eq!(h.state.controller().form().name, "");
        assert_eq!(h.state.current_focus(), FormFocus::Name);

        fill_valid(&mut h.state);
        assert!(h.state.submit().unwrap());
        assert!(h.state.controller().is_submitting());
    }

    #[test]
    fn test_failure_while_away_keeps_form() {
        let mut h = harness(Duration::from_millis(50));
        fill_valid(&mut h.state);
        h.state.submit().unwrap();

        h.state.navigate(Route::Login);
        h.state.finish_registration(Err(WalletError::Rejected { message: None }));
        h.state.navigate(Route::Signup);
        assert!(h.state.controller().general_error().is_some());
        assert_eq!(h.state.controller().form().name, "Jane Doe");
    }

    #[test]
    fn test_links_navigate_immediately() {
        let mut h = harness(Duration::from_millis(10));
        h.state.previous_focus();
        assert_eq!(h.state.current_focus(), FormFocus::Privacy);
        h.state.activate_focus().unwrap();
        assert_eq!(h.state.current_route(), Route::Privacy);

        h.state.navigate(Route::Signup);
        h.state.previous_focus();
        h.state.activate_focus().unwrap();
        assert_eq!(h.state.current_route(), Route::Terms);
    }

    #[test]
    fn test_failed_registration_keeps_form_across_screens() {
        let mut h = harness(Duration::from_millis(10));
        fill_valid(&mut h.state);
        h.state.submit().unwrap();
        h.state.finish_registration(Err(WalletError::Rejected {
            message: Some("Email taken".to_string()),
        }));
        assert_eq!(h.state.controller().general_error(), Some("Email taken"));

        h.state.navigate(Route::Terms);
        h.state.navigate(Route::Signup);
        assert_eq!(h.state.controller().form().name, "Jane Doe");
    }

    #[test]
    fn test_spinner_wraps() {
        let mut h = harness(Duration::from_millis(10));
        for _ in 0..SPINNER_FRAME_COUNT {
            h.state.advance_spinner_index();
        }
        assert_eq!(h.state.get_spinner_index(), 0);
    }
}
