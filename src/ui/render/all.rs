use super::*;
use crate::signup::Route;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the active screen, the log panel, and the footer.
///
pub fn all(frame: &mut Frame, state: &State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(24),   // Screen
            Constraint::Length(7), // Log
            Constraint::Length(1), // Footer
        ])
        .split(frame.size());

    match state.current_route() {
        Route::Signup => signup(frame, rows[0], state),
        route => page(frame, rows[0], state, route),
    }
    log(frame, rows[1], state);
    footer(frame, rows[2], state);
}
