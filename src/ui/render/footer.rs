use super::Frame;
use crate::signup::Route;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, widgets::Paragraph};

/// Return the key hints for a screen.
///
fn hints(route: Route, submitting: bool) -> &'static str {
    match route {
        Route::Signup if submitting => " Registering... | Ctrl+C: quit",
        Route::Signup => {
            " Tab/↓: next | Shift+Tab/↑: previous | ←/→: membership | Enter: select | Ctrl+S: create account | Ctrl+C: quit"
        }
        _ => " Esc: back to registration | Ctrl+C: quit",
    }
}

/// Render footer with key hints for the current screen.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let text = hints(state.current_route(), state.controller().is_submitting());
    frame.render_widget(
        Paragraph::new(text).style(styling::muted_text_style(state.get_theme())),
        size,
    );
}
