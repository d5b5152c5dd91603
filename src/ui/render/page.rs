use super::Frame;
use crate::signup::Route;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub const BANNER: &str = "
  ___   _    ___  ___  ___   __      __    _ _     _
 / __| /_\\  / __|/ __|/ _ \\  \\ \\    / /_ _| | |___| |_
 \\__ \\/ _ \\| (__| (__| (_) |  \\ \\/\\/ / _` | | / -_)  _|
 |___/_/ \\_\\\\___|\\___|\\___/    \\_/\\_/\\__,_|_|_\\___|\\__|
";

const LOGIN: &str = "
Your membership account is ready.

Sign in with the email address and phone number you registered with.
";

const TERMS: &str = "
Membership in the SACCO is subject to the society by-laws.

Members agree to keep their contact details current, to make contributions
according to their membership tier, and to use the wallet only for their
own savings and loan activity.
";

const PRIVACY: &str = "
The name, email address, and phone number collected at registration are used
to create and administer your membership account.

They are shared only with the wallet service that holds your account.
";

/// Render one of the static screens reachable from the registration form.
///
pub fn page(frame: &mut Frame, size: Rect, state: &State, route: Route) {
    let theme = state.get_theme();
    let (title, content) = match route {
        Route::Login => ("Sign In", LOGIN),
        Route::Terms => ("Terms of Service", TERMS),
        Route::Privacy => ("Privacy Policy", PRIVACY),
        Route::Signup => ("Join SACCO Wallet", ""),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .margin(2)
        .split(size);

    frame.render_widget(
        Paragraph::new(BANNER)
            .style(styling::banner_style(theme))
            .alignment(Alignment::Center),
        rows[0],
    );

    frame.render_widget(
        Paragraph::new(content)
            .style(styling::normal_text_style(theme))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[1],
    );
}
