use super::Frame;
use crate::signup::{Field, SubmissionState};
use crate::state::{FormFocus, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::{spinner, styling};
use crate::wallet::WalletStatus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const FORM_WIDTH: u16 = 64;

/// Describes one text input of the form.
///
struct Input<'a> {
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    error: Option<&'a str>,
    focused: bool,
}

/// Render the registration form.
///
pub fn signup(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let controller = state.controller();
    let focus = state.current_focus();
    let area = centered(size, FORM_WIDTH);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Join SACCO Wallet ",
            styling::active_block_title_style().fg(theme.banner.to_color()),
        ))
        .title_alignment(Alignment::Center)
        .border_style(styling::normal_block_border_style(theme));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Sign in prompt
            Constraint::Length(1), // Wallet status
            Constraint::Length(3), // Banner
            Constraint::Length(4), // Name
            Constraint::Length(4), // Email
            Constraint::Length(4), // Phone number
            Constraint::Length(3), // Membership
            Constraint::Length(3), // Submit
            Constraint::Length(2), // Terms
            Constraint::Min(0),
        ])
        .split(area);

    let sign_in = Line::from(vec![
        Span::styled("Already have an account? ", styling::muted_text_style(theme)),
        Span::styled(
            "Sign in",
            styling::link_style(theme, focus == FormFocus::SignIn),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(sign_in).alignment(Alignment::Center),
        chunks[0],
    );

    frame.render_widget(
        wallet_status(state.get_wallet_status(), theme, state.get_spinner_index()),
        chunks[1],
    );

    if let Some(banner) = banner(controller.state(), theme) {
        frame.render_widget(banner, chunks[2]);
    }

    let form = controller.form();
    let errors = controller.errors();
    let inputs = [
        (Field::Name, "Full Name", "Enter your full name", FormFocus::Name, chunks[3]),
        (Field::Email, "Email Address", "Enter your email", FormFocus::Email, chunks[4]),
        (
            Field::PhoneNumber,
            "Phone Number",
            "Enter your phone number",
            FormFocus::PhoneNumber,
            chunks[5],
        ),
    ];
    for (field, label, placeholder, field_focus, chunk) in inputs {
        let input = Input {
            label,
            placeholder,
            value: form.value(field),
            error: errors.get(field),
            focused: focus == field_focus,
        };
        render_input(frame, chunk, theme, &input);
    }

    let membership_focused = focus == FormFocus::MembershipType;
    let membership = Paragraph::new(Line::from(vec![
        Span::styled("◀ ", styling::muted_text_style(theme)),
        Span::styled(
            form.membership_type.label(),
            styling::normal_text_style(theme),
        ),
        Span::styled(" ▶", styling::muted_text_style(theme)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Membership Type")
            .border_style(if membership_focused {
                styling::active_block_border_style(theme)
            } else {
                styling::normal_block_border_style(theme)
            }),
    );
    frame.render_widget(membership, chunks[6]);

    frame.render_widget(
        submit_button(
            controller.is_submitting(),
            focus == FormFocus::Submit,
            theme,
            state.get_spinner_index(),
        ),
        chunks[7],
    );

    let terms = Line::from(vec![
        Span::styled(
            "By signing up, you agree to our ",
            styling::muted_text_style(theme),
        ),
        Span::styled(
            "Terms of Service",
            styling::link_style(theme, focus == FormFocus::Terms),
        ),
        Span::styled(" and ", styling::muted_text_style(theme)),
        Span::styled(
            "Privacy Policy",
            styling::link_style(theme, focus == FormFocus::Privacy),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(terms)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[8],
    );
}

/// Return a horizontally centered area no wider than `width`.
///
fn centered(size: Rect, width: u16) -> Rect {
    let width = width.min(size.width);
    Rect {
        x: size.x + (size.width - width) / 2,
        width,
        ..size
    }
}

fn wallet_status<'a>(status: &'a WalletStatus, theme: &Theme, spinner_index: usize) -> Paragraph<'a> {
    let line = match status {
        WalletStatus::Connecting => Line::from(Span::styled(
            format!("{} Connecting to wallet...", spinner::frame(spinner_index)),
            Style::default().fg(theme.warning.to_color()),
        )),
        WalletStatus::Ready => Line::from(Span::styled(
            "● Wallet ready",
            Style::default().fg(theme.success.to_color()),
        )),
        WalletStatus::Unavailable(reason) => Line::from(Span::styled(
            format!("● Wallet unavailable: {}", reason),
            Style::default().fg(theme.error.to_color()),
        )),
    };
    Paragraph::new(line).alignment(Alignment::Center)
}

fn banner<'a>(state: &'a SubmissionState, theme: &Theme) -> Option<Paragraph<'a>> {
    let (message, color) = match state {
        SubmissionState::Failed { message } => (message, theme.error.to_color()),
        SubmissionState::Succeeded { message } => (message, theme.success.to_color()),
        _ => return None,
    };
    Some(
        Paragraph::new(message.as_str())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
    )
}

fn render_input(frame: &mut Frame, area: Rect, theme: &Theme, input: &Input) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_style = if input.error.is_some() {
        styling::error_block_border_style(theme)
    } else if input.focused {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };

    let mut spans = if input.value.is_empty() && !input.focused {
        vec![Span::styled(input.placeholder, styling::muted_text_style(theme))]
    } else {
        vec![Span::styled(input.value, styling::normal_text_style(theme))]
    };
    if input.focused {
        spans.push(Span::styled(
            "▏",
            Style::default().fg(theme.border_active.to_color()),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} *", input.label))
        .border_style(border_style);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), rows[0]);

    if let Some(error) = input.error {
        frame.render_widget(
            Paragraph::new(error).style(styling::field_error_style(theme)),
            rows[1],
        );
    }
}

fn submit_button(submitting: bool, focused: bool, theme: &Theme, spinner_index: usize) -> Paragraph<'static> {
    let (label, style) = if submitting {
        (
            format!("{} Processing...", spinner::frame(spinner_index)),
            styling::muted_text_style(theme).add_modifier(Modifier::DIM),
        )
    } else if focused {
        (
            "Create Account".to_string(),
            Style::default()
                .fg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
    } else {
        (
            "Create Account".to_string(),
            Style::default()
                .fg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD),
        )
    };
    Paragraph::new(Span::styled(label, style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if focused && !submitting {
                    styling::active_block_border_style(theme)
                } else {
                    styling::normal_block_border_style(theme)
                }),
        )
}
