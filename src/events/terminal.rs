use crate::signup::Route;
use crate::state::{FormFocus, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => {
                    if let Ok(CrosstermEvent::Key(key)) = event::read() {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => (),
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => handle_key(state, key),
            Event::Tick => {
                state.advance_spinner_index();
                Ok(true)
            }
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> Result<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(true);
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return Ok(false);
    }
    match state.current_route() {
        Route::Signup => handle_signup_key(state, key)?,
        Route::Login | Route::Terms | Route::Privacy => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                state.navigate(Route::Signup);
            }
            _ => (),
        },
    }
    Ok(true)
}

fn handle_signup_key(state: &mut State, key: KeyEvent) -> Result<()> {
    let focus = state.current_focus();
    let result = match (key.code, key.modifiers) {
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => state.submit().map(|_| ()),
        (KeyCode::Tab, _) | (KeyCode::Down, _) => {
            state.next_focus();
            Ok(())
        }
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
            state.previous_focus();
            Ok(())
        }
        (KeyCode::Enter, _) => state.activate_focus(),
        (KeyCode::Left, _) | (KeyCode::Right, _) | (KeyCode::Char(' '), _)
            if focus == FormFocus::MembershipType =>
        {
            state.toggle_membership()
        }
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT)
            if focus.is_text_input() =>
        {
            state.add_form_char(c)
        }
        (KeyCode::Backspace, _) if focus.is_text_input() => state.remove_form_char(),
        _ => Ok(()),
    };
    if let Err(e) = result {
        error!("Failed to handle key '{:?}': {}", key.code, e);
    }
    Ok(())
}
