//! Keyboard quit detection.
//!
//! In raw mode Ctrl+C arrives as a key event instead of SIGINT, so it is
//! mapped to an interrupt here.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::{QuitSignal, StopReason};

/// Decide whether a key press should stop the session.
pub fn quit_reason_for_key(event: &KeyEvent) -> Option<StopReason> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    match event.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if event.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(StopReason::Interrupted)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(StopReason::QuitKey),
        _ => None,
    }
}

/// Polls pending terminal events without blocking.
#[derive(Debug, Default)]
pub struct KeyboardQuit;

impl KeyboardQuit {
    pub fn new() -> Self {
        Self
    }
}

impl QuitSignal for KeyboardQuit {
    fn should_quit(&mut self) -> Option<StopReason> {
        // Drain everything queued since the last iteration
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => {
                    log::warn!("Keyboard polling failed: {}", e);
                    return None;
                }
            }

            match event::read() {
                Ok(Event::Key(key)) => {
                    if let Some(reason) = quit_reason_for_key(&key) {
                        return Some(reason);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("Keyboard read failed: {}", e);
                    return None;
                }
            }
        }
    }
}
