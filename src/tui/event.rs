//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::RepsetError;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Toggle the chronometer between running and stopped.
    Toggle,
    /// Restart from the first exercise of set 1.
    Restart,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events() -> Result<Option<Action>, RepsetError> {
    // Poll for events with a small timeout so ticks keep draining
    if event::poll(Duration::from_millis(100))
        .map_err(|e| RepsetError::Config(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) =
            event::read().map_err(|e| RepsetError::Config(format!("Event read failed: {e}")))?
        {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),
                KeyCode::Char(' ') => return Ok(Some(Action::Toggle)),
                KeyCode::Char('r') => return Ok(Some(Action::Restart)),
                _ => {}
            }
        }
    }

    Ok(None)
}
