//! Application state for the TUI.

use crate::workout::Chronometer;

/// Application state.
pub struct App {
    /// The chronometer being driven.
    pub chronometer: Chronometer,
    /// Status message to display.
    pub status: Option<String>,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(chronometer: Chronometer) -> Self {
        let status = if chronometer.can_start() {
            Some("Press space to start".to_string())
        } else {
            Some("No durations configured - see 'repset settings set'".to_string())
        };

        Self {
            chronometer,
            status,
        }
    }

    /// Apply any ticks queued since the last frame.
    pub fn advance(&mut self) {
        self.chronometer.poll();
    }

    /// Toggle between running and stopped.
    pub fn toggle(&mut self) {
        if !self.chronometer.is_running() && !self.chronometer.can_start() {
            self.status = Some("Cannot start: both durations are zero".to_string());
            return;
        }

        self.chronometer.toggle();
        self.status = if self.chronometer.is_running() {
            None
        } else {
            Some("Stopped".to_string())
        };
    }

    /// Reset to the first exercise of set 1.
    pub fn restart(&mut self) {
        self.chronometer.restart();
        self.status = Some("Restarted".to_string());
    }
}
