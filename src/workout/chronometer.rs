//! The phase-advancing chronometer.
//!
//! Two phases, Train and Break, cycling indefinitely: the exercise duration
//! elapses, a break follows, and after each break the next exercise comes up.
//! Finishing the last exercise of a set wraps back to the first and counts a
//! new set. There is no terminal state.

use std::time::Duration;

use crate::core::{Ticker, TickerHandle};

use super::settings::TrainingSettings;

/// One tick per second while running.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// The two-state cycle driven by elapsed-second counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Working through the current exercise.
    Train,
    /// Resting before the next exercise.
    Break,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Train => write!(f, "Train"),
            Self::Break => write!(f, "Break"),
        }
    }
}

/// Transient chronometer state. Mutated only through [`Chronometer`] methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChronometerState {
    /// Seconds elapsed in the current phase.
    pub elapsed_seconds: u32,
    /// Current phase.
    pub phase: Phase,
    /// Current set, starting at 1.
    pub current_set: u32,
    /// Index into the exercise list, starting at 0.
    pub current_exercise: usize,
    /// Whether a tick subscription is active.
    pub is_running: bool,
}

impl Default for ChronometerState {
    fn default() -> Self {
        Self {
            elapsed_seconds: 0,
            phase: Phase::Train,
            current_set: 1,
            current_exercise: 0,
            is_running: false,
        }
    }
}

/// Interval-training chronometer.
///
/// Owns its state, the active settings, and the tick subscription, so that
/// `start` is idempotent and `stop` cancels synchronously.
pub struct Chronometer {
    settings: TrainingSettings,
    state: ChronometerState,
    ticker: Box<dyn Ticker>,
    subscription: Option<TickerHandle>,
}

impl Chronometer {
    /// Create a stopped chronometer from normalized settings.
    #[must_use]
    pub fn new(settings: TrainingSettings, ticker: Box<dyn Ticker>) -> Self {
        Self {
            settings: settings.normalized(),
            state: ChronometerState::default(),
            ticker,
            subscription: None,
        }
    }

    /// Advance one second and evaluate phase transitions.
    ///
    /// The counter increments before the comparison, so a phase configured
    /// with 0 seconds never matches its own transition once entered.
    pub fn tick(&mut self) {
        self.state.elapsed_seconds += 1;

        if self.state.elapsed_seconds == self.settings.seconds_per_exercise
            && self.state.phase == Phase::Train
        {
            self.state.phase = Phase::Break;
            self.state.elapsed_seconds = 0;
        } else if self.state.elapsed_seconds == self.settings.break_seconds
            && self.state.phase == Phase::Break
        {
            self.state.phase = Phase::Train;
            self.state.current_exercise += 1;
            self.state.elapsed_seconds = 0;
            if self.state.current_exercise == self.settings.exercises_number as usize {
                self.state.current_exercise = 0;
                self.state.current_set += 1;
            }
        }
    }

    /// Begin ticking. No-op while a subscription is already active, so
    /// duplicate key presses never double-subscribe.
    pub fn start(&mut self) {
        if self.subscription.is_some() {
            return;
        }
        self.state.is_running = true;
        self.subscription = Some(self.ticker.subscribe(TICK_PERIOD));
    }

    /// Stop ticking. Cancels the subscription synchronously; ticks queued
    /// but not yet applied are dropped. No-op while stopped.
    pub fn stop(&mut self) {
        self.state.is_running = false;
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }

    /// Toggle between running and stopped. Starting is refused while
    /// [`can_start`](Self::can_start) is false.
    pub fn toggle(&mut self) {
        if self.state.is_running {
            self.stop();
        } else if self.can_start() {
            self.start();
        }
    }

    /// Reset to the first exercise of set 1. Leaves the running flag alone.
    pub fn restart(&mut self) {
        self.state.elapsed_seconds = 0;
        self.state.phase = Phase::Train;
        self.state.current_set = 1;
        self.state.current_exercise = 0;
    }

    /// Apply queued ticks from the subscription. Returns how many were
    /// applied. Does nothing while stopped.
    pub fn poll(&mut self) -> u32 {
        let mut applied = 0;
        loop {
            let ticked = match &self.subscription {
                Some(subscription) => subscription.try_tick(),
                None => false,
            };
            if !ticked {
                break;
            }
            self.tick();
            applied += 1;
        }
        applied
    }

    /// False only when both phase durations are zero.
    #[must_use]
    pub const fn can_start(&self) -> bool {
        self.settings.can_start()
    }

    /// Display label for the current position.
    ///
    /// Empty when no exercises are configured. Otherwise `"Set N:  name"`
    /// during Train (name may be empty) and `"Set N:  Break"` during Break.
    #[must_use]
    pub fn current_label(&self) -> String {
        if self.settings.exercises_number == 0 {
            return String::new();
        }
        let label = format!("Set {}: ", self.state.current_set);
        match self.state.phase {
            Phase::Train => {
                format!(
                    "{label} {}",
                    self.settings.exercise_name(self.state.current_exercise)
                )
            }
            Phase::Break => format!("{label} Break"),
        }
    }

    /// Replace the held settings with a normalized copy, then restart.
    pub fn apply_settings(&mut self, settings: TrainingSettings) {
        self.settings = settings.normalized();
        self.restart();
    }

    /// Duration of the phase currently in progress, in seconds.
    #[must_use]
    pub const fn phase_seconds(&self) -> u32 {
        match self.state.phase {
            Phase::Train => self.settings.seconds_per_exercise,
            Phase::Break => self.settings.break_seconds,
        }
    }

    /// The active settings.
    #[must_use]
    pub const fn settings(&self) -> &TrainingSettings {
        &self.settings
    }

    /// Read-only view of the current state.
    #[must_use]
    pub const fn state(&self) -> &ChronometerState {
        &self.state
    }

    /// Whether the chronometer is ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.is_running
    }
}
