//! Persisted training configuration.
//!
//! Settings are stored under `~/.repset/settings.yaml`. Every field is
//! serde-defaulted so a partial or missing stored shape loads cleanly
//! instead of being trusted as-is.

use serde::{Deserialize, Serialize};

/// User-configured durations, counts, and exercise names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingSettings {
    /// Seconds of work per exercise (the Train phase).
    pub seconds_per_exercise: u32,
    /// Seconds of rest between exercises (the Break phase).
    pub break_seconds: u32,
    /// Total sets to aim for. Informational only; never enforced as a stop.
    pub sets_number: u32,
    /// Number of exercises per set.
    pub exercises_number: u32,
    /// Exercise names, one per slot. Entries may be empty (unnamed exercise).
    pub exercises: Vec<String>,
}

impl TrainingSettings {
    /// Reconcile the exercise list length with `exercises_number`,
    /// truncating or padding with empty names.
    pub fn normalize(&mut self) {
        self.exercises
            .resize(self.exercises_number as usize, String::new());
    }

    /// Consuming variant of [`normalize`](Self::normalize).
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Name of the exercise at `index`, or empty when out of bounds.
    #[must_use]
    pub fn exercise_name(&self, index: usize) -> &str {
        self.exercises.get(index).map_or("", String::as_str)
    }

    /// Whether there is a meaningful cycle to run. False only when both
    /// phase durations are zero.
    #[must_use]
    pub const fn can_start(&self) -> bool {
        !(self.break_seconds == 0 && self.seconds_per_exercise == 0)
    }
}
