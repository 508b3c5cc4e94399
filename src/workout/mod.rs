//! Interval workout timing.
//!
//! Provides the two-phase chronometer and its persisted settings:
//! - Exercise/break phase cycling driven by one-second ticks
//! - Training settings with load-time normalization
//! - YAML-backed settings store under `~/.repset/`

pub mod chronometer;
pub mod format;
pub mod settings;
pub mod storage;

pub use chronometer::{Chronometer, ChronometerState, Phase};
pub use format::{format_duration_mmss, format_seconds, render_progress_bar};
pub use settings::TrainingSettings;
pub use storage::{FileSettingsStore, SettingsStore};

#[cfg(test)]
pub use storage::MockSettingsStore;
