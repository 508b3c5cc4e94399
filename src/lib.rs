//! repset - An interval training timer for the terminal
//!
//! This crate alternates between exercise and break phases on a one-second
//! tick, with durations, set counts, and exercise names persisted under
//! `~/.repset/`.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod tui;
pub mod workout;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::RepsetError;
pub use workout::{Chronometer, TrainingSettings};
