//! Core abstractions for repset.
//!
//! This module provides shared primitives used across features.

mod ticker;

pub use ticker::{IntervalTicker, Ticker, TickerHandle};
