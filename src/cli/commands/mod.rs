//! Command implementations for repset.

mod completions;
mod settings;

pub use completions::completions;
pub use settings::settings;
