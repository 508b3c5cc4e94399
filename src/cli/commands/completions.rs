//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::args::Cli;

/// Generate a completion script for the given shell.
#[must_use]
pub fn completions(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, "repset", &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
