use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use repset::cli::args::{Cli, Commands};
use repset::cli::commands;
use repset::core::IntervalTicker;
use repset::error::RepsetError;
use repset::workout::{Chronometer, FileSettingsStore, SettingsStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), RepsetError> {
    let cli = Cli::parse();
    let format = cli.output;

    let output = match cli.command {
        Commands::Run => {
            let store = FileSettingsStore::new()?;
            let settings = store.load()?.unwrap_or_default();
            let chronometer = Chronometer::new(settings, Box::new(IntervalTicker::new()));
            repset::tui::run(chronometer)?;
            String::new()
        }
        Commands::Settings(args) => {
            let store = FileSettingsStore::new()?;
            commands::settings(&store, args.command, format)?
        }
        Commands::Completions { shell } => commands::completions(shell),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
