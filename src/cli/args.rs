use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "repset")]
#[command(about = "An interval training timer for the terminal")]
#[command(long_about = "repset - An interval training timer for the terminal

Alternates between exercise and break phases according to your configured
durations, counts, and exercise names. Settings persist across sessions
under ~/.repset/.

QUICK START:
  repset settings set --exercise-seconds 30 --break-seconds 10 \\
      --sets 3 --exercises \"Push-ups,Squats,Plank\"
  repset run                Start the timer (space: start/stop, r: restart)

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  repset <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interval timer
    ///
    /// Opens the full-screen timer with the saved training settings.
    /// While it is open:
    ///
    ///   space    start / stop the chronometer
    ///   r        restart from the first exercise of set 1
    ///   q, Esc   quit
    ///
    /// Starting is disabled until at least one of the exercise or break
    /// durations is non-zero ('repset settings set').
    #[command(alias = "r")]
    Run,

    /// Manage training settings
    ///
    /// Settings are stored in ~/.repset/settings.yaml and survive across
    /// sessions. Changing them resets the chronometer position on the
    /// next run.
    #[command(alias = "s")]
    Settings(SettingsArgs),

    /// Generate shell completion scripts
    ///
    /// # Examples
    ///
    ///   repset completions bash > /etc/bash_completion.d/repset
    ///   repset completions zsh > ~/.zfunc/_repset
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show the saved training settings
    Show,

    /// Update training settings
    ///
    /// Only the provided flags change; everything else keeps its saved
    /// value. The exercise list is reconciled with the exercise count,
    /// padding missing names or dropping extras.
    ///
    /// # Examples
    ///
    ///   repset settings set --exercise-seconds 40 --break-seconds 20
    ///   repset settings set --exercises "Push-ups,Squats,Plank"
    Set(SetArgs),

    /// Remove saved settings, reverting to defaults
    Reset,
}

#[derive(Args)]
pub struct SetArgs {
    /// Seconds of work per exercise
    #[arg(long)]
    pub exercise_seconds: Option<u32>,

    /// Seconds of rest between exercises
    #[arg(long)]
    pub break_seconds: Option<u32>,

    /// Total sets to aim for (informational)
    #[arg(long)]
    pub sets: Option<u32>,

    /// Comma-separated exercise names, e.g. "Push-ups,Squats"
    #[arg(long, value_delimiter = ',')]
    pub exercises: Option<Vec<String>>,

    /// Number of exercises per set
    ///
    /// Defaults to the list length when --exercises is given.
    #[arg(long)]
    pub exercises_number: Option<u32>,
}
