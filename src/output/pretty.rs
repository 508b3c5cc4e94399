//! Pretty output formatting for repset.

use colored::Colorize;

use crate::workout::{format_seconds, TrainingSettings};

/// Format training settings for human-readable display.
#[must_use]
pub fn format_settings(settings: &TrainingSettings) -> String {
    let mut output = Vec::new();

    output.push("Training Settings".bold().to_string());
    output.push("─".repeat(40));
    output.push(format!(
        "Exercise:   {}",
        format_seconds(settings.seconds_per_exercise)
    ));
    output.push(format!(
        "Break:      {}",
        format_seconds(settings.break_seconds)
    ));
    output.push(format!("Sets:       {}", settings.sets_number));
    output.push(format!("Exercises:  {}", settings.exercises_number));

    for (i, name) in settings.exercises.iter().enumerate() {
        if name.is_empty() {
            output.push(format!("  {}. {}", i + 1, "(unnamed)".dimmed()));
        } else {
            output.push(format!("  {}. {}", i + 1, name));
        }
    }

    if !settings.can_start() {
        output.push(String::new());
        output.push(
            "Set an exercise or break duration to enable the timer."
                .yellow()
                .to_string(),
        );
    }

    output.join("\n")
}
