//! Duration and progress formatting for timer display.

use chrono::Duration;

/// Format a duration as MM:SS.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a whole-second count as a human-readable string.
#[must_use]
pub fn format_seconds(seconds: u32) -> String {
    let minutes = seconds / 60;
    let rest = seconds % 60;

    if minutes == 0 {
        return format!("{} second{}", rest, if rest == 1 { "" } else { "s" });
    }

    if rest == 0 {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    } else {
        format!(
            "{} minute{}, {} second{}",
            minutes,
            if minutes == 1 { "" } else { "s" },
            rest,
            if rest == 1 { "" } else { "s" }
        )
    }
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = (progress.clamp(0.0, 1.0) * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
