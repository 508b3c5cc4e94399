//! UI rendering for the TUI.

use chrono::Duration;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::workout::{format_duration_mmss, render_progress_bar, Phase};

const PROGRESS_WIDTH: usize = 40;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, timer panel, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Timer
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_timer(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let run_state = if app.chronometer.is_running() {
        "running"
    } else {
        "stopped"
    };
    let title = format!(" repset ({run_state}) ");

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the timer panel.
fn render_timer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chronometer = &app.chronometer;
    let state = chronometer.state();

    let phase_color = match state.phase {
        Phase::Train => Color::Green,
        Phase::Break => Color::Yellow,
    };

    let mut lines = vec![Line::default()];

    let label = chronometer.current_label();
    if label.is_empty() {
        lines.push(Line::from(Span::styled(
            "No exercises configured",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            label,
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::default());

    let elapsed = format_duration_mmss(Duration::seconds(i64::from(state.elapsed_seconds)));
    let phase_seconds = chronometer.phase_seconds();
    let clock = if phase_seconds > 0 {
        format!(
            "{elapsed} / {}",
            format_duration_mmss(Duration::seconds(i64::from(phase_seconds)))
        )
    } else {
        elapsed
    };
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} ", state.phase),
            Style::default()
                .fg(phase_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(clock),
    ]));

    if phase_seconds > 0 {
        let progress = f64::from(state.elapsed_seconds) / f64::from(phase_seconds);
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            render_progress_bar(progress, PROGRESS_WIDTH),
            Style::default().fg(phase_color),
        )));
    }

    lines.push(Line::default());
    let sets_number = chronometer.settings().sets_number;
    let set_line = if sets_number > 0 {
        format!("Set {} of {}", state.current_set, sets_number)
    } else {
        format!("Set {}", state.current_set)
    };
    lines.push(Line::from(Span::styled(
        set_line,
        Style::default().fg(Color::DarkGray),
    )));

    let timer = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(timer, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start/stop | r:restart | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
