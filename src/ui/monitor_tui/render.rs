use ratatui::{
    prelude::*,
    widgets::{BarChart, Block, Borders, Paragraph},
};

use super::app::MonitorApp;
use super::widgets::{colored_gauge, temp_color};
use crate::core::monitor::SessionState;

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &MonitorApp) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with session info
            Constraint::Length(5), // Live gauges
            Constraint::Min(6),    // History chart + events
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_gauges(frame, chunks[1], app);
    render_history_and_events(frame, chunks[2], app);
    render_footer(frame, chunks[3]);

    // Render help overlay if active
    if app.show_help {
        render_help_overlay(frame, area);
    }
}

/// Render the session header: state, start time, cadence, tick count
fn render_header(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let snapshot = &app.snapshot;

    let state_str = match snapshot.state {
        SessionState::Running => "Running",
        SessionState::Idle => "Idle",
    };

    let duration_str = match snapshot.duration_secs {
        Some(secs) => format!("{}s", secs),
        None => "until stopped".to_string(),
    };

    let title = format!(
        " Monitor │ {} │ Started: {} │ Interval: {}s │ Duration: {} │ Ticks: {} ",
        state_str,
        snapshot.started_at.format("%H:%M:%S"),
        snapshot.interval_secs,
        duration_str,
        snapshot.series.len()
    );

    let border_color = match snapshot.state {
        SessionState::Running => Color::Green,
        SessionState::Idle => Color::DarkGray,
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(block, area);
}

/// Render CPU, memory, and GPU gauges for the latest sample
fn render_gauges(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let block = Block::default().title(" Live Metrics ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(ref latest) = app.snapshot.latest else {
        let waiting = Paragraph::new("Collecting first sample...")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(waiting, inner);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // CPU
            Constraint::Length(1), // Memory
            Constraint::Length(1), // GPU
        ])
        .split(inner);

    let cpu_label = format!("CPU:    {:>5.1}%", latest.cpu_usage);
    render_metric_row(frame, rows[0], cpu_label, latest.cpu_usage, latest.cpu_temp);

    let mem_label = format!("Memory: {:>5.1}%", latest.memory_usage);
    render_metric_row(frame, rows[1], mem_label, latest.memory_usage, None);

    match latest.gpu_usage {
        Some(gpu_usage) => {
            let gpu_label = format!("GPU:    {:>5.1}%", gpu_usage);
            render_metric_row(frame, rows[2], gpu_label, gpu_usage, latest.gpu_temp);
        }
        None => {
            let no_gpu =
                Paragraph::new("GPU:    not detected").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(no_gpu, rows[2]);
        }
    }
}

/// One gauge line with an optional temperature readout on the right
fn render_metric_row(frame: &mut Frame, area: Rect, label: String, value: f32, temp: Option<f32>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(8)])
        .split(area);

    let gauge = colored_gauge(value as f64, &label);
    frame.render_widget(gauge, columns[0]);

    if let Some(temp) = temp {
        let temp_text = Paragraph::new(format!("{:>5.0}°C", temp))
            .style(Style::default().fg(temp_color(temp)));
        frame.render_widget(temp_text, columns[1]);
    }
}

fn render_history_and_events(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_cpu_history(frame, columns[0], app);
    render_events(frame, columns[1], app);
}

/// CPU usage over the whole session as a bar chart
fn render_cpu_history(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let block = Block::default().title(" CPU History ").borders(Borders::ALL);
    let inner_width = block.inner(area).width as usize;

    let entries = app.snapshot.series.entries();
    if entries.is_empty() || inner_width < 2 {
        frame.render_widget(block, area);
        return;
    }

    // CPU usage is 0-100% scaled by 10 so one decimal survives the u64 data
    let history: Vec<u64> = entries.iter().map(|m| (m.cpu_usage * 10.0) as u64).collect();

    let bar_width: u16 = 1;
    let bar_gap: u16 = 1;
    let space_per_bar = (bar_width + bar_gap) as usize;
    let max_bars = (inner_width / space_per_bar).max(1).min(history.len());

    // Most recent samples on the right
    let start_idx = history.len().saturating_sub(max_bars);
    let data_to_show: Vec<(&str, u64)> = history[start_idx..].iter().map(|&v| ("", v)).collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Vertical)
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .data(&data_to_show)
        .max(1000);

    frame.render_widget(chart, area);
}

/// Threshold events logged by the sampling loop, most recent last
fn render_events(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let block = Block::default().title(" Events ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let events = &app.snapshot.events;
    if events.is_empty() {
        let empty = Paragraph::new("No threshold events.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let visible = inner.height as usize;
    let start = events.len().saturating_sub(visible);

    let lines: Vec<Line> = events[start..]
        .iter()
        .map(|event| {
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", event.timestamp.format("%H:%M:%S")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{}: {}", event.component, event.message),
                    Style::default().fg(Color::Yellow),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let help = " q: Quit │ ?: Help ";
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_text = r#"
    Hardware Monitor - Help

    Keyboard Shortcuts:
    ─────────────────────────────────────
    q / Esc     Stop the session and quit
    ? / h       Toggle this help screen

    The session keeps sampling while this
    screen is open; quitting stops it and
    prints the summary.
    "#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::DarkGray));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    // Center the help popup
    let popup_area = centered_rect(60, 50, area);
    frame.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
