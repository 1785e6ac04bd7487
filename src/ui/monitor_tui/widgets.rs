use ratatui::{prelude::*, widgets::Gauge};

/// Create a gauge with color based on value thresholds
pub fn colored_gauge<'a>(value: f64, label: &'a str) -> Gauge<'a> {
    let color = match value {
        v if v < 50.0 => Color::Cyan,
        v if v < 75.0 => Color::LightYellow,
        v if v < 90.0 => Color::LightRed,
        _ => Color::Red,
    };

    Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio((value / 100.0).clamp(0.0, 1.0))
        .label(label)
}

/// Get color for a temperature value
pub fn temp_color(temp: f32) -> Color {
    match temp {
        t if t < 50.0 => Color::Cyan,
        t if t < 70.0 => Color::LightYellow,
        t if t < 85.0 => Color::LightRed,
        _ => Color::Red,
    }
}
