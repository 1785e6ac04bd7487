//! Monitoring session command handler.
//!
//! Starts a sampling session and observes it either through the TUI
//! dashboard or as plain console lines, then prints the summary and
//! writes the session log.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::*;

use crate::core::monitor::{MonitorSession, SessionConfig, SessionSnapshot, SessionState};
use crate::core::report::{csv, files, text};
use crate::error::PcdxError;
use crate::ui::monitor_tui::run_monitor_app;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let interval_secs = matches.get_one::<u64>("interval").copied().unwrap_or(2);
    let duration_mins = matches.get_one::<u64>("duration").copied().unwrap_or(5);
    let plain = matches.get_flag("plain");
    let csv_path = matches.get_one::<String>("csv");
    let output_dir = Path::new(
        matches
            .get_one::<String>("output")
            .map(|s| s.as_str())
            .unwrap_or("."),
    );

    let config = SessionConfig {
        interval: Duration::from_secs(interval_secs.max(1)),
        // 0 minutes means run until stopped
        duration: if duration_mins == 0 {
            None
        } else {
            Some(Duration::from_secs(duration_mins * 60))
        },
    };

    let session = match MonitorSession::start(config) {
        Ok(session) => session,
        Err(PcdxError::SessionConflict) => {
            println!(
                "{}",
                "A monitoring session is already running in this process.".yellow()
            );
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if plain {
        run_plain(&session)?;
    } else {
        run_monitor_app(&session).context("Failed to run monitor dashboard")?;
        session.stop();
    }

    let snapshot = wait_for_final_snapshot(&session);

    print_summary(&snapshot);

    let rendered = text::render_session_log(&snapshot);
    match files::write_monitoring_log(output_dir, &rendered) {
        Ok(path) => println!("  {} Session log: {}", "✓".green(), path.display()),
        Err(e) => eprintln!("{}", format!("Could not write session log: {}", e).red()),
    }

    if let Some(csv_path) = csv_path {
        let content = csv::render_csv(&snapshot.series);
        match files::write_csv_export(Path::new(csv_path), &content) {
            Ok(()) => println!("  {} CSV export: {}", "✓".green(), csv_path),
            Err(e) => eprintln!("{}", format!("CSV export failed: {}", e).red()),
        }
    }

    Ok(())
}

/// Follow the session on the plain console, printing each new sample
/// and threshold event as it is published. Ctrl-C stops the session.
fn run_plain(session: &MonitorSession) -> Result<()> {
    let stopper = session.stopper();
    ctrlc::set_handler(move || {
        let _ = stopper.send(());
    })
    .context("Failed to register Ctrl-C handler")?;

    println!("{}", "Monitoring... press Ctrl-C to stop.".cyan());

    let mut snapshot_rx = session.subscribe();
    let mut printed_samples = 0usize;
    let mut printed_events = 0usize;

    loop {
        let snapshot = snapshot_rx.borrow_and_update().clone();

        for metrics in &snapshot.series.entries()[printed_samples..] {
            println!("{}", format_sample_line(metrics));
        }
        printed_samples = snapshot.series.len();

        for event in &snapshot.events[printed_events..] {
            println!(
                "{}",
                format!(
                    "[{}] {}: {}",
                    event.timestamp.format("%H:%M:%S"),
                    event.component,
                    event.message
                )
                .yellow()
            );
        }
        printed_events = snapshot.events.len();

        if snapshot.state == SessionState::Idle {
            break;
        }

        std::thread::sleep(Duration::from_millis(250));
    }

    Ok(())
}

fn format_sample_line(metrics: &crate::core::monitor::SampleMetrics) -> String {
    let cpu = format!("{:>5.1}%", metrics.cpu_usage);
    let cpu = if metrics.cpu_usage > 80.0 {
        cpu.red()
    } else {
        cpu.normal()
    };

    let memory = format!("{:>5.1}%", metrics.memory_usage);
    let memory = if metrics.memory_usage > 85.0 {
        memory.red()
    } else {
        memory.normal()
    };

    let mut line = format!(
        "[{}] CPU: {} | Memory: {}",
        metrics.timestamp.format("%H:%M:%S"),
        cpu,
        memory
    );

    if let Some(gpu_usage) = metrics.gpu_usage {
        line.push_str(&format!(" | GPU: {:>5.1}%", gpu_usage));
    }
    if let Some(cpu_temp) = metrics.cpu_temp {
        line.push_str(&format!(" | CPU temp: {:.0}°C", cpu_temp));
    }
    if let Some(gpu_temp) = metrics.gpu_temp {
        line.push_str(&format!(" | GPU temp: {:.0}°C", gpu_temp));
    }

    line
}

/// The sampling loop publishes one last Idle snapshot with the summary;
/// give it a moment to arrive after stop was requested.
fn wait_for_final_snapshot(session: &MonitorSession) -> Arc<SessionSnapshot> {
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        let snapshot = session.latest();
        if snapshot.state == SessionState::Idle || Instant::now() >= deadline {
            return snapshot;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
}

fn print_summary(snapshot: &SessionSnapshot) {
    println!("\n{}", "SESSION SUMMARY".bold().bright_cyan());
    println!("{}", "=".repeat(80));
    println!(
        "  Started: {}  Interval: {}s  Ticks: {}",
        snapshot.started_at.format("%Y-%m-%d %H:%M:%S"),
        snapshot.interval_secs,
        snapshot.series.len()
    );

    match &snapshot.summary {
        Some(summary) => {
            println!(
                "  CPU:    mean {:>5.1}%, max {:>5.1}%",
                summary.cpu_mean, summary.cpu_max
            );
            println!(
                "  Memory: mean {:>5.1}%, max {:>5.1}%",
                summary.memory_mean, summary.memory_max
            );
            if let (Some(gpu_mean), Some(gpu_max)) = (summary.gpu_mean, summary.gpu_max) {
                println!("  GPU:    mean {:>5.1}%, max {:>5.1}%", gpu_mean, gpu_max);
            }
        }
        None => println!("  {}", "No samples recorded.".yellow()),
    }
    println!();
}
