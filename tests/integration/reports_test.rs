use std::fs;

use chrono::Local;
use pcdx::core::diagnostics::build_report;
use pcdx::core::monitor::{SampleMetrics, SampleSeries, SessionEvent, SessionSnapshot, SessionState};
use pcdx::core::probe::{GpuInfo, SystemReport};
use pcdx::core::report::{csv, files, html, text};
use pcdx::Thresholds;
use tempfile::TempDir;

fn sample(cpu: f32, memory: f32) -> SampleMetrics {
    SampleMetrics {
        timestamp: Local::now(),
        cpu_usage: cpu,
        memory_usage: memory,
        gpu_usage: None,
        cpu_temp: None,
        gpu_temp: None,
    }
}

fn snapshot_with(series: SampleSeries, state: SessionState) -> SessionSnapshot {
    let summary = series.summarize();
    SessionSnapshot {
        state,
        started_at: Local::now(),
        interval_secs: 2,
        duration_secs: Some(120),
        latest: series.entries().last().cloned(),
        series,
        events: Vec::new(),
        summary,
    }
}

#[test]
fn test_text_report_sections() {
    let report = build_report(SystemReport::default(), &Thresholds::default());
    let rendered = text::render_text(&report);

    assert!(rendered.contains("SYSTEM DIAGNOSTIC REPORT"));
    assert!(rendered.contains("Status: Healthy"));
    assert!(rendered.contains("OPERATING SYSTEM"));
    assert!(rendered.contains("MEMORY"));
    assert!(rendered.contains("No dedicated GPU detected."));
    assert!(rendered.contains("ALERTS (0)"));
    assert!(rendered.contains("No alerts; all readings within thresholds."));
    assert!(rendered.contains("RECOMMENDATIONS (2)"));
    assert!(rendered.contains("Preventive maintenance"));
}

#[test]
fn test_text_report_lists_alerts() {
    let mut system = SystemReport::default();
    system.cpu.temperature_celsius = Some(86.0);

    let report = build_report(system, &Thresholds::default());
    let rendered = text::render_text(&report);

    assert!(rendered.contains("Status: Critical issues found"));
    assert!(rendered.contains("ALERTS (1)"));
    assert!(rendered.contains("[CRITICAL] CPU: CPU temperature at 86.0°C"));
}

#[test]
fn test_format_uptime() {
    assert_eq!(text::format_uptime(90_061), "1d 1h 1m");
    assert_eq!(text::format_uptime(3_660), "1h 1m");
    assert_eq!(text::format_uptime(59), "0m");
}

#[test]
fn test_session_log_with_samples() {
    let mut series = SampleSeries::new();
    series.push(sample(42.0, 58.5));
    series.push(sample(44.0, 60.5));

    let mut snapshot = snapshot_with(series, SessionState::Idle);
    snapshot.events.push(SessionEvent {
        timestamp: Local::now(),
        component: "CPU".to_string(),
        message: "High CPU usage: 86.0%".to_string(),
        value: 86.0,
    });

    let log = text::render_session_log(&snapshot);
    assert!(log.contains("MONITORING SESSION LOG"));
    assert!(log.contains("Interval: 2s    Duration: 120s"));
    assert!(log.contains("CPU: 42.0% | Memory: 58.5%"));
    assert!(log.contains("EVENTS"));
    assert!(log.contains("CPU: High CPU usage: 86.0%"));
    assert!(log.contains("SUMMARY"));
    assert!(log.contains("Ticks:  2"));
    assert!(log.contains("CPU:    mean 43.0%, max 44.0%"));
}

#[test]
fn test_session_log_without_samples() {
    let mut snapshot = snapshot_with(SampleSeries::new(), SessionState::Idle);
    snapshot.duration_secs = None;

    let log = text::render_session_log(&snapshot);
    assert!(log.contains("Duration: until stopped"));
    assert!(log.contains("No samples recorded."));
    // GPU statistics are omitted when no tick ever recorded them.
    assert!(!log.contains("GPU:"));
}

#[test]
fn test_csv_base_columns() {
    let mut series = SampleSeries::new();
    series.push(sample(20.0, 30.0));
    series.push(sample(25.0, 35.0));

    let rendered = csv::render_csv(&series);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Timestamp,CPU_Usage_%,Memory_Usage_%");
    assert!(lines[1].ends_with(",20.0,30.0"));
    assert!(lines[2].ends_with(",25.0,35.0"));
}

#[test]
fn test_csv_optional_columns_appear_when_recorded() {
    let mut series = SampleSeries::new();
    let mut first = sample(20.0, 30.0);
    first.gpu_usage = Some(33.3);
    first.cpu_temp = Some(50.0);
    series.push(first);
    series.push(sample(21.0, 31.0));

    let rendered = csv::render_csv(&series);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "Timestamp,CPU_Usage_%,Memory_Usage_%,GPU_Usage_%,CPU_Temp_C");
    assert!(lines[1].ends_with(",20.0,30.0,33.3,50.0"));
    // The second tick recorded no GPU reading; its cell stays empty.
    assert!(lines[2].ends_with(",21.0,31.0,,"));
}

#[test]
fn test_csv_empty_series_is_header_only() {
    let rendered = csv::render_csv(&SampleSeries::new());
    assert_eq!(rendered, "Timestamp,CPU_Usage_%,Memory_Usage_%\n");
}

#[test]
fn test_html_report_structure() {
    let report = build_report(SystemReport::default(), &Thresholds::default());
    let rendered = html::render_html(&report);

    assert!(rendered.starts_with("<!DOCTYPE html>"));
    assert!(rendered.contains("<title>System Diagnostic Report</title>"));
    assert!(rendered.contains("<h1>System Diagnostic Report</h1>"));
    for label in ["Alerts", "Critical", "Recommendations", "Status"] {
        assert!(rendered.contains(&format!("<div class=\"label\">{}</div>", label)));
    }
    assert!(rendered.contains("<div class=\"value ok\">Healthy</div>"));
    assert!(rendered.contains("<h2>Full Report</h2>"));
}

#[test]
fn test_html_escapes_device_names() {
    let mut system = SystemReport::default();
    system.gpus.push(GpuInfo {
        name: "Evil <script> GPU".to_string(),
        temperature_celsius: Some(92),
        ..Default::default()
    });

    let report = build_report(system, &Thresholds::default());
    let rendered = html::render_html(&report);

    assert!(rendered.contains("Evil &lt;script&gt; GPU"));
    assert!(!rendered.contains("<script>"));
}

#[test]
fn test_diagnostic_log_file_naming() {
    let dir = TempDir::new().unwrap();

    let path = files::write_diagnostic_log(dir.path(), "diagnostic content\n").unwrap();
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("diagnostic_"));
    assert!(name.ends_with(".log"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "diagnostic content\n");
}

#[test]
fn test_monitoring_log_file_naming() {
    let dir = TempDir::new().unwrap();

    let path = files::write_monitoring_log(dir.path(), "session content\n").unwrap();
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("monitoring_"));
    assert!(name.ends_with(".log"));
}

#[test]
fn test_report_exports_land_in_the_output_dir() {
    let dir = TempDir::new().unwrap();

    let txt = files::write_text_report(dir.path(), "text report").unwrap();
    assert!(txt.extension().is_some_and(|e| e == "txt"));
    assert!(txt
        .file_name()
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("diagnostic_report_"));

    let html = files::write_html_report(dir.path(), "<html></html>").unwrap();
    assert!(html.extension().is_some_and(|e| e == "html"));
}

#[test]
fn test_csv_export_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("exports").join("session.csv");

    files::write_csv_export(&target, "Timestamp,CPU_Usage_%,Memory_Usage_%\n").unwrap();
    assert!(target.exists());
    assert!(fs::read_to_string(&target)
        .unwrap()
        .starts_with("Timestamp,"));
}

#[test]
fn test_diagnostic_log_append_behavior() {
    let dir = TempDir::new().unwrap();

    // Within one second both runs resolve to the same timestamped name
    // and the second run appends. Across a second boundary they land in
    // two files. Either way no content is lost.
    let first = files::write_diagnostic_log(dir.path(), "first\n").unwrap();
    let second = files::write_diagnostic_log(dir.path(), "second\n").unwrap();

    let mut combined = String::new();
    combined.push_str(&fs::read_to_string(&first).unwrap());
    if second != first {
        combined.push_str(&fs::read_to_string(&second).unwrap());
    }
    assert!(combined.contains("first"));
    assert!(combined.contains("second"));
}
