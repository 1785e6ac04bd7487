//! Timestamped report and log files.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{PcdxError, Result};

/// Timestamp fragment used in generated file names.
pub fn timestamp_slug() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .map_err(|e| PcdxError::export_failure(format!("{}: {}", dir.display(), e)))
}

/// Append to the file, creating it on first use.
fn append(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| PcdxError::export_failure(format!("{}: {}", path.display(), e)))?;
    file.write_all(content.as_bytes())
        .map_err(|e| PcdxError::export_failure(format!("{}: {}", path.display(), e)))
}

fn write(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .map_err(|e| PcdxError::export_failure(format!("{}: {}", path.display(), e)))
}

/// One append-only log file per completed diagnostic run.
pub fn write_diagnostic_log(dir: &Path, content: &str) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(format!("diagnostic_{}.log", timestamp_slug()));
    append(&path, content)?;
    Ok(path)
}

/// One append-only log file per completed monitoring session.
pub fn write_monitoring_log(dir: &Path, content: &str) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(format!("monitoring_{}.log", timestamp_slug()));
    append(&path, content)?;
    Ok(path)
}

pub fn write_text_report(dir: &Path, content: &str) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(format!("diagnostic_report_{}.txt", timestamp_slug()));
    write(&path, content)?;
    Ok(path)
}

pub fn write_html_report(dir: &Path, content: &str) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(format!("diagnostic_report_{}.html", timestamp_slug()));
    write(&path, content)?;
    Ok(path)
}

/// CSV goes to a caller-chosen path rather than a timestamped name.
pub fn write_csv_export(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }
    write(path, content)
}
