//! One-shot diagnostic command handler.
//!
//! Collects a full system report, evaluates it against the threshold
//! table, and prints or exports the result. Export failures are
//! reported on stderr but never abort the run.

use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;
use colored::*;
use log::info;

use crate::core::alerts::Thresholds;
use crate::core::diagnostics;
use crate::core::report::{files, html, text};
use crate::ui::system_formatters;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let json_output = matches.get_flag("json");
    let export = matches.get_one::<String>("export").map(|s| s.as_str());
    let output_dir = Path::new(
        matches
            .get_one::<String>("output")
            .map(|s| s.as_str())
            .unwrap_or("."),
    );

    if !json_output {
        println!("Running hardware diagnostic...");
    }

    let report = diagnostics::run_diagnostic(&Thresholds::default());

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        system_formatters::print_diagnostic(&report);
    }

    let rendered = text::render_text(&report);

    // Every diagnostic run leaves a log file behind
    match files::write_diagnostic_log(output_dir, &rendered) {
        Ok(path) => info!("Diagnostic log written to {}", path.display()),
        Err(e) => eprintln!("{}", format!("Could not write diagnostic log: {}", e).red()),
    }

    match export {
        Some("txt") => export_text(output_dir, &rendered),
        Some("html") => export_html(output_dir, &report),
        Some("all") => {
            export_text(output_dir, &rendered);
            export_html(output_dir, &report);
        }
        _ => {}
    }

    Ok(())
}

fn export_text(output_dir: &Path, rendered: &str) {
    match files::write_text_report(output_dir, rendered) {
        Ok(path) => println!("  {} Text report: {}", "✓".green(), path.display()),
        Err(e) => eprintln!("{}", format!("Text export failed: {}", e).red()),
    }
}

fn export_html(output_dir: &Path, report: &crate::core::diagnostics::DiagnosticReport) {
    let page = html::render_html(report);
    match files::write_html_report(output_dir, &page) {
        Ok(path) => println!("  {} HTML report: {}", "✓".green(), path.display()),
        Err(e) => eprintln!("{}", format!("HTML export failed: {}", e).red()),
    }
}
