//! One-shot full diagnostic.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::core::alerts::{evaluate_alerts, Alert, AlertSeverity, Thresholds};
use crate::core::probe::{collect_system_report, SystemReport};
use crate::core::recommend::{build_recommendations, Recommendation};

/// Outcome of one diagnostic pass: the snapshot it ran on plus the
/// alert and recommendation lists derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub generated_at: DateTime<Local>,
    pub system: SystemReport,
    pub alerts: Vec<Alert>,
    pub recommendations: Vec<Recommendation>,
}

impl DiagnosticReport {
    pub fn critical_count(&self) -> usize {
        self.alerts
            .iter()
            .filter(|a| a.severity == AlertSeverity::Critical)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.alerts
            .iter()
            .filter(|a| a.severity == AlertSeverity::Warning)
            .count()
    }

    pub fn is_healthy(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Status line used by the report header and the HTML cards.
    pub fn status_label(&self) -> &'static str {
        if self.critical_count() > 0 {
            "Critical issues found"
        } else if !self.alerts.is_empty() {
            "Warnings found"
        } else {
            "Healthy"
        }
    }
}

/// Query every subsystem once and evaluate the results against the
/// threshold table. Alert and recommendation lists are rebuilt from
/// empty on every call; nothing persists between runs.
pub fn run_diagnostic(thresholds: &Thresholds) -> DiagnosticReport {
    let system = collect_system_report();
    build_report(system, thresholds)
}

/// Evaluate an already-collected snapshot. Exports and tests use this
/// to run the engine on a fixed input.
pub fn build_report(system: SystemReport, thresholds: &Thresholds) -> DiagnosticReport {
    let alerts = evaluate_alerts(&system, thresholds);
    let recommendations = build_recommendations(&system, thresholds);

    DiagnosticReport {
        generated_at: Local::now(),
        system,
        alerts,
        recommendations,
    }
}
