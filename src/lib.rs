// pcdx library - Public API

// Re-export error types
pub mod error;
pub use error::{PcdxError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::alerts::{evaluate_alerts, Alert, AlertPriority, AlertSeverity, Thresholds};
pub use crate::core::diagnostics::{run_diagnostic, DiagnosticReport};
pub use crate::core::monitor::{MonitorSession, SessionConfig, SessionSnapshot, SessionState};
pub use crate::core::probe::{collect_system_report, SystemReport};
pub use crate::core::recommend::{build_recommendations, Recommendation};

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
