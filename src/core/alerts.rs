//! Alert evaluation against the fixed threshold table.
//!
//! Every comparison reads the snapshot it was handed; values from
//! different collection passes are never mixed in one alert.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::probe::SystemReport;

/// Threshold table with one limit per (component, severity) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    pub cpu_temp_warning: f32,   // °C
    pub cpu_temp_critical: f32,  // °C
    pub gpu_temp_warning: f32,   // °C
    pub gpu_temp_critical: f32,  // °C
    pub disk_temp_warning: f32,  // °C
    pub disk_temp_critical: f32, // °C
    pub memory_warning: f32,     // %
    pub memory_critical: f32,    // %
    pub disk_usage_warning: f32, // %
    pub disk_usage_critical: f32, // %
    pub swap_warning: f32,       // %, single tier
    pub vram_warning: f32,       // %, single tier
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cpu_temp_warning: 75.0,
            cpu_temp_critical: 85.0,
            gpu_temp_warning: 80.0,
            gpu_temp_critical: 90.0,
            disk_temp_warning: 50.0,
            disk_temp_critical: 60.0,
            memory_warning: 80.0,
            memory_critical: 90.0,
            disk_usage_warning: 85.0,
            disk_usage_critical: 95.0,
            swap_warning: 50.0,
            vram_warning: 90.0,
        }
    }
}

/// An individual alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub component: String,
    pub message: String,
    pub priority: AlertPriority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    Warning,
    Critical,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Warning => write!(f, "WARNING"),
            AlertSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertPriority {
    High,
    Medium,
    Low,
}

impl fmt::Display for AlertPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertPriority::High => write!(f, "High"),
            AlertPriority::Medium => write!(f, "Medium"),
            AlertPriority::Low => write!(f, "Low"),
        }
    }
}

/// Evaluate one snapshot against the threshold table.
///
/// All thresholds are strict: a value exactly at the limit does not
/// alert. Each metric yields at most one alert, at the highest
/// severity it crossed.
pub fn evaluate_alerts(report: &SystemReport, thresholds: &Thresholds) -> Vec<Alert> {
    let mut alerts = Vec::new();

    // CPU temperature
    if let Some(temp) = report.cpu.temperature_celsius {
        if temp > thresholds.cpu_temp_critical {
            alerts.push(Alert {
                severity: AlertSeverity::Critical,
                component: "CPU".to_string(),
                message: format!(
                    "CPU temperature at {:.1}°C (critical threshold: {:.1}°C)",
                    temp, thresholds.cpu_temp_critical
                ),
                priority: AlertPriority::High,
            });
        } else if temp > thresholds.cpu_temp_warning {
            alerts.push(Alert {
                severity: AlertSeverity::Warning,
                component: "CPU".to_string(),
                message: format!(
                    "CPU temperature at {:.1}°C (warning threshold: {:.1}°C)",
                    temp, thresholds.cpu_temp_warning
                ),
                priority: AlertPriority::Medium,
            });
        }
    }

    // Memory usage
    let memory = report.memory.usage_percent;
    if memory > thresholds.memory_critical {
        alerts.push(Alert {
            severity: AlertSeverity::Critical,
            component: "Memory".to_string(),
            message: format!(
                "Memory usage critical: {:.1}% (threshold: {:.1}%)",
                memory, thresholds.memory_critical
            ),
            priority: AlertPriority::High,
        });
    } else if memory > thresholds.memory_warning {
        alerts.push(Alert {
            severity: AlertSeverity::Warning,
            component: "Memory".to_string(),
            message: format!(
                "Memory usage high: {:.1}% (threshold: {:.1}%)",
                memory, thresholds.memory_warning
            ),
            priority: AlertPriority::Medium,
        });
    }

    // Swap usage, single warning tier
    if report.memory.swap_percent > thresholds.swap_warning {
        alerts.push(Alert {
            severity: AlertSeverity::Warning,
            component: "Swap".to_string(),
            message: format!(
                "Swap usage at {:.1}% (threshold: {:.1}%)",
                report.memory.swap_percent, thresholds.swap_warning
            ),
            priority: AlertPriority::Low,
        });
    }

    // GPU temperature and VRAM
    for gpu in &report.gpus {
        if let Some(temp) = gpu.temperature_celsius {
            let temp = temp as f32;
            if temp > thresholds.gpu_temp_critical {
                alerts.push(Alert {
                    severity: AlertSeverity::Critical,
                    component: "GPU".to_string(),
                    message: format!(
                        "{} temperature at {:.1}°C (critical threshold: {:.1}°C)",
                        gpu.name, temp, thresholds.gpu_temp_critical
                    ),
                    priority: AlertPriority::High,
                });
            } else if temp > thresholds.gpu_temp_warning {
                alerts.push(Alert {
                    severity: AlertSeverity::Warning,
                    component: "GPU".to_string(),
                    message: format!(
                        "{} temperature at {:.1}°C (warning threshold: {:.1}°C)",
                        gpu.name, temp, thresholds.gpu_temp_warning
                    ),
                    priority: AlertPriority::Medium,
                });
            }
        }

        if let Some(vram) = gpu.memory_percent {
            if vram > thresholds.vram_warning {
                alerts.push(Alert {
                    severity: AlertSeverity::Warning,
                    component: "GPU".to_string(),
                    message: format!(
                        "{} VRAM at {:.1}% (threshold: {:.1}%)",
                        gpu.name, vram, thresholds.vram_warning
                    ),
                    priority: AlertPriority::Medium,
                });
            }
        }
    }

    // Disk space and temperature
    for disk in &report.disks {
        if disk.usage_percent > thresholds.disk_usage_critical {
            alerts.push(Alert {
                severity: AlertSeverity::Critical,
                component: format!("Disk {}", disk.mount_point),
                message: format!(
                    "Disk {} at {:.1}% capacity (critical threshold: {:.1}%)",
                    disk.mount_point, disk.usage_percent, thresholds.disk_usage_critical
                ),
                priority: AlertPriority::High,
            });
        } else if disk.usage_percent > thresholds.disk_usage_warning {
            alerts.push(Alert {
                severity: AlertSeverity::Warning,
                component: format!("Disk {}", disk.mount_point),
                message: format!(
                    "Disk {} at {:.1}% capacity (warning threshold: {:.1}%)",
                    disk.mount_point, disk.usage_percent, thresholds.disk_usage_warning
                ),
                priority: AlertPriority::Medium,
            });
        }

        if let Some(temp) = disk.temperature_celsius {
            if temp > thresholds.disk_temp_critical {
                alerts.push(Alert {
                    severity: AlertSeverity::Critical,
                    component: format!("Disk {}", disk.mount_point),
                    message: format!(
                        "Disk {} temperature at {:.1}°C (critical threshold: {:.1}°C)",
                        disk.mount_point, temp, thresholds.disk_temp_critical
                    ),
                    priority: AlertPriority::High,
                });
            } else if temp > thresholds.disk_temp_warning {
                alerts.push(Alert {
                    severity: AlertSeverity::Warning,
                    component: format!("Disk {}", disk.mount_point),
                    message: format!(
                        "Disk {} temperature at {:.1}°C (warning threshold: {:.1}°C)",
                        disk.mount_point, temp, thresholds.disk_temp_warning
                    ),
                    priority: AlertPriority::Medium,
                });
            }
        }
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_temperature_tiers() {
        let thresholds = Thresholds::default();
        let mut report = SystemReport::default();

        report.cpu.temperature_celsius = Some(86.0);
        let alerts = evaluate_alerts(&report, &thresholds);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
        assert_eq!(alerts[0].component, "CPU");

        report.cpu.temperature_celsius = Some(76.0);
        let alerts = evaluate_alerts(&report, &thresholds);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);

        report.cpu.temperature_celsius = Some(60.0);
        let alerts = evaluate_alerts(&report, &thresholds);
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_thresholds_are_strict() {
        let thresholds = Thresholds::default();
        let mut report = SystemReport::default();

        report.cpu.temperature_celsius = Some(85.0);
        let alerts = evaluate_alerts(&report, &thresholds);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);

        report.cpu.temperature_celsius = Some(75.0);
        assert!(evaluate_alerts(&report, &thresholds).is_empty());
    }

    #[test]
    fn test_memory_wording() {
        let thresholds = Thresholds::default();
        let mut report = SystemReport::default();

        report.memory.usage_percent = 91.0;
        let alerts = evaluate_alerts(&report, &thresholds);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
        assert!(alerts[0].message.contains("critical"));

        report.memory.usage_percent = 81.0;
        let alerts = evaluate_alerts(&report, &thresholds);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert!(alerts[0].message.contains("high"));
    }

    #[test]
    fn test_swap_single_tier() {
        let thresholds = Thresholds::default();
        let mut report = SystemReport::default();
        report.memory.swap_percent = 97.0;

        let alerts = evaluate_alerts(&report, &thresholds);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert_eq!(alerts[0].priority, AlertPriority::Low);
    }

    #[test]
    fn test_no_alerts_on_default_report() {
        let report = SystemReport::default();
        let alerts = evaluate_alerts(&report, &Thresholds::default());
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let thresholds = Thresholds::default();
        let mut report = SystemReport::default();
        report.cpu.temperature_celsius = Some(88.0);
        report.memory.usage_percent = 95.0;
        report.memory.swap_percent = 60.0;

        let first = evaluate_alerts(&report, &thresholds);
        let second = evaluate_alerts(&report, &thresholds);
        assert_eq!(first, second);
    }
}
