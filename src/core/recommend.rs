//! Recommendation derivation.
//!
//! One recommendation per metric over its warning threshold, plus two
//! static best-practice entries that are always present.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::alerts::Thresholds;
use crate::core::probe::SystemReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for RecommendationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationPriority::Critical => write!(f, "Critical"),
            RecommendationPriority::High => write!(f, "High"),
            RecommendationPriority::Medium => write!(f, "Medium"),
            RecommendationPriority::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub priority: RecommendationPriority,
    pub component: String,
    pub problem: String,
    pub action: String,
}

/// Critical when the value also crossed the critical limit, High when
/// it only crossed the warning limit.
fn priority_over(value: f32, critical: f32) -> RecommendationPriority {
    if value > critical {
        RecommendationPriority::Critical
    } else {
        RecommendationPriority::High
    }
}

pub fn build_recommendations(report: &SystemReport, thresholds: &Thresholds) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if let Some(temp) = report.cpu.temperature_celsius {
        if temp > thresholds.cpu_temp_warning {
            recommendations.push(Recommendation {
                category: "Cooling".to_string(),
                priority: priority_over(temp, thresholds.cpu_temp_critical),
                component: "CPU".to_string(),
                problem: format!("CPU temperature at {:.1}°C", temp),
                action: "Clean fans and heatsinks, renew the thermal paste and check case airflow"
                    .to_string(),
            });
        }
    }

    let memory = report.memory.usage_percent;
    if memory > thresholds.memory_warning {
        recommendations.push(Recommendation {
            category: "Memory".to_string(),
            priority: priority_over(memory, thresholds.memory_critical),
            component: "Memory".to_string(),
            problem: format!("Memory usage at {:.1}%", memory),
            action: "Close unused applications or add more RAM".to_string(),
        });
    }

    if report.memory.swap_percent > thresholds.swap_warning {
        recommendations.push(Recommendation {
            category: "Memory".to_string(),
            priority: RecommendationPriority::Medium,
            component: "Swap".to_string(),
            problem: format!("Swap usage at {:.1}%", report.memory.swap_percent),
            action: "Close memory-heavy applications; consider adding RAM to reduce swapping"
                .to_string(),
        });
    }

    for gpu in &report.gpus {
        if let Some(temp) = gpu.temperature_celsius {
            let temp = temp as f32;
            if temp > thresholds.gpu_temp_warning {
                recommendations.push(Recommendation {
                    category: "Cooling".to_string(),
                    priority: priority_over(temp, thresholds.gpu_temp_critical),
                    component: "GPU".to_string(),
                    problem: format!("{} temperature at {:.1}°C", gpu.name, temp),
                    action: "Improve case airflow and check the GPU fans".to_string(),
                });
            }
        }

        if let Some(vram) = gpu.memory_percent {
            if vram > thresholds.vram_warning {
                recommendations.push(Recommendation {
                    category: "Memory".to_string(),
                    priority: RecommendationPriority::High,
                    component: "GPU".to_string(),
                    problem: format!("{} VRAM at {:.1}%", gpu.name, vram),
                    action: "Close GPU-heavy applications or lower texture quality settings"
                        .to_string(),
                });
            }
        }
    }

    for disk in &report.disks {
        if disk.usage_percent > thresholds.disk_usage_warning {
            recommendations.push(Recommendation {
                category: "Storage".to_string(),
                priority: priority_over(disk.usage_percent, thresholds.disk_usage_critical),
                component: format!("Disk {}", disk.mount_point),
                problem: format!(
                    "Disk {} at {:.1}% capacity",
                    disk.mount_point, disk.usage_percent
                ),
                action: "Free up space or move data to another drive".to_string(),
            });
        }

        if let Some(temp) = disk.temperature_celsius {
            if temp > thresholds.disk_temp_warning {
                recommendations.push(Recommendation {
                    category: "Cooling".to_string(),
                    priority: priority_over(temp, thresholds.disk_temp_critical),
                    component: format!("Disk {}", disk.mount_point),
                    problem: format!("Disk {} temperature at {:.1}°C", disk.mount_point, temp),
                    action: "Check drive ventilation and cabling".to_string(),
                });
            }
        }
    }

    // Static entries, always present
    recommendations.push(Recommendation {
        category: "Maintenance".to_string(),
        priority: RecommendationPriority::Low,
        component: "System".to_string(),
        problem: "Preventive maintenance".to_string(),
        action: "Run periodic diagnostics and keep drivers up to date".to_string(),
    });

    recommendations.push(Recommendation {
        category: "Security".to_string(),
        priority: RecommendationPriority::Medium,
        component: "System".to_string(),
        problem: "System security".to_string(),
        action: "Keep the operating system and antivirus updated".to_string(),
    });

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_entries_always_present() {
        let report = SystemReport::default();
        let recs = build_recommendations(&report, &Thresholds::default());

        assert_eq!(recs.len(), 2);
        assert!(recs.iter().any(|r| r.problem == "Preventive maintenance"));
        assert!(recs.iter().any(|r| r.problem == "System security"));
    }

    #[test]
    fn test_memory_recommendation_wording() {
        let mut report = SystemReport::default();
        report.memory.usage_percent = 91.0;

        let recs = build_recommendations(&report, &Thresholds::default());
        let memory = recs
            .iter()
            .find(|r| r.component == "Memory")
            .expect("memory recommendation");

        assert!(memory.action.contains("add more RAM"));
        assert_eq!(memory.priority, RecommendationPriority::Critical);
    }

    #[test]
    fn test_warning_tier_maps_to_high() {
        let mut report = SystemReport::default();
        report.cpu.temperature_celsius = Some(78.0);

        let recs = build_recommendations(&report, &Thresholds::default());
        let cooling = recs
            .iter()
            .find(|r| r.component == "CPU")
            .expect("cooling recommendation");

        assert_eq!(cooling.priority, RecommendationPriority::High);
    }

    #[test]
    fn test_one_recommendation_per_disk() {
        let mut report = SystemReport::default();
        for mount in ["/", "/home"] {
            report.disks.push(crate::core::probe::DiskInfo {
                mount_point: mount.to_string(),
                usage_percent: 92.0,
                ..Default::default()
            });
        }

        let recs = build_recommendations(&report, &Thresholds::default());
        let disks: Vec<_> = recs.iter().filter(|r| r.category == "Storage").collect();
        assert_eq!(disks.len(), 2);
    }
}
