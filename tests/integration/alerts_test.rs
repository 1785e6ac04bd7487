use pcdx::core::diagnostics::build_report;
use pcdx::core::probe::{DiskInfo, GpuInfo, SystemReport};
use pcdx::{evaluate_alerts, AlertPriority, AlertSeverity, Thresholds};

fn report_with_cpu_temp(temp: f32) -> SystemReport {
    let mut report = SystemReport::default();
    report.cpu.temperature_celsius = Some(temp);
    report
}

#[test]
fn test_gpu_temperature_and_vram_alerts() {
    let mut report = SystemReport::default();
    report.gpus.push(GpuInfo {
        name: "GeForce RTX 3060".to_string(),
        temperature_celsius: Some(92),
        memory_percent: Some(93.0),
        ..Default::default()
    });

    let alerts = evaluate_alerts(&report, &Thresholds::default());
    assert_eq!(alerts.len(), 2);
    assert!(alerts.iter().all(|a| a.component == "GPU"));
    assert!(alerts.iter().all(|a| a.message.contains("GeForce RTX 3060")));

    // Temperature crossed the critical tier; VRAM only has a warning tier.
    assert_eq!(alerts[0].severity, AlertSeverity::Critical);
    assert_eq!(alerts[1].severity, AlertSeverity::Warning);
}

#[test]
fn test_gpu_warning_tier() {
    let mut report = SystemReport::default();
    report.gpus.push(GpuInfo {
        name: "Radeon RX 6700".to_string(),
        temperature_celsius: Some(81),
        ..Default::default()
    });

    let alerts = evaluate_alerts(&report, &Thresholds::default());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, AlertSeverity::Warning);
    assert_eq!(alerts[0].priority, AlertPriority::Medium);
}

#[test]
fn test_disk_usage_alerts_are_per_disk() {
    let mut report = SystemReport::default();
    report.disks.push(DiskInfo {
        mount_point: "/".to_string(),
        usage_percent: 96.0,
        ..Default::default()
    });
    report.disks.push(DiskInfo {
        mount_point: "/home".to_string(),
        usage_percent: 88.0,
        ..Default::default()
    });

    let alerts = evaluate_alerts(&report, &Thresholds::default());
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].component, "Disk /");
    assert_eq!(alerts[0].severity, AlertSeverity::Critical);
    assert_eq!(alerts[1].component, "Disk /home");
    assert_eq!(alerts[1].severity, AlertSeverity::Warning);
}

#[test]
fn test_disk_temperature_tiers() {
    let thresholds = Thresholds::default();
    let mut report = SystemReport::default();
    report.disks.push(DiskInfo {
        mount_point: "/".to_string(),
        temperature_celsius: Some(61.0),
        ..Default::default()
    });

    let alerts = evaluate_alerts(&report, &thresholds);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, AlertSeverity::Critical);

    report.disks[0].temperature_celsius = Some(55.0);
    let alerts = evaluate_alerts(&report, &thresholds);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, AlertSeverity::Warning);

    report.disks[0].temperature_celsius = Some(45.0);
    assert!(evaluate_alerts(&report, &thresholds).is_empty());
}

#[test]
fn test_custom_thresholds_are_honored() {
    let thresholds = Thresholds {
        cpu_temp_warning: 60.0,
        cpu_temp_critical: 70.0,
        ..Default::default()
    };

    let alerts = evaluate_alerts(&report_with_cpu_temp(65.0), &thresholds);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, AlertSeverity::Warning);

    // The same reading is quiet under the default table.
    assert!(evaluate_alerts(&report_with_cpu_temp(65.0), &Thresholds::default()).is_empty());
}

#[test]
fn test_mixed_report_orders_alerts_by_subsystem() {
    let mut report = SystemReport::default();
    report.cpu.temperature_celsius = Some(88.0);
    report.memory.usage_percent = 86.0;
    report.disks.push(DiskInfo {
        mount_point: "/".to_string(),
        usage_percent: 90.0,
        ..Default::default()
    });

    let alerts = evaluate_alerts(&report, &Thresholds::default());
    assert_eq!(alerts.len(), 3);
    assert_eq!(alerts[0].component, "CPU");
    assert_eq!(alerts[1].component, "Memory");
    assert_eq!(alerts[2].component, "Disk /");
}

#[test]
fn test_status_label_tracks_severity() {
    let thresholds = Thresholds::default();

    let report = build_report(SystemReport::default(), &thresholds);
    assert!(report.is_healthy());
    assert_eq!(report.status_label(), "Healthy");

    let report = build_report(report_with_cpu_temp(76.0), &thresholds);
    assert_eq!(report.warning_count(), 1);
    assert_eq!(report.critical_count(), 0);
    assert_eq!(report.status_label(), "Warnings found");

    let report = build_report(report_with_cpu_temp(86.0), &thresholds);
    assert_eq!(report.critical_count(), 1);
    assert_eq!(report.status_label(), "Critical issues found");
}

#[test]
fn test_diagnostic_report_serializes_to_json() {
    let report = build_report(report_with_cpu_temp(86.0), &Thresholds::default());

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"alerts\""));
    assert!(json.contains("\"recommendations\""));
    assert!(json.contains("\"Critical\""));
}
