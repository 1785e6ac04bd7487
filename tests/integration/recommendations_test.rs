use pcdx::core::probe::{DiskInfo, GpuInfo, SystemReport};
use pcdx::core::recommend::RecommendationPriority;
use pcdx::{build_recommendations, Thresholds};

#[test]
fn test_healthy_system_still_gets_the_static_pair() {
    let report = SystemReport::default();
    let recs = build_recommendations(&report, &Thresholds::default());

    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].category, "Maintenance");
    assert_eq!(recs[0].problem, "Preventive maintenance");
    assert_eq!(recs[0].priority, RecommendationPriority::Low);
    assert_eq!(recs[1].category, "Security");
    assert_eq!(recs[1].problem, "System security");
    assert_eq!(recs[1].priority, RecommendationPriority::Medium);
}

#[test]
fn test_static_entries_close_the_list() {
    let mut report = SystemReport::default();
    report.cpu.temperature_celsius = Some(88.0);
    report.memory.usage_percent = 92.0;

    let recs = build_recommendations(&report, &Thresholds::default());
    assert!(recs.len() > 2);

    // Metric-driven entries come first, the static pair always last.
    let n = recs.len();
    assert_eq!(recs[n - 2].problem, "Preventive maintenance");
    assert_eq!(recs[n - 1].problem, "System security");
}

#[test]
fn test_priority_follows_the_tier_crossed() {
    let thresholds = Thresholds::default();
    let mut report = SystemReport::default();

    report.memory.usage_percent = 91.0;
    let recs = build_recommendations(&report, &thresholds);
    let memory = recs.iter().find(|r| r.component == "Memory").unwrap();
    assert_eq!(memory.priority, RecommendationPriority::Critical);
    assert!(memory.action.contains("add more RAM"));

    report.memory.usage_percent = 81.0;
    let recs = build_recommendations(&report, &thresholds);
    let memory = recs.iter().find(|r| r.component == "Memory").unwrap();
    assert_eq!(memory.priority, RecommendationPriority::High);
}

#[test]
fn test_swap_recommendation_is_medium() {
    let mut report = SystemReport::default();
    report.memory.swap_percent = 60.0;

    let recs = build_recommendations(&report, &Thresholds::default());
    let swap = recs.iter().find(|r| r.component == "Swap").unwrap();
    assert_eq!(swap.priority, RecommendationPriority::Medium);
    assert_eq!(swap.category, "Memory");
}

#[test]
fn test_gpu_recommendations() {
    let mut report = SystemReport::default();
    report.gpus.push(GpuInfo {
        name: "GeForce RTX 3060".to_string(),
        temperature_celsius: Some(91),
        memory_percent: Some(95.0),
        ..Default::default()
    });

    let recs = build_recommendations(&report, &Thresholds::default());
    let gpu_recs: Vec<_> = recs.iter().filter(|r| r.component == "GPU").collect();
    assert_eq!(gpu_recs.len(), 2);

    assert_eq!(gpu_recs[0].category, "Cooling");
    assert_eq!(gpu_recs[0].priority, RecommendationPriority::Critical);
    assert_eq!(gpu_recs[1].category, "Memory");
    assert_eq!(gpu_recs[1].priority, RecommendationPriority::High);
}

#[test]
fn test_disk_gets_space_and_cooling_entries() {
    let mut report = SystemReport::default();
    report.disks.push(DiskInfo {
        mount_point: "/".to_string(),
        usage_percent: 96.0,
        temperature_celsius: Some(55.0),
        ..Default::default()
    });

    let recs = build_recommendations(&report, &Thresholds::default());
    let disk_recs: Vec<_> = recs.iter().filter(|r| r.component == "Disk /").collect();
    assert_eq!(disk_recs.len(), 2);

    assert_eq!(disk_recs[0].category, "Storage");
    assert_eq!(disk_recs[0].priority, RecommendationPriority::Critical);
    assert_eq!(disk_recs[1].category, "Cooling");
    assert_eq!(disk_recs[1].priority, RecommendationPriority::High);
}

#[test]
fn test_reading_at_the_limit_yields_no_entry() {
    let mut report = SystemReport::default();
    report.memory.usage_percent = 80.0;

    let recs = build_recommendations(&report, &Thresholds::default());
    assert!(recs.iter().all(|r| r.component != "Memory"));
}
