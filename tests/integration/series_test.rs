use chrono::Local;
use pcdx::core::monitor::{SampleMetrics, SampleSeries};

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

#[test]
fn test_entries_keep_arrival_order() {
    let mut series = SampleSeries::new();
    series.push(sample(1.0, 10.0));
    series.push(sample(2.0, 20.0));
    series.push(sample(3.0, 30.0));

    let cpus: Vec<f32> = series.entries().iter().map(|s| s.cpu_usage).collect();
    assert_eq!(cpus, vec![1.0, 2.0, 3.0]);
    assert_eq!(series.len(), 3);
}

#[test]
fn test_presence_flags_track_optional_readings() {
    let mut series = SampleSeries::new();
    series.push(sample(5.0, 10.0));
    assert!(!series.has_gpu_usage());
    assert!(!series.has_cpu_temp());
    assert!(!series.has_gpu_temp());

    let mut with_temps = sample(5.0, 10.0);
    with_temps.cpu_temp = Some(48.0);
    with_temps.gpu_temp = Some(55.0);
    series.push(with_temps);

    // One tick with a reading is enough to flip the flag.
    assert!(series.has_cpu_temp());
    assert!(series.has_gpu_temp());
    assert!(!series.has_gpu_usage());
}

#[test]
fn test_single_sample_summary_collapses_mean_and_max() {
    let mut series = SampleSeries::new();
    series.push(sample(37.5, 62.5));

    let summary = series.summarize().unwrap();
    assert_eq!(summary.ticks, 1);
    assert_eq!(summary.cpu_mean, summary.cpu_max);
    assert_eq!(summary.memory_mean, summary.memory_max);
    assert!((summary.cpu_max - 37.5).abs() < f32::EPSILON);
}

#[test]
fn test_clear_resets_the_buffer() {
    let mut series = SampleSeries::new();
    series.push(sample(10.0, 20.0));
    assert!(!series.is_empty());

    series.clear();
    assert!(series.is_empty());
    assert!(series.summarize().is_none());
    assert!(!series.has_cpu_temp());
}

#[test]
fn test_summary_ticks_match_series_length() {
    let mut series = SampleSeries::new();
    for i in 0..5 {
        series.push(sample(i as f32, 50.0));
    }

    let summary = series.summarize().unwrap();
    assert_eq!(summary.ticks, series.len());
    assert!((summary.cpu_max - 4.0).abs() < f32::EPSILON);
    assert!((summary.cpu_mean - 2.0).abs() < f32::EPSILON);
}
