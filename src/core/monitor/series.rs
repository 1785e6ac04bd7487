use serde::{Deserialize, Serialize};

use super::metrics::SampleMetrics;

/// In-memory buffer of one session's samples, in arrival order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleSeries {
    entries: Vec<SampleMetrics>,
}

/// Mean and peak statistics over a series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub ticks: usize,
    pub cpu_mean: f32,
    pub cpu_max: f32,
    pub memory_mean: f32,
    pub memory_max: f32,
    pub gpu_mean: Option<f32>,
    pub gpu_max: Option<f32>,
}

impl SampleSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: SampleMetrics) {
        self.entries.push(sample);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SampleMetrics] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// True when at least one tick recorded a GPU usage reading.
    pub fn has_gpu_usage(&self) -> bool {
        self.entries.iter().any(|s| s.gpu_usage.is_some())
    }

    pub fn has_cpu_temp(&self) -> bool {
        self.entries.iter().any(|s| s.cpu_temp.is_some())
    }

    pub fn has_gpu_temp(&self) -> bool {
        self.entries.iter().any(|s| s.gpu_temp.is_some())
    }

    /// Mean and max per metric. GPU statistics cover only the ticks
    /// that recorded a GPU reading and are absent when none did.
    /// Returns `None` for an empty series.
    pub fn summarize(&self) -> Option<SessionSummary> {
        if self.entries.is_empty() {
            return None;
        }

        let count = self.entries.len() as f32;

        let cpu_mean = self.entries.iter().map(|s| s.cpu_usage).sum::<f32>() / count;
        let cpu_max = self
            .entries
            .iter()
            .map(|s| s.cpu_usage)
            .fold(0.0f32, f32::max);

        let memory_mean = self.entries.iter().map(|s| s.memory_usage).sum::<f32>() / count;
        let memory_max = self
            .entries
            .iter()
            .map(|s| s.memory_usage)
            .fold(0.0f32, f32::max);

        let gpu_values: Vec<f32> = self.entries.iter().filter_map(|s| s.gpu_usage).collect();
        let (gpu_mean, gpu_max) = if gpu_values.is_empty() {
            (None, None)
        } else {
            let mean = gpu_values.iter().sum::<f32>() / gpu_values.len() as f32;
            let max = gpu_values.iter().copied().fold(0.0f32, f32::max);
            (Some(mean), Some(max))
        };

        Some(SessionSummary {
            ticks: self.entries.len(),
            cpu_mean,
            cpu_max,
            memory_mean,
            memory_max,
            gpu_mean,
            gpu_max,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    use super::*;

    fn sample(cpu: f32, memory: f32, gpu: Option<f32>) -> SampleMetrics {
        SampleMetrics {
            timestamp: Local::now(),
            cpu_usage: cpu,
            memory_usage: memory,
            gpu_usage: gpu,
            cpu_temp: None,
            gpu_temp: None,
        }
    }

    #[test]
    fn test_empty_series_has_no_summary() {
        let series = SampleSeries::new();
        assert!(series.summarize().is_none());
    }

    #[test]
    fn test_summary_mean_and_max() {
        let mut series = SampleSeries::new();
        series.push(sample(10.0, 40.0, None));
        series.push(sample(30.0, 60.0, None));

        let summary = series.summarize().unwrap();
        assert_eq!(summary.ticks, 2);
        assert!((summary.cpu_mean - 20.0).abs() < f32::EPSILON);
        assert!((summary.cpu_max - 30.0).abs() < f32::EPSILON);
        assert!((summary.memory_mean - 50.0).abs() < f32::EPSILON);
        assert!((summary.memory_max - 60.0).abs() < f32::EPSILON);
        assert!(summary.gpu_mean.is_none());
        assert!(summary.gpu_max.is_none());
    }

    #[test]
    fn test_summary_gpu_covers_only_recorded_ticks() {
        let mut series = SampleSeries::new();
        series.push(sample(5.0, 10.0, Some(80.0)));
        series.push(sample(5.0, 10.0, None));
        series.push(sample(5.0, 10.0, Some(40.0)));

        let summary = series.summarize().unwrap();
        assert!((summary.gpu_mean.unwrap() - 60.0).abs() < f32::EPSILON);
        assert!((summary.gpu_max.unwrap() - 80.0).abs() < f32::EPSILON);
    }
}
