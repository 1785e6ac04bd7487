use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::core::probe::GpuVendor;

/// One sampling tick: usage percentages plus temperatures where a
/// sensor answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleMetrics {
    pub timestamp: DateTime<Local>,
    pub cpu_usage: f32,
    pub memory_usage: f32,
    pub gpu_usage: Option<f32>,
    pub cpu_temp: Option<f32>,
    pub gpu_temp: Option<f32>,
}

/// One reading from a vendor GPU provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuSample {
    pub vendor: GpuVendor,
    pub name: String,
    pub utilization_percent: u32,
    pub memory_used_bytes: u64,
    pub memory_total_bytes: u64,
    pub memory_percent: f32,
    pub temperature_celsius: Option<u32>,
    pub fan_speed_percent: Option<u32>,
    pub power_draw_watts: Option<u32>,
    pub power_limit_watts: Option<u32>,
}
