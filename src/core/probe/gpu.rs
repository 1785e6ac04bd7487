use log::debug;

use crate::core::monitor::GpuSample;
use crate::core::probe::types::{GpuInfo, GpuVendor};
use crate::error::Result;
use crate::platform::gpu::get_gpu_provider;

/// Enumerate graphics devices.
///
/// NVML enumerates every NVIDIA card with full details; other vendors
/// go through the single-device provider used by the sampling loop.
/// Returns `GpuNotAvailable` when no device responds at all.
pub fn collect() -> Result<Vec<GpuInfo>> {
    #[cfg(feature = "nvml")]
    {
        match collect_nvml() {
            Ok(gpus) if !gpus.is_empty() => return Ok(gpus),
            Ok(_) => {}
            Err(e) => debug!("NVML enumeration failed: {}", e),
        }
    }

    let mut provider = get_gpu_provider()?;
    let sample = provider.collect_metrics()?;
    Ok(vec![from_sample(sample)])
}

#[cfg(feature = "nvml")]
fn collect_nvml() -> Result<Vec<GpuInfo>> {
    use nvml_wrapper::enum_wrappers::device::TemperatureSensor;

    use crate::error::PcdxError;
    use crate::platform::gpu::nvml;

    let nvml = nvml().ok_or_else(|| PcdxError::gpu_not_available("NVML init failed"))?;
    let count = nvml
        .device_count()
        .map_err(|e| PcdxError::gpu_not_available(format!("NVML device count: {}", e)))?;

    let driver_version = nvml.sys_driver_version().ok();

    let mut gpus = Vec::with_capacity(count as usize);
    for index in 0..count {
        let device = match nvml.device_by_index(index) {
            Ok(device) => device,
            Err(e) => {
                debug!("Skipping GPU {}: {}", index, e);
                continue;
            }
        };

        let memory = device.memory_info().ok();
        let memory_percent = memory.as_ref().and_then(|m| {
            if m.total > 0 {
                Some((m.used as f32 / m.total as f32) * 100.0)
            } else {
                None
            }
        });

        gpus.push(GpuInfo {
            vendor: GpuVendor::Nvidia,
            name: device
                .name()
                .unwrap_or_else(|_| "Unknown NVIDIA GPU".to_string()),
            uuid: device.uuid().ok(),
            driver_version: driver_version.clone(),
            memory_total_bytes: memory.as_ref().map(|m| m.total),
            memory_used_bytes: memory.as_ref().map(|m| m.used),
            memory_free_bytes: memory.as_ref().map(|m| m.free),
            memory_percent,
            utilization_percent: device.utilization_rates().map(|u| u.gpu).ok(),
            temperature_celsius: device.temperature(TemperatureSensor::Gpu).ok(),
            fan_speed_percent: device.fan_speed(0).ok(),
            power_draw_watts: device.power_usage().map(|p| p / 1000).ok(),
            power_limit_watts: device.enforced_power_limit().map(|p| p / 1000).ok(),
        });
    }

    Ok(gpus)
}

fn from_sample(sample: GpuSample) -> GpuInfo {
    GpuInfo {
        vendor: sample.vendor,
        name: sample.name,
        uuid: None,
        driver_version: None,
        memory_total_bytes: Some(sample.memory_total_bytes),
        memory_used_bytes: Some(sample.memory_used_bytes),
        memory_free_bytes: Some(
            sample
                .memory_total_bytes
                .saturating_sub(sample.memory_used_bytes),
        ),
        memory_percent: Some(sample.memory_percent),
        utilization_percent: Some(sample.utilization_percent),
        temperature_celsius: sample.temperature_celsius,
        fan_speed_percent: sample.fan_speed_percent,
        power_draw_watts: sample.power_draw_watts,
        power_limit_watts: sample.power_limit_watts,
    }
}
