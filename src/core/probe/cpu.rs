use sysinfo::{Components, CpuRefreshKind, RefreshKind, System};

use crate::core::probe::types::CpuInfo;
use crate::error::Result;

/// Sensor labels that identify a CPU temperature reading.
const CPU_SENSOR_MARKERS: &[&str] = &["cpu", "package", "tctl", "tdie", "coretemp", "k10temp"];

/// Labels that match a marker but belong to another device.
const CPU_SENSOR_EXCLUDES: &[&str] = &["gpu", "nvidia", "amdgpu", "radeon", "acpi"];

pub fn collect() -> Result<CpuInfo> {
    let refresh = RefreshKind::nothing().with_cpu(CpuRefreshKind::everything());
    let mut sys = System::new_with_specifics(refresh);

    // Need to refresh twice to get accurate frequency and usage
    sys.refresh_cpu_all();
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    sys.refresh_cpu_all();

    let cpus = sys.cpus();
    if cpus.is_empty() {
        return Ok(get_fallback());
    }

    let first_cpu = &cpus[0];
    let physical_cores = System::physical_core_count().unwrap_or(0);

    let per_core_usage: Vec<f32> = cpus.iter().map(|cpu| cpu.cpu_usage()).collect();
    let total_usage: f32 = per_core_usage.iter().sum();
    let usage_percent = Some(total_usage / cpus.len() as f32);

    let (l1_cache_kb, l2_cache_kb, l3_cache_kb) = cache_sizes();

    let components = Components::new_with_refreshed_list();
    let temperature_celsius = cpu_temperature(&components);

    Ok(CpuInfo {
        model: first_cpu.brand().to_string(),
        vendor: first_cpu.vendor_id().to_string(),
        architecture: std::env::consts::ARCH.to_string(),
        physical_cores,
        logical_cores: cpus.len(),
        frequency_mhz: first_cpu.frequency(),
        usage_percent,
        per_core_usage,
        l1_cache_kb,
        l2_cache_kb,
        l3_cache_kb,
        temperature_celsius,
    })
}

pub fn get_fallback() -> CpuInfo {
    CpuInfo {
        model: "Unknown".to_string(),
        vendor: "Unknown".to_string(),
        architecture: std::env::consts::ARCH.to_string(),
        ..CpuInfo::default()
    }
}

/// Pick the CPU package temperature out of the sensor list.
///
/// Sensor naming varies per vendor and driver, so this matches on a
/// marker list and takes the hottest reading that survives the
/// exclusion filter.
pub(crate) fn cpu_temperature(components: &Components) -> Option<f32> {
    let mut max_temp: Option<f32> = None;

    for comp in components.iter() {
        let label = comp.label().to_lowercase();
        if !CPU_SENSOR_MARKERS.iter().any(|m| label.contains(m)) {
            continue;
        }
        if CPU_SENSOR_EXCLUDES.iter().any(|m| label.contains(m)) {
            continue;
        }

        if let Some(temp) = comp.temperature() {
            if temp > 0.0 {
                max_temp = Some(max_temp.map_or(temp, |current: f32| current.max(temp)));
            }
        }
    }

    max_temp
}

/// Per-level cache sizes in KiB from CPUID (data and unified caches).
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn cache_sizes() -> (Option<u32>, Option<u32>, Option<u32>) {
    use raw_cpuid::{CacheType, CpuId};

    let cpuid = CpuId::new();
    let Some(caches) = cpuid.get_cache_parameters() else {
        return (None, None, None);
    };

    let mut l1 = None;
    let mut l2 = None;
    let mut l3 = None;

    for cache in caches {
        if !matches!(cache.cache_type(), CacheType::Data | CacheType::Unified) {
            continue;
        }

        let bytes = cache.associativity()
            * cache.physical_line_partitions()
            * cache.coherency_line_size()
            * cache.sets();
        let kb = (bytes / 1024) as u32;

        match cache.level() {
            1 => l1 = Some(l1.unwrap_or(0) + kb),
            2 => l2 = Some(l2.unwrap_or(0) + kb),
            3 => l3 = Some(l3.unwrap_or(0) + kb),
            _ => {}
        }
    }

    (l1, l2, l3)
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn cache_sizes() -> (Option<u32>, Option<u32>, Option<u32>) {
    (None, None, None)
}
