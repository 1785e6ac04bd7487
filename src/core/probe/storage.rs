use sysinfo::{Components, Disks};

use crate::core::probe::types::{DiskInfo, DiskKind};
use crate::error::Result;

pub fn collect() -> Result<Vec<DiskInfo>> {
    let disks = Disks::new_with_refreshed_list();
    let components = Components::new_with_refreshed_list();

    let mut entries: Vec<DiskInfo> = disks
        .iter()
        .map(|disk| {
            let name = disk.name().to_string_lossy().to_string();
            let total = disk.total_space();
            let available = disk.available_space();
            let used = total.saturating_sub(available);
            let usage = disk.usage();

            let device = base_device_name(&name);
            let kind = disk_kind(disk.kind(), &device);

            let (model, serial_number) = device_identity(&device);

            DiskInfo {
                mount_point: disk.mount_point().to_string_lossy().to_string(),
                file_system: disk.file_system().to_string_lossy().to_string(),
                kind,
                total_bytes: total,
                available_bytes: available,
                used_bytes: used,
                usage_percent: if total > 0 {
                    (used as f32 / total as f32) * 100.0
                } else {
                    0.0
                },
                read_bytes: usage.total_read_bytes,
                written_bytes: usage.total_written_bytes,
                model,
                serial_number,
                temperature_celsius: disk_temperature(&components, &device, kind),
                name,
            }
        })
        .collect();

    entries.sort_by(|a, b| a.mount_point.cmp(&b.mount_point));
    Ok(entries)
}

fn disk_kind(kind: sysinfo::DiskKind, device: &str) -> DiskKind {
    if device.starts_with("nvme") {
        return DiskKind::Nvme;
    }
    match kind {
        sysinfo::DiskKind::HDD => DiskKind::Hdd,
        sysinfo::DiskKind::SSD => DiskKind::Ssd,
        sysinfo::DiskKind::Unknown(_) => DiskKind::Unknown,
    }
}

/// Reduce a partition path to its base block device, e.g.
/// `/dev/nvme0n1p2` to `nvme0n1` and `/dev/sda1` to `sda`.
fn base_device_name(raw: &str) -> String {
    let name = raw.strip_prefix("/dev/").unwrap_or(raw);

    if name.starts_with("nvme") || name.starts_with("mmcblk") {
        if let Some(pos) = name.rfind('p') {
            if pos + 1 < name.len() && name[pos + 1..].chars().all(|c| c.is_ascii_digit()) {
                return name[..pos].to_string();
            }
        }
        return name.to_string();
    }

    name.trim_end_matches(|c: char| c.is_ascii_digit())
        .to_string()
}

/// Model and serial from the kernel's block device attributes.
#[cfg(target_os = "linux")]
fn device_identity(device: &str) -> (Option<String>, Option<String>) {
    fn read_attr(device: &str, attr: &str) -> Option<String> {
        let path = format!("/sys/block/{}/device/{}", device, attr);
        let raw = std::fs::read_to_string(path).ok()?;
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }
        Some(value.to_string())
    }

    if device.is_empty() {
        return (None, None);
    }

    (read_attr(device, "model"), read_attr(device, "serial"))
}

#[cfg(not(target_os = "linux"))]
fn device_identity(_device: &str) -> (Option<String>, Option<String>) {
    (None, None)
}

/// Drive temperature from the sensor list, matched by device name.
/// NVMe drives also expose "Composite" sensors without a device name.
fn disk_temperature(components: &Components, device: &str, kind: DiskKind) -> Option<f32> {
    let device = device.to_lowercase();
    let mut best: Option<f32> = None;

    for comp in components.iter() {
        let label = comp.label().to_lowercase();

        let matches = if !device.is_empty() && label.contains(&device) {
            true
        } else {
            kind == DiskKind::Nvme && (label.contains("nvme") || label.contains("composite"))
        };
        if !matches {
            continue;
        }
        // A package sensor can match an NVMe label on some boards.
        if is_cpu_sensor_label(&label) {
            continue;
        }

        if let Some(temp) = comp.temperature() {
            if temp > 0.0 {
                best = Some(best.map_or(temp, |current: f32| current.max(temp)));
            }
        }
    }

    best
}

fn is_cpu_sensor_label(label: &str) -> bool {
    ["coretemp", "k10temp", "package", "tctl", "tdie"]
        .iter()
        .any(|m| label.contains(m))
}
