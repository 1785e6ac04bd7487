use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use crate::core::probe::types::MemoryInfo;
use crate::error::Result;
use crate::platform;

pub fn collect() -> Result<MemoryInfo> {
    let refresh = RefreshKind::nothing().with_memory(MemoryRefreshKind::everything());
    let mut sys = System::new_with_specifics(refresh);
    sys.refresh_memory();

    let total = sys.total_memory();
    let used = sys.used_memory();
    let swap_total = sys.total_swap();
    let swap_used = sys.used_swap();

    let modules = platform::read_memory_modules().unwrap_or_else(|e| {
        log::debug!("Memory module details unavailable: {}", e);
        Vec::new()
    });

    Ok(MemoryInfo {
        total_bytes: total,
        available_bytes: sys.available_memory(),
        used_bytes: used,
        usage_percent: if total > 0 {
            (used as f32 / total as f32) * 100.0
        } else {
            0.0
        },
        swap_total_bytes: swap_total,
        swap_used_bytes: swap_used,
        swap_percent: if swap_total > 0 {
            (swap_used as f32 / swap_total as f32) * 100.0
        } else {
            0.0
        },
        modules,
    })
}

pub fn get_fallback() -> MemoryInfo {
    MemoryInfo::default()
}
