use chrono::{Local, TimeZone};
use sysinfo::System;

use crate::core::probe::types::OsInfo;
use crate::error::Result;

pub fn collect() -> Result<OsInfo> {
    let boot_time = Local.timestamp_opt(System::boot_time() as i64, 0).single();

    Ok(OsInfo {
        name: System::name().unwrap_or_else(|| "Unknown".to_string()),
        version: System::os_version().unwrap_or_else(|| "Unknown".to_string()),
        kernel_version: System::kernel_version(),
        architecture: std::env::consts::ARCH.to_string(),
        hostname: System::host_name(),
        boot_time,
        uptime_secs: System::uptime(),
    })
}

pub fn get_fallback() -> OsInfo {
    OsInfo {
        name: std::env::consts::OS.to_string(),
        version: "Unknown".to_string(),
        kernel_version: None,
        architecture: std::env::consts::ARCH.to_string(),
        hostname: None,
        boot_time: None,
        uptime_secs: 0,
    }
}
