//! Physical memory module enumeration.
//!
//! Windows exposes per-DIMM details through `Win32_PhysicalMemory`;
//! other platforms would need root-only SMBIOS access, so they report
//! no modules and callers fall back to the aggregate counters.

use crate::core::probe::MemoryModule;
use crate::error::Result;

#[cfg(windows)]
use crate::core::probe::DdrType;

#[cfg(windows)]
fn ddr_from_smbios(value: Option<u16>) -> DdrType {
    match value {
        Some(18) => DdrType::Ddr,
        Some(19) => DdrType::Ddr2,
        Some(24) => DdrType::Ddr3,
        Some(26) => DdrType::Ddr4,
        Some(34) => DdrType::Ddr5,
        _ => DdrType::Unknown,
    }
}

#[cfg(windows)]
pub fn read_memory_modules() -> Result<Vec<MemoryModule>> {
    use serde::Deserialize;

    use super::powershell::run_powershell_json;

    #[derive(Debug, Deserialize)]
    struct PhysicalMemoryPs {
        #[serde(rename = "Capacity")]
        capacity: u64,
        #[serde(rename = "Speed")]
        speed: Option<u32>,
        #[serde(rename = "Manufacturer")]
        manufacturer: Option<String>,
        #[serde(rename = "PartNumber")]
        part_number: Option<String>,
        #[serde(rename = "DeviceLocator")]
        device_locator: Option<String>,
        #[serde(rename = "SMBIOSMemoryType")]
        smbios_type: Option<u16>,
    }

    let mem_data: serde_json::Value = run_powershell_json(
        "Get-CimInstance Win32_PhysicalMemory \
         | Select Capacity, Speed, Manufacturer, PartNumber, DeviceLocator, SMBIOSMemoryType \
         | ConvertTo-Json",
    )?;

    // A single-DIMM machine serializes as one object, not an array.
    let dimms: Vec<PhysicalMemoryPs> = match mem_data {
        serde_json::Value::Array(arr) => serde_json::from_value(arr.into())?,
        value => vec![serde_json::from_value(value)?],
    };

    let modules = dimms
        .into_iter()
        .map(|dimm| MemoryModule {
            slot: dimm.device_locator,
            capacity_bytes: dimm.capacity,
            speed_mhz: dimm.speed,
            ddr_type: Some(ddr_from_smbios(dimm.smbios_type)),
            manufacturer: dimm.manufacturer.map(|s| s.trim().to_string()),
            part_number: dimm.part_number.map(|s| s.trim().to_string()),
        })
        .collect();

    Ok(modules)
}

#[cfg(not(windows))]
pub fn read_memory_modules() -> Result<Vec<MemoryModule>> {
    Ok(Vec::new())
}
