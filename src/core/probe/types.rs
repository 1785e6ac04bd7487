use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One point-in-time reading of every subsystem, produced by a single
/// facade pass. Subsystems that could not be read carry their fallback
/// values (`Unknown` strings, zeroed counters) or are absent (`None`,
/// empty `Vec`); individual fields a provider could not answer are `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemReport {
    pub collected_at: DateTime<Local>,
    pub os: OsInfo,
    pub cpu: CpuInfo,
    pub memory: MemoryInfo,
    pub gpus: Vec<GpuInfo>,
    pub board: Option<BoardInfo>,
    pub disks: Vec<DiskInfo>,
    pub interfaces: Vec<InterfaceInfo>,
}

impl Default for SystemReport {
    fn default() -> Self {
        Self {
            collected_at: Local::now(),
            os: OsInfo::default(),
            cpu: CpuInfo::default(),
            memory: MemoryInfo::default(),
            gpus: Vec::new(),
            board: None,
            disks: Vec::new(),
            interfaces: Vec::new(),
        }
    }
}

/// Operating system and host identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OsInfo {
    pub name: String,
    pub version: String,
    pub kernel_version: Option<String>,
    pub architecture: String,
    pub hostname: Option<String>,
    pub boot_time: Option<DateTime<Local>>,
    pub uptime_secs: u64,
}

/// Processor identity, topology, and current load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CpuInfo {
    pub model: String,
    pub vendor: String,
    pub architecture: String,
    pub physical_cores: usize,
    pub logical_cores: usize,
    pub frequency_mhz: u64,
    pub usage_percent: Option<f32>,
    pub per_core_usage: Vec<f32>,
    pub l1_cache_kb: Option<u32>,
    pub l2_cache_kb: Option<u32>,
    pub l3_cache_kb: Option<u32>,
    pub temperature_celsius: Option<f32>,
}

/// RAM and swap state plus the physical modules where the platform
/// exposes them (empty elsewhere).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryInfo {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub used_bytes: u64,
    pub usage_percent: f32,
    pub swap_total_bytes: u64,
    pub swap_used_bytes: u64,
    pub swap_percent: f32,
    pub modules: Vec<MemoryModule>,
}

/// One physical RAM module as reported by the firmware.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryModule {
    pub slot: Option<String>,
    pub capacity_bytes: u64,
    pub speed_mhz: Option<u32>,
    pub ddr_type: Option<DdrType>,
    pub manufacturer: Option<String>,
    pub part_number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DdrType {
    Ddr,
    Ddr2,
    Ddr3,
    Ddr4,
    Ddr5,
    Unknown,
}

impl fmt::Display for DdrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DdrType::Ddr => write!(f, "DDR"),
            DdrType::Ddr2 => write!(f, "DDR2"),
            DdrType::Ddr3 => write!(f, "DDR3"),
            DdrType::Ddr4 => write!(f, "DDR4"),
            DdrType::Ddr5 => write!(f, "DDR5"),
            DdrType::Unknown => write!(f, "Unknown"),
        }
    }
}

/// One graphics device. Everything past the name is optional because
/// vendor libraries expose different subsets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GpuInfo {
    pub vendor: GpuVendor,
    pub name: String,
    pub uuid: Option<String>,
    pub driver_version: Option<String>,
    pub memory_total_bytes: Option<u64>,
    pub memory_used_bytes: Option<u64>,
    pub memory_free_bytes: Option<u64>,
    pub memory_percent: Option<f32>,
    pub utilization_percent: Option<u32>,
    pub temperature_celsius: Option<u32>,
    pub fan_speed_percent: Option<u32>,
    pub power_draw_watts: Option<u32>,
    pub power_limit_watts: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GpuVendor {
    Nvidia,
    Amd,
    Intel,
    #[default]
    Unknown,
}

impl fmt::Display for GpuVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuVendor::Nvidia => write!(f, "NVIDIA"),
            GpuVendor::Amd => write!(f, "AMD"),
            GpuVendor::Intel => write!(f, "Intel"),
            GpuVendor::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Motherboard and firmware identity read from DMI/SMBIOS.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardInfo {
    pub manufacturer: Option<String>,
    pub product: Option<String>,
    pub version: Option<String>,
    pub serial_number: Option<String>,
    pub bios_vendor: Option<String>,
    pub bios_version: Option<String>,
    pub bios_date: Option<String>,
}

impl BoardInfo {
    /// True when not a single DMI field could be read.
    pub fn is_empty(&self) -> bool {
        self.manufacturer.is_none()
            && self.product.is_none()
            && self.version.is_none()
            && self.serial_number.is_none()
            && self.bios_vendor.is_none()
            && self.bios_version.is_none()
            && self.bios_date.is_none()
    }
}

/// One mounted disk with capacity, cumulative I/O, and identity where
/// the platform exposes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiskInfo {
    pub name: String,
    pub mount_point: String,
    pub file_system: String,
    pub kind: DiskKind,
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub used_bytes: u64,
    pub usage_percent: f32,
    pub read_bytes: u64,
    pub written_bytes: u64,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub temperature_celsius: Option<f32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiskKind {
    Hdd,
    Ssd,
    Nvme,
    #[default]
    Unknown,
}

impl fmt::Display for DiskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiskKind::Hdd => write!(f, "HDD"),
            DiskKind::Ssd => write!(f, "SSD"),
            DiskKind::Nvme => write!(f, "NVMe"),
            DiskKind::Unknown => write!(f, "Unknown"),
        }
    }
}

/// One network interface with addressing and lifetime counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterfaceInfo {
    pub name: String,
    pub mac_address: Option<String>,
    pub ip_addresses: Vec<String>,
    pub mtu: Option<u64>,
    pub total_received_bytes: u64,
    pub total_transmitted_bytes: u64,
    pub total_packets_received: u64,
    pub total_packets_transmitted: u64,
    pub total_errors_received: u64,
    pub total_errors_transmitted: u64,
}
