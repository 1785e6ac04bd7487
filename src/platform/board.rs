//! Motherboard and firmware identity.
//!
//! Linux reads the DMI tables the kernel exports under
//! `/sys/class/dmi/id`; Windows queries `Win32_BaseBoard` and
//! `Win32_BIOS` through PowerShell. Other platforms report the
//! provider as unavailable.

use crate::core::probe::BoardInfo;
use crate::error::Result;

#[cfg(target_os = "linux")]
pub fn read_board_info() -> Result<BoardInfo> {
    Ok(BoardInfo {
        manufacturer: dmi_value("board_vendor"),
        product: dmi_value("board_name"),
        version: dmi_value("board_version"),
        serial_number: dmi_value("board_serial"),
        bios_vendor: dmi_value("bios_vendor"),
        bios_version: dmi_value("bios_version"),
        bios_date: dmi_value("bios_date"),
    })
}

/// Read a single DMI attribute, dropping firmware placeholder strings.
#[cfg(target_os = "linux")]
fn dmi_value(name: &str) -> Option<String> {
    use std::path::Path;

    let path = Path::new("/sys/class/dmi/id").join(name);
    let raw = std::fs::read_to_string(path).ok()?;
    let value = raw.trim();
    if value.is_empty()
        || value.eq_ignore_ascii_case("default string")
        || value.eq_ignore_ascii_case("to be filled by o.e.m.")
    {
        return None;
    }
    Some(value.to_string())
}

#[cfg(windows)]
pub fn read_board_info() -> Result<BoardInfo> {
    use serde::Deserialize;

    use super::powershell::run_powershell_json;

    #[derive(Debug, Deserialize)]
    struct BaseBoardPs {
        #[serde(rename = "Manufacturer")]
        manufacturer: Option<String>,
        #[serde(rename = "Product")]
        product: Option<String>,
        #[serde(rename = "Version")]
        version: Option<String>,
        #[serde(rename = "SerialNumber")]
        serial_number: Option<String>,
        #[serde(rename = "BiosVendor")]
        bios_vendor: Option<String>,
        #[serde(rename = "BiosVersion")]
        bios_version: Option<String>,
        #[serde(rename = "BiosDate")]
        bios_date: Option<String>,
    }

    fn clean(value: Option<String>) -> Option<String> {
        value
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    let board: BaseBoardPs = run_powershell_json(
        "$board = Get-CimInstance -ClassName Win32_BaseBoard -ErrorAction SilentlyContinue | Select-Object -First 1; \
         $bios = Get-CimInstance -ClassName Win32_BIOS -ErrorAction SilentlyContinue | Select-Object -First 1; \
         @{ \
             Manufacturer = $board.Manufacturer; \
             Product = $board.Product; \
             Version = $board.Version; \
             SerialNumber = $board.SerialNumber; \
             BiosVendor = $bios.Manufacturer; \
             BiosVersion = $bios.SMBIOSBIOSVersion; \
             BiosDate = [string]$bios.ReleaseDate \
         } | ConvertTo-Json",
    )?;

    Ok(BoardInfo {
        manufacturer: clean(board.manufacturer),
        product: clean(board.product),
        version: clean(board.version),
        serial_number: clean(board.serial_number),
        bios_vendor: clean(board.bios_vendor),
        bios_version: clean(board.bios_version),
        bios_date: clean(board.bios_date),
    })
}

#[cfg(not(any(target_os = "linux", windows)))]
pub fn read_board_info() -> Result<BoardInfo> {
    Err(crate::error::PcdxError::provider_unavailable(
        "motherboard info is not supported on this platform",
    ))
}
