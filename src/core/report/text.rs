//! Plain-text rendering for diagnostic reports and session logs.

use std::fmt::Write;

use humansize::{format_size, DECIMAL};

use crate::core::diagnostics::DiagnosticReport;
use crate::core::monitor::{SessionSnapshot, SessionState};
use crate::core::probe::SystemReport;

const DIVIDER: &str =
    "================================================================================";
const RULE: &str = "----------------------------------------";

pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

/// Render the full diagnostic report, section by section.
pub fn render_text(report: &DiagnosticReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", DIVIDER);
    let _ = writeln!(out, "SYSTEM DIAGNOSTIC REPORT");
    let _ = writeln!(
        out,
        "Generated: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out, "Status: {}", report.status_label());
    let _ = writeln!(out, "{}", DIVIDER);

    render_system_sections(&mut out, &report.system);

    let _ = writeln!(out);
    let _ = writeln!(out, "ALERTS ({})", report.alerts.len());
    let _ = writeln!(out, "{}", RULE);
    if report.alerts.is_empty() {
        let _ = writeln!(out, "  No alerts; all readings within thresholds.");
    } else {
        for alert in &report.alerts {
            let _ = writeln!(
                out,
                "  [{}] {}: {}",
                alert.severity, alert.component, alert.message
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "RECOMMENDATIONS ({})", report.recommendations.len());
    let _ = writeln!(out, "{}", RULE);
    for rec in &report.recommendations {
        let _ = writeln!(out, "  [{}] {} / {}", rec.priority, rec.category, rec.component);
        let _ = writeln!(out, "    Problem: {}", rec.problem);
        let _ = writeln!(out, "    Action:  {}", rec.action);
    }

    out
}

fn render_system_sections(out: &mut String, system: &SystemReport) {
    let _ = writeln!(out);
    let _ = writeln!(out, "OPERATING SYSTEM");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  Name:         {} {}", system.os.name, system.os.version);
    let _ = writeln!(out, "  Kernel:       {}", opt(&system.os.kernel_version));
    let _ = writeln!(out, "  Architecture: {}", system.os.architecture);
    let _ = writeln!(out, "  Hostname:     {}", opt(&system.os.hostname));
    match system.os.boot_time {
        Some(boot) => {
            let _ = writeln!(out, "  Boot time:    {}", boot.format("%Y-%m-%d %H:%M:%S"));
        }
        None => {
            let _ = writeln!(out, "  Boot time:    N/A");
        }
    }
    let _ = writeln!(out, "  Uptime:       {}", format_uptime(system.os.uptime_secs));

    let _ = writeln!(out);
    let _ = writeln!(out, "CPU");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  Model:        {}", system.cpu.model);
    let _ = writeln!(out, "  Vendor:       {}", system.cpu.vendor);
    let _ = writeln!(
        out,
        "  Cores:        {} physical / {} logical",
        system.cpu.physical_cores, system.cpu.logical_cores
    );
    let _ = writeln!(out, "  Frequency:    {} MHz", system.cpu.frequency_mhz);
    match system.cpu.usage_percent {
        Some(usage) => {
            let _ = writeln!(out, "  Usage:        {:.1}%", usage);
        }
        None => {
            let _ = writeln!(out, "  Usage:        N/A");
        }
    }
    match system.cpu.temperature_celsius {
        Some(temp) => {
            let _ = writeln!(out, "  Temperature:  {:.1}°C", temp);
        }
        None => {
            let _ = writeln!(out, "  Temperature:  N/A");
        }
    }
    if system.cpu.l2_cache_kb.is_some() || system.cpu.l3_cache_kb.is_some() {
        let cache = |kb: Option<u32>| kb.map_or("N/A".to_string(), |kb| format!("{} KB", kb));
        let _ = writeln!(
            out,
            "  Cache:        L1 {} / L2 {} / L3 {}",
            cache(system.cpu.l1_cache_kb),
            cache(system.cpu.l2_cache_kb),
            cache(system.cpu.l3_cache_kb)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "MEMORY");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(
        out,
        "  Total:        {}",
        format_size(system.memory.total_bytes, DECIMAL)
    );
    let _ = writeln!(
        out,
        "  Used:         {} ({:.1}%)",
        format_size(system.memory.used_bytes, DECIMAL),
        system.memory.usage_percent
    );
    let _ = writeln!(
        out,
        "  Available:    {}",
        format_size(system.memory.available_bytes, DECIMAL)
    );
    let _ = writeln!(
        out,
        "  Swap:         {} / {} ({:.1}%)",
        format_size(system.memory.swap_used_bytes, DECIMAL),
        format_size(system.memory.swap_total_bytes, DECIMAL),
        system.memory.swap_percent
    );
    for module in &system.memory.modules {
        let ddr = module
            .ddr_type
            .map_or("N/A".to_string(), |ddr| ddr.to_string());
        let speed = module
            .speed_mhz
            .map_or("N/A".to_string(), |mhz| format!("{} MHz", mhz));
        let _ = writeln!(
            out,
            "  Module {}:   {} {} {} {}",
            opt(&module.slot),
            format_size(module.capacity_bytes, DECIMAL),
            ddr,
            speed,
            module.manufacturer.as_deref().unwrap_or("")
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "GPU");
    let _ = writeln!(out, "{}", RULE);
    if system.gpus.is_empty() {
        let _ = writeln!(out, "  No dedicated GPU detected.");
    }
    for gpu in &system.gpus {
        let _ = writeln!(out, "  {} ({})", gpu.name, gpu.vendor);
        if let Some(driver) = &gpu.driver_version {
            let _ = writeln!(out, "    Driver:      {}", driver);
        }
        match (gpu.memory_used_bytes, gpu.memory_total_bytes) {
            (Some(used), Some(total)) => {
                let _ = writeln!(
                    out,
                    "    VRAM:        {} / {} ({:.1}%)",
                    format_size(used, DECIMAL),
                    format_size(total, DECIMAL),
                    gpu.memory_percent.unwrap_or(0.0)
                );
            }
            _ => {
                let _ = writeln!(out, "    VRAM:        N/A");
            }
        }
        match gpu.utilization_percent {
            Some(usage) => {
                let _ = writeln!(out, "    Usage:       {}%", usage);
            }
            None => {
                let _ = writeln!(out, "    Usage:       N/A");
            }
        }
        match gpu.temperature_celsius {
            Some(temp) => {
                let _ = writeln!(out, "    Temperature: {}°C", temp);
            }
            None => {
                let _ = writeln!(out, "    Temperature: N/A");
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "STORAGE");
    let _ = writeln!(out, "{}", RULE);
    if system.disks.is_empty() {
        let _ = writeln!(out, "  No disks detected.");
    }
    for disk in &system.disks {
        let _ = writeln!(
            out,
            "  {} ({}, {}) mounted at {}",
            disk.name, disk.kind, disk.file_system, disk.mount_point
        );
        let _ = writeln!(
            out,
            "    Capacity:    {} total, {} used ({:.1}%), {} free",
            format_size(disk.total_bytes, DECIMAL),
            format_size(disk.used_bytes, DECIMAL),
            disk.usage_percent,
            format_size(disk.available_bytes, DECIMAL)
        );
        if let Some(model) = &disk.model {
            let _ = writeln!(out, "    Model:       {}", model);
        }
        if let Some(temp) = disk.temperature_celsius {
            let _ = writeln!(out, "    Temperature: {:.1}°C", temp);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "MOTHERBOARD");
    let _ = writeln!(out, "{}", RULE);
    match &system.board {
        Some(board) => {
            let _ = writeln!(out, "  Manufacturer: {}", opt(&board.manufacturer));
            let _ = writeln!(out, "  Product:      {}", opt(&board.product));
            let _ = writeln!(
                out,
                "  BIOS:         {} {} ({})",
                opt(&board.bios_vendor),
                opt(&board.bios_version),
                opt(&board.bios_date)
            );
        }
        None => {
            let _ = writeln!(out, "  N/A");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "NETWORK");
    let _ = writeln!(out, "{}", RULE);
    if system.interfaces.is_empty() {
        let _ = writeln!(out, "  No interfaces detected.");
    }
    for iface in &system.interfaces {
        let _ = writeln!(
            out,
            "  {}  MAC {}",
            iface.name,
            iface.mac_address.as_deref().unwrap_or("N/A")
        );
        if !iface.ip_addresses.is_empty() {
            let _ = writeln!(out, "    IPs:         {}", iface.ip_addresses.join(", "));
        }
        let _ = writeln!(
            out,
            "    Traffic:     {} received, {} sent",
            format_size(iface.total_received_bytes, DECIMAL),
            format_size(iface.total_transmitted_bytes, DECIMAL)
        );
        if iface.total_errors_received > 0 || iface.total_errors_transmitted > 0 {
            let _ = writeln!(
                out,
                "    Errors:      {} rx / {} tx",
                iface.total_errors_received, iface.total_errors_transmitted
            );
        }
    }
}

/// Render a monitoring session as an append-ready log document.
pub fn render_session_log(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", DIVIDER);
    let _ = writeln!(out, "MONITORING SESSION LOG");
    let _ = writeln!(
        out,
        "Started: {}",
        snapshot.started_at.format("%Y-%m-%d %H:%M:%S")
    );
    match snapshot.duration_secs {
        Some(secs) => {
            let _ = writeln!(
                out,
                "Interval: {}s    Duration: {}s",
                snapshot.interval_secs, secs
            );
        }
        None => {
            let _ = writeln!(
                out,
                "Interval: {}s    Duration: until stopped",
                snapshot.interval_secs
            );
        }
    }
    let _ = writeln!(out, "State: {:?}", snapshot.state);
    let _ = writeln!(out, "{}", DIVIDER);
    let _ = writeln!(out);

    for entry in snapshot.series.entries() {
        let mut line = format!(
            "[{}] CPU: {:.1}% | Memory: {:.1}%",
            entry.timestamp.format("%H:%M:%S"),
            entry.cpu_usage,
            entry.memory_usage
        );
        if let Some(gpu) = entry.gpu_usage {
            let _ = write!(line, " | GPU: {:.1}%", gpu);
        }
        if let Some(temp) = entry.cpu_temp {
            let _ = write!(line, " | CPU temp: {:.1}°C", temp);
        }
        if let Some(temp) = entry.gpu_temp {
            let _ = write!(line, " | GPU temp: {:.1}°C", temp);
        }
        let _ = writeln!(out, "{}", line);
    }
    if snapshot.series.is_empty() {
        let _ = writeln!(out, "No samples recorded.");
    }

    if !snapshot.events.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "EVENTS");
        let _ = writeln!(out, "{}", RULE);
        for event in &snapshot.events {
            let _ = writeln!(
                out,
                "  [{}] {}: {}",
                event.timestamp.format("%H:%M:%S"),
                event.component,
                event.message
            );
        }
    }

    if let Some(summary) = &snapshot.summary {
        let _ = writeln!(out);
        let _ = writeln!(out, "SUMMARY");
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "  Ticks:  {}", summary.ticks);
        let _ = writeln!(
            out,
            "  CPU:    mean {:.1}%, max {:.1}%",
            summary.cpu_mean, summary.cpu_max
        );
        let _ = writeln!(
            out,
            "  Memory: mean {:.1}%, max {:.1}%",
            summary.memory_mean, summary.memory_max
        );
        if let (Some(mean), Some(max)) = (summary.gpu_mean, summary.gpu_max) {
            let _ = writeln!(out, "  GPU:    mean {:.1}%, max {:.1}%", mean, max);
        }
    } else if snapshot.state == SessionState::Idle {
        let _ = writeln!(out);
        let _ = writeln!(out, "SUMMARY");
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "  No samples recorded.");
    }

    out
}
