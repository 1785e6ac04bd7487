use crate::core::alerts::AlertSeverity;
use crate::core::diagnostics::DiagnosticReport;
use crate::core::probe::{
    BoardInfo, CpuInfo, DiskInfo, GpuInfo, InterfaceInfo, MemoryInfo, OsInfo, SystemReport,
};
use crate::core::recommend::RecommendationPriority;
use crate::core::report::text::format_uptime;
use crate::ui::formatters::{create_usage_bar, format_bytes, pad_display};
use colored::*;
use unicode_width::UnicodeWidthStr;

/// Filter for controlling which hardware sections to display
#[derive(Debug, Clone)]
pub struct DisplayFilter {
    pub cpu: bool,
    pub gpu: bool,
    pub memory: bool,
    pub board: bool,
    pub network: bool,
    pub storage: bool,
    pub os: bool,
}

impl DisplayFilter {
    /// Returns a filter that shows all sections
    pub fn all() -> Self {
        Self {
            cpu: true,
            gpu: true,
            memory: true,
            board: true,
            network: true,
            storage: true,
            os: true,
        }
    }
}

pub fn print_system_report(report: &SystemReport, filter: &DisplayFilter) {
    println!("\n{}", "SYSTEM INFORMATION".bold().bright_cyan());
    println!("{}", "=".repeat(80));

    if filter.cpu {
        print_cpu_info(&report.cpu);
    }

    if filter.memory {
        print_memory_info(&report.memory);
    }

    if filter.gpu {
        print_gpu_info(&report.gpus);
    }

    if filter.board {
        if let Some(ref board) = report.board {
            print_board_info(board);
        }
    }

    if filter.network {
        print_network_info(&report.interfaces);
    }

    if filter.storage && !report.disks.is_empty() {
        print_storage_info(&report.disks);
    }

    if filter.os {
        print_os_info(&report.os);
    }

    println!();
}

fn print_section_header(title: &str) {
    println!("\n{}", title.bold().green());
    println!("{}", "-".repeat(title.len()));
}

fn print_cpu_info(cpu: &CpuInfo) {
    print_section_header("CPU");

    println!("  Model: {}", cpu.model);
    println!("  Vendor: {}", cpu.vendor);
    println!(
        "  Cores: {} physical, {} logical",
        cpu.physical_cores, cpu.logical_cores
    );
    println!("  Architecture: {}", cpu.architecture);

    if cpu.frequency_mhz > 0 {
        println!("  Frequency: {:.2} GHz", cpu.frequency_mhz as f64 / 1000.0);
    }

    let mut cache_parts = Vec::new();
    if let Some(l1) = cpu.l1_cache_kb {
        cache_parts.push(format!("L1: {} KB", l1));
    }
    if let Some(l2) = cpu.l2_cache_kb {
        cache_parts.push(format!("L2: {} KB", l2));
    }
    if let Some(l3) = cpu.l3_cache_kb {
        cache_parts.push(format!("L3: {} KB", l3));
    }
    if !cache_parts.is_empty() {
        println!("  Cache: {}", cache_parts.join(", "));
    }

    if let Some(usage) = cpu.usage_percent {
        let usage_str = if usage > 80.0 {
            format!("{:.1}%", usage).red()
        } else if usage > 50.0 {
            format!("{:.1}%", usage).yellow()
        } else {
            format!("{:.1}%", usage).green()
        };
        println!("  Current Usage: {}", usage_str);
    }

    if let Some(temp) = cpu.temperature_celsius {
        let temp_str = if temp > 85.0 {
            format!("{:.0}°C", temp).red()
        } else if temp > 75.0 {
            format!("{:.0}°C", temp).yellow()
        } else {
            format!("{:.0}°C", temp).green()
        };
        println!("  Temperature: {}", temp_str);
    }
}

fn print_memory_info(mem: &MemoryInfo) {
    print_section_header("Memory (RAM)");

    println!("  Total: {}", format_bytes(mem.total_bytes));
    println!(
        "  Used: {} ({:.1}%)",
        format_bytes(mem.used_bytes),
        mem.usage_percent
    );
    println!("  Available: {}", format_bytes(mem.available_bytes));

    if mem.swap_total_bytes > 0 {
        println!(
            "  Swap: {} / {} ({:.1}%)",
            format_bytes(mem.swap_used_bytes),
            format_bytes(mem.swap_total_bytes),
            mem.swap_percent
        );
    }

    if !mem.modules.is_empty() {
        println!("  Modules:");
        for module in &mem.modules {
            let slot = module.slot.as_deref().unwrap_or("DIMM");
            let mut details = vec![format_bytes(module.capacity_bytes)];
            if let Some(ddr) = module.ddr_type {
                details.push(ddr.to_string());
            }
            if let Some(speed) = module.speed_mhz {
                details.push(format!("{} MHz", speed));
            }
            if let Some(ref part) = module.part_number {
                details.push(part.clone());
            } else if let Some(ref manufacturer) = module.manufacturer {
                details.push(manufacturer.clone());
            }
            println!("    {}: {}", slot, details.join(" "));
        }
    }
}

fn print_gpu_info(gpus: &[GpuInfo]) {
    print_section_header("GPU");

    if gpus.is_empty() {
        println!("  No GPU detected");
        return;
    }

    for (i, gpu) in gpus.iter().enumerate() {
        if i > 0 {
            println!();
        }

        println!("  Model: {}", gpu.name);
        println!("  Vendor: {}", gpu.vendor);

        if let Some(total) = gpu.memory_total_bytes {
            if let (Some(used), Some(percent)) = (gpu.memory_used_bytes, gpu.memory_percent) {
                println!(
                    "  VRAM: {} / {} ({:.1}%)",
                    format_bytes(used),
                    format_bytes(total),
                    percent
                );
            } else {
                println!("  VRAM: {}", format_bytes(total));
            }
        }

        if let Some(ref driver) = gpu.driver_version {
            println!("  Driver Version: {}", driver);
        }

        if let Some(usage) = gpu.utilization_percent {
            let usage_str = if usage > 90 {
                format!("{}%", usage).red()
            } else if usage > 70 {
                format!("{}%", usage).yellow()
            } else {
                format!("{}%", usage).green()
            };
            println!("  Utilization: {}", usage_str);
        }

        if let Some(temp) = gpu.temperature_celsius {
            let temp_str = if temp > 90 {
                format!("{}°C", temp).red()
            } else if temp > 80 {
                format!("{}°C", temp).yellow()
            } else {
                format!("{}°C", temp).green()
            };
            println!("  Temperature: {}", temp_str);
        }

        if let Some(fan_speed) = gpu.fan_speed_percent {
            println!("  Fan Speed: {}%", fan_speed);
        }

        if let Some(power) = gpu.power_draw_watts {
            if let Some(limit) = gpu.power_limit_watts {
                println!("  Power Draw: {} W / {} W", power, limit);
            } else {
                println!("  Power Draw: {} W", power);
            }
        }
    }
}

fn print_board_info(board: &BoardInfo) {
    print_section_header("Motherboard");

    let mut has_data = false;

    if let Some(ref manufacturer) = board.manufacturer {
        println!("  Manufacturer: {}", manufacturer);
        has_data = true;
    }

    if let Some(ref product) = board.product {
        println!("  Model: {}", product);
        has_data = true;
    }

    if let Some(ref version) = board.version {
        println!("  Revision: {}", version);
        has_data = true;
    }

    if let Some(ref serial) = board.serial_number {
        println!("  Serial: {}", serial);
        has_data = true;
    }

    if let Some(ref bios_vendor) = board.bios_vendor {
        println!("  BIOS Vendor: {}", bios_vendor);
        has_data = true;
    }

    if let Some(ref bios_version) = board.bios_version {
        println!("  BIOS Version: {}", bios_version);
        has_data = true;
    }

    if let Some(ref bios_date) = board.bios_date {
        println!("  BIOS Date: {}", bios_date);
        has_data = true;
    }

    if !has_data {
        println!("  {}", "No motherboard information available".dimmed());
    }
}

fn print_network_info(interfaces: &[InterfaceInfo]) {
    print_section_header("Network");

    if interfaces.is_empty() {
        println!("  No network interfaces detected");
        return;
    }

    for (i, iface) in interfaces.iter().enumerate() {
        if i > 0 {
            println!();
        }

        println!("  Interface: {}", iface.name.bold());

        if let Some(ref mac) = iface.mac_address {
            println!("    MAC: {}", mac);
        }

        for ip in &iface.ip_addresses {
            println!("    IP: {}", ip.cyan());
        }

        if let Some(mtu) = iface.mtu {
            println!("    MTU: {}", mtu);
        }

        println!(
            "    Received: {} ({} packets)",
            format_bytes(iface.total_received_bytes),
            iface.total_packets_received
        );
        println!(
            "    Transmitted: {} ({} packets)",
            format_bytes(iface.total_transmitted_bytes),
            iface.total_packets_transmitted
        );

        let errors = iface.total_errors_received + iface.total_errors_transmitted;
        if errors > 0 {
            println!(
                "    Errors: {}",
                format!(
                    "{} rx / {} tx",
                    iface.total_errors_received, iface.total_errors_transmitted
                )
                .red()
            );
        }
    }
}

fn print_storage_info(disks: &[DiskInfo]) {
    print_section_header("Storage");

    for (i, disk) in disks.iter().enumerate() {
        if i > 0 {
            println!();
        }

        let disk_title = disk.model.clone().unwrap_or_else(|| disk.name.clone());
        println!("  {} {}: {}", "Disk".cyan().bold(), i, disk_title.bold());

        println!("    Type: {}", disk.kind.to_string().bold());

        if !disk.file_system.is_empty() {
            println!("    File System: {}", disk.file_system);
        }

        println!("    Mount Point: {}", disk.mount_point);
        println!("    Capacity: {}", format_bytes(disk.total_bytes));
        println!(
            "    Usage: {} {:.1}% ({} free)",
            create_usage_bar(disk.usage_percent, 20),
            disk.usage_percent,
            format_bytes(disk.available_bytes)
        );

        if let Some(temp) = disk.temperature_celsius {
            let temp_str = if temp >= 60.0 {
                format!("{:.0}", temp).red()
            } else if temp >= 50.0 {
                format!("{:.0}", temp).yellow()
            } else {
                format!("{:.0}", temp).green()
            };
            println!("    Temperature: {}°C", temp_str);
        }

        if disk.written_bytes > 0 {
            println!("    Data Written: {}", format_bytes(disk.written_bytes));
        }
        if disk.read_bytes > 0 {
            println!("    Data Read: {}", format_bytes(disk.read_bytes));
        }

        if let Some(ref serial) = disk.serial_number {
            println!("    Serial: {}", serial);
        }
    }
}

fn print_os_info(os: &OsInfo) {
    print_section_header("Operating System");

    println!("  Name: {}", os.name);
    println!("  Version: {}", os.version);
    println!("  Architecture: {}", os.architecture);

    if let Some(ref kernel) = os.kernel_version {
        println!("  Kernel: {}", kernel);
    }

    if let Some(ref hostname) = os.hostname {
        println!("  Hostname: {}", hostname);
    }

    if let Some(boot) = os.boot_time {
        println!("  Boot Time: {}", boot.format("%Y-%m-%d %H:%M:%S"));
    }

    if os.uptime_secs > 0 {
        println!("  Uptime: {}", format_uptime(os.uptime_secs));
    }
}

/// Print a diagnostic report to the console with colored alerts and
/// recommendations
pub fn print_diagnostic(report: &DiagnosticReport) {
    println!("\n{}", "SYSTEM DIAGNOSTIC".bold().bright_cyan());
    println!("{}", "=".repeat(80));
    println!(
        "  Generated: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    );

    let status = if report.critical_count() > 0 {
        report.status_label().red().bold()
    } else if report.warning_count() > 0 {
        report.status_label().yellow().bold()
    } else {
        report.status_label().green().bold()
    };
    println!("  Status: {}", status);

    print_section_header(&format!("Alerts ({})", report.alerts.len()));

    if report.alerts.is_empty() {
        println!(
            "  {}",
            "No alerts; all readings within thresholds.".green()
        );
    } else {
        let component_width = report
            .alerts
            .iter()
            .map(|a| a.component.width())
            .max()
            .unwrap_or(0);

        for alert in &report.alerts {
            let tag = match alert.severity {
                AlertSeverity::Critical => format!("[{}]", alert.severity).red().bold(),
                AlertSeverity::Warning => format!("[{}] ", alert.severity).yellow().bold(),
            };
            println!(
                "  {} {} {}",
                tag,
                pad_display(&alert.component, component_width),
                alert.message
            );
        }
    }

    print_section_header(&format!(
        "Recommendations ({})",
        report.recommendations.len()
    ));

    for rec in &report.recommendations {
        let priority = match rec.priority {
            RecommendationPriority::Critical => rec.priority.to_string().red().bold(),
            RecommendationPriority::High => rec.priority.to_string().red(),
            RecommendationPriority::Medium => rec.priority.to_string().yellow(),
            RecommendationPriority::Low => rec.priority.to_string().green(),
        };
        println!(
            "  [{}] {} / {}: {}",
            priority, rec.category, rec.component, rec.problem
        );
        println!("      {}", rec.action.dimmed());
    }

    println!();
    let counts = format!(
        "{} critical, {} warnings, {} recommendations",
        report.critical_count(),
        report.warning_count(),
        report.recommendations.len()
    );
    println!("  {}", counts.bold());
    println!();
}
