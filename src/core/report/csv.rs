//! CSV export of a session's time series.
//!
//! Base columns are always present; GPU and temperature columns appear
//! only when the session ever recorded those readings. A session with
//! zero ticks exports as a header-only file.

use crate::core::monitor::SampleSeries;

pub fn render_csv(series: &SampleSeries) -> String {
    let with_gpu = series.has_gpu_usage();
    let with_cpu_temp = series.has_cpu_temp();
    let with_gpu_temp = series.has_gpu_temp();

    let mut header = vec!["Timestamp", "CPU_Usage_%", "Memory_Usage_%"];
    if with_gpu {
        header.push("GPU_Usage_%");
    }
    if with_cpu_temp {
        header.push("CPU_Temp_C");
    }
    if with_gpu_temp {
        header.push("GPU_Temp_C");
    }

    let mut out = header.join(",");
    out.push('\n');

    for entry in series.entries() {
        let mut row = vec![
            entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            format!("{:.1}", entry.cpu_usage),
            format!("{:.1}", entry.memory_usage),
        ];
        if with_gpu {
            row.push(
                entry
                    .gpu_usage
                    .map(|v| format!("{:.1}", v))
                    .unwrap_or_default(),
            );
        }
        if with_cpu_temp {
            row.push(
                entry
                    .cpu_temp
                    .map(|v| format!("{:.1}", v))
                    .unwrap_or_default(),
            );
        }
        if with_gpu_temp {
            row.push(
                entry
                    .gpu_temp
                    .map(|v| format!("{:.1}", v))
                    .unwrap_or_default(),
            );
        }
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}
