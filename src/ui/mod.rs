// UI and formatting module

pub mod formatters;
pub mod monitor_tui;
pub mod system_formatters;

// Re-export commonly used items for cleaner imports
pub use formatters::{create_usage_bar, format_bytes, pad_display};
pub use monitor_tui::run_monitor_app;
pub use system_formatters::{print_diagnostic, print_system_report, DisplayFilter};
