// Command handlers module
pub mod completions;
pub mod diagnose;
pub mod info;
pub mod monitor;

// Re-exports for cleaner imports
pub use diagnose::execute as diagnose;
pub use info::execute as info;
pub use monitor::execute as monitor;
