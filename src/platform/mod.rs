// Platform-specific code module

pub mod board;
pub mod gpu;
pub mod memory;
#[cfg(windows)]
pub(crate) mod powershell;

pub use board::read_board_info;
pub use memory::read_memory_modules;
