//! One-shot hardware and OS facade.
//!
//! `collect_system_report` queries every subsystem once and always
//! returns a report; a subsystem that cannot be read is logged and
//! degraded to its fallback value instead of failing the whole pass.

pub mod board;
pub mod cpu;
pub mod gpu;
pub mod memory;
pub mod network;
pub mod os;
pub mod storage;
pub mod types;

pub use types::*;

use chrono::Local;
use log::{debug, warn};

use crate::error::PcdxError;

/// Collect a full system report
pub fn collect_system_report() -> SystemReport {
    let os = os::collect().unwrap_or_else(|e| {
        warn!("Failed to collect OS info: {}", e);
        os::get_fallback()
    });

    let cpu = cpu::collect().unwrap_or_else(|e| {
        warn!("Failed to collect CPU info: {}", e);
        cpu::get_fallback()
    });

    let memory = memory::collect().unwrap_or_else(|e| {
        warn!("Failed to collect memory info: {}", e);
        memory::get_fallback()
    });

    let gpus = match gpu::collect() {
        Ok(gpus) => gpus,
        Err(PcdxError::GpuNotAvailable(reason)) => {
            debug!("No GPU detected: {}", reason);
            Vec::new()
        }
        Err(e) => {
            warn!("Failed to collect GPU info: {}", e);
            Vec::new()
        }
    };

    let board = match board::collect() {
        Ok(board) if !board.is_empty() => Some(board),
        Ok(_) => None,
        Err(e) => {
            warn!("Failed to collect motherboard info: {}", e);
            None
        }
    };

    let disks = storage::collect().unwrap_or_else(|e| {
        warn!("Failed to collect storage info: {}", e);
        vec![]
    });

    let interfaces = network::collect().unwrap_or_else(|e| {
        warn!("Failed to collect network info: {}", e);
        vec![]
    });

    SystemReport {
        collected_at: Local::now(),
        os,
        cpu,
        memory,
        gpus,
        board,
        disks,
        interfaces,
    }
}
