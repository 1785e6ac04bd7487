//! Continuous sampling of usage and temperature metrics.
//!
//! One background session at a time samples CPU, memory, and GPU on a
//! fixed cadence, buffers the series in memory, and publishes
//! snapshots over a watch channel for the TUI and plain-text frontends.

mod collector;
mod gpu;
mod metrics;
mod series;
mod session;

pub use collector::SampleCollector;
pub use gpu::GpuProvider;
pub use metrics::{GpuSample, SampleMetrics};
pub use series::{SampleSeries, SessionSummary};
pub use session::{
    MonitorSession, SessionConfig, SessionEvent, SessionSnapshot, SessionState, TICK_CPU_WARN,
    TICK_MEMORY_WARN,
};
