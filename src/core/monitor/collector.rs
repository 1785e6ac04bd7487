use chrono::Local;
use log::debug;
use sysinfo::{Components, CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use crate::core::probe::cpu::cpu_temperature;
use crate::platform::gpu::get_gpu_provider;

use super::gpu::GpuProvider;
use super::metrics::{GpuSample, SampleMetrics};

/// Takes one reading per tick from sysinfo and the GPU provider.
pub struct SampleCollector {
    system: System,
    components: Components,
    gpu_provider: Option<Box<dyn GpuProvider>>,
}

impl SampleCollector {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything());

        let system = System::new_with_specifics(refresh_kind);
        let components = Components::new_with_refreshed_list();

        // Try to initialize GPU provider (graceful failure)
        let gpu_provider = get_gpu_provider().ok();

        Self {
            system,
            components,
            gpu_provider,
        }
    }

    pub fn has_gpu(&self) -> bool {
        self.gpu_provider.is_some()
    }

    /// Take one sample. Never fails; a value that cannot be read for
    /// this tick degrades to `None`.
    pub fn sample(&mut self) -> SampleMetrics {
        self.system.refresh_cpu_all();
        self.system.refresh_memory();
        self.components.refresh(true);

        let cpu_usage = self.system.global_cpu_usage();

        let total = self.system.total_memory();
        let used = self.system.used_memory();
        let memory_usage = if total > 0 {
            (used as f32 / total as f32) * 100.0
        } else {
            0.0
        };

        let cpu_temp = cpu_temperature(&self.components);

        let gpu = self.collect_gpu();
        let gpu_usage = gpu.as_ref().map(|g| g.utilization_percent as f32);
        let gpu_temp = gpu
            .as_ref()
            .and_then(|g| g.temperature_celsius)
            .map(|t| t as f32);

        SampleMetrics {
            timestamp: Local::now(),
            cpu_usage,
            memory_usage,
            gpu_usage,
            cpu_temp,
            gpu_temp,
        }
    }

    fn collect_gpu(&mut self) -> Option<GpuSample> {
        match self.gpu_provider.as_mut()?.collect_metrics() {
            Ok(sample) => Some(sample),
            Err(e) => {
                debug!("GPU sample failed: {}", e);
                None
            }
        }
    }
}
