//! Monitoring session lifecycle.
//!
//! A session samples on a fixed cadence inside its own Tokio runtime
//! and publishes a snapshot through a watch channel after every tick.
//! Observers never block the loop; a slow reader just sees the newest
//! snapshot when it next looks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use log::warn;
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, watch};
use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::error::{PcdxError, Result};

use super::collector::SampleCollector;
use super::metrics::SampleMetrics;
use super::series::{SampleSeries, SessionSummary};

/// CPU usage above this logs a session event (%).
pub const TICK_CPU_WARN: f32 = 80.0;
/// Memory usage above this logs a session event (%).
pub const TICK_MEMORY_WARN: f32 = 85.0;

// One sampling session per process.
static ACTIVE: AtomicBool = AtomicBool::new(false);

/// Sampling cadence and bound for one session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub interval: Duration,
    /// Hard bound; `None` runs until stopped.
    pub duration: Option<Duration>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            duration: Some(Duration::from_secs(5 * 60)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Idle,
    Running,
}

/// A reading worth flagging, kept for the session log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEvent {
    pub timestamp: DateTime<Local>,
    pub component: String,
    pub message: String,
    pub value: f32,
}

/// Everything observers can see about a session, published as one
/// immutable value after each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub started_at: DateTime<Local>,
    pub interval_secs: u64,
    pub duration_secs: Option<u64>,
    pub latest: Option<SampleMetrics>,
    pub series: SampleSeries,
    pub events: Vec<SessionEvent>,
    /// Set once, on the final snapshot.
    pub summary: Option<SessionSummary>,
}

impl SessionSnapshot {
    fn initial(config: &SessionConfig) -> Self {
        Self {
            state: SessionState::Running,
            started_at: Local::now(),
            interval_secs: config.interval.as_secs(),
            duration_secs: config.duration.map(|d| d.as_secs()),
            latest: None,
            series: SampleSeries::new(),
            events: Vec::new(),
            summary: None,
        }
    }
}

/// Handle to a running sampling session.
pub struct MonitorSession {
    snapshot_rx: watch::Receiver<Arc<SessionSnapshot>>,
    stop_tx: broadcast::Sender<()>,
    _runtime: tokio::runtime::Runtime,
}

impl MonitorSession {
    /// Start sampling in the background.
    ///
    /// Only one session may run per process. A second start fails with
    /// `SessionConflict` and leaves the running session untouched.
    pub fn start(config: SessionConfig) -> Result<Self> {
        if ACTIVE
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(PcdxError::SessionConflict);
        }

        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_time()
            .thread_name("sampler-worker")
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                ACTIVE.store(false, Ordering::SeqCst);
                return Err(PcdxError::monitor(format!(
                    "Failed to build sampling runtime: {}",
                    e
                )));
            }
        };

        let (snapshot_tx, snapshot_rx) =
            watch::channel(Arc::new(SessionSnapshot::initial(&config)));
        let (stop_tx, _) = broadcast::channel::<()>(1);

        let stop_rx = stop_tx.subscribe();
        runtime.spawn(async move {
            let _guard = ActiveGuard;
            sampling_task(config, snapshot_tx, stop_rx).await;
        });

        Ok(Self {
            snapshot_rx,
            stop_tx,
            _runtime: runtime,
        })
    }

    /// Subscribe to snapshot updates.
    pub fn subscribe(&self) -> watch::Receiver<Arc<SessionSnapshot>> {
        self.snapshot_rx.clone()
    }

    /// Latest published snapshot.
    pub fn latest(&self) -> Arc<SessionSnapshot> {
        self.snapshot_rx.borrow().clone()
    }

    /// Ask the loop to stop; it finishes before taking another sample.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(());
    }

    /// Cloneable stop handle, e.g. for a Ctrl-C hook.
    pub fn stopper(&self) -> broadcast::Sender<()> {
        self.stop_tx.clone()
    }
}

// Releases the process-wide session slot when the task ends, however
// it ends.
struct ActiveGuard;

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        ACTIVE.store(false, Ordering::SeqCst);
    }
}

async fn sampling_task(
    config: SessionConfig,
    snapshot_tx: watch::Sender<Arc<SessionSnapshot>>,
    mut stop_rx: broadcast::Receiver<()>,
) {
    let mut collector = SampleCollector::new();
    let mut snapshot = SessionSnapshot::initial(&config);

    // Wait for initial CPU measurement
    tokio::time::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL).await;

    let deadline = config.duration.map(|d| Instant::now() + d);

    let mut ticker = interval(config.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // Bound check comes first so a zero duration records
                // nothing and N intervals record N samples.
                if let Some(deadline) = deadline {
                    if Instant::now() >= deadline {
                        break;
                    }
                }

                let sample = collector.sample();
                record_events(&mut snapshot.events, &sample);
                snapshot.latest = Some(sample.clone());
                snapshot.series.push(sample);

                // watch::send() only fails if there are no receivers (which is fine)
                let _ = snapshot_tx.send(Arc::new(snapshot.clone()));
            }
            _ = stop_rx.recv() => {
                break;
            }
        }
    }

    snapshot.state = SessionState::Idle;
    snapshot.summary = snapshot.series.summarize();
    let _ = snapshot_tx.send(Arc::new(snapshot));
}

fn record_events(events: &mut Vec<SessionEvent>, sample: &SampleMetrics) {
    if sample.cpu_usage > TICK_CPU_WARN {
        warn!("High CPU usage: {:.1}%", sample.cpu_usage);
        events.push(SessionEvent {
            timestamp: sample.timestamp,
            component: "CPU".to_string(),
            message: format!("High CPU usage: {:.1}%", sample.cpu_usage),
            value: sample.cpu_usage,
        });
    }

    if sample.memory_usage > TICK_MEMORY_WARN {
        warn!("High memory usage: {:.1}%", sample.memory_usage);
        events.push(SessionEvent {
            timestamp: sample.timestamp,
            component: "Memory".to_string(),
            message: format!("High memory usage: {:.1}%", sample.memory_usage),
            value: sample.memory_usage,
        });
    }
}
