use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use pcdx::{MonitorSession, PcdxError, SessionConfig, SessionSnapshot, SessionState};

/// The session slot frees up just after the final snapshot is
/// published, so a start right after observing Idle can still see the
/// previous session. Retry for a bounded time.
fn start_when_free(config: SessionConfig) -> MonitorSession {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        match MonitorSession::start(config.clone()) {
            Ok(session) => return session,
            Err(PcdxError::SessionConflict) if Instant::now() < deadline => {
                thread::sleep(Duration::from_millis(20));
            }
            Err(e) => panic!("failed to start session: {}", e),
        }
    }
}

fn wait_for_idle(session: &MonitorSession) -> Arc<SessionSnapshot> {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        let snapshot = session.latest();
        if snapshot.state == SessionState::Idle {
            return snapshot;
        }
        assert!(
            Instant::now() < deadline,
            "session never published an Idle snapshot"
        );
        thread::sleep(Duration::from_millis(25));
    }
}

// Sessions are exclusive per process, so every lifecycle phase runs
// inside one test.
#[test]
fn test_session_lifecycle() {
    // A zero duration trips the bound before the first sample.
    let session = start_when_free(SessionConfig {
        interval: Duration::from_millis(50),
        duration: Some(Duration::ZERO),
    });
    let snapshot = wait_for_idle(&session);
    assert!(snapshot.series.is_empty());
    assert!(snapshot.latest.is_none());
    assert!(snapshot.summary.is_none());
    drop(session);

    // A budget of one interval records exactly one sample.
    let session = start_when_free(SessionConfig {
        interval: Duration::from_millis(250),
        duration: Some(Duration::from_millis(250)),
    });

    // A second session in the same process is refused while the first
    // runs, and the refusal leaves the running session untouched.
    match MonitorSession::start(SessionConfig::default()) {
        Err(PcdxError::SessionConflict) => {}
        Ok(_) => panic!("second session started while one was running"),
        Err(e) => panic!("unexpected error: {}", e),
    }

    let snapshot = wait_for_idle(&session);
    assert_eq!(snapshot.series.len(), 1);
    assert!(snapshot.latest.is_some());

    let summary = snapshot.summary.as_ref().expect("final snapshot summary");
    assert_eq!(summary.ticks, 1);
    assert!(summary.cpu_max >= summary.cpu_mean);
    assert!(summary.memory_max >= summary.memory_mean);
    drop(session);

    // Without a duration the session runs until stopped.
    let session = start_when_free(SessionConfig {
        interval: Duration::from_millis(50),
        duration: None,
    });
    let subscriber = session.subscribe();
    thread::sleep(Duration::from_millis(500));
    session.stop();

    let snapshot = wait_for_idle(&session);
    assert_eq!(snapshot.duration_secs, None);
    // Subscribers see the same final snapshot.
    assert_eq!(subscriber.borrow().state, SessionState::Idle);

    match &snapshot.summary {
        Some(summary) => assert_eq!(summary.ticks, snapshot.series.len()),
        None => assert!(snapshot.series.is_empty()),
    }
}

#[test]
fn test_session_config_defaults() {
    let config = SessionConfig::default();
    assert_eq!(config.interval, Duration::from_secs(2));
    assert_eq!(config.duration, Some(Duration::from_secs(300)));
}
