use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::watch;

use crate::core::monitor::{MonitorSession, SessionSnapshot, SessionState};

use super::event_handler::MonitorEvent;
use super::render::render_ui;

/// Dashboard state: the latest session snapshot plus UI toggles.
/// The sampling loop owns the data; the dashboard only observes it.
pub struct MonitorApp {
    pub snapshot: Arc<SessionSnapshot>,
    snapshot_rx: watch::Receiver<Arc<SessionSnapshot>>,
    pub should_quit: bool,
    pub show_help: bool,
}

impl MonitorApp {
    pub fn new(snapshot_rx: watch::Receiver<Arc<SessionSnapshot>>) -> Self {
        let snapshot = snapshot_rx.borrow().clone();
        Self {
            snapshot,
            snapshot_rx,
            should_quit: false,
            show_help: false,
        }
    }

    /// Pull the latest snapshot if the sampling loop published a new one
    pub fn refresh(&mut self) {
        match self.snapshot_rx.has_changed() {
            Ok(true) => self.snapshot = self.snapshot_rx.borrow_and_update().clone(),
            Ok(false) => {}
            // Sender gone: the loop already published its final snapshot
            Err(_) => self.snapshot = self.snapshot_rx.borrow().clone(),
        }
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: MonitorEvent) {
        match event {
            MonitorEvent::Quit => self.should_quit = true,
            MonitorEvent::ToggleHelp => self.show_help = !self.show_help,
            MonitorEvent::None => {}
        }
    }
}

/// Run the live dashboard over an already running session. Returns when
/// the user quits or the session reaches its configured duration.
pub fn run_monitor_app(session: &MonitorSession) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = MonitorApp::new(session.subscribe());
    // Redraw cadence; sampling runs on its own schedule
    let poll_interval = Duration::from_millis(250);

    // Main loop
    loop {
        app.refresh();
        terminal.draw(|frame| render_ui(frame, &app))?;

        if event::poll(poll_interval).context("Event poll failed")? {
            if let Event::Key(key) = event::read().context("Event read failed")? {
                if key.kind == KeyEventKind::Press {
                    let monitor_event = match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => MonitorEvent::Quit,
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            MonitorEvent::Quit
                        }
                        KeyCode::Char('?') | KeyCode::Char('h') => MonitorEvent::ToggleHelp,
                        _ => MonitorEvent::None,
                    };
                    app.handle_event(monitor_event);
                }
            }
        }

        if app.should_quit {
            session.stop();
            break;
        }

        // Session hit its duration bound on its own
        if app.snapshot.state == SessionState::Idle {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}
