/// Events that can occur in the monitor TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorEvent {
    /// Stop the session and quit the dashboard
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    /// No action
    None,
}
