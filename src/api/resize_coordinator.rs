use tracing::trace;

/// Trailing-edge debounce for container resize notifications.
///
/// Every notification restarts the quiet window; the rebuild fires once the
/// window elapses without further notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeCoordinator {
    debounce_ms: f64,
    deadline_ms: Option<f64>,
    connected: bool,
    coalesced: u64,
}

impl ResizeCoordinator {
    #[must_use]
    pub fn new(debounce_ms: f64) -> Self {
        Self {
            debounce_ms: debounce_ms.max(0.0),
            deadline_ms: None,
            connected: false,
            coalesced: 0,
        }
    }

    pub fn connect(&mut self) {
        self.connected = true;
    }

    /// Stops observing and drops any pending rebuild.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.deadline_ms = None;
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    #[must_use]
    pub fn debounce_ms(&self) -> f64 {
        self.debounce_ms
    }

    #[must_use]
    pub fn pending_deadline_ms(&self) -> Option<f64> {
        self.deadline_ms
    }

    /// Notifications that were folded into a later deadline.
    #[must_use]
    pub fn coalesced_count(&self) -> u64 {
        self.coalesced
    }

    /// Restarts the quiet window; ignored while disconnected.
    pub fn notify(&mut self, now_ms: f64) -> bool {
        if !self.connected {
            return false;
        }
        if self.deadline_ms.is_some() {
            self.coalesced += 1;
        }
        let deadline = now_ms + self.debounce_ms;
        trace!(now_ms, deadline, "resize notification");
        self.deadline_ms = Some(deadline);
        true
    }

    /// Returns `true` exactly once per quiet window when the deadline passes.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if self.connected && now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
