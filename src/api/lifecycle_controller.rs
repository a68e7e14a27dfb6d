use tracing::{debug, info};

use crate::extensions::PluginEvent;
use crate::render::Renderer;

use super::LineChartEngine;

impl<R: Renderer> LineChartEngine<R> {
    /// Tells the engine the container may have changed size.
    ///
    /// Returns `false` after [`Self::shutdown`].
    pub fn notify_resize(&mut self) -> bool {
        let accepted = self.resize.notify(self.now_ms);
        if accepted {
            debug!(
                now_ms = self.now_ms,
                deadline_ms = self.resize.pending_deadline_ms(),
                "resize rebuild scheduled"
            );
        }
        accepted
    }

    #[must_use]
    pub fn is_resize_pending(&self) -> bool {
        self.resize.pending_deadline_ms().is_some()
    }

    /// Stops resize observation and drops pending deferred work.
    ///
    /// Running transitions keep animating if the host keeps advancing the clock.
    pub fn shutdown(&mut self) {
        if !self.resize.is_connected() {
            return;
        }
        self.resize.disconnect();
        self.tick_thinning.cancel();
        info!(container = %self.scene.container_id, "chart shut down");
        self.emit_plugin_event(PluginEvent::ShutDown);
    }

    #[must_use]
    pub fn is_shut_down(&self) -> bool {
        !self.resize.is_connected()
    }
}
