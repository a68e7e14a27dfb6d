use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};
use crate::extensions::PluginEvent;
use crate::render::Renderer;

use super::LineChartEngine;
use super::label_registry::FadeDirection;
use super::tick_thinning::thin_ticks;

impl<R: Renderer> LineChartEngine<R> {
    /// Moves the engine clock to `now_ms` and settles everything due by then.
    ///
    /// Order per call: a due resize rebuild, the domain transition, line
    /// reveals, label fades, then tick thinning. A clock that goes backwards
    /// is ignored.
    pub fn advance_to(&mut self, now_ms: f64) -> ChartResult<()> {
        if !now_ms.is_finite() {
            return Err(ChartError::InvalidData(
                "clock value must be finite".to_owned(),
            ));
        }
        if now_ms < self.now_ms {
            trace!(now_ms, current = self.now_ms, "ignoring clock moving backwards");
            return Ok(());
        }
        self.now_ms = now_ms;

        if self.resize.poll(now_ms) {
            debug!(now_ms, "debounced resize fired");
            self.rebuild()?;
        }
        self.step_domain_transition();
        self.step_line_reveals();
        self.step_label_fades();
        if self.tick_thinning.take_due(now_ms) {
            self.apply_tick_thinning();
        }
        Ok(())
    }

    pub(super) fn step_domain_transition(&mut self) {
        let Some(transition) = self.domain_transition.as_ref() else {
            return;
        };
        if !transition.timing.is_finished(self.now_ms) {
            let t = transition.timing.eased_progress(self.now_ms);
            transition.apply(&mut self.scene, t);
            return;
        }

        if let Some(transition) = self.domain_transition.take() {
            transition.finish(&mut self.scene);
        }
        // Settling rebuilds the tick lists; redo thinning if it already ran.
        if !self.tick_thinning.is_pending() {
            self.apply_tick_thinning();
        }
        debug!(now_ms = self.now_ms, "axis domain transition settled");
        self.emit_plugin_event(PluginEvent::AxisRangesSettled);
    }

    fn step_line_reveals(&mut self) {
        for (key, reveal) in self.lines.revealing() {
            let progress = reveal.timing.eased_progress(self.now_ms);
            if let Some(node) = self.scene.lines.get_mut(&key) {
                node.mask_to_fraction(progress);
            }
            if !reveal.timing.is_finished(self.now_ms)
                || !self.lines.complete_reveal(&key, reveal.generation)
            {
                continue;
            }
            if let Some(node) = self.scene.lines.get_mut(&key) {
                node.unmask();
            }
            debug!(key = %key, "line revealed");
            self.emit_plugin_event(PluginEvent::LineRevealed { key });
        }
    }

    fn step_label_fades(&mut self) {
        for (id, fade) in self.labels.fading() {
            if let Some(node) = self.scene.labels.get_mut(&id) {
                node.opacity = fade.opacity_at(self.now_ms);
            }
            if !fade.timing.is_finished(self.now_ms) {
                continue;
            }
            if self.labels.finish_fade(&id, fade.generation) == Some(FadeDirection::Out) {
                self.detach_label(&id);
            }
        }
    }

    pub(super) fn apply_tick_thinning(&mut self) {
        let width = self.container.box_size().width;
        let hidden = thin_ticks(
            &mut self.scene.x_axis.ticks,
            width,
            self.config.tick_thinning,
        );
        debug!(width, hidden, "x-axis ticks thinned");
        self.emit_plugin_event(PluginEvent::TicksThinned { hidden });
    }
}
