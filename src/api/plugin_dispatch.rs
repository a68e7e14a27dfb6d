use crate::extensions::{PluginContext, PluginEvent};
use crate::render::Renderer;

use super::LineChartEngine;

impl<R: Renderer> LineChartEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            canvas: self.scene.canvas,
            x_domain: self.x_scale.domain(),
            y_domain: self.y_scale.domain(),
            rows_len: self.data.len(),
            revealed_len: self.lines.revealed_keys().count(),
            labels_len: self.labels.len(),
            now_ms: self.now_ms,
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in self.plugins.values_mut() {
            plugin.on_event(&event, context);
        }
    }
}
