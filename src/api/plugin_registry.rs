use tracing::debug;

use crate::extensions::ChartPlugin;
use crate::render::Renderer;

use super::{LineChartEngine, RegisterPluginOutcome};

impl<R: Renderer> LineChartEngine<R> {
    /// Adds an observer under its own id.
    ///
    /// Like labels, the first registration of an id wins; the rejected plugin
    /// is dropped.
    pub fn register_plugin(&mut self, plugin: Box<dyn ChartPlugin>) -> RegisterPluginOutcome {
        let id = plugin.id();
        if id.is_empty() {
            debug!("plugin id must not be empty");
            return RegisterPluginOutcome::EmptyId;
        }
        if self.plugins.contains_key(id) {
            debug!(id, "plugin already registered");
            return RegisterPluginOutcome::Duplicate;
        }
        let id = id.to_owned();
        debug!(id = %id, "plugin registered");
        self.plugins.insert(id, plugin);
        RegisterPluginOutcome::Registered
    }

    /// Detaches a plugin and hands it back to the caller.
    pub fn unregister_plugin(&mut self, id: &str) -> Option<Box<dyn ChartPlugin>> {
        self.plugins.shift_remove(id)
    }

    /// Registered plugin ids in dispatch order.
    pub fn plugin_ids(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, id: &str) -> bool {
        self.plugins.contains_key(id)
    }
}
