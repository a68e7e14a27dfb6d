use serde::{Deserialize, Serialize};

use crate::core::{BoxSize, Domain};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub canvas: BoxSize,
    pub x_domain: Domain,
    pub y_domain: Domain,
    pub rows_len: usize,
    pub revealed_len: usize,
    pub labels_len: usize,
    pub now_ms: f64,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    Rebuilt { width: f64, height: f64 },
    LineRevealStarted { key: String },
    LineRevealed { key: String },
    LineConcealed { key: String },
    LabelAdded { id: String },
    LabelRemoved { id: String },
    AxisRangesChanged { x_domain: Domain, y_domain: Domain },
    AxisRangesSettled,
    TicksThinned { hidden: usize },
    Rendered,
    ShutDown,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins can observe events and read engine context without mutating core
/// internals directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PluginEvent, context: PluginContext);
}
