//! Extension hooks for host-side observers.
//!
//! Plugins see engine events and a read-only context; they never mutate
//! chart state directly.

mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
