//! animated-line-chart: headless engine for an animated, resizable line chart.
//!
//! The engine owns a rebuildable scene graph (axes, grids, one path per series,
//! floating labels) and a host-driven clock. Lines are drawn in with a
//! stroke-dash reveal, labels fade in and out, and axis domains transition
//! smoothly while hidden lines stay hidden.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartConfig, LineChartEngine};
pub use error::{ChartError, ChartResult};
