mod container;
mod domain_controller;
mod domain_transition;
mod engine;
mod engine_config;
mod engine_init;
mod label_controller;
mod label_registry;
mod lifecycle_controller;
mod line_controller;
mod line_state;
mod options;
mod plugin_dispatch;
mod plugin_registry;
mod resize_coordinator;
mod scene_builder;
mod tick_thinning;
mod transition;
mod transition_scheduler;
mod validation;

pub use container::{ChartContainer, FixedContainer, ResizableContainer};
pub use engine::LineChartEngine;
pub use engine_config::ChartConfig;
pub use line_state::LineState;
pub use options::{
    AddLabelOutcome, AxisRangeOptions, ConcealOutcome, LabelOptions, LabelPoint, LabelStyle,
    RegisterPluginOutcome, RemoveLabelOptions, RemoveLabelOutcome, RevealOptions, RevealOutcome,
};
pub use resize_coordinator::ResizeCoordinator;
pub use tick_thinning::{TickThinningBehavior, thin_ticks};
pub use transition::{Ease, TransitionTiming};
