mod null_renderer;
mod primitives;
mod scene;
mod svg;

pub use null_renderer::NullRenderer;
pub use primitives::{Color, TextAnchor};
pub use scene::{
    AxisNode, AxisOrientation, AxisRole, ClipRect, LabelLine, LabelNode, LineNode, Scene,
    StrokeDash, TickNode,
};
pub use svg::{SvgRenderer, scene_to_svg};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive the fully materialized `Scene` so drawing code stays
/// isolated from line-state, label and transition logic.
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
