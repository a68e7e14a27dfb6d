use indexmap::IndexMap;

use crate::core::{BoxSize, DataRow, DataSet, Domain, LinearScale, SeriesDefinition};
use crate::error::ChartResult;
use crate::extensions::{ChartPlugin, PluginEvent};
use crate::render::{Renderer, Scene};

use super::container::ChartContainer;
use super::domain_transition::DomainTransition;
use super::label_registry::LabelRegistry;
use super::line_state::LineVisibility;
use super::resize_coordinator::ResizeCoordinator;
use super::tick_thinning::TickThinningSchedule;
use super::ChartConfig;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `LineChartEngine` owns the loaded data, both scales, the scene graph and
/// all retained animation state. Time only moves when the host calls
/// [`LineChartEngine::advance_to`].
pub struct LineChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) container: Box<dyn ChartContainer>,
    pub(super) data: DataSet,
    pub(super) x_scale: LinearScale,
    pub(super) y_scale: LinearScale,
    pub(super) scene: Scene,
    pub(super) lines: LineVisibility,
    pub(super) labels: LabelRegistry,
    pub(super) domain_transition: Option<DomainTransition>,
    pub(super) resize: ResizeCoordinator,
    pub(super) tick_thinning: TickThinningSchedule,
    pub(super) plugins: IndexMap<String, Box<dyn ChartPlugin>>,
    pub(super) now_ms: f64,
    pub(super) rebuild_count: u64,
}

impl<R: Renderer> LineChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn series(&self) -> &[SeriesDefinition] {
        &self.config.series
    }

    #[must_use]
    pub fn data(&self) -> &DataSet {
        &self.data
    }

    /// Wide rows ordered by year.
    #[must_use]
    pub fn rows(&self) -> &[DataRow] {
        self.data.rows()
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn x_domain(&self) -> Domain {
        self.x_scale.domain()
    }

    #[must_use]
    pub fn y_domain(&self) -> Domain {
        self.y_scale.domain()
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    #[must_use]
    pub fn container_size(&self) -> BoxSize {
        self.container.box_size()
    }

    /// Host clock value of the last `advance_to` call.
    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    #[must_use]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    #[must_use]
    pub fn is_domain_transition_active(&self) -> bool {
        self.domain_transition.is_some()
    }

    /// Rebuilds the scene right away, bypassing the resize debounce.
    pub fn redraw(&mut self) -> ChartResult<()> {
        self.rebuild()
    }

    pub fn render(&mut self) -> ChartResult<()> {
        self.renderer.render(&self.scene)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    /// Renders the scene into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        self.renderer.render_on_cairo_context(context, &self.scene)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
