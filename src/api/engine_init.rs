use indexmap::IndexMap;
use tracing::{debug, info};

use crate::core::{DataSet, LinearScale};
use crate::data::{DataLoader, load_data_set};
use crate::error::{ChartError, ChartResult};
use crate::render::{Renderer, Scene};

use super::container::ChartContainer;
use super::label_registry::LabelRegistry;
use super::line_state::LineVisibility;
use super::resize_coordinator::ResizeCoordinator;
use super::tick_thinning::TickThinningSchedule;
use super::validation::validate_config;
use super::{ChartConfig, LineChartEngine};

impl<R: Renderer> LineChartEngine<R> {
    /// Validates `config`, loads the long-form rows from `config.data_url`,
    /// builds the first scene with every line concealed and starts observing
    /// resizes.
    pub fn initialize(
        config: ChartConfig,
        container: impl ChartContainer + 'static,
        loader: &dyn DataLoader,
        renderer: R,
    ) -> ChartResult<Self> {
        validate_config(&config, true)?;
        let url = config
            .data_url
            .clone()
            .ok_or_else(|| ChartError::Configuration("dataUrl must be provided".to_owned()))?;
        let data = load_data_set(loader, &url, &config.series)?;
        info!(url = %url, rows = data.len(), series = config.series.len(), "chart data loaded");
        Self::with_data(config, container, data, renderer)
    }

    /// Same as [`Self::initialize`] for data already in memory; `data_url` is ignored.
    pub fn from_data_set(
        config: ChartConfig,
        container: impl ChartContainer + 'static,
        data: DataSet,
        renderer: R,
    ) -> ChartResult<Self> {
        validate_config(&config, false)?;
        Self::with_data(config, container, data, renderer)
    }

    fn with_data(
        config: ChartConfig,
        container: impl ChartContainer + 'static,
        mut data: DataSet,
        renderer: R,
    ) -> ChartResult<Self> {
        if data.is_empty() {
            return Err(ChartError::Configuration(
                "chart data contains no rows".to_owned(),
            ));
        }
        data.ensure_series_slots(&config.series);

        let x_scale = LinearScale::new(config.x_domain, (0.0, 0.0))?;
        let y_scale = LinearScale::new(config.y_domain, (0.0, 0.0))?;
        let resize = ResizeCoordinator::new(config.resize_debounce_ms);
        let scene = Scene::empty(container.id());

        let mut engine = Self {
            renderer,
            config,
            container: Box::new(container),
            data,
            x_scale,
            y_scale,
            scene,
            lines: LineVisibility::default(),
            labels: LabelRegistry::default(),
            domain_transition: None,
            resize,
            tick_thinning: TickThinningSchedule::default(),
            plugins: IndexMap::new(),
            now_ms: 0.0,
            rebuild_count: 0,
        };
        engine.rebuild()?;
        engine.resize.connect();
        debug!(
            container = %engine.scene.container_id,
            debounce_ms = engine.resize.debounce_ms(),
            "chart initialized"
        );
        Ok(engine)
    }
}
