use serde::{Deserialize, Serialize};

use crate::core::{Domain, Margin, SeriesDefinition};
use crate::error::{ChartError, ChartResult};

use super::TickThinningBehavior;

/// Public chart bootstrap configuration.
///
/// Serializable with camelCase keys so hosts can keep chart setup in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(default)]
    pub margin: Margin,
    #[serde(default = "default_x_domain")]
    pub x_domain: Domain,
    #[serde(default = "default_y_domain")]
    pub y_domain: Domain,
    /// Resource holding long-form `key,year,value` rows.
    #[serde(default)]
    pub data_url: Option<String>,
    #[serde(default)]
    pub series: Vec<SeriesDefinition>,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: f64,
    #[serde(default)]
    pub tick_thinning: TickThinningBehavior,
    #[serde(default = "default_line_stroke_width")]
    pub line_stroke_width: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: Margin::default(),
            x_domain: default_x_domain(),
            y_domain: default_y_domain(),
            data_url: None,
            series: Vec::new(),
            resize_debounce_ms: default_resize_debounce_ms(),
            tick_thinning: TickThinningBehavior::default(),
            line_stroke_width: default_line_stroke_width(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(data_url: impl Into<String>, series: Vec<SeriesDefinition>) -> Self {
        Self {
            data_url: Some(data_url.into()),
            series,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_x_domain(mut self, domain: Domain) -> Self {
        self.x_domain = domain;
        self
    }

    #[must_use]
    pub fn with_y_domain(mut self, domain: Domain) -> Self {
        self.y_domain = domain;
        self
    }

    #[must_use]
    pub fn with_data_url(mut self, data_url: impl Into<String>) -> Self {
        self.data_url = Some(data_url.into());
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: Vec<SeriesDefinition>) -> Self {
        self.series = series;
        self
    }

    #[must_use]
    pub fn with_resize_debounce_ms(mut self, debounce_ms: f64) -> Self {
        self.resize_debounce_ms = debounce_ms;
        self
    }

    #[must_use]
    pub fn with_tick_thinning(mut self, behavior: TickThinningBehavior) -> Self {
        self.tick_thinning = behavior;
        self
    }

    #[must_use]
    pub fn with_line_stroke_width(mut self, width: f64) -> Self {
        self.line_stroke_width = width;
        self
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_x_domain() -> Domain {
    (1990.0, 2024.0)
}

fn default_y_domain() -> Domain {
    (0.0, 50.0)
}

fn default_resize_debounce_ms() -> f64 {
    200.0
}

fn default_line_stroke_width() -> f64 {
    2.0
}
