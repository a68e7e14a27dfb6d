use serde::{Deserialize, Serialize};

use crate::core::Domain;
use crate::render::TextAnchor;

fn default_reveal_duration_ms() -> f64 {
    700.0
}

fn default_label_duration_ms() -> f64 {
    300.0
}

fn default_axis_duration_ms() -> f64 {
    1000.0
}

fn default_label_color() -> String {
    "#000".to_owned()
}

fn default_label_font_size_px() -> f64 {
    12.0
}

/// Timing of a line draw-in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealOptions {
    #[serde(default)]
    pub delay_ms: f64,
    #[serde(default = "default_reveal_duration_ms")]
    pub duration_ms: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            delay_ms: 0.0,
            duration_ms: default_reveal_duration_ms(),
        }
    }
}

impl RevealOptions {
    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    Started,
    AlreadyRevealed,
    /// A reveal for the key is still in flight; the call is ignored.
    AlreadyRevealing,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConcealOutcome {
    Concealed,
    NotFound,
}

/// Data anchor and text of a floating label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelPoint {
    #[serde(default)]
    pub year: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
    /// `_` starts a new stacked line.
    #[serde(default, alias = "label")]
    pub text: String,
}

impl LabelPoint {
    #[must_use]
    pub fn new(year: f64, value: f64, text: impl Into<String>) -> Self {
        Self {
            year: Some(year),
            value: Some(value),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelStyle {
    #[serde(default = "default_label_color")]
    pub color: String,
    #[serde(default = "default_label_font_size_px")]
    pub font_size_px: f64,
    #[serde(default)]
    pub text_anchor: TextAnchor,
    #[serde(default)]
    pub fade_in: bool,
    #[serde(default)]
    pub delay_ms: f64,
    #[serde(default = "default_label_duration_ms")]
    pub duration_ms: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            color: default_label_color(),
            font_size_px: default_label_font_size_px(),
            text_anchor: TextAnchor::default(),
            fade_in: false,
            delay_ms: 0.0,
            duration_ms: default_label_duration_ms(),
        }
    }
}

impl LabelStyle {
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_font_size_px(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_text_anchor(mut self, text_anchor: TextAnchor) -> Self {
        self.text_anchor = text_anchor;
        self
    }

    /// Fades the label in from transparent after `delay_ms` over `duration_ms`.
    #[must_use]
    pub fn with_fade_in(mut self, delay_ms: f64, duration_ms: f64) -> Self {
        self.fade_in = true;
        self.delay_ms = delay_ms;
        self.duration_ms = duration_ms;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelOptions {
    #[serde(alias = "data")]
    pub point: LabelPoint,
    #[serde(default)]
    pub style: LabelStyle,
}

impl LabelOptions {
    #[must_use]
    pub fn new(point: LabelPoint) -> Self {
        Self {
            point,
            style: LabelStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: LabelStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddLabelOutcome {
    Added,
    Duplicate,
    /// Year or value was missing; nothing was registered.
    MissingPoint,
    EmptyId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegisterPluginOutcome {
    Registered,
    Duplicate,
    EmptyId,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveLabelOptions {
    #[serde(default)]
    pub fade_out: bool,
    #[serde(default)]
    pub delay_ms: f64,
    #[serde(default = "default_label_duration_ms")]
    pub duration_ms: f64,
}

impl Default for RemoveLabelOptions {
    fn default() -> Self {
        Self {
            fade_out: false,
            delay_ms: 0.0,
            duration_ms: default_label_duration_ms(),
        }
    }
}

impl RemoveLabelOptions {
    #[must_use]
    pub fn immediate() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fade_out(delay_ms: f64, duration_ms: f64) -> Self {
        Self {
            fade_out: true,
            delay_ms,
            duration_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoveLabelOutcome {
    Removed,
    /// The label stays registered until its fade-out completes.
    FadingOut,
    NotFound,
}

/// Target domains for an animated rescale; `None` keeps the current domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisRangeOptions {
    #[serde(default)]
    pub x_domain: Option<Domain>,
    #[serde(default)]
    pub y_domain: Option<Domain>,
    #[serde(default = "default_axis_duration_ms")]
    pub duration_ms: f64,
}

impl Default for AxisRangeOptions {
    fn default() -> Self {
        Self {
            x_domain: None,
            y_domain: None,
            duration_ms: default_axis_duration_ms(),
        }
    }
}

impl AxisRangeOptions {
    #[must_use]
    pub fn x(domain: Domain) -> Self {
        Self {
            x_domain: Some(domain),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn y(domain: Domain) -> Self {
        Self {
            y_domain: Some(domain),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_x_domain(mut self, domain: Domain) -> Self {
        self.x_domain = Some(domain);
        self
    }

    #[must_use]
    pub fn with_y_domain(mut self, domain: Domain) -> Self {
        self.y_domain = Some(domain);
        self
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}
