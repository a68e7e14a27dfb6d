use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoxSize, LinePath, Point};
use crate::error::{ChartError, ChartResult};
use crate::render::TextAnchor;

/// Which of the four axis groups a node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisRole {
    XGrid,
    YGrid,
    XAxis,
    YAxis,
}

impl AxisRole {
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::XGrid => "x-grid",
            Self::YGrid => "y-grid",
            Self::XAxis => "x-axis",
            Self::YAxis => "y-axis",
        }
    }

    #[must_use]
    pub const fn orientation(self) -> AxisOrientation {
        match self {
            Self::XGrid | Self::XAxis => AxisOrientation::Bottom,
            Self::YGrid | Self::YAxis => AxisOrientation::Left,
        }
    }

    #[must_use]
    pub const fn is_grid(self) -> bool {
        matches!(self, Self::XGrid | Self::YGrid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickNode {
    pub value: f64,
    /// Offset along the axis in plot pixels.
    pub position: f64,
    /// Empty for grid ticks.
    pub label: String,
    pub opacity: f64,
    /// Cleared by tick thinning.
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisNode {
    pub role: AxisRole,
    /// Group translation inside the plot area.
    pub offset: Point,
    /// Negative sizes draw ticks across the plot (grid lines).
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
    pub range: (f64, f64),
    pub ticks: Vec<TickNode>,
}

impl AxisNode {
    #[must_use]
    pub fn empty(role: AxisRole) -> Self {
        Self {
            role,
            offset: Point::new(0.0, 0.0),
            tick_size_inner: 0.0,
            tick_size_outer: 0.0,
            tick_padding: 0.0,
            range: (0.0, 0.0),
            ticks: Vec::new(),
        }
    }

    #[must_use]
    pub fn orientation(&self) -> AxisOrientation {
        self.role.orientation()
    }

    #[must_use]
    pub fn tick(&self, value: f64) -> Option<&TickNode> {
        self.ticks.iter().find(|tick| tick.value == value)
    }

    #[must_use]
    pub fn visible_tick_count(&self) -> usize {
        self.ticks.iter().filter(|tick| tick.visible).count()
    }
}

/// Dash pattern `[array, array]` shifted by `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeDash {
    pub array: f64,
    pub offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineNode {
    pub key: String,
    pub color: String,
    pub stroke_width: f64,
    pub path: LinePath,
    pub total_length: f64,
    /// `None` renders a plain solid stroke.
    pub dash: Option<StrokeDash>,
}

impl LineNode {
    #[must_use]
    pub fn new(key: impl Into<String>, color: impl Into<String>, stroke_width: f64, path: LinePath) -> Self {
        let total_length = path.total_length();
        Self {
            key: key.into(),
            color: color.into(),
            stroke_width,
            path,
            total_length,
            dash: None,
        }
    }

    /// Replaces the geometry and refreshes the cached length; the dash is untouched.
    pub fn set_path(&mut self, path: LinePath) {
        self.total_length = path.total_length();
        self.path = path;
    }

    /// Hides the whole stroke behind a dash gap of equal length.
    pub fn mask_fully(&mut self) {
        self.dash = Some(StrokeDash {
            array: self.total_length,
            offset: self.total_length,
        });
    }

    /// Draws the first `fraction` of the stroke, masking the rest.
    pub fn mask_to_fraction(&mut self, fraction: f64) {
        let fraction = fraction.clamp(0.0, 1.0);
        self.dash = Some(StrokeDash {
            array: self.total_length,
            offset: self.total_length * (1.0 - fraction),
        });
    }

    pub fn unmask(&mut self) {
        self.dash = None;
    }

    /// Length of the stroke currently painted.
    #[must_use]
    pub fn visible_length(&self) -> f64 {
        match self.dash {
            None => self.total_length,
            Some(dash) => (dash.array - dash.offset).clamp(0.0, self.total_length),
        }
    }

    #[must_use]
    pub fn is_fully_masked(&self) -> bool {
        self.dash.is_some_and(|dash| {
            dash.array >= self.total_length && dash.offset >= self.total_length
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelLine {
    pub text: String,
    pub dy_em: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub anchor: TextAnchor,
    pub color: String,
    pub font_size_px: f64,
    pub opacity: f64,
    pub lines: SmallVec<[LabelLine; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipRect {
    pub id: String,
    pub width: f64,
    pub height: f64,
}

/// Owned scene graph for one chart; rebuilt from scratch on every redraw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub container_id: String,
    pub canvas: BoxSize,
    pub plot_origin: Point,
    pub plot_size: BoxSize,
    pub clip: ClipRect,
    pub x_grid: AxisNode,
    pub y_grid: AxisNode,
    pub x_axis: AxisNode,
    pub y_axis: AxisNode,
    pub lines: IndexMap<String, LineNode>,
    pub labels: IndexMap<String, LabelNode>,
}

impl Scene {
    /// Scene with nothing in it, sized zero.
    #[must_use]
    pub fn empty(container_id: impl Into<String>) -> Self {
        let container_id = container_id.into();
        Self {
            clip: ClipRect {
                id: format!("{container_id}-clip"),
                width: 0.0,
                height: 0.0,
            },
            container_id,
            canvas: BoxSize::new(0.0, 0.0),
            plot_origin: Point::new(0.0, 0.0),
            plot_size: BoxSize::new(0.0, 0.0),
            x_grid: AxisNode::empty(AxisRole::XGrid),
            y_grid: AxisNode::empty(AxisRole::YGrid),
            x_axis: AxisNode::empty(AxisRole::XAxis),
            y_axis: AxisNode::empty(AxisRole::YAxis),
            lines: IndexMap::new(),
            labels: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn line(&self, key: &str) -> Option<&LineNode> {
        self.lines.get(key)
    }

    #[must_use]
    pub fn label(&self, id: &str) -> Option<&LabelNode> {
        self.labels.get(id)
    }

    #[must_use]
    pub fn axis(&self, role: AxisRole) -> &AxisNode {
        match role {
            AxisRole::XGrid => &self.x_grid,
            AxisRole::YGrid => &self.y_grid,
            AxisRole::XAxis => &self.x_axis,
            AxisRole::YAxis => &self.y_axis,
        }
    }

    pub fn axis_mut(&mut self, role: AxisRole) -> &mut AxisNode {
        match role {
            AxisRole::XGrid => &mut self.x_grid,
            AxisRole::YGrid => &mut self.y_grid,
            AxisRole::XAxis => &mut self.x_axis,
            AxisRole::YAxis => &mut self.y_axis,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.canvas.validate()?;
        for line in self.lines.values() {
            if !line.stroke_width.is_finite() || line.stroke_width <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "line `{}` stroke width must be finite and > 0",
                    line.key
                )));
            }
            if let Some(dash) = line.dash {
                if !dash.array.is_finite() || !dash.offset.is_finite() {
                    return Err(ChartError::InvalidData(format!(
                        "line `{}` dash must be finite",
                        line.key
                    )));
                }
            }
        }
        for label in self.labels.values() {
            if !label.x.is_finite() || !label.y.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "label `{}` position must be finite",
                    label.id
                )));
            }
            if !(0.0..=1.0).contains(&label.opacity) {
                return Err(ChartError::InvalidData(format!(
                    "label `{}` opacity must be in [0, 1]",
                    label.id
                )));
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidData(format!("scene snapshot: {err}")))
    }
}
