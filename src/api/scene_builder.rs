use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::debug;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{
    BoxSize, DEFAULT_TICK_COUNT, DataSet, LinePath, LinearScale, Point, SeriesDefinition,
    format_integer_tick, format_value_tick, split_label_lines,
};
use crate::error::ChartResult;
use crate::extensions::PluginEvent;
use crate::render::{
    AxisNode, AxisRole, ClipRect, LabelLine, LabelNode, LineNode, Renderer, Scene, TickNode,
};

use super::LineChartEngine;
use super::label_registry::LabelEntry;
use super::line_state::LineState;

pub(super) const AXIS_TICK_SIZE: f64 = 6.0;
pub(super) const AXIS_TICK_PADDING: f64 = 3.0;
const LABEL_LINE_SPACING_EM: f64 = 1.2;

pub(super) const AXIS_ROLES: [AxisRole; 4] = [
    AxisRole::XGrid,
    AxisRole::YGrid,
    AxisRole::XAxis,
    AxisRole::YAxis,
];

/// Axis or grid group for `role` under the given scales.
pub(super) fn build_axis(
    role: AxisRole,
    x_scale: LinearScale,
    y_scale: LinearScale,
    plot: BoxSize,
) -> AxisNode {
    let (scale, offset, tick_size) = match role {
        AxisRole::XGrid => (x_scale, Point::new(0.0, plot.height), -plot.height),
        AxisRole::YGrid => (y_scale, Point::new(0.0, 0.0), -plot.width),
        AxisRole::XAxis => (x_scale, Point::new(0.0, plot.height), AXIS_TICK_SIZE),
        AxisRole::YAxis => (y_scale, Point::new(0.0, 0.0), AXIS_TICK_SIZE),
    };
    let step = scale.tick_step(DEFAULT_TICK_COUNT);
    let ticks = scale
        .ticks(DEFAULT_TICK_COUNT)
        .into_iter()
        .map(|value| TickNode {
            value,
            position: scale.project(value),
            label: match role {
                AxisRole::XGrid | AxisRole::YGrid => String::new(),
                AxisRole::XAxis => format_integer_tick(value),
                AxisRole::YAxis => format_value_tick(value, step),
            },
            opacity: 1.0,
            visible: true,
        })
        .collect();

    AxisNode {
        role,
        offset,
        tick_size_inner: tick_size,
        tick_size_outer: tick_size,
        tick_padding: AXIS_TICK_PADDING,
        range: scale.range(),
        ticks,
    }
}

/// Monotone-X path of one series; absent values split the path.
pub(super) fn series_path(
    data: &DataSet,
    key: &str,
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> LinePath {
    LinePath::monotone_x(data.samples(key).map(|(year, value)| {
        value.map(|value| Point::new(x_scale.project(f64::from(year)), y_scale.project(value)))
    }))
}

pub(super) fn series_paths(
    data: &DataSet,
    series: &[SeriesDefinition],
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> Vec<LinePath> {
    #[cfg(feature = "parallel-projection")]
    {
        series
            .par_iter()
            .map(|definition| series_path(data, &definition.key, x_scale, y_scale))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        series
            .iter()
            .map(|definition| series_path(data, &definition.key, x_scale, y_scale))
            .collect()
    }
}

pub(super) fn label_position(entry: &LabelEntry, x_scale: LinearScale, y_scale: LinearScale) -> Point {
    Point::new(x_scale.project(entry.year), y_scale.project(entry.value))
}

pub(super) fn build_label(
    id: &str,
    entry: &LabelEntry,
    x_scale: LinearScale,
    y_scale: LinearScale,
    opacity: f64,
) -> LabelNode {
    let position = label_position(entry, x_scale, y_scale);
    let lines: SmallVec<[LabelLine; 2]> = split_label_lines(&entry.text)
        .into_iter()
        .enumerate()
        .map(|(index, text)| LabelLine {
            text: text.to_owned(),
            dy_em: if index == 0 { 0.0 } else { LABEL_LINE_SPACING_EM },
        })
        .collect();
    LabelNode {
        id: id.to_owned(),
        x: position.x,
        y: position.y,
        anchor: entry.style.text_anchor,
        color: entry.style.color.clone(),
        font_size_px: entry.style.font_size_px,
        opacity,
        lines,
    }
}

impl<R: Renderer> LineChartEngine<R> {
    /// Throws the scene away and rebuilds it from the container size, the
    /// current scales, the revealed set and the label registry.
    ///
    /// An in-flight domain transition is settled at its target; reveals keep
    /// their progress against the new path length; pending label fade-ins are
    /// dropped while fade-outs keep running.
    pub(super) fn rebuild(&mut self) -> ChartResult<()> {
        let canvas = self.container.box_size().validate()?;
        let plot = canvas.inner(self.config.margin);
        self.x_scale.set_range((0.0, plot.width))?;
        self.y_scale.set_range((plot.height, 0.0))?;
        let interrupted_transition = self.domain_transition.take().is_some();

        let container_id = self.container.id().to_owned();
        let x_scale = self.x_scale;
        let y_scale = self.y_scale;

        let paths = series_paths(&self.data, &self.config.series, x_scale, y_scale);
        let mut lines = IndexMap::with_capacity(self.config.series.len());
        for (definition, path) in self.config.series.iter().zip(paths) {
            let mut node = LineNode::new(
                definition.key.clone(),
                definition.color.clone(),
                self.config.line_stroke_width,
                path,
            );
            match self.lines.state(&definition.key) {
                LineState::Revealed => node.unmask(),
                LineState::Revealing => {
                    let progress = self
                        .lines
                        .reveal_progress(&definition.key, self.now_ms)
                        .unwrap_or(0.0);
                    node.mask_to_fraction(progress);
                }
                LineState::Concealed => node.mask_fully(),
            }
            lines.insert(definition.key.clone(), node);
        }

        self.labels.cancel_fade_ins();
        let mut labels = IndexMap::with_capacity(self.labels.len());
        for (id, entry) in self.labels.iter() {
            let opacity = entry
                .fade
                .map_or(1.0, |fade| fade.opacity_at(self.now_ms));
            labels.insert(
                id.to_owned(),
                build_label(id, entry, x_scale, y_scale, opacity),
            );
        }

        self.scene = Scene {
            clip: ClipRect {
                id: format!("{container_id}-clip"),
                width: plot.width,
                height: plot.height,
            },
            container_id,
            canvas,
            plot_origin: Point::new(self.config.margin.left, self.config.margin.top),
            plot_size: plot,
            x_grid: build_axis(AxisRole::XGrid, x_scale, y_scale, plot),
            y_grid: build_axis(AxisRole::YGrid, x_scale, y_scale, plot),
            x_axis: build_axis(AxisRole::XAxis, x_scale, y_scale, plot),
            y_axis: build_axis(AxisRole::YAxis, x_scale, y_scale, plot),
            lines,
            labels,
        };
        self.rebuild_count += 1;
        self.tick_thinning
            .schedule(self.now_ms, self.config.tick_thinning.delay_ms);

        debug!(
            width = canvas.width,
            height = canvas.height,
            lines = self.scene.lines.len(),
            labels = self.scene.labels.len(),
            rebuild = self.rebuild_count,
            "chart scene rebuilt"
        );
        if interrupted_transition {
            self.emit_plugin_event(PluginEvent::AxisRangesSettled);
        }
        self.emit_plugin_event(PluginEvent::Rebuilt {
            width: canvas.width,
            height: canvas.height,
        });
        Ok(())
    }
}
