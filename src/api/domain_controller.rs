use tracing::debug;

use crate::core::Point;
use crate::error::ChartResult;
use crate::extensions::PluginEvent;
use crate::render::{AxisRole, Renderer};

use super::domain_transition::DomainTransition;
use super::line_state::LineState;
use super::scene_builder::{AXIS_ROLES, build_axis, label_position, series_path};
use super::transition::{Ease, TransitionTiming};
use super::validation::{validate_domain, validate_timing};
use super::{AxisRangeOptions, LineChartEngine};

impl<R: Renderer> LineChartEngine<R> {
    /// Animates both axes, the visible lines and every label to new domains.
    ///
    /// Concealed and revealing lines take the new geometry at once and stay
    /// masked, so a rescale never exposes a hidden line.
    pub fn set_axis_ranges(&mut self, options: AxisRangeOptions) -> ChartResult<()> {
        validate_timing(0.0, options.duration_ms, "axis transition")?;
        if let Some(domain) = options.x_domain {
            validate_domain(domain, "x")?;
        }
        if let Some(domain) = options.y_domain {
            validate_domain(domain, "y")?;
        }

        let previous_x = self.x_scale;
        let previous_y = self.y_scale;
        if let Some(domain) = options.x_domain {
            self.x_scale.set_domain(domain)?;
            self.config.x_domain = domain;
        }
        if let Some(domain) = options.y_domain {
            self.y_scale.set_domain(domain)?;
            self.config.y_domain = domain;
        }
        let x_scale = self.x_scale;
        let y_scale = self.y_scale;
        let plot = self.scene.plot_size;

        let timing =
            TransitionTiming::scheduled(self.now_ms, 0.0, options.duration_ms, Ease::CubicInOut);
        let mut transition = DomainTransition::new(timing);
        for role in AXIS_ROLES {
            let (previous, next) = match role {
                AxisRole::XGrid | AxisRole::XAxis => (previous_x, x_scale),
                AxisRole::YGrid | AxisRole::YAxis => (previous_y, y_scale),
            };
            let target = build_axis(role, x_scale, y_scale, plot);
            transition.plan_axis(self.scene.axis(role), target, previous, next);
        }

        for series in &self.config.series {
            let Some(node) = self.scene.lines.get_mut(&series.key) else {
                continue;
            };
            let path = series_path(&self.data, &series.key, x_scale, y_scale);
            match self.lines.state(&series.key) {
                LineState::Revealed => transition.plan_morph(&series.key, node.path.clone(), path),
                LineState::Revealing => {
                    node.set_path(path);
                    let progress = self
                        .lines
                        .reveal_progress(&series.key, self.now_ms)
                        .unwrap_or(0.0);
                    node.mask_to_fraction(progress);
                }
                LineState::Concealed => {
                    node.set_path(path);
                    node.mask_fully();
                }
            }
        }

        for (id, entry) in self.labels.iter() {
            if let Some(node) = self.scene.labels.get(id) {
                transition.plan_label_move(
                    id,
                    Point::new(node.x, node.y),
                    label_position(entry, x_scale, y_scale),
                );
            }
        }

        transition.begin(&mut self.scene);
        self.domain_transition = Some(transition);
        self.tick_thinning
            .schedule(self.now_ms, self.config.tick_thinning.delay_ms);

        let (x_start, x_end) = x_scale.domain();
        let (y_start, y_end) = y_scale.domain();
        debug!(
            x_start,
            x_end,
            y_start,
            y_end,
            duration_ms = options.duration_ms,
            "axis domain transition started"
        );
        self.emit_plugin_event(PluginEvent::AxisRangesChanged {
            x_domain: x_scale.domain(),
            y_domain: y_scale.domain(),
        });
        self.step_domain_transition();
        Ok(())
    }
}
