use std::collections::HashMap;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::core::{LinePath, LinearScale, Point};
use crate::render::{AxisNode, AxisRole, Scene, TickNode};

use super::transition::TransitionTiming;

#[derive(Debug, Clone, PartialEq)]
struct TickTween {
    value: f64,
    label: String,
    from_position: f64,
    to_position: f64,
    from_opacity: f64,
    to_opacity: f64,
    visible: bool,
}

impl TickTween {
    fn at(&self, t: f64) -> TickNode {
        TickNode {
            value: self.value,
            position: self.from_position + (self.to_position - self.from_position) * t,
            label: self.label.clone(),
            opacity: (self.from_opacity + (self.to_opacity - self.from_opacity) * t)
                .clamp(0.0, 1.0),
            visible: self.visible,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct AxisTween {
    role: AxisRole,
    ticks: Vec<TickTween>,
    target: AxisNode,
}

#[derive(Debug, Clone, PartialEq)]
struct PathMorph {
    from: LinePath,
    to: LinePath,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LabelMove {
    from: Point,
    to: Point,
}

/// One animated rescale of both axes and everything drawn against them.
///
/// Axis ticks follow an enter/update/exit join keyed by tick value: entering
/// ticks start where the previous scale would have placed them and fade in,
/// exiting ticks slide to their new position while fading out and disappear
/// when the transition settles.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct DomainTransition {
    pub(super) timing: TransitionTiming,
    axes: Vec<AxisTween>,
    morphs: IndexMap<String, PathMorph>,
    label_moves: IndexMap<String, LabelMove>,
}

impl DomainTransition {
    pub(super) fn new(timing: TransitionTiming) -> Self {
        Self {
            timing,
            axes: Vec::with_capacity(4),
            morphs: IndexMap::new(),
            label_moves: IndexMap::new(),
        }
    }

    /// Joins the displayed ticks of `current` against `target`.
    pub(super) fn plan_axis(
        &mut self,
        current: &AxisNode,
        target: AxisNode,
        previous_scale: LinearScale,
        next_scale: LinearScale,
    ) {
        let displayed: HashMap<OrderedFloat<f64>, &TickNode> = current
            .ticks
            .iter()
            .map(|tick| (OrderedFloat(tick.value), tick))
            .collect();

        let mut ticks = Vec::with_capacity(target.ticks.len() + current.ticks.len());
        for tick in &target.ticks {
            let tween = match displayed.get(&OrderedFloat(tick.value)) {
                Some(shown) => TickTween {
                    value: tick.value,
                    label: tick.label.clone(),
                    from_position: shown.position,
                    to_position: tick.position,
                    from_opacity: shown.opacity,
                    to_opacity: 1.0,
                    visible: shown.visible,
                },
                None => {
                    let entering_at = previous_scale.project(tick.value);
                    TickTween {
                        value: tick.value,
                        label: tick.label.clone(),
                        from_position: if entering_at.is_finite() {
                            entering_at
                        } else {
                            tick.position
                        },
                        to_position: tick.position,
                        from_opacity: 0.0,
                        to_opacity: 1.0,
                        visible: true,
                    }
                }
            };
            ticks.push(tween);
        }

        for shown in &current.ticks {
            if target.tick(shown.value).is_some() {
                continue;
            }
            let leaving_to = next_scale.project(shown.value);
            ticks.push(TickTween {
                value: shown.value,
                label: shown.label.clone(),
                from_position: shown.position,
                to_position: if leaving_to.is_finite() {
                    leaving_to
                } else {
                    shown.position
                },
                from_opacity: shown.opacity,
                to_opacity: 0.0,
                visible: shown.visible,
            });
        }

        self.axes.push(AxisTween {
            role: target.role,
            ticks,
            target,
        });
    }

    pub(super) fn plan_morph(&mut self, key: &str, from: LinePath, to: LinePath) {
        self.morphs.insert(key.to_owned(), PathMorph { from, to });
    }

    pub(super) fn plan_label_move(&mut self, id: &str, from: Point, to: Point) {
        self.label_moves
            .insert(id.to_owned(), LabelMove { from, to });
    }

    /// Stops morphing `key` and hands back the geometry it was heading for.
    pub(super) fn take_morph(&mut self, key: &str) -> Option<LinePath> {
        self.morphs.shift_remove(key).map(|morph| morph.to)
    }

    pub(super) fn forget_label(&mut self, id: &str) {
        self.label_moves.shift_remove(id);
    }

    /// Replaces the displayed ticks with the joined tick lists at `t = 0`.
    pub(super) fn begin(&self, scene: &mut Scene) {
        self.write_axes(scene, 0.0, false);
    }

    /// Writes the state at eased progress `t` into `scene`.
    ///
    /// Tick visibility is read back from the scene by index, so thinning that
    /// ran mid-transition survives later frames.
    pub(super) fn apply(&self, scene: &mut Scene, t: f64) {
        self.write_axes(scene, t, true);
        for (key, morph) in &self.morphs {
            if let Some(line) = scene.lines.get_mut(key) {
                line.set_path(morph.from.interpolate(&morph.to, t));
            }
        }
        for (id, movement) in &self.label_moves {
            if let Some(label) = scene.labels.get_mut(id) {
                let position = movement.from.lerp(movement.to, t);
                label.x = position.x;
                label.y = position.y;
            }
        }
    }

    fn write_axes(&self, scene: &mut Scene, t: f64, keep_visibility: bool) {
        for axis in &self.axes {
            let node = scene.axis_mut(axis.role);
            let ticks = axis
                .ticks
                .iter()
                .enumerate()
                .map(|(index, tween)| {
                    let mut tick = tween.at(t);
                    if keep_visibility {
                        if let Some(shown) = node.ticks.get(index) {
                            tick.visible = shown.visible;
                        }
                    }
                    tick
                })
                .collect();
            node.ticks = ticks;
            node.range = axis.target.range;
            node.offset = axis.target.offset;
            node.tick_size_inner = axis.target.tick_size_inner;
            node.tick_size_outer = axis.target.tick_size_outer;
        }
    }

    /// Lands every tween on its target; exiting ticks are dropped.
    pub(super) fn finish(self, scene: &mut Scene) {
        for axis in self.axes {
            *scene.axis_mut(axis.role) = axis.target;
        }
        for (key, morph) in self.morphs {
            if let Some(line) = scene.lines.get_mut(&key) {
                line.set_path(morph.to);
            }
        }
        for (id, movement) in self.label_moves {
            if let Some(label) = scene.labels.get_mut(&id) {
                label.x = movement.to.x;
                label.y = movement.to.y;
            }
        }
    }
}
