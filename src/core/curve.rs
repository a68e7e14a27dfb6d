//! Monotone-X cubic line paths with gap handling.
//!
//! A missing sample ends the current sub-path and the next present sample
//! starts a new one, so a line breaks over gaps instead of bridging them.
//! Control points follow the Steffen/Fritsch-Carlson tangent rule, which keeps
//! the curve monotone between samples and never overshoots a local extremum.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::types::Point;

const MAX_SUBDIVISION_DEPTH: u32 = 12;
const FLATNESS_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
    ClosePath,
}

/// Projected path geometry for one series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinePath {
    commands: Vec<PathCommand>,
}

impl LinePath {
    /// Builds a monotone-X curve through `samples`; `None` marks a gap.
    #[must_use]
    pub fn monotone_x<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = Option<Point>>,
    {
        let mut builder = MonotoneXBuilder::default();
        let mut in_line = false;
        for sample in samples {
            match sample {
                Some(point) if point.x.is_finite() && point.y.is_finite() => {
                    if !in_line {
                        builder.line_start();
                        in_line = true;
                    }
                    builder.point(point);
                }
                _ => {
                    if in_line {
                        builder.line_end();
                        in_line = false;
                    }
                }
            }
        }
        if in_line {
            builder.line_end();
        }
        Self {
            commands: builder.commands,
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::MoveTo(_)))
            .count()
    }

    /// Rendered stroke length, summed over every sub-path.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        let mut length = 0.0;
        let mut current = Point::new(0.0, 0.0);
        let mut subpath_start = current;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(point) => {
                    current = point;
                    subpath_start = point;
                }
                PathCommand::LineTo(point) => {
                    length += current.distance_to(point);
                    current = point;
                }
                PathCommand::CubicTo { c1, c2, to } => {
                    length += cubic_length(current, c1, c2, to, 0);
                    current = to;
                }
                PathCommand::ClosePath => {
                    length += current.distance_to(subpath_start);
                    current = subpath_start;
                }
            }
        }
        length
    }

    /// Whether both paths share the same command sequence, so they can be
    /// interpolated coordinate by coordinate.
    #[must_use]
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self.commands.len() == other.commands.len()
            && self
                .commands
                .iter()
                .zip(&other.commands)
                .all(|(left, right)| {
                    std::mem::discriminant(left) == std::mem::discriminant(right)
                })
    }

    /// Intermediate geometry between `self` (t = 0) and `target` (t = 1).
    ///
    /// Incompatible paths jump to `target` once `t` reaches 1 and stay on
    /// `self` before that.
    #[must_use]
    pub fn interpolate(&self, target: &Self, t: f64) -> Self {
        if t >= 1.0 {
            return target.clone();
        }
        if t <= 0.0 || !self.is_compatible_with(target) {
            return self.clone();
        }
        let commands = self
            .commands
            .iter()
            .zip(&target.commands)
            .map(|(from, to)| match (*from, *to) {
                (PathCommand::MoveTo(a), PathCommand::MoveTo(b)) => {
                    PathCommand::MoveTo(a.lerp(b, t))
                }
                (PathCommand::LineTo(a), PathCommand::LineTo(b)) => {
                    PathCommand::LineTo(a.lerp(b, t))
                }
                (
                    PathCommand::CubicTo {
                        c1: a1,
                        c2: a2,
                        to: a3,
                    },
                    PathCommand::CubicTo {
                        c1: b1,
                        c2: b2,
                        to: b3,
                    },
                ) => PathCommand::CubicTo {
                    c1: a1.lerp(b1, t),
                    c2: a2.lerp(b2, t),
                    to: a3.lerp(b3, t),
                },
                (_, to) => to,
            })
            .collect();
        Self { commands }
    }

    /// SVG path data (`M0,1C…L…Z`).
    #[must_use]
    pub fn to_svg_d(&self) -> String {
        let mut d = String::with_capacity(self.commands.len() * 24);
        for command in &self.commands {
            // Writing into a String never fails.
            let _ = match *command {
                PathCommand::MoveTo(p) => write!(d, "M{},{}", p.x, p.y),
                PathCommand::LineTo(p) => write!(d, "L{},{}", p.x, p.y),
                PathCommand::CubicTo { c1, c2, to } => write!(
                    d,
                    "C{},{},{},{},{},{}",
                    c1.x, c1.y, c2.x, c2.y, to.x, to.y
                ),
                PathCommand::ClosePath => write!(d, "Z"),
            };
        }
        d
    }
}

fn cubic_length(p0: Point, p1: Point, p2: Point, p3: Point, depth: u32) -> f64 {
    let chord = p0.distance_to(p3);
    let polygon = p0.distance_to(p1) + p1.distance_to(p2) + p2.distance_to(p3);
    if depth >= MAX_SUBDIVISION_DEPTH || polygon - chord <= FLATNESS_TOLERANCE {
        return (polygon + chord) / 2.0;
    }

    // de Casteljau split at t = 0.5
    let p01 = p0.lerp(p1, 0.5);
    let p12 = p1.lerp(p2, 0.5);
    let p23 = p2.lerp(p3, 0.5);
    let p012 = p01.lerp(p12, 0.5);
    let p123 = p12.lerp(p23, 0.5);
    let mid = p012.lerp(p123, 0.5);
    cubic_length(p0, p01, p012, mid, depth + 1) + cubic_length(mid, p123, p23, p3, depth + 1)
}

/// Incremental monotone-X curve state for one sub-path at a time.
#[derive(Debug)]
struct MonotoneXBuilder {
    commands: Vec<PathCommand>,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    t0: f64,
    point: u8,
}

impl Default for MonotoneXBuilder {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
            t0: f64::NAN,
            point: 0,
        }
    }
}

impl MonotoneXBuilder {
    fn line_start(&mut self) {
        self.x0 = f64::NAN;
        self.y0 = f64::NAN;
        self.x1 = f64::NAN;
        self.y1 = f64::NAN;
        self.t0 = f64::NAN;
        self.point = 0;
    }

    fn line_end(&mut self) {
        match self.point {
            2 => self
                .commands
                .push(PathCommand::LineTo(Point::new(self.x1, self.y1))),
            3 => {
                let t1 = self.slope2(self.t0);
                self.curve_to(self.t0, t1);
            }
            _ => {}
        }
        // An isolated sample is kept as a closed, zero-length sub-path.
        if self.point == 1 {
            self.commands.push(PathCommand::ClosePath);
        }
    }

    fn point(&mut self, point: Point) {
        let (x, y) = (point.x, point.y);
        if x == self.x1 && y == self.y1 {
            return;
        }

        let mut t1 = f64::NAN;
        match self.point {
            0 => {
                self.point = 1;
                self.commands.push(PathCommand::MoveTo(point));
            }
            1 => self.point = 2,
            2 => {
                self.point = 3;
                t1 = self.slope3(x, y);
                let t0 = self.slope2(t1);
                self.curve_to(t0, t1);
            }
            _ => {
                t1 = self.slope3(x, y);
                self.curve_to(self.t0, t1);
            }
        }

        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
        self.t0 = t1;
    }

    fn curve_to(&mut self, t0: f64, t1: f64) {
        let dx = (self.x1 - self.x0) / 3.0;
        self.commands.push(PathCommand::CubicTo {
            c1: Point::new(self.x0 + dx, self.y0 + dx * t0),
            c2: Point::new(self.x1 - dx, self.y1 - dx * t1),
            to: Point::new(self.x1, self.y1),
        });
    }

    /// Tangent at the middle sample from its two neighbours.
    fn slope3(&self, x2: f64, y2: f64) -> f64 {
        let h0 = self.x1 - self.x0;
        let h1 = x2 - self.x1;
        let d0 = if h0 != 0.0 {
            h0
        } else if h1 < 0.0 {
            -0.0
        } else {
            0.0
        };
        let d1 = if h1 != 0.0 {
            h1
        } else if h0 < 0.0 {
            -0.0
        } else {
            0.0
        };
        let s0 = (self.y1 - self.y0) / d0;
        let s1 = (y2 - self.y1) / d1;
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        if s0.is_nan() || s1.is_nan() || p.is_nan() {
            return 0.0;
        }
        let magnitude = s0.abs().min(s1.abs()).min(0.5 * p.abs());
        let slope = (sign(s0) + sign(s1)) * magnitude;
        if slope.is_nan() { 0.0 } else { slope }
    }

    /// One-sided tangent at an end sample.
    fn slope2(&self, t: f64) -> f64 {
        let h = self.x1 - self.x0;
        if h != 0.0 {
            (3.0 * (self.y1 - self.y0) / h - t) / 2.0
        } else {
            t
        }
    }
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::{LinePath, PathCommand};
    use crate::core::types::Point;

    fn samples(values: &[Option<f64>]) -> Vec<Option<Point>> {
        values
            .iter()
            .enumerate()
            .map(|(i, value)| value.map(|y| Point::new(i as f64 * 10.0, y)))
            .collect()
    }

    #[test]
    fn two_points_produce_a_straight_segment() {
        let path = LinePath::monotone_x(samples(&[Some(0.0), Some(10.0)]));
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(10.0, 10.0)),
            ]
        );
        assert!((path.total_length() - 200f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn gaps_split_the_path() {
        let path =
            LinePath::monotone_x(samples(&[Some(1.0), Some(2.0), None, Some(3.0), Some(4.0)]));
        assert_eq!(path.subpath_count(), 2);
    }

    #[test]
    fn isolated_sample_is_closed_and_zero_length() {
        let path = LinePath::monotone_x(samples(&[None, Some(5.0), None]));
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(10.0, 5.0)),
                PathCommand::ClosePath
            ]
        );
        assert_eq!(path.total_length(), 0.0);
        assert_eq!(path.to_svg_d(), "M10,5Z");
    }

    #[test]
    fn collinear_samples_keep_straight_length() {
        let path = LinePath::monotone_x(samples(&[Some(0.0), Some(10.0), Some(20.0), Some(30.0)]));
        let expected = 3.0 * 200f64.sqrt();
        assert!((path.total_length() - expected).abs() < 1e-6);
    }

    #[test]
    fn flat_extremum_does_not_overshoot() {
        let path = LinePath::monotone_x(samples(&[Some(0.0), Some(10.0), Some(0.0)]));
        for command in path.commands() {
            if let PathCommand::CubicTo { c1, c2, .. } = command {
                assert!(c1.y <= 10.0 + 1e-9);
                assert!(c2.y <= 10.0 + 1e-9);
            }
        }
    }

    #[test]
    fn interpolation_midpoint_between_compatible_paths() {
        let from = LinePath::monotone_x(samples(&[Some(0.0), Some(10.0)]));
        let to = LinePath::monotone_x(samples(&[Some(20.0), Some(30.0)]));
        let mid = from.interpolate(&to, 0.5);
        assert_eq!(mid.commands()[0], PathCommand::MoveTo(Point::new(0.0, 10.0)));
        assert_eq!(mid.commands()[1], PathCommand::LineTo(Point::new(10.0, 20.0)));
    }
}
