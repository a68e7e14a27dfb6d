use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    #[default]
    CubicInOut,
}

impl Ease {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let t = t * 2.0;
                if t <= 1.0 {
                    t * t * t / 2.0
                } else {
                    let t = t - 2.0;
                    (t * t * t + 2.0) / 2.0
                }
            }
        }
    }
}

/// Start time, duration and easing of one scheduled transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    pub start_ms: f64,
    pub duration_ms: f64,
    pub ease: Ease,
}

impl TransitionTiming {
    #[must_use]
    pub fn scheduled(now_ms: f64, delay_ms: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            start_ms: now_ms + delay_ms.max(0.0),
            duration_ms: duration_ms.max(0.0),
            ease,
        }
    }

    #[must_use]
    pub fn end_ms(self) -> f64 {
        self.start_ms + self.duration_ms
    }

    /// Linear progress in `[0, 1]`; zero before the delay elapses.
    #[must_use]
    pub fn raw_progress(self, now_ms: f64) -> f64 {
        if now_ms < self.start_ms {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn eased_progress(self, now_ms: f64) -> f64 {
        self.ease.apply(self.raw_progress(now_ms))
    }

    #[must_use]
    pub fn is_finished(self, now_ms: f64) -> bool {
        now_ms >= self.end_ms()
    }
}

/// Monotonic token identifying the transition currently allowed to commit
/// state for an entity.
#[derive(Debug, Default)]
pub(super) struct GenerationCounter {
    last: u64,
}

impl GenerationCounter {
    pub(super) fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::{Ease, TransitionTiming};

    #[test]
    fn cubic_in_out_is_symmetric() {
        assert_eq!(Ease::CubicInOut.apply(0.0), 0.0);
        assert_eq!(Ease::CubicInOut.apply(0.5), 0.5);
        assert_eq!(Ease::CubicInOut.apply(1.0), 1.0);
        let a = Ease::CubicInOut.apply(0.25);
        let b = Ease::CubicInOut.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn progress_waits_for_delay_and_clamps() {
        let timing = TransitionTiming::scheduled(100.0, 50.0, 200.0, Ease::Linear);
        assert_eq!(timing.raw_progress(120.0), 0.0);
        assert_eq!(timing.raw_progress(250.0), 0.5);
        assert_eq!(timing.raw_progress(1_000.0), 1.0);
        assert!(!timing.is_finished(349.0));
        assert!(timing.is_finished(350.0));
    }

    #[test]
    fn zero_duration_finishes_once_started() {
        let timing = TransitionTiming::scheduled(0.0, 10.0, 0.0, Ease::Linear);
        assert_eq!(timing.raw_progress(5.0), 0.0);
        assert_eq!(timing.raw_progress(10.0), 1.0);
        assert!(timing.is_finished(10.0));
    }
}
