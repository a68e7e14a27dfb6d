use crate::core::ticks;
use crate::core::types::Domain;
use crate::error::{ChartError, ChartResult};

/// Linear mapping from a domain interval onto a pixel range.
///
/// Inputs outside the domain extrapolate; nothing is clamped. A degenerate
/// domain (`start == end`) projects every value onto the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: Domain, range: (f64, f64)) -> ChartResult<Self> {
        validate_interval(domain, "scale domain")?;
        validate_interval(range, "scale range")?;
        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> Domain {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn set_domain(&mut self, domain: Domain) -> ChartResult<()> {
        validate_interval(domain, "scale domain")?;
        self.domain_start = domain.0;
        self.domain_end = domain.1;
        Ok(())
    }

    pub fn set_range(&mut self, range: (f64, f64)) -> ChartResult<()> {
        validate_interval(range, "scale range")?;
        self.range_start = range.0;
        self.range_end = range.1;
        Ok(())
    }

    #[must_use]
    pub fn project(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (value - self.domain_start) / span
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (pixel - self.range_start) / span
        };
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Nice tick values inside the domain, about `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        ticks::ticks(self.domain_start, self.domain_end, count)
    }

    /// Step between the ticks returned by [`Self::ticks`].
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        ticks::tick_step(self.domain_start, self.domain_end, count)
    }
}

fn validate_interval(interval: (f64, f64), name: &str) -> ChartResult<()> {
    if !interval.0.is_finite() || !interval.1.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{name} bounds must be finite"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn inverted_range_maps_domain_max_to_top() {
        let scale = LinearScale::new((0.0, 220.0), (400.0, 0.0)).expect("scale");
        assert_eq!(scale.project(0.0), 400.0);
        assert_eq!(scale.project(220.0), 0.0);
        assert_eq!(scale.project(110.0), 200.0);
    }

    #[test]
    fn degenerate_domain_projects_to_range_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0)).expect("scale");
        assert_eq!(scale.project(5.0), 50.0);
        assert_eq!(scale.project(-30.0), 50.0);
    }

    #[test]
    fn rejects_non_finite_domain() {
        assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 1.0)).is_err());
        let mut scale = LinearScale::new((0.0, 1.0), (0.0, 1.0)).expect("scale");
        assert!(scale.set_domain((0.0, f64::INFINITY)).is_err());
        assert_eq!(scale.domain(), (0.0, 1.0));
    }
}
