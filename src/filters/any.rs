//! A single type covering every filter variant.

use super::{ExponentialFilter, HighPassFilter, LowPassFilter, MovingAverageFilter};
use crate::{Filter, Result};

/// Any of the crate's filters, selected at runtime.
///
/// Lets callers pick a filter from configuration and still store it by value,
/// for example as the prototype of a
/// [`MultiStreamFilter`](crate::MultiStreamFilter).
///
/// # Examples
///
/// ```
/// use smoothie::{AnyFilter, Filter, MovingAverageFilter};
///
/// let mut filter: AnyFilter = MovingAverageFilter::new(2).unwrap().into();
/// assert_eq!(filter.apply(2.0), 1.0);
/// assert_eq!(filter.name(), "moving_average");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AnyFilter {
    Exponential(ExponentialFilter),
    MovingAverage(MovingAverageFilter),
    LowPass(LowPassFilter),
    HighPass(HighPassFilter),
}

impl AnyFilter {
    /// Short identifier of the active variant.
    pub fn name(&self) -> &'static str {
        match self {
            AnyFilter::Exponential(_) => "exponential",
            AnyFilter::MovingAverage(_) => "moving_average",
            AnyFilter::LowPass(_) => "low_pass",
            AnyFilter::HighPass(_) => "high_pass",
        }
    }
}

impl Filter for AnyFilter {
    fn apply(&mut self, sample: f64) -> f64 {
        match self {
            AnyFilter::Exponential(f) => f.apply(sample),
            AnyFilter::MovingAverage(f) => f.apply(sample),
            AnyFilter::LowPass(f) => f.apply(sample),
            AnyFilter::HighPass(f) => f.apply(sample),
        }
    }

    fn reset(&mut self) {
        match self {
            AnyFilter::Exponential(f) => f.reset(),
            AnyFilter::MovingAverage(f) => f.reset(),
            AnyFilter::LowPass(f) => f.reset(),
            AnyFilter::HighPass(f) => f.reset(),
        }
    }

    fn resize(&mut self, size: usize) -> Result<()> {
        match self {
            AnyFilter::Exponential(f) => f.resize(size),
            AnyFilter::MovingAverage(f) => f.resize(size),
            AnyFilter::LowPass(f) => f.resize(size),
            AnyFilter::HighPass(f) => f.resize(size),
        }
    }
}

impl From<ExponentialFilter> for AnyFilter {
    fn from(filter: ExponentialFilter) -> Self {
        AnyFilter::Exponential(filter)
    }
}

impl From<MovingAverageFilter> for AnyFilter {
    fn from(filter: MovingAverageFilter) -> Self {
        AnyFilter::MovingAverage(filter)
    }
}

impl From<LowPassFilter> for AnyFilter {
    fn from(filter: LowPassFilter) -> Self {
        AnyFilter::LowPass(filter)
    }
}

impl From<HighPassFilter> for AnyFilter {
    fn from(filter: HighPassFilter) -> Self {
        AnyFilter::HighPass(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<AnyFilter> {
        vec![
            ExponentialFilter::new(0.3).unwrap().into(),
            MovingAverageFilter::new(5).unwrap().into(),
            LowPassFilter::new(0.2, 0.05).unwrap().into(),
            HighPassFilter::new(0.2, 0.05).unwrap().into(),
        ]
    }

    #[test]
    fn test_dispatch_matches_concrete_filter() {
        let mut concrete = MovingAverageFilter::new(3).unwrap();
        let mut wrapped = AnyFilter::from(concrete.clone());
        for i in 0..20 {
            let x = i as f64;
            assert_eq!(wrapped.apply(x), concrete.apply(x));
        }
    }

    #[test]
    fn test_names() {
        let names: Vec<&str> = all_variants().iter().map(AnyFilter::name).collect();
        assert_eq!(names, ["exponential", "moving_average", "low_pass", "high_pass"]);
    }

    #[test]
    fn test_reset_matches_fresh_duplicate() {
        for prototype in all_variants() {
            let mut used = prototype.duplicate();
            for i in 0..10 {
                used.apply(i as f64);
            }
            used.reset();
            assert_eq!(used, prototype, "{} did not reset cleanly", prototype.name());
        }
    }

    #[test]
    fn test_resize_zero_only_fails_for_windowed() {
        for mut filter in all_variants() {
            let result = filter.resize(0);
            match filter {
                AnyFilter::MovingAverage(_) => assert!(result.is_err()),
                _ => assert!(result.is_ok()),
            }
        }
    }
}
