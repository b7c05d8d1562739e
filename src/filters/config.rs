//! Declarative filter configuration.
//!
//! A `FilterConfig` names a filter variant and its parameters without building
//! it. Applications can keep these in their own settings (with the `serde`
//! feature enabled) and turn them into filters with [`FilterConfig::build`].

use super::{
    AnyFilter, ExponentialFilter, HighPassFilter, LowPassFilter, MovingAverageFilter, RcCircuit,
};
use crate::Result;

/// Parameters for one of the crate's filters.
///
/// # Examples
///
/// ```
/// use smoothie::{Filter, FilterConfig};
///
/// let config = FilterConfig::MovingAverageFromPeriod { frequency: 50.0, period: 0.1 };
/// let mut filter = config.build().unwrap();
/// assert_eq!(filter.apply(5.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum FilterConfig {
    /// Exponential smoothing with a constant in `(0, 1]`.
    Exponential { constant: f64 },
    /// Moving average over a fixed number of samples.
    MovingAverage { window: usize },
    /// Moving average over `round(frequency * period)` samples.
    MovingAverageFromPeriod { frequency: f64, period: f64 },
    /// RC low-pass filter sampled every `dt` seconds.
    LowPass { circuit: RcCircuit, dt: f64 },
    /// RC high-pass filter sampled every `dt` seconds.
    HighPass { circuit: RcCircuit, dt: f64 },
}

impl FilterConfig {
    /// Validates the parameters and constructs the filter.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`](crate::FilterError) under the
    /// same conditions as the corresponding constructor.
    pub fn build(&self) -> Result<AnyFilter> {
        let filter: AnyFilter = match *self {
            FilterConfig::Exponential { constant } => ExponentialFilter::new(constant)?.into(),
            FilterConfig::MovingAverage { window } => MovingAverageFilter::new(window)?.into(),
            FilterConfig::MovingAverageFromPeriod { frequency, period } => {
                MovingAverageFilter::from_period(frequency, period)?.into()
            }
            FilterConfig::LowPass { circuit, dt } => {
                LowPassFilter::from_circuit(circuit, dt)?.into()
            }
            FilterConfig::HighPass { circuit, dt } => {
                HighPassFilter::from_circuit(circuit, dt)?.into()
            }
        };
        tracing::debug!(kind = filter.name(), "built filter from config");
        Ok(filter)
    }
}

impl TryFrom<FilterConfig> for AnyFilter {
    type Error = crate::FilterError;

    fn try_from(config: FilterConfig) -> Result<Self> {
        config.build()
    }
}
