//! Exponential smoothing.

use crate::error::FilterError;
use crate::{Filter, Result};

/// First-order recursive smoother.
///
/// Each output blends the new input with the previous output:
///
/// ```text
/// y[k] = c * x[k] + (1 - c) * y[k-1]
/// ```
///
/// The constant `c` lies in `(0, 1]`. Values near 1 track the input closely,
/// values near 0 smooth heavily. The state starts at zero, so the first
/// outputs ramp up from zero toward the input level.
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialFilter {
    constant: f64,
    filtered: f64,
}

impl ExponentialFilter {
    /// Creates a new exponential filter.
    ///
    /// # Arguments
    ///
    /// * `constant` - Weight of the newest sample, in `(0, 1]`
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`] if `constant` is outside
    /// `(0, 1]` or is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use smoothie::{ExponentialFilter, FilterError};
    ///
    /// assert!(ExponentialFilter::new(1.0).is_ok());
    /// assert!(matches!(
    ///     ExponentialFilter::new(0.0),
    ///     Err(FilterError::InvalidParameter { .. })
    /// ));
    /// ```
    pub fn new(constant: f64) -> Result<Self> {
        // Written so that NaN fails the check as well.
        if !(constant > 0.0 && constant <= 1.0) {
            return Err(FilterError::invalid(
                "constant",
                constant,
                "must be in the range (0, 1]",
            ));
        }
        tracing::trace!(constant, "created exponential filter");
        Ok(Self {
            constant,
            filtered: 0.0,
        })
    }

    /// The weight given to each new sample.
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// The most recent output, or zero after construction or reset.
    pub fn last_output(&self) -> f64 {
        self.filtered
    }
}

impl Filter for ExponentialFilter {
    fn apply(&mut self, sample: f64) -> f64 {
        self.filtered = self.constant * sample + (1.0 - self.constant) * self.filtered;
        self.filtered
    }

    fn reset(&mut self) {
        tracing::trace!(constant = self.constant, "resetting exponential filter");
        self.filtered = 0.0;
    }

    /// Only one prior output is stored, so there is nothing to resize.
    fn resize(&mut self, _size: usize) -> Result<()> {
        Ok(())
    }
}
