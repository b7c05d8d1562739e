//! Filtering vector-valued streams channel by channel.

use crate::error::FilterError;
use crate::{AnyFilter, Filter, FilterConfig, Result};

/// Applies one filter configuration independently to every channel of a
/// vector stream.
///
/// Useful when a sensor reports several values at once, e.g. `[x, y, z]`, and
/// each component should be smoothed on its own. Every channel owns a
/// duplicate of the prototype filter, so channels share configuration but
/// never state; the result for a channel does not depend on the others.
///
/// # Examples
///
/// ```
/// use smoothie::{MovingAverageFilter, MultiStreamFilter};
///
/// let prototype = MovingAverageFilter::new(2).unwrap();
/// let mut xyz = MultiStreamFilter::new(&prototype, 3).unwrap();
///
/// assert_eq!(xyz.apply(&[2.0, 4.0, 6.0]).unwrap(), vec![1.0, 2.0, 3.0]);
/// assert!(xyz.apply(&[1.0, 2.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MultiStreamFilter<F: Filter = AnyFilter> {
    channels: Vec<F>,
}

impl<F: Filter> MultiStreamFilter<F> {
    /// Creates `channels` independent duplicates of `prototype`.
    ///
    /// Each channel starts from the prototype's current state, not a reset
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`] if `channels` is zero.
    pub fn new(prototype: &F, channels: usize) -> Result<Self> {
        if channels == 0 {
            return Err(FilterError::invalid(
                "channels",
                0.0,
                "must have at least one channel",
            ));
        }
        tracing::debug!(channels, "created multi-stream filter");
        Ok(Self {
            channels: (0..channels).map(|_| prototype.duplicate()).collect(),
        })
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.channels.len()
    }

    /// Borrows the filter for one channel.
    pub fn channel(&self, index: usize) -> Option<&F> {
        self.channels.get(index)
    }

    /// Filters one vector sample, returning one output per channel.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ConfigurationMismatch`] if `input` does not
    /// have exactly one value per channel. No channel is advanced in that
    /// case.
    pub fn apply(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.check_len(input.len())?;
        Ok(self
            .channels
            .iter_mut()
            .zip(input)
            .map(|(filter, &x)| filter.apply(x))
            .collect())
    }

    /// Filters one vector sample into a caller-provided buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ConfigurationMismatch`] if either slice length
    /// differs from the channel count. No channel is advanced in that case.
    pub fn apply_into(&mut self, input: &[f64], output: &mut [f64]) -> Result<()> {
        self.check_len(input.len())?;
        self.check_len(output.len())?;
        for ((filter, &x), y) in self.channels.iter_mut().zip(input).zip(output.iter_mut()) {
            *y = filter.apply(x);
        }
        Ok(())
    }

    /// Filters a fixed-size vector sample.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ConfigurationMismatch`] if `N` differs from the
    /// channel count.
    ///
    /// # Examples
    ///
    /// ```
    /// use smoothie::{ExponentialFilter, MultiStreamFilter};
    ///
    /// let mut pair = MultiStreamFilter::new(&ExponentialFilter::new(0.5).unwrap(), 2).unwrap();
    /// assert_eq!(pair.apply_array([2.0, -2.0]).unwrap(), [1.0, -1.0]);
    /// ```
    pub fn apply_array<const N: usize>(&mut self, input: [f64; N]) -> Result<[f64; N]> {
        let mut output = [0.0; N];
        self.apply_into(&input, &mut output)?;
        Ok(output)
    }

    /// Resets every channel.
    pub fn reset(&mut self) {
        tracing::debug!(channels = self.channels.len(), "resetting multi-stream filter");
        for filter in &mut self.channels {
            filter.reset();
        }
    }

    /// Resizes every channel to the same history length.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`] if the channels' filter
    /// rejects `size`. Since all channels share a configuration, either every
    /// channel accepts the size or none is modified.
    pub fn resize(&mut self, size: usize) -> Result<()> {
        for filter in &mut self.channels {
            filter.resize(size)?;
        }
        Ok(())
    }

    fn check_len(&self, actual: usize) -> Result<()> {
        let expected = self.channels.len();
        if actual != expected {
            tracing::trace!(expected, actual, "multi-stream sample has wrong length");
            return Err(FilterError::ConfigurationMismatch { expected, actual });
        }
        Ok(())
    }
}

impl MultiStreamFilter<AnyFilter> {
    /// Builds the prototype from a configuration and replicates it.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`] if the configuration is
    /// invalid or `channels` is zero.
    pub fn from_config(config: &FilterConfig, channels: usize) -> Result<Self> {
        Self::new(&config.build()?, channels)
    }
}
