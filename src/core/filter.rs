//! The streaming filter contract shared by every filter in the crate.

use crate::Result;

/// Common interface for all streaming filters.
///
/// A filter consumes one sample at a time and produces one output per input,
/// advancing its internal state on every call. Implementations must run in
/// constant time and constant extra memory per sample, so they can sit inside
/// a control loop at any rate.
///
/// Filters are plain owned values. Duplicating one yields an independent
/// instance with the same configuration *and* the same current state, which
/// is how [`MultiStreamFilter`](crate::MultiStreamFilter) seeds its channels.
///
/// # Examples
///
/// ```
/// use smoothie::{ExponentialFilter, Filter};
///
/// let mut filter = ExponentialFilter::new(0.5).unwrap();
/// assert_eq!(filter.apply(2.0), 1.0);
/// assert_eq!(filter.apply(2.0), 1.5);
///
/// filter.reset();
/// assert_eq!(filter.apply(2.0), 1.0);
/// ```
pub trait Filter: Clone {
    /// Feeds one sample into the filter and returns the filtered output.
    fn apply(&mut self, sample: f64) -> f64;

    /// Discards accumulated history, keeping the configuration.
    fn reset(&mut self);

    /// Changes the history length of window-based filters.
    ///
    /// Resizing always resets the filter, since old history cannot be carried
    /// over to a window of a different length. Filters without a history
    /// buffer accept any size and leave their state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`](crate::FilterError) if the
    /// filter keeps a window and `size` is zero. The filter is unchanged in
    /// that case.
    fn resize(&mut self, size: usize) -> Result<()>;

    /// Returns an independent copy with identical configuration and state.
    fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Filters a buffer in place, one sample at a time in order.
    ///
    /// Equivalent to calling [`apply`](Filter::apply) on each element.
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.apply(*sample);
        }
    }
}
