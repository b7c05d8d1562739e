//! Moving-average smoothing over a fixed window.

use crate::error::{FilterError, ensure_positive};
use crate::{Filter, Result};

/// Averages the last `window` samples.
///
/// Samples are kept in a ring buffer together with their running sum, so each
/// call costs O(1) regardless of the window length: the value being
/// overwritten is subtracted from the sum and the new value added.
///
/// Until the window has filled, the empty slots count as zeros and the output
/// is still divided by the full window length. A fresh filter of window `w`
/// fed `x` therefore returns `x / w` first, and only reaches the true average
/// on the `w`-th sample.
///
/// # Examples
///
/// ```
/// use smoothie::{Filter, MovingAverageFilter};
///
/// let mut filter = MovingAverageFilter::new(4).unwrap();
/// assert_eq!(filter.apply(4.0), 1.0);
/// assert_eq!(filter.apply(4.0), 2.0);
/// assert_eq!(filter.apply(4.0), 3.0);
/// assert_eq!(filter.apply(4.0), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MovingAverageFilter {
    buffer: Vec<f64>,
    sum: f64,
    // Monotonic sample counter; the slot written is `count % buffer.len()`.
    count: u64,
}

impl MovingAverageFilter {
    /// Creates a moving-average filter over `window` samples.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`] if `window` is zero or too
    /// large for its buffer to be allocated.
    pub fn new(window: usize) -> Result<Self> {
        let buffer = zeroed_window(window)?;
        tracing::trace!(window, "created moving average filter");
        Ok(Self {
            buffer,
            sum: 0.0,
            count: 0,
        })
    }

    /// Creates a filter that averages over a time period.
    ///
    /// The window holds `round(frequency * period)` samples.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Rate at which samples arrive, in Hz
    /// * `period` - Length of time to average over, in seconds
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`] if either argument is not a
    /// positive finite number, or if the window rounds to zero samples or
    /// cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use smoothie::MovingAverageFilter;
    ///
    /// // 100 Hz sensor averaged over a quarter second
    /// let filter = MovingAverageFilter::from_period(100.0, 0.25).unwrap();
    /// assert_eq!(filter.window(), 25);
    /// ```
    pub fn from_period(frequency: f64, period: f64) -> Result<Self> {
        Self::new(window_from_period(frequency, period)?)
    }

    /// Number of samples averaged.
    pub fn window(&self) -> usize {
        self.buffer.len()
    }

    /// Sum of the samples currently held in the window.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Number of samples applied since construction or the last reset.
    pub fn samples_seen(&self) -> u64 {
        self.count
    }
}

impl Filter for MovingAverageFilter {
    fn apply(&mut self, sample: f64) -> f64 {
        let len = self.buffer.len();
        let index = (self.count % len as u64) as usize;

        self.sum += sample - self.buffer[index];
        self.buffer[index] = sample;
        self.count += 1;

        self.sum / len as f64
    }

    fn reset(&mut self) {
        tracing::trace!(window = self.buffer.len(), "resetting moving average filter");
        self.buffer.fill(0.0);
        self.sum = 0.0;
        self.count = 0;
    }

    fn resize(&mut self, size: usize) -> Result<()> {
        let buffer = zeroed_window(size)?;
        tracing::debug!(
            from = self.buffer.len(),
            to = size,
            "resizing moving average window"
        );
        self.buffer = buffer;
        self.reset();
        Ok(())
    }
}

/// Converts a sampling frequency and averaging period into a window length.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameter`] if either argument is not a
/// positive finite number, or if `round(frequency * period)` is below one.
pub fn window_from_period(frequency: f64, period: f64) -> Result<usize> {
    let frequency = ensure_positive("frequency", frequency)?;
    let period = ensure_positive("period", period)?;

    let samples = (frequency * period).round();
    if !samples.is_finite() || samples > MAX_WINDOW as f64 {
        return Err(FilterError::invalid(
            "window",
            samples,
            "frequency * period is too large",
        ));
    }
    if samples < 1.0 {
        return Err(FilterError::invalid(
            "window",
            samples,
            "frequency * period must round to at least one sample",
        ));
    }
    Ok(samples as usize)
}

// Largest window whose buffer size in bytes still fits in an `isize`.
const MAX_WINDOW: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Allocates a zero-filled window, reporting allocation failure as an error.
fn zeroed_window(window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(FilterError::invalid(
            "window",
            0.0,
            "must hold at least one sample",
        ));
    }
    if window > MAX_WINDOW {
        return Err(FilterError::invalid(
            "window",
            window as f64,
            "window is too large to allocate",
        ));
    }
    let mut buffer = Vec::new();
    if buffer.try_reserve_exact(window).is_err() {
        return Err(FilterError::invalid(
            "window",
            window as f64,
            "window is too large to allocate",
        ));
    }
    buffer.resize(window, 0.0);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sum_matches_buffer(filter: &MovingAverageFilter) {
        let total: f64 = filter.buffer.iter().sum();
        assert!((filter.sum - total).abs() < 1e-9);
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(matches!(
            MovingAverageFilter::new(0),
            Err(FilterError::InvalidParameter { name: "window", .. })
        ));
    }

    #[test]
    fn test_first_output_is_zero_padded() {
        for window in [1, 2, 5, 50] {
            let mut filter = MovingAverageFilter::new(window).unwrap();
            assert_eq!(filter.apply(10.0), 10.0 / window as f64);
        }
    }

    #[test]
    fn test_reaches_constant_on_last_window_slot() {
        for window in [1, 3, 8, 100] {
            let mut filter = MovingAverageFilter::new(window).unwrap();
            let mut y = 0.0;
            for _ in 0..window {
                y = filter.apply(2.0);
            }
            assert_eq!(y, 2.0);
        }
    }

    #[test]
    fn test_step_response_reaches_one() {
        let mut filter = MovingAverageFilter::new(4).unwrap();
        for _ in 0..4 {
            filter.apply(0.0);
        }
        let outputs: Vec<f64> = (0..4).map(|_| filter.apply(1.0)).collect();
        assert_eq!(outputs, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_old_samples_leave_window() {
        let mut filter = MovingAverageFilter::new(3).unwrap();
        filter.apply(9.0);
        filter.apply(0.0);
        filter.apply(0.0);
        // 9.0 is overwritten by this sample
        assert_eq!(filter.apply(0.0), 0.0);
    }

    #[test]
    fn test_running_sum_tracks_buffer() {
        let mut filter = MovingAverageFilter::new(7).unwrap();
        for i in 0..100 {
            filter.apply((i as f64 * 0.37).sin() * 5.0);
            assert_sum_matches_buffer(&filter);
        }
    }

    #[test]
    fn test_reset_restores_fresh_behavior() {
        let mut filter = MovingAverageFilter::new(4).unwrap();
        for _ in 0..10 {
            filter.apply(3.0);
        }
        filter.reset();

        assert_eq!(filter.sum(), 0.0);
        assert_eq!(filter.samples_seen(), 0);
        assert_eq!(filter.window(), 4);
        assert_eq!(filter.apply(8.0), 2.0);
    }

    #[test]
    fn test_resize_resets_and_uses_new_window() {
        let mut filter = MovingAverageFilter::new(4).unwrap();
        for _ in 0..6 {
            filter.apply(5.0);
        }
        filter.resize(2).unwrap();

        assert_eq!(filter.window(), 2);
        assert_eq!(filter.apply(4.0), 2.0);
        assert_eq!(filter.apply(4.0), 4.0);
        assert_sum_matches_buffer(&filter);
    }

    #[test]
    fn test_resize_to_zero_leaves_filter_untouched() {
        let mut filter = MovingAverageFilter::new(3).unwrap();
        filter.apply(3.0);
        let before = filter.clone();

        assert!(filter.resize(0).is_err());
        assert_eq!(filter, before);
    }

    #[test]
    fn test_huge_period_window_is_error_not_abort() {
        assert!(matches!(
            MovingAverageFilter::from_period(1e10, 1e8),
            Err(FilterError::InvalidParameter { name: "window", .. })
        ));
    }

    #[test]
    fn test_resize_to_unallocatable_window_leaves_filter_untouched() {
        let mut filter = MovingAverageFilter::new(4).unwrap();
        filter.apply(2.0);
        let before = filter.clone();

        assert!(matches!(
            filter.resize(usize::MAX),
            Err(FilterError::InvalidParameter { name: "window", .. })
        ));
        assert_eq!(filter, before);
        assert_eq!(filter.apply(2.0), 1.0);
    }

    #[test]
    fn test_non_dyadic_constant_settles_within_rounding() {
        // 0.1 has no exact binary form, so the running sum picks up rounding.
        for window in [3, 7, 10] {
            let mut filter = MovingAverageFilter::new(window).unwrap();
            let mut y = 0.0;
            for _ in 0..window {
                y = filter.apply(0.1);
            }
            assert!((y - 0.1).abs() < 1e-12, "window {} gave {}", window, y);
        }
    }

    #[test]
    fn test_window_from_period() {
        assert_eq!(window_from_period(100.0, 0.5).unwrap(), 50);
        assert_eq!(window_from_period(10.0, 0.26).unwrap(), 3);
        assert_eq!(window_from_period(10.0, 0.05).unwrap(), 1);
        assert_eq!(window_from_period(1000.0, 0.0015).unwrap(), 2);
    }

    #[test]
    fn test_window_from_period_rejects_bad_input() {
        assert!(window_from_period(10.0, 0.04).is_err());
        assert!(window_from_period(0.0, 1.0).is_err());
        assert!(window_from_period(10.0, -1.0).is_err());
        assert!(window_from_period(f64::NAN, 1.0).is_err());
        assert!(window_from_period(f64::MAX, f64::MAX).is_err());
    }

    #[test]
    fn test_from_period_builds_window() {
        let filter = MovingAverageFilter::from_period(20.0, 1.0).unwrap();
        assert_eq!(filter.window(), 20);
        assert!(MovingAverageFilter::from_period(20.0, 0.01).is_err());
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut filter = MovingAverageFilter::new(3).unwrap();
        filter.apply(3.0);
        let mut copy = filter.duplicate();

        assert_eq!(copy.apply(3.0), filter.apply(3.0));
        copy.apply(30.0);
        assert_ne!(copy.sum(), filter.sum());
    }
}
