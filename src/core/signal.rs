//! Sample sources that can be fed through filters.
//!
//! A `Signal` is anything that produces one sample per call: a sensor reading
//! replayed from memory, a synthetic test waveform, or another signal already
//! passed through a filter.

/// Common interface for all sample sources.
pub trait Signal {
    /// Produces the next sample.
    fn next_sample(&mut self) -> f64;

    /// Fills a buffer with consecutive samples.
    ///
    /// Default implementation calls `next_sample()` for each element.
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// A signal that always returns the same value.
///
/// Handy as a step input when checking how a filter settles.
///
/// # Examples
///
/// ```
/// use smoothie::{ConstantSignal, Signal};
///
/// let mut level = ConstantSignal(1.5);
/// assert_eq!(level.next_sample(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSignal(pub f64);

impl Signal for ConstantSignal {
    fn next_sample(&mut self) -> f64 {
        self.0
    }

    fn process(&mut self, buffer: &mut [f64]) {
        buffer.fill(self.0);
    }
}

impl From<f64> for ConstantSignal {
    fn from(value: f64) -> Self {
        ConstantSignal(value)
    }
}
