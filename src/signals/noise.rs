//! White noise source.

use crate::Signal;
use rand::Rng;

/// Uniform white noise in `[-amplitude, amplitude]`.
///
/// Added to a clean waveform it stands in for sensor noise. A negative
/// amplitude uses its magnitude; NaN or infinite amplitudes give silence.
pub struct WhiteNoise<R: Rng = rand::rngs::ThreadRng> {
    amplitude: f64,
    rng: R,
}

impl WhiteNoise<rand::rngs::ThreadRng> {
    /// Creates a noise source backed by the thread-local RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use smoothie::{Signal, WhiteNoise};
    ///
    /// let mut noise = WhiteNoise::new(0.1);
    /// assert!(noise.next_sample().abs() <= 0.1);
    /// ```
    pub fn new(amplitude: f64) -> Self {
        Self {
            amplitude: peak(amplitude),
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a noise source with a custom RNG, e.g. a seeded one for
    /// reproducible runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use smoothie::{Signal, WhiteNoise};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoise::with_rng(0.5, rng);
    /// let sample = noise.next_sample();
    /// ```
    pub fn with_rng(amplitude: f64, rng: R) -> Self {
        Self {
            amplitude: peak(amplitude),
            rng,
        }
    }

    /// Peak magnitude of the noise.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

// `gen_range` needs finite bounds.
fn peak(amplitude: f64) -> f64 {
    if amplitude.is_finite() {
        amplitude.abs()
    } else {
        0.0
    }
}

impl<R: Rng> Signal for WhiteNoise<R> {
    fn next_sample(&mut self) -> f64 {
        if self.amplitude == 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-self.amplitude..=self.amplitude)
    }
}
