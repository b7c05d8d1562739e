//! Sine wave source.

use crate::Signal;
use std::f64::consts::PI;

/// A sine wave sampled at a fixed rate.
///
/// Maintains phase continuity across calls to `next_sample()`.
#[derive(Debug, Clone, PartialEq)]
pub struct SineWave {
    /// Current phase (0.0 to 1.0)
    phase: f64,
    /// Phase increment per sample (frequency / sample_rate)
    phase_increment: f64,
    amplitude: f64,
}

impl SineWave {
    /// Creates a unit-amplitude sine wave.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the wave in Hz
    /// * `sample_rate` - Rate at which samples are drawn, in Hz
    ///
    /// # Examples
    ///
    /// ```
    /// use smoothie::{Signal, SineWave};
    ///
    /// // One cycle every 360 samples
    /// let mut wave = SineWave::new(1.0, 360.0);
    /// assert_eq!(wave.next_sample(), 0.0);
    /// ```
    pub fn new(frequency: f64, sample_rate: f64) -> Self {
        Self {
            phase: 0.0,
            phase_increment: frequency / sample_rate,
            amplitude: 1.0,
        }
    }

    /// Starts the wave at `phase`, given as a fraction of a cycle.
    ///
    /// A phase of 0.25 turns the sine into a cosine.
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase.rem_euclid(1.0);
        self
    }

    /// Scales the wave to peak at `amplitude`.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Frequency in cycles per sample.
    pub fn cycles_per_sample(&self) -> f64 {
        self.phase_increment
    }
}

impl Signal for SineWave {
    fn next_sample(&mut self) -> f64 {
        let sample = self.amplitude * (self.phase * 2.0 * PI).sin();

        // Increment phase and wrap to [0.0, 1.0)
        self.phase += self.phase_increment;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        sample
    }
}
