//! Synthetic test signals.
//!
//! Sources for exercising filters without real sensor hardware: clean
//! periodic waveforms and random noise to put on top of them.
//!
//! Requires the `signals` feature (enabled by default).

mod noise;
mod sine;

pub use noise::WhiteNoise;
pub use sine::SineWave;
