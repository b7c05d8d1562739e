//! Smoothie - streaming filters for noisy sensor data.
//!
//! Filters here consume one sample at a time at the caller's own cadence, which
//! makes them suitable for real-time control loops. Each filter produces one
//! output per input in constant time.
//!
//! ```
//! use smoothie::{ExponentialFilter, Filter, MovingAverageFilter, MultiStreamFilter};
//!
//! let mut smoother = ExponentialFilter::new(0.1).unwrap();
//! let _ = smoother.apply(0.42);
//!
//! // One moving average per axis of an accelerometer
//! let mut accel = MultiStreamFilter::new(&MovingAverageFilter::new(8).unwrap(), 3).unwrap();
//! let _ = accel.apply(&[0.01, -0.02, 9.81]).unwrap();
//! ```

pub mod core;
pub mod error;
pub mod filters;
pub mod multistream;
#[cfg(feature = "signals")]
pub mod signals;

// Re-export commonly used types at the crate root
pub use self::core::{Add, ConstantSignal, Filter, Filtered, Signal, SignalExt};
pub use error::{FilterError, Result};
pub use filters::{
    AnyFilter, ExponentialFilter, FilterConfig, HighPassFilter, LowPassFilter,
    MovingAverageFilter, RcCircuit, window_from_period,
};
pub use multistream::MultiStreamFilter;
#[cfg(feature = "signals")]
pub use signals::{SineWave, WhiteNoise};
