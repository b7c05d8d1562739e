//! Streaming smoothing filters.
//!
//! This module provides:
//! - [`ExponentialFilter`] - single-state recursive smoother
//! - [`MovingAverageFilter`] - fixed-window ring-buffer average
//! - [`LowPassFilter`] and [`HighPassFilter`] - RC-circuit parameterised filters
//! - [`AnyFilter`] - runtime choice between the variants above
//! - [`FilterConfig`] - declarative parameters that build an [`AnyFilter`]

mod any;
mod config;
mod exponential;
mod moving_average;
mod rc;

pub use self::any::AnyFilter;
pub use self::config::FilterConfig;
pub use self::exponential::ExponentialFilter;
pub use self::moving_average::{MovingAverageFilter, window_from_period};
pub use self::rc::{HighPassFilter, LowPassFilter, RcCircuit};
