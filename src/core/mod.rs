//! Core traits for streaming filters and the signals they consume.
//!
//! This module provides:
//! - `Filter` trait implemented by every filter in the crate
//! - `Signal` trait for sample sources
//! - `SignalExt` combinators for mixing signals and running them through filters
//! - `ConstantSignal` for fixed step inputs

pub mod combinators;
mod filter;
mod signal;

pub use combinators::{Add, Filtered, SignalExt};
pub use filter::Filter;
pub use signal::{ConstantSignal, Signal};
