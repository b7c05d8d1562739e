//! Discrete RC-circuit low-pass and high-pass filters.
//!
//! Both filters take their smoothing constant from an RC time constant and the
//! sampling interval `dt`:
//!
//! - low-pass: `c = dt / (RC + dt)`, then the exponential recurrence
//! - high-pass: `c = RC / (RC + dt)`, then `y[k] = c * y[k-1] + c * (x[k] - x[k-1])`

use super::ExponentialFilter;
use crate::error::ensure_positive;
use crate::{Filter, Result};

/// The resistor-capacitor pair whose product sets a filter's time constant.
///
/// # Examples
///
/// ```
/// use smoothie::RcCircuit;
///
/// let circuit = RcCircuit::from_components(1_000.0, 1e-4).unwrap();
/// assert!((circuit.time_constant() - 0.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RcCircuit {
    /// A precomputed RC product, in seconds.
    TimeConstant(f64),
    /// Resistance in ohms and capacitance in farads.
    Components { resistance: f64, capacitance: f64 },
}

impl RcCircuit {
    /// Uses an RC product directly.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`](crate::FilterError) unless
    /// `rc` is positive and finite.
    pub fn from_time_constant(rc: f64) -> Result<Self> {
        ensure_positive("rc", rc)?;
        Ok(RcCircuit::TimeConstant(rc))
    }

    /// Describes the circuit by its resistance and capacitance.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`](crate::FilterError) unless
    /// both components are positive and finite.
    pub fn from_components(resistance: f64, capacitance: f64) -> Result<Self> {
        ensure_positive("resistance", resistance)?;
        ensure_positive("capacitance", capacitance)?;
        Ok(RcCircuit::Components {
            resistance,
            capacitance,
        })
    }

    /// The RC product in seconds.
    pub fn time_constant(&self) -> f64 {
        match *self {
            RcCircuit::TimeConstant(rc) => rc,
            RcCircuit::Components {
                resistance,
                capacitance,
            } => resistance * capacitance,
        }
    }

    /// Re-checks a circuit that may have been built field by field.
    fn validated(&self) -> Result<f64> {
        match *self {
            RcCircuit::TimeConstant(rc) => ensure_positive("rc", rc),
            RcCircuit::Components {
                resistance,
                capacitance,
            } => {
                ensure_positive("resistance", resistance)?;
                ensure_positive("capacitance", capacitance)?;
                ensure_positive("rc", resistance * capacitance)
            }
        }
    }
}

/// Low-pass filter modelled on an RC circuit.
///
/// This is an [`ExponentialFilter`] whose constant is `dt / (RC + dt)`, so it
/// produces exactly the same outputs as that exponential filter.
///
/// # Examples
///
/// ```
/// use smoothie::{Filter, LowPassFilter};
///
/// // RC = dt gives a constant of one half
/// let mut lp = LowPassFilter::new(1.0, 1.0).unwrap();
/// assert_eq!(lp.constant(), 0.5);
/// assert_eq!(lp.apply(2.0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LowPassFilter {
    smoother: ExponentialFilter,
}

impl LowPassFilter {
    /// Creates a low-pass filter from an RC product and sampling interval.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`](crate::FilterError) unless
    /// `rc` and `dt` are positive and finite.
    pub fn new(rc: f64, dt: f64) -> Result<Self> {
        Self::from_circuit(RcCircuit::TimeConstant(rc), dt)
    }

    /// Creates a low-pass filter from separate resistance and capacitance.
    pub fn from_components(resistance: f64, capacitance: f64, dt: f64) -> Result<Self> {
        Self::from_circuit(RcCircuit::from_components(resistance, capacitance)?, dt)
    }

    /// Creates a low-pass filter from a circuit description.
    pub fn from_circuit(circuit: RcCircuit, dt: f64) -> Result<Self> {
        let rc = circuit.validated()?;
        let dt = ensure_positive("dt", dt)?;
        let smoother = ExponentialFilter::new(dt / (rc + dt))?;
        tracing::trace!(rc, dt, constant = smoother.constant(), "created low-pass filter");
        Ok(Self { smoother })
    }

    /// The derived smoothing constant `dt / (RC + dt)`.
    pub fn constant(&self) -> f64 {
        self.smoother.constant()
    }

    /// The most recent output.
    pub fn last_output(&self) -> f64 {
        self.smoother.last_output()
    }
}

impl Filter for LowPassFilter {
    fn apply(&mut self, sample: f64) -> f64 {
        self.smoother.apply(sample)
    }

    fn reset(&mut self) {
        self.smoother.reset();
    }

    fn resize(&mut self, size: usize) -> Result<()> {
        self.smoother.resize(size)
    }
}

/// High-pass filter modelled on an RC circuit.
///
/// Passes changes in the input and decays toward zero while the input holds
/// steady:
///
/// ```text
/// y[k] = c * y[k-1] + c * (x[k] - x[k-1]),   c = RC / (RC + dt)
/// ```
///
/// Both the previous output and the previous input start at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct HighPassFilter {
    constant: f64,
    filtered: f64,
    last_input: f64,
}

impl HighPassFilter {
    /// Creates a high-pass filter from an RC product and sampling interval.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`](crate::FilterError) unless
    /// `rc` and `dt` are positive and finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use smoothie::{Filter, HighPassFilter};
    ///
    /// let mut hp = HighPassFilter::new(1.0, 1.0).unwrap();
    /// assert_eq!(hp.apply(2.0), 1.0);
    /// assert_eq!(hp.apply(2.0), 0.5);
    /// ```
    pub fn new(rc: f64, dt: f64) -> Result<Self> {
        Self::from_circuit(RcCircuit::TimeConstant(rc), dt)
    }

    /// Creates a high-pass filter from separate resistance and capacitance.
    pub fn from_components(resistance: f64, capacitance: f64, dt: f64) -> Result<Self> {
        Self::from_circuit(RcCircuit::from_components(resistance, capacitance)?, dt)
    }

    /// Creates a high-pass filter from a circuit description.
    pub fn from_circuit(circuit: RcCircuit, dt: f64) -> Result<Self> {
        let rc = circuit.validated()?;
        let dt = ensure_positive("dt", dt)?;
        // Borrow the exponential filter's domain check for the derived constant.
        let constant = ExponentialFilter::new(rc / (rc + dt))?.constant();
        tracing::trace!(rc, dt, constant, "created high-pass filter");
        Ok(Self {
            constant,
            filtered: 0.0,
            last_input: 0.0,
        })
    }

    /// The derived constant `RC / (RC + dt)`.
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// The most recent output.
    pub fn last_output(&self) -> f64 {
        self.filtered
    }
}

impl Filter for HighPassFilter {
    fn apply(&mut self, sample: f64) -> f64 {
        self.filtered =
            self.constant * self.filtered + self.constant * (sample - self.last_input);
        self.last_input = sample;
        self.filtered
    }

    fn reset(&mut self) {
        tracing::trace!(constant = self.constant, "resetting high-pass filter");
        self.filtered = 0.0;
        self.last_input = 0.0;
    }

    fn resize(&mut self, _size: usize) -> Result<()> {
        Ok(())
    }
}
