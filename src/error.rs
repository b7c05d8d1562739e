//! Error types for filter construction and application.

use thiserror::Error;

/// Errors reported by filter constructors, `resize`, and multi-stream `apply`.
///
/// Configuration is checked when it is supplied. Once a filter exists, scalar
/// `apply` cannot fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A configuration value is outside its valid domain.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A vector sample does not have one component per channel.
    #[error("configuration mismatch: expected {expected} channels, got {actual}")]
    ConfigurationMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        tracing::debug!(parameter = name, value, reason, "rejected filter parameter");
        FilterError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(FilterError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(FilterError::invalid(name, value, "must be greater than zero"));
    }
    Ok(value)
}
