//! Error types for slider configuration.

use thiserror::Error;

/// Errors raised while building a slider from its options.
///
/// Interaction never produces an error: a pointer move that would break an
/// invariant is dropped and the slider keeps its previous state.
#[derive(Debug, Error)]
pub enum SliderError {
    /// A numeric option is NaN or infinite
    #[error("Option '{field}' must be finite, got {value}")]
    NonFinite {
        /// Name of the offending option
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// `min` is not strictly below `max`
    #[error("Invalid bounds: min ({min}) must be less than max ({max})")]
    InvalidBounds {
        /// Configured minimum
        min: f64,
        /// Configured maximum
        max: f64,
    },

    /// Snapping step is zero or negative
    #[error("Invalid increment: {0} (must be greater than zero)")]
    InvalidIncrement(f64),

    /// A bound that truncation snapping would move outside the range
    #[error("Bound '{field}' ({value}) is not a multiple of increment {increment}")]
    MisalignedBound {
        /// Either "min" or "max"
        field: &'static str,
        /// The bound value
        value: f64,
        /// Configured increment
        increment: f64,
    },

    /// Initial value lies outside `[min, max]`
    #[error("Initial {field} ({value}) is outside [{min}, {max}]")]
    OutOfBounds {
        /// Either "start" or "end"
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Configured minimum
        min: f64,
        /// Configured maximum
        max: f64,
    },

    /// Initial start lies after initial end
    #[error("Initial start ({start}) is greater than end ({end})")]
    StartAfterEnd {
        /// Initial start value
        start: f64,
        /// Initial end value
        end: f64,
    },

    /// Options could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SliderError>;
