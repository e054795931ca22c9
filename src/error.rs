//! Error types for lathe.
//!
//! The pipeline stages themselves are infallible: short input degrades to
//! empty output rather than an error. Errors arise only from the session
//! mutation API and from parameter validation.

use thiserror::Error;

/// Result type alias using [`SculptError`].
pub type Result<T> = std::result::Result<T, SculptError>;

/// Errors that can occur while editing a sculpt session.
#[derive(Error, Debug)]
pub enum SculptError {
    /// A control-point removal would drop the profile below the minimum.
    #[error("profile must keep at least {minimum} control points")]
    ControlPointFloor {
        /// The enforced minimum number of control points.
        minimum: usize,
    },

    /// A control-point index does not exist.
    #[error("control point index {index} out of range ({count} points)")]
    ControlPointOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of control points in the profile.
        count: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl SculptError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        SculptError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
