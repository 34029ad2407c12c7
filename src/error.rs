//! Custom error types for the driver.
//!
//! This module defines the primary error type, `SensorError`, for the whole
//! crate. Using the `thiserror` crate, it provides a centralized and
//! consistent way to classify the failures this control path can hit.
//!
//! ## Error Hierarchy
//!
//! - **`Transport`**: A register read or write on the control bus failed.
//!   Always fatal to the in-progress operation; the driver never retries
//!   internally.
//! - **`Configuration`**: The attach-time configuration is unsupported
//!   (external clock frequency, lane count, or link-frequency set). Fatal
//!   to attach; never raised afterwards.
//! - **`Range`**: A requested control value lies outside the currently
//!   published valid range. The request is rejected before any hardware
//!   access, so the previous value stays in effect.
//! - **`Sequence`**: An operation was invoked in a state that forbids it,
//!   such as a flip change while streaming or a stream start while the
//!   device is unpowered.
//!
//! The one case that is deliberately *not* an error: a control write while
//! the device is unpowered. That is a defined success with deferred effect,
//! replayed on the next stream start.

use thiserror::Error;

/// Convenience alias for results using the driver error type.
pub type SensorResult<T> = std::result::Result<T, SensorError>;

/// Errors produced by the IMX585 control path.
#[derive(Error, Debug)]
pub enum SensorError {
    /// Register read/write failed on the control bus.
    #[error("register transport error at 0x{addr:04x}: {reason}")]
    Transport {
        /// Register address the transfer targeted.
        addr: u16,
        /// Platform-specific failure description.
        reason: String,
    },

    /// Unsupported attach-time configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Control value outside the currently published range.
    #[error("{ctrl} value {value} outside valid range [{min}, {max}]")]
    Range {
        /// Name of the rejected control.
        ctrl: &'static str,
        /// Requested value.
        value: u32,
        /// Current lower bound (inclusive).
        min: u32,
        /// Current upper bound (inclusive).
        max: u32,
    },

    /// Operation invoked in a state that forbids it.
    #[error("sequence error: {0}")]
    Sequence(String),
}

impl SensorError {
    /// Builds a `Transport` error for a failed transfer at `addr`.
    pub fn transport(addr: u16, reason: impl Into<String>) -> Self {
        SensorError::Transport {
            addr,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SensorError::transport(0x3050, "i2c nack");
        assert_eq!(
            err.to_string(),
            "register transport error at 0x3050: i2c nack"
        );
    }

    #[test]
    fn test_range_error_display() {
        let err = SensorError::Range {
            ctrl: "exposure",
            value: 2250,
            min: 8,
            max: 2248,
        };
        assert!(err.to_string().contains("2250"));
        assert!(err.to_string().contains("[8, 2248]"));
    }
}
