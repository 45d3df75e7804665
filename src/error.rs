//! Error types.

use thiserror::Error;

/// Encoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// No supported version can hold the payload.
    #[error("payload too long: {len} bytes exceeds maximum {max} bytes")]
    CapacityExceeded {
        /// Payload length in bytes.
        len: usize,
        /// Largest payload the supported versions accept.
        max: usize,
    },
}

/// Payment link errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UpiError {
    /// Payee address is empty or has no `@`.
    #[error("invalid payee address: {0:?}")]
    InvalidPayeeAddress(String),

    /// Payee name is empty after trimming.
    #[error("payee name is empty")]
    EmptyPayeeName,

    /// Amount is not a positive finite number.
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),
}

/// Rendering errors for file output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Raster encoding failed.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// Writing the output failed.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}
