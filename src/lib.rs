//! upi_qr - Offline QR code encoder for payment deep links
//!
//! A pure Rust QR code generator for byte-mode payloads up to version 10 at
//! error correction level M. No network or platform services are involved:
//! a payload goes in, SVG markup (or a raster or text rendering) comes out.
//!
//! ```
//! let svg = upi_qr::encode(b"upi://pay?pa=a@b&pn=C&am=10.00&cu=INR&tn=x", 4, 4).unwrap();
//! assert!(svg.contains(r#"width="148""#));
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (version selection, error correction, matrix construction)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (QrCode, BitMatrix, ModuleGrid, Version, etc.)
pub mod models;
/// SVG, raster and text renderers
pub mod render;
/// Helpers for the qrtool binary (payload input, output files, inspection)
pub mod tools;
/// UPI payment links
pub mod upi;

mod pipeline;

pub use encoder::config::{Compliance, EncoderConfig};
pub use error::{EncodeError, RenderError, UpiError};
pub use models::{BitMatrix, ECLevel, MaskPattern, QrCode, Version};
pub use upi::{UpiPayment, is_valid_upi_id};

/// Encode `text` as a QR code and render it as SVG markup
///
/// # Arguments
/// * `text` - Payload bytes, encoded in byte mode
/// * `module_size` - Pixels per module edge, clamped to `1..=64`
/// * `quiet_zone` - Light border width in modules, at most 64
///
/// # Returns
/// SVG whose `width` and `height` are `(size + 2 * quiet_zone) * module_size`,
/// or [`EncodeError::CapacityExceeded`] when no version up to 10 holds the payload
pub fn encode(text: &[u8], module_size: u32, quiet_zone: u32) -> Result<String, EncodeError> {
    let config = EncoderConfig::default()
        .with_module_size(module_size)
        .with_quiet_zone(quiet_zone);
    Encoder::with_config(config).encode_svg(text)
}

/// Encode `text` into a module matrix using the default settings
pub fn encode_matrix(text: &[u8]) -> Result<QrCode, EncodeError> {
    Encoder::new().encode_matrix(text)
}

/// Encoder with configuration options
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Create a new encoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with explicit settings
    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Create an encoder configured from `QR_*` environment variables
    pub fn from_env() -> Self {
        Self::with_config(EncoderConfig::from_env())
    }

    /// Settings in use
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Build the module matrix for `text`
    pub fn encode_matrix(&self, text: &[u8]) -> Result<QrCode, EncodeError> {
        pipeline::encode_payload(text, &self.config)
    }

    /// Build the module matrix for `text` and render it as SVG
    pub fn encode_svg(&self, text: &[u8]) -> Result<String, EncodeError> {
        let qr = self.encode_matrix(text)?;
        Ok(qr.to_svg(self.config.module_size, self.config.quiet_zone))
    }
}
