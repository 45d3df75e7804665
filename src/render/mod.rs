//! Output renderers for encoded symbols
//!
//! All renderers draw a light quiet zone around the symbol. Geometry is
//! the only thing module size and quiet zone affect. Both are clamped to
//! [`MAX_MODULE_SIZE`] and [`MAX_QUIET_ZONE`], so pixel coordinates always
//! fit in a `u32`.

use crate::encoder::config::{clamp_module_size, clamp_quiet_zone};
pub use crate::encoder::config::{MAX_MODULE_SIZE, MAX_QUIET_ZONE};

/// PNG / grayscale raster output
pub mod raster;
/// SVG markup output
pub mod svg;
/// Terminal text output
pub mod text;

/// Module size and quiet zone after clamping
pub(crate) fn geometry(module_size: u32, quiet_zone: u32) -> (u32, u32) {
    (clamp_module_size(module_size), clamp_quiet_zone(quiet_zone))
}

/// Rendered side length in pixels
pub fn total_size(symbol_size: usize, module_size: u32, quiet_zone: u32) -> u32 {
    let (module_size, quiet_zone) = geometry(module_size, quiet_zone);
    (symbol_size as u32 + 2 * quiet_zone) * module_size
}
