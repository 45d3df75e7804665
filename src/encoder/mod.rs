//! QR code encoding modules
//!
//! Everything between a payload and a finished module matrix:
//! - Version selection and byte-mode bitstream assembly
//! - Reed-Solomon error correction and block interleaving
//! - Function patterns, data placement, masking and format information

/// Interleaving of data and EC blocks
pub mod blocks;
/// Byte-mode bitstream and data codewords
pub mod bitstream;
/// Capacity lookup and version selection
pub mod capacity;
pub mod config;
/// Format information writer (EC level M, mask pattern)
pub mod format;
/// Function pattern builder (finder/separator/alignment/timing/format/dark module)
pub mod function_mask;
/// Mask application and penalty-based selection
pub mod mask;
/// Zigzag data placement
pub mod placement;
/// Reed-Solomon encoding over GF(256)
pub mod reed_solomon;
/// QR specification tables for EC level M (versions 1-10)
pub mod tables;
/// Version information blocks (versions 7+)
pub mod version;
