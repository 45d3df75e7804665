pub mod matrix;
pub mod qr_code;

pub use matrix::{BitMatrix, Module, ModuleGrid};
pub use qr_code::{ECLevel, MaskPattern, QrCode, Version};
