use std::path::Path;

use image::{GrayImage, Luma};

use super::{geometry, total_size};
use crate::error::RenderError;
use crate::models::QrCode;

const LIGHT: Luma<u8> = Luma([255]);
const DARK: Luma<u8> = Luma([0]);

impl QrCode {
    /// Grayscale raster, `module_size` pixels per module
    pub fn to_image(&self, module_size: u32, quiet_zone: u32) -> GrayImage {
        let (module_size, quiet_zone) = geometry(module_size, quiet_zone);
        let total = total_size(self.size(), module_size, quiet_zone);
        GrayImage::from_fn(total, total, |px, py| {
            let col = (px / module_size).checked_sub(quiet_zone);
            let row = (py / module_size).checked_sub(quiet_zone);
            match (col, row) {
                (Some(c), Some(r)) if self.get(c as usize, r as usize) => DARK,
                _ => LIGHT,
            }
        })
    }

    /// Render with [`QrCode::to_image`] and write a PNG file
    pub fn save_png<P: AsRef<Path>>(
        &self,
        path: P,
        module_size: u32,
        quiet_zone: u32,
    ) -> Result<(), RenderError> {
        self.to_image(module_size, quiet_zone)
            .save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}
