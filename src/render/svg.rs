use std::fmt::{self, Write};

use super::{geometry, total_size};
use crate::models::QrCode;

impl QrCode {
    /// SVG markup with a white background and one black square per dark
    /// module. `width`, `height` and the viewBox all equal
    /// `(size + 2 * quiet_zone) * module_size`.
    pub fn to_svg(&self, module_size: u32, quiet_zone: u32) -> String {
        let dark = self.modules().count_ones();
        let mut svg = String::with_capacity(192 + dark * 64);
        // Writing into a String cannot fail
        let _ = self.write_svg(&mut svg, module_size, quiet_zone);
        svg
    }

    fn write_svg(&self, svg: &mut String, module_size: u32, quiet_zone: u32) -> fmt::Result {
        let (module_size, quiet_zone) = geometry(module_size, quiet_zone);
        let total = total_size(self.size(), module_size, quiet_zone);

        write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {total} {total}" width="{total}" height="{total}">"#
        )?;
        write!(svg, r#"<rect width="{total}" height="{total}" fill="white"/>"#)?;

        for row in 0..self.size() {
            for col in 0..self.size() {
                if !self.get(col, row) {
                    continue;
                }
                let x = (col as u32 + quiet_zone) * module_size;
                let y = (row as u32 + quiet_zone) * module_size;
                write!(
                    svg,
                    r#"<rect x="{x}" y="{y}" width="{module_size}" height="{module_size}" fill="black"/>"#
                )?;
            }
        }

        svg.push_str("</svg>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::encoder::config::{EncoderConfig, MAX_QUIET_ZONE};
    use crate::pipeline::encode_payload;

    #[test]
    fn test_svg_header_and_rect_count() {
        let qr = encode_payload(b"HELLO", &EncoderConfig::default()).unwrap();
        let svg = qr.to_svg(4, 4);
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 116 116" width="116" height="116">"#
        ));
        assert!(svg.contains(r#"<rect width="116" height="116" fill="white"/>"#));
        assert!(svg.ends_with("</svg>"));

        let black = svg.matches(r#"fill="black""#).count();
        assert_eq!(black, qr.modules().count_ones());
    }

    #[test]
    fn test_svg_module_positions() {
        let qr = encode_payload(b"HELLO", &EncoderConfig::default()).unwrap();
        let svg = qr.to_svg(3, 2);
        // Top-left finder corner at module (0, 0)
        assert!(svg.contains(r#"<rect x="6" y="6" width="3" height="3" fill="black"/>"#));
        // (7, 0) is separator
        assert!(!svg.contains(r#"<rect x="27" y="6" "#));
    }

    #[test]
    fn test_zero_quiet_zone() {
        let qr = encode_payload(b"", &EncoderConfig::default()).unwrap();
        let svg = qr.to_svg(1, 0);
        assert!(svg.contains(r#"width="21" height="21">"#));
        assert!(svg.contains(r#"<rect x="0" y="0" width="1" height="1" fill="black"/>"#));
    }

    #[test]
    fn test_oversized_geometry_is_clamped() {
        let qr = encode_payload(b"HELLO", &EncoderConfig::default()).unwrap();
        let svg = qr.to_svg(1, u32::MAX / 2);
        assert!(svg.contains(r#"width="149" height="149">"#));
        // Finder corner sits after the clamped quiet zone
        assert!(svg.contains(r#"<rect x="64" y="64" width="1" height="1" fill="black"/>"#));
        assert_eq!(svg, qr.to_svg(1, MAX_QUIET_ZONE));
    }
}
