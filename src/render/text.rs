use super::geometry;
use crate::models::QrCode;

const DARK: &str = "██";
const LIGHT: &str = "  ";

impl QrCode {
    /// Text rendering, two characters per module, one line per row
    pub fn to_ascii(&self, quiet_zone: u32) -> String {
        let (_, quiet_zone) = geometry(1, quiet_zone);
        let q = quiet_zone as usize;
        let side = self.size() + 2 * q;
        let mut out = String::with_capacity(side * (side * DARK.len() + 1));
        for y in 0..side {
            for x in 0..side {
                let dark = x >= q && y >= q && self.get(x - q, y - q);
                out.push_str(if dark { DARK } else { LIGHT });
            }
            out.push('\n');
        }
        out
    }
}
