/// Version information for versions 7+ (written only in standard compliance)
use crate::models::Version;

/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const GENERATOR: u32 = 0x1F25;

/// First version that carries version information blocks
pub const FIRST_VERSION_WITH_INFO: u8 = 7;

/// 18-bit version word: 6 data bits followed by 12 BCH bits
pub fn version_bits(version: Version) -> u32 {
    let data = u32::from(version.number());
    let mut rem = data;
    for _ in 0..12 {
        rem = (rem << 1) ^ ((rem >> 11) * GENERATOR);
    }
    data << 12 | (rem & 0xFFF)
}

/// Cells of the two 6x3 blocks as (x, y, bit index), bit 0 = LSB
pub fn version_info_cells(size: usize) -> impl Iterator<Item = (usize, usize, usize)> {
    (0..18).flat_map(move |i| {
        let a = size - 11 + i % 3;
        let b = i / 3;
        [(a, b, i), (b, a, i)]
    })
}
