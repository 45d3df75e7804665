/// Format information placement
use crate::encoder::config::Compliance;
use crate::encoder::tables::format_word;
use crate::models::{MaskPattern, Module, ModuleGrid};

/// Cells of the two format copies as `(x, y)` per bit, bit 0 = MSB.
///
/// The first copy runs along row 8, the second along column 8.
pub fn format_cells(size: usize) -> ([(usize, usize); 15], [(usize, usize); 15]) {
    let s = size;
    let cols = [0, 1, 2, 3, 4, 5, 7, 8, s - 7, s - 6, s - 5, s - 4, s - 3, s - 2, s - 1];
    let rows = [s - 1, s - 2, s - 3, s - 4, s - 5, s - 6, s - 7, 8, 7, 5, 4, 3, 2, 1, 0];
    (cols.map(|x| (x, 8)), rows.map(|y| (8, y)))
}

/// Write the format word for `mask` into both copies
pub fn write_format_info(grid: &mut ModuleGrid, mask: MaskPattern, compliance: Compliance) {
    let word = format_word(mask);
    let size = grid.size();
    let (horizontal, vertical) = format_cells(size);

    for i in 0..15 {
        let module = Module::from_bit((word >> (14 - i)) & 1 != 0);
        let (hx, hy) = horizontal[i];
        grid.set(hx, hy, module);
        let (vx, vy) = vertical[i];
        grid.set(vx, vy, module);
    }

    if compliance == Compliance::Standard {
        // Bit 7 of the row copy also belongs at (size-8, 8)
        grid.set(size - 8, 8, Module::from_bit((word >> 7) & 1 != 0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::function_mask::build_function_patterns;
    use crate::models::{ECLevel, Version};

    /// BCH(15,5) check with the level M/mask XOR removed
    fn check_format(codeword: u16) -> bool {
        const GENERATOR: u16 = 0x537;
        let mut remainder = codeword ^ 0x5412;
        for shift in (0..5).rev() {
            if remainder & (1 << (shift + 10)) != 0 {
                remainder ^= GENERATOR << shift;
            }
        }
        remainder == 0
    }

    #[test]
    fn test_format_words_are_bch_codewords() {
        for mask in MaskPattern::ALL {
            let word = format_word(mask);
            assert!(check_format(word));
            let data = ((word ^ 0x5412) >> 10) as u8;
            assert_eq!(data >> 3, ECLevel::M.format_bits());
            assert_eq!(usize::from(data & 0b111), mask.index());
        }
        assert!(!check_format(0x5413));
    }

    #[test]
    fn test_format_cells_stay_in_reserved_area() {
        for version in Version::all() {
            let (_, func) = build_function_patterns(version, Compliance::Faithful);
            let (h, v) = format_cells(version.size());
            for (x, y) in h.into_iter().chain(v) {
                assert!(func.is_function(x, y));
            }
        }
    }

    #[test]
    fn test_write_mask_0_word() {
        // 0x5412 = 101 0100 0001 0010
        let (mut grid, _) = build_function_patterns(Version::MIN, Compliance::Faithful);
        write_format_info(&mut grid, MaskPattern::Pattern0, Compliance::Faithful);
        assert!(grid.is_dark(0, 8));
        assert!(!grid.is_dark(1, 8));
        assert!(grid.is_dark(2, 8));
        assert!(!grid.is_dark(20, 8));
        assert!(grid.is_dark(8, 20));
        assert!(!grid.is_dark(8, 0));
        // Dark module is untouched
        assert!(grid.is_dark(8, 13));
    }

    #[test]
    fn test_standard_adds_second_copy_bit() {
        // Mask 4 word 0x45F9 has bit 7 set
        let (mut faithful, _) = build_function_patterns(Version::MIN, Compliance::Faithful);
        write_format_info(&mut faithful, MaskPattern::Pattern4, Compliance::Faithful);
        assert!(!faithful.is_dark(13, 8));

        let (mut standard, _) = build_function_patterns(Version::MIN, Compliance::Standard);
        write_format_info(&mut standard, MaskPattern::Pattern4, Compliance::Standard);
        assert!(standard.is_dark(13, 8));
        // Same value as the shared cell (8, 8)
        assert!(standard.is_dark(8, 8));
    }
}
