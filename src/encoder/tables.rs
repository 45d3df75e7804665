use crate::models::{MaskPattern, Version};

/// Block layout of one version at EC level M
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    /// Data plus EC codewords in the symbol
    pub total_codewords: usize,
    /// EC codewords appended to every block
    pub ec_per_block: usize,
    /// Group 1: (block count, data codewords per block)
    pub group1: (usize, usize),
    /// Group 2: (block count, data codewords per block)
    pub group2: (usize, usize),
}

impl VersionInfo {
    /// Data codewords across both groups
    pub fn data_capacity(&self) -> usize {
        self.group1.0 * self.group1.1 + self.group2.0 * self.group2.1
    }

    /// Number of RS blocks
    pub fn num_blocks(&self) -> usize {
        self.group1.0 + self.group2.0
    }

    /// Data codewords of every block, group 1 first
    pub fn block_lengths(&self) -> impl Iterator<Item = usize> {
        std::iter::repeat_n(self.group1.1, self.group1.0)
            .chain(std::iter::repeat_n(self.group2.1, self.group2.0))
    }
}

const fn info(
    total_codewords: usize,
    ec_per_block: usize,
    group1: (usize, usize),
    group2: (usize, usize),
) -> VersionInfo {
    VersionInfo {
        total_codewords,
        ec_per_block,
        group1,
        group2,
    }
}

// Index: version - 1, EC level M.
const VERSION_TABLE: [VersionInfo; 10] = [
    info(26, 10, (1, 16), (0, 0)),
    info(44, 16, (1, 28), (0, 0)),
    info(70, 26, (1, 44), (0, 0)),
    info(100, 18, (2, 32), (0, 0)),
    info(134, 24, (2, 43), (0, 0)),
    info(172, 16, (4, 27), (0, 0)),
    info(196, 18, (4, 31), (0, 0)),
    info(242, 22, (2, 38), (2, 39)),
    info(292, 22, (3, 36), (2, 37)),
    info(346, 26, (4, 43), (1, 44)),
];

const ALIGNMENT_POSITIONS: [&[usize]; 10] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
];

// 15-bit format words for EC level M, index = mask pattern.
const FORMAT_WORDS: [u16; 8] = [
    0x5412, 0x5125, 0x5E7C, 0x5B4B, 0x45F9, 0x40CE, 0x4F97, 0x4AA0,
];

/// Block layout for a version
pub fn version_info(version: Version) -> &'static VersionInfo {
    &VERSION_TABLE[version.number() as usize - 1]
}

/// Alignment pattern centers for a version
pub fn alignment_pattern_positions(version: Version) -> &'static [usize] {
    ALIGNMENT_POSITIONS[version.number() as usize - 1]
}

/// Precomputed format word (EC level M) for a mask
pub fn format_word(mask: MaskPattern) -> u16 {
    FORMAT_WORDS[mask.index()]
}
