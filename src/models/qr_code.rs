use super::BitMatrix;

/// QR code symbol version supported by the encoder (1-10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest supported version
    pub const MIN: Version = Version(1);
    /// Largest supported version
    pub const MAX: Version = Version(10);

    /// Version from its number, if supported
    pub fn new(number: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&number)
            .then_some(Version(number))
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Iterate every supported version in increasing order
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.0..=Self::MAX.0).map(Version)
    }
}

/// Error correction level
///
/// Only level M is encoded; the format words in the tables assume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ECLevel {
    /// Medium (~15% recovery capacity)
    #[default]
    M,
}

impl ECLevel {
    /// Two-bit indicator used in the format word (01=L, 00=M, 11=Q, 10=H)
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::M => 0b00,
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// Every pattern in index order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from bits
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }

    /// Pattern index (0-7)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Check if module at row `i`, column `j` should be flipped
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// Encoded QR code, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
    modules: BitMatrix,
    penalties: [u32; 8],
}

impl QrCode {
    pub(crate) fn new(
        version: Version,
        ec_level: ECLevel,
        mask: MaskPattern,
        modules: BitMatrix,
        penalties: [u32; 8],
    ) -> Self {
        Self {
            version,
            ec_level,
            mask,
            modules,
            penalties,
        }
    }

    /// Symbol version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Mask pattern chosen by the penalty evaluation
    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.modules.width()
    }

    /// True when the module at column `x`, row `y` is dark.
    /// Coordinates outside the symbol read as light.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }

    /// Final module matrix (true = dark)
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }

    /// Penalty of every mask candidate, indexed by mask number
    pub fn mask_penalties(&self) -> &[u32; 8] {
        &self.penalties
    }

    /// Penalty of the chosen mask
    pub fn penalty(&self) -> u32 {
        self.penalties[self.mask.index()]
    }
}
