/// Compact bit matrix for storing binary data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new bit matrix with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get bit at (x, y)
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set bit at (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let bit = 1 << (index % 8);
        if value {
            self.data[index / 8] |= bit;
        } else {
            self.data[index / 8] &= !bit;
        }
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// State of one module while a symbol is being built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    /// Not yet written by any construction stage
    #[default]
    Unset,
    /// Light module (bit 0)
    Light,
    /// Dark module (bit 1)
    Dark,
}

impl Module {
    /// Module for a bit value
    pub fn from_bit(dark: bool) -> Self {
        if dark { Module::Dark } else { Module::Light }
    }

    /// True for dark modules; unset counts as light
    pub fn is_dark(self) -> bool {
        self == Module::Dark
    }

    /// Swap light and dark, leaving unset untouched
    pub fn inverted(self) -> Self {
        match self {
            Module::Light => Module::Dark,
            Module::Dark => Module::Light,
            Module::Unset => Module::Unset,
        }
    }
}

/// Square arena of tri-state modules, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    cells: Vec<Module>,
}

impl ModuleGrid {
    /// All-unset grid of `size` x `size`
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Module::Unset; size * size],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Module at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Module {
        self.cells[y * self.size + x]
    }

    /// Overwrite the module at column `x`, row `y`
    pub fn set(&mut self, x: usize, y: usize, module: Module) {
        self.cells[y * self.size + x] = module;
    }

    /// True when the module at (x, y) is dark
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_dark()
    }

    /// Count of modules still unset
    pub fn unset_count(&self) -> usize {
        self.cells.iter().filter(|m| **m == Module::Unset).count()
    }

    /// Collapse into a bit matrix (dark = true)
    pub fn to_bit_matrix(&self) -> BitMatrix {
        let mut bits = BitMatrix::new(self.size, self.size);
        for y in 0..self.size {
            for x in 0..self.size {
                if self.is_dark(x, y) {
                    bits.set(x, y, true);
                }
            }
        }
        bits
    }
}
