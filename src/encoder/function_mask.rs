use crate::encoder::config::Compliance;
use crate::encoder::tables::alignment_pattern_positions;
use crate::encoder::version::{FIRST_VERSION_WITH_INFO, version_bits, version_info_cells};
use crate::models::{BitMatrix, Module, ModuleGrid, Version};

/// Function module mask for a specific QR version.
/// true = function module (not data), false = data module.
#[derive(Debug, Clone)]
pub struct FunctionMask {
    mask: BitMatrix,
    version: Version,
}

impl FunctionMask {
    pub fn size(&self) -> usize {
        self.mask.width()
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }

    pub fn data_modules_count(&self) -> usize {
        let size = self.size();
        size * size - self.mask.count_ones()
    }
}

/// Writes structural patterns into a fresh grid and records every cell it
/// touches as reserved.
struct Builder {
    grid: ModuleGrid,
    reserved: BitMatrix,
}

impl Builder {
    fn new(size: usize) -> Self {
        Self {
            grid: ModuleGrid::new(size),
            reserved: BitMatrix::new(size, size),
        }
    }

    fn size(&self) -> usize {
        self.grid.size()
    }

    fn put(&mut self, x: usize, y: usize, module: Module) {
        self.grid.set(x, y, module);
        self.reserved.set(x, y, true);
    }

    /// Reserve a cell, making it light if nothing has been written yet
    fn reserve(&mut self, x: usize, y: usize) {
        if self.grid.get(x, y) == Module::Unset {
            self.grid.set(x, y, Module::Light);
        }
        self.reserved.set(x, y, true);
    }

    /// 7x7 finder with its one-cell light separator, top-left corner at (x, y)
    fn finder(&mut self, x: usize, y: usize) {
        let size = self.size() as isize;
        for dy in -1..=7isize {
            for dx in -1..=7isize {
                let (xx, yy) = (x as isize + dx, y as isize + dy);
                if xx < 0 || yy < 0 || xx >= size || yy >= size {
                    continue;
                }
                let separator = dx == -1 || dx == 7 || dy == -1 || dy == 7;
                let ring = dx == 0 || dx == 6 || dy == 0 || dy == 6;
                let core = (2..=4).contains(&dx) && (2..=4).contains(&dy);
                let dark = !separator && (ring || core);
                self.put(xx as usize, yy as usize, Module::from_bit(dark));
            }
        }
    }

    /// 5x5 alignment pattern centred on (x, y)
    fn alignment(&mut self, x: usize, y: usize) {
        for dy in 0..5 {
            for dx in 0..5 {
                let dark = dx == 0 || dx == 4 || dy == 0 || dy == 4 || (dx == 2 && dy == 2);
                self.put(x - 2 + dx, y - 2 + dy, Module::from_bit(dark));
            }
        }
    }

    fn timing(&mut self) {
        let size = self.size();
        for i in 8..size - 8 {
            let module = Module::from_bit(i % 2 == 0);
            if self.grid.get(i, 6) == Module::Unset {
                self.put(i, 6, module);
            }
            if self.grid.get(6, i) == Module::Unset {
                self.put(6, i, module);
            }
        }
    }

    fn format_area(&mut self) {
        let size = self.size();
        for i in 0..=8 {
            self.reserve(i, 8);
            self.reserve(8, i);
        }
        for i in 0..8 {
            self.reserve(size - 1 - i, 8);
            self.reserve(8, size - 1 - i);
        }
        self.put(8, size - 8, Module::Dark);
    }

    fn version_info(&mut self, version: Version) {
        let bits = version_bits(version);
        for (x, y, i) in version_info_cells(self.size()) {
            self.put(x, y, Module::from_bit((bits >> i) & 1 != 0));
        }
    }
}

/// Structural skeleton for a version: the partially filled grid and the
/// reserved-cell mask that data placement and masking must skip.
pub fn build_function_patterns(version: Version, compliance: Compliance) -> (ModuleGrid, FunctionMask) {
    let size = version.size();
    let mut b = Builder::new(size);

    b.finder(0, 0);
    b.finder(size - 7, 0);
    b.finder(0, size - 7);

    let align = alignment_pattern_positions(version);
    for &row in align {
        for &col in align {
            let near_tl = row <= 8 && col <= 8;
            let near_tr = row <= 8 && col >= size - 8;
            let near_bl = row >= size - 8 && col <= 8;
            if near_tl || near_tr || near_bl {
                continue;
            }
            b.alignment(col, row);
        }
    }

    b.timing();
    b.format_area();

    if compliance == Compliance::Standard && version.number() >= FIRST_VERSION_WITH_INFO {
        b.version_info(version);
    }

    let mask = FunctionMask {
        mask: b.reserved,
        version,
    };
    (b.grid, mask)
}
