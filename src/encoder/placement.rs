/// Zigzag placement of the codeword stream into the data modules
use crate::encoder::function_mask::FunctionMask;
use crate::models::{Module, ModuleGrid};

/// Data module coordinates `(x, y)` in placement order.
///
/// Two-column strips run right to left, skipping the vertical timing
/// column. The first strip goes upward and the direction alternates; within
/// a row the right column comes first.
pub fn data_module_order(func: &FunctionMask) -> impl Iterator<Item = (usize, usize)> + '_ {
    let size = func.size();
    // Right-hand columns: size-1, size-3, ..., 8, then 5, 3, 1
    let strips = (7..size).rev().step_by(2).chain([5, 3, 1]);

    strips
        .enumerate()
        .flat_map(move |(strip, right)| {
            let upward = strip % 2 == 0;
            (0..size).flat_map(move |i| {
                let y = if upward { size - 1 - i } else { i };
                [(right, y), (right - 1, y)]
            })
        })
        .filter(move |&(x, y)| !func.is_function(x, y))
}

/// Write `codewords` MSB-first into every non-reserved cell; cells beyond
/// the end of the stream become light.
pub fn place_codewords(grid: &mut ModuleGrid, func: &FunctionMask, codewords: &[u8]) {
    let mut bits = codewords
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1 != 0));
    for (x, y) in data_module_order(func) {
        let dark = bits.next().unwrap_or(false);
        grid.set(x, y, Module::from_bit(dark));
    }
}
