/// Mask application, penalty scoring and selection
use rayon::prelude::*;
use tracing::trace;

use crate::encoder::config::Compliance;
use crate::encoder::format::write_format_info;
use crate::encoder::function_mask::FunctionMask;
use crate::models::{MaskPattern, ModuleGrid};

/// Flip every non-reserved module selected by the mask pattern
pub fn apply_mask(grid: &mut ModuleGrid, mask: MaskPattern, func: &FunctionMask) {
    let size = grid.size();
    for y in 0..size {
        for x in 0..size {
            if !func.is_function(x, y) && mask.is_masked(y, x) {
                grid.set(x, y, grid.get(x, y).inverted());
            }
        }
    }
}

/// Runs of five or more same-coloured modules along rows and columns
fn run_penalty(grid: &ModuleGrid) -> u32 {
    let size = grid.size();
    let line = |cell: &dyn Fn(usize) -> bool| {
        let mut penalty = 0u32;
        let mut run = 1u32;
        for i in 1..size {
            if cell(i) == cell(i - 1) {
                run += 1;
            } else {
                if run >= 5 {
                    penalty += 3 + (run - 5);
                }
                run = 1;
            }
        }
        if run >= 5 {
            penalty += 3 + (run - 5);
        }
        penalty
    };

    (0..size)
        .map(|k| line(&|i| grid.is_dark(i, k)) + line(&|i| grid.is_dark(k, i)))
        .sum()
}

/// 2x2 blocks of one colour
fn block_penalty(grid: &ModuleGrid) -> u32 {
    let size = grid.size();
    let mut penalty = 0;
    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let c = grid.is_dark(x, y);
            if c == grid.is_dark(x + 1, y)
                && c == grid.is_dark(x, y + 1)
                && c == grid.is_dark(x + 1, y + 1)
            {
                penalty += 3;
            }
        }
    }
    penalty
}

/// Penalty score of a finished candidate
pub fn penalty(grid: &ModuleGrid) -> u32 {
    run_penalty(grid) + block_penalty(grid)
}

/// Masked candidate with its format information written in
fn candidate(
    grid: &ModuleGrid,
    func: &FunctionMask,
    mask: MaskPattern,
    compliance: Compliance,
) -> (ModuleGrid, u32) {
    let mut masked = grid.clone();
    apply_mask(&mut masked, mask, func);
    write_format_info(&mut masked, mask, compliance);
    let score = penalty(&masked);
    trace!(mask = mask.index(), penalty = score, "scored mask candidate");
    (masked, score)
}

/// Outcome of mask selection
#[derive(Debug, Clone)]
pub struct MaskSelection {
    pub mask: MaskPattern,
    pub grid: ModuleGrid,
    pub penalties: [u32; 8],
}

/// Evaluate all eight masks and keep the lowest penalty.
///
/// Ties go to the lowest mask index; parallel scoring gives the same result.
pub fn select_mask(
    grid: &ModuleGrid,
    func: &FunctionMask,
    compliance: Compliance,
    parallel: bool,
) -> MaskSelection {
    let candidates: Vec<(ModuleGrid, u32)> = if parallel {
        MaskPattern::ALL
            .par_iter()
            .map(|&mask| candidate(grid, func, mask, compliance))
            .collect()
    } else {
        MaskPattern::ALL
            .iter()
            .map(|&mask| candidate(grid, func, mask, compliance))
            .collect()
    };

    let mut penalties = [0u32; 8];
    for (i, (_, score)) in candidates.iter().enumerate() {
        penalties[i] = *score;
    }

    let best = (0..8).min_by_key(|&i| (penalties[i], i)).unwrap_or(0);
    let grid = candidates
        .into_iter()
        .nth(best)
        .map(|(g, _)| g)
        .unwrap_or_else(|| grid.clone());

    MaskSelection {
        mask: MaskPattern::ALL[best],
        grid,
        penalties,
    }
}
