//! Geometry module - pure transforms over shape cell sets
//!
//! All transforms work on offsets inside a shape's local bounding box and
//! re-normalize their output so the minimum x and minimum y are both 0.
//! Results are stack-only ([`Cells`]) and never allocate.

use arrayvec::ArrayVec;

use crate::types::{CellOffset, Orientation, Rotation, MAX_SHAPE_CELLS};

/// An oriented cell set
pub type Cells = ArrayVec<CellOffset, MAX_SHAPE_CELLS>;

/// Translate so that min-x = 0 and min-y = 0
pub fn normalize(cells: &[CellOffset]) -> Cells {
    let min_x = cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
    let min_y = cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
    cells.iter().map(|&(x, y)| (x - min_x, y - min_y)).collect()
}

/// (width, height) = (max-x + 1, max-y + 1). An empty set measures (0, 0).
pub fn bounding_size(cells: &[CellOffset]) -> (i8, i8) {
    if cells.is_empty() {
        return (0, 0);
    }
    let max_x = cells.iter().map(|&(x, _)| x).max().unwrap_or(0);
    let max_y = cells.iter().map(|&(_, y)| y).max().unwrap_or(0);
    (max_x + 1, max_y + 1)
}

/// One 90° clockwise turn: (x, y) → (height - 1 - y, x)
pub fn rotate_cw(cells: &[CellOffset]) -> Cells {
    let (_, h) = bounding_size(cells);
    let turned: Cells = cells.iter().map(|&(x, y)| (h - 1 - y, x)).collect();
    normalize(&turned)
}

/// Apply `steps` clockwise turns; steps are reduced mod 4 first (negative allowed)
pub fn rotate(cells: &[CellOffset], steps: i32) -> Cells {
    let mut out: Cells = cells.iter().copied().collect();
    for _ in 0..steps.rem_euclid(4) {
        out = rotate_cw(&out);
    }
    out
}

/// (x, y) → (width - 1 - x, y)
pub fn mirror_horizontal(cells: &[CellOffset]) -> Cells {
    let (w, _) = bounding_size(cells);
    let flipped: Cells = cells.iter().map(|&(x, y)| (w - 1 - x, y)).collect();
    normalize(&flipped)
}

/// (x, y) → (x, height - 1 - y)
pub fn mirror_vertical(cells: &[CellOffset]) -> Cells {
    let (_, h) = bounding_size(cells);
    let flipped: Cells = cells.iter().map(|&(x, y)| (x, h - 1 - y)).collect();
    normalize(&flipped)
}

/// Orient a base shape. Order is fixed: rotate, then mirror horizontally, then vertically.
pub fn apply_orientation(base: &[CellOffset], orientation: Orientation) -> Cells {
    let mut out = rotate(base, i32::from(orientation.rotation.quarter_turns()));
    if orientation.mirrored_h {
        out = mirror_horizontal(&out);
    }
    if orientation.mirrored_v {
        out = mirror_vertical(&out);
    }
    out
}

/// Advance the rotate control: rotation + 1 mod 4, toggling the mirror on wrap
pub fn next_orientation_cycle(rotation: Rotation, mirrored_h: bool) -> (Rotation, bool) {
    let next = Orientation::new(rotation, mirrored_h, false).next_in_cycle();
    (next.rotation, next.mirrored_h)
}

/// Canonical form for set comparison: normalized and sorted
pub fn canonical(cells: &[CellOffset]) -> Cells {
    let mut out = normalize(cells);
    out.sort_unstable();
    out
}
