//! Reusable cell-set fixtures.
//!
//! - [`square`] and [`rect`]: solid blocks.
//! - [`ring`] and [`donut`]: blocks with one square hole.
//! - [`diamond`]: staircase boundary on every side.
//! - [`x_cutout`]: a square with both diagonals removed, leaving four
//!   triangles that touch only at corners.
//! - [`noisy_square`]: a square with a seeded fraction of cells removed.

use gridtrace_core::{Cell, CellSet};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Solid square covering `-radius..=radius` on both axes.
pub fn square(radius: i32) -> CellSet {
    (-radius..=radius)
        .flat_map(|z| (-radius..=radius).map(move |x| Cell::new(x, z)))
        .collect()
}

/// Solid `width × height` block with its top-left cell at the origin.
pub fn rect(width: i32, height: i32) -> CellSet {
    (0..height)
        .flat_map(|z| (0..width).map(move |x| Cell::new(x, z)))
        .collect()
}

/// [`square`] of `outer` with the centred square of `inner` removed.
///
/// `inner` must be smaller than `outer` for the hole to be enclosed.
pub fn ring(outer: i32, inner: i32) -> CellSet {
    square(outer)
        .iter()
        .filter(|c| c.x.abs() > inner || c.z.abs() > inner)
        .collect()
}

/// 3×3 block without its centre cell.
pub fn donut() -> CellSet {
    rect(3, 3).iter().filter(|&c| c != Cell::new(1, 1)).collect()
}

/// Cells with `|x| + |z| <= radius`.
pub fn diamond(radius: i32) -> CellSet {
    square(radius)
        .iter()
        .filter(|c| c.x.abs() + c.z.abs() <= radius)
        .collect()
}

/// [`square`] with every cell on either diagonal removed.
pub fn x_cutout(radius: i32) -> CellSet {
    square(radius)
        .iter()
        .filter(|c| c.x.abs() != c.z.abs())
        .collect()
}

/// [`square`] with roughly `percent`% of its cells removed at random.
///
/// Deterministic for a given `seed`. The result is usually several
/// components and has holes of every shape.
pub fn noisy_square(radius: i32, percent: u32, seed: u64) -> CellSet {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    square(radius)
        .iter()
        .filter(|_| rng.next_u32() % 100 >= percent)
        .collect()
}

/// Translate every cell by `(dx, dz)`.
pub fn shifted(cells: &CellSet, dx: i32, dz: i32) -> CellSet {
    cells.iter().map(|c| Cell::new(c.x + dx, c.z + dz)).collect()
}
