//! Benchmark profiles for the gridtrace outline tracer.
//!
//! Pre-built cell sets covering the shapes the tracer meets in practice:
//!
//! - [`solid_profile`]: a filled square, the cheapest case per cell
//! - [`lattice_profile`]: a square punched with a regular grid of one-cell
//!   holes, the worst case for hole stitching
//! - [`territory_profile`]: a seeded connected blob with ragged borders,
//!   enclosed pockets, and diagonal pinches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridtrace_core::{Cell, CellSet};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Filled `side × side` square with its top-left cell at the origin.
pub fn solid_profile(side: i32) -> CellSet {
    (0..side)
        .flat_map(|z| (0..side).map(move |x| Cell::new(x, z)))
        .collect()
}

/// [`solid_profile`] with a one-cell hole every `pitch` cells on both axes.
///
/// Holes start one pitch in from the top-left corner and stop before the
/// border, so the result stays connected. A `pitch` below 2 yields the
/// plain square.
pub fn lattice_profile(side: i32, pitch: i32) -> CellSet {
    let mut cells = solid_profile(side);
    if pitch < 2 {
        return cells;
    }
    let mut z = pitch;
    while z < side - 1 {
        let mut x = pitch;
        while x < side - 1 {
            cells.remove(Cell::new(x, z));
            x += pitch;
        }
        z += pitch;
    }
    cells
}

/// Connected blob of `cells` cells grown from the origin.
///
/// Each step claims a random frontier cell, so the border is ragged and the
/// blob encloses pockets as it grows. Deterministic for a given `seed`.
pub fn territory_profile(cells: usize, seed: u64) -> CellSet {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut set = CellSet::with_capacity(cells);
    let mut frontier = vec![Cell::new(0, 0)];

    while set.len() < cells && !frontier.is_empty() {
        let pick = (rng.next_u64() % frontier.len() as u64) as usize;
        let cell = frontier.swap_remove(pick);
        if !set.insert(cell) {
            continue;
        }
        frontier.extend(cell.neighbours().into_iter().filter(|n| !set.contains(*n)));
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn is_connected(cells: &CellSet) -> bool {
        let Some(start) = cells.iter().next() else {
            return true;
        };
        let mut seen = CellSet::new();
        seen.insert(start);
        let mut queue = VecDeque::from([start]);
        while let Some(cell) = queue.pop_front() {
            for n in cell.neighbours() {
                if cells.contains(n) && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen.len() == cells.len()
    }

    #[test]
    fn solid_profile_size() {
        assert_eq!(solid_profile(100).len(), 10_000);
        assert!(solid_profile(0).is_empty());
    }

    #[test]
    fn lattice_profile_holes() {
        // Holes at 4, 8, …, 96 on both axes: 24 × 24.
        let cells = lattice_profile(100, 4);
        assert_eq!(cells.len(), 10_000 - 24 * 24);
        assert!(!cells.contains(Cell::new(4, 4)));
        assert!(cells.contains(Cell::new(0, 0)));
        assert!(is_connected(&cells));
        assert_eq!(lattice_profile(10, 1), solid_profile(10));
    }

    #[test]
    fn territory_profile_is_connected_and_deterministic() {
        let a = territory_profile(2_000, 7);
        assert_eq!(a.len(), 2_000);
        assert!(is_connected(&a));
        assert_eq!(a, territory_profile(2_000, 7));
        assert_ne!(a, territory_profile(2_000, 8));
    }
}
