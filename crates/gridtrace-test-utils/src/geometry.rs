//! Geometric checks on traced vertex paths.

use gridtrace_core::{signed_area2, Cell, CellSet, Vertex};

/// Cells whose centres lie inside `path` under the even-odd rule.
///
/// Only vertical segments can cross a horizontal ray through a cell centre,
/// and bridge segments are traversed twice so they cancel out.
pub fn rasterize(path: &[Vertex]) -> CellSet {
    let n = path.len();
    let Some(min_z) = path.iter().map(|v| v.z).min() else {
        return CellSet::new();
    };
    let max_z = path.iter().map(|v| v.z).max().unwrap_or(min_z);

    let mut cells = CellSet::new();
    for z in min_z..max_z {
        let mut crossings: Vec<i64> = (0..n)
            .filter_map(|i| {
                let a = path[i];
                let b = path[(i + 1) % n];
                let (lo, hi) = (a.z.min(b.z), a.z.max(b.z));
                (a.x == b.x && lo <= z && z < hi).then_some(a.x)
            })
            .collect();
        crossings.sort_unstable();
        for pair in crossings.chunks_exact(2) {
            for x in pair[0]..pair[1] {
                cells.insert(Cell::new(x as i32, z as i32));
            }
        }
    }
    cells
}

/// Panic if a horizontal and a vertical segment of `path` cross at a
/// point interior to both.
///
/// Segments that touch, overlap or meet at endpoints are allowed; bridges
/// and pinch vertices produce all three.
pub fn assert_no_proper_crossings(path: &[Vertex]) {
    let n = path.len();
    let segment = |i: usize| (path[i], path[(i + 1) % n]);
    for i in 0..n {
        let (a, b) = segment(i);
        if a.z != b.z {
            continue;
        }
        let (x_lo, x_hi) = (a.x.min(b.x), a.x.max(b.x));
        for j in 0..n {
            let (c, d) = segment(j);
            if c.x != d.x {
                continue;
            }
            let (z_lo, z_hi) = (c.z.min(d.z), c.z.max(d.z));
            assert!(
                !(x_lo < c.x && c.x < x_hi && z_lo < a.z && a.z < z_hi),
                "segment {i} ({a} -> {b}) crosses segment {j} ({c} -> {d})"
            );
        }
    }
}

/// Panic unless every consecutive pair of `path` is axis-aligned and
/// distinct.
pub fn assert_rectilinear(path: &[Vertex]) {
    let n = path.len();
    for i in 0..n {
        let (a, b) = (path[i], path[(i + 1) % n]);
        assert!(a != b, "repeated vertex {a} at {i}");
        assert!(a.x == b.x || a.z == b.z, "diagonal step {a} -> {b} at {i}");
    }
}

/// Number of unit cells enclosed by a clockwise path.
pub fn enclosed_cells(path: &[Vertex]) -> i128 {
    signed_area2(path) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(points: &[(i64, i64)]) -> Vec<Vertex> {
        points.iter().map(|&(x, z)| Vertex::new(x, z)).collect()
    }

    #[test]
    fn rasterizes_a_rectangle() {
        let cells = rasterize(&path(&[(0, 0), (2, 0), (2, 1), (0, 1)]));
        let expected: CellSet = [(0, 0), (1, 0)].into_iter().collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn bridged_donut_leaves_centre_empty() {
        let donut = path(&[
            (0, 0),
            (1, 0),
            (1, 2),
            (2, 2),
            (2, 1),
            (1, 1),
            (1, 0),
            (3, 0),
            (3, 3),
            (0, 3),
        ]);
        let cells = rasterize(&donut);
        assert_eq!(cells.len(), 8);
        assert!(!cells.contains(Cell::new(1, 1)));
        assert_eq!(enclosed_cells(&donut), 8);
        assert_no_proper_crossings(&donut);
        assert_rectilinear(&donut);
    }

    #[test]
    #[should_panic(expected = "crosses")]
    fn detects_a_crossing() {
        assert_no_proper_crossings(&path(&[(0, 1), (2, 1), (2, 2), (1, 2), (1, 0), (0, 0)]));
    }

    #[test]
    fn empty_path_rasterizes_to_nothing() {
        assert!(rasterize(&[]).is_empty());
    }
}
