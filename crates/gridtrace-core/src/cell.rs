//! Grid cells and immutable-per-call cell sets.

use indexmap::IndexSet;
use smallvec::SmallVec;
use std::fmt;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// A unit cell occupying `[x, x + 1) × [z, z + 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column (grows east).
    pub x: i32,
    /// Row (grows south).
    pub z: i32,
}

impl Cell {
    /// Create a cell at `(x, z)`.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The four edge-sharing neighbours in N, E, S, W order.
    ///
    /// Neighbours that would leave the `i32` range are omitted.
    pub fn neighbours(self) -> SmallVec<[Cell; 4]> {
        let offsets: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        offsets
            .into_iter()
            .filter_map(|(dx, dz)| {
                Some(Cell::new(self.x.checked_add(dx)?, self.z.checked_add(dz)?))
            })
            .collect()
    }

    /// Row-major sort key: top-to-bottom, then left-to-right.
    pub fn row_major_key(self) -> (i32, i32) {
        (self.z, self.x)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, z): (i32, i32)) -> Self {
        Self { x, z }
    }
}

/// Inclusive cell-space bounding box of a non-empty [`CellSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellBounds {
    /// Smallest column.
    pub min_x: i32,
    /// Smallest row.
    pub min_z: i32,
    /// Largest column (inclusive).
    pub max_x: i32,
    /// Largest row (inclusive).
    pub max_z: i32,
}

impl CellBounds {
    /// Number of columns covered.
    pub fn width(&self) -> u64 {
        (i64::from(self.max_x) - i64::from(self.min_x) + 1) as u64
    }

    /// Number of rows covered.
    pub fn height(&self) -> u64 {
        (i64::from(self.max_z) - i64::from(self.min_z) + 1) as u64
    }

    /// Whether `cell` lies inside the box.
    pub fn contains(&self, cell: Cell) -> bool {
        (self.min_x..=self.max_x).contains(&cell.x) && (self.min_z..=self.max_z).contains(&cell.z)
    }
}

/// A set of unique cells describing one region snapshot.
///
/// Backed by an [`IndexSet`] so that iteration order is the insertion
/// order, which keeps every stage of the pipeline deterministic for a given
/// input sequence. Equality is set equality and ignores order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellSet {
    cells: IndexSet<Cell>,
}

impl CellSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty set with room for `capacity` cells.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: IndexSet::with_capacity(capacity),
        }
    }

    /// Insert a cell. Returns `false` if it was already present.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Remove a cell. Returns `false` if it was absent.
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.cells.shift_remove(&cell)
    }

    /// Membership test.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the set has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Cells sorted row-major (by `z`, then `x`).
    pub fn sorted(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.cells.iter().copied().collect();
        cells.sort_unstable_by_key(|c| c.row_major_key());
        cells
    }

    /// Bounding box, or `None` for an empty set.
    pub fn bounds(&self) -> Option<CellBounds> {
        let mut iter = self.cells.iter();
        let first = iter.next()?;
        let init = CellBounds {
            min_x: first.x,
            min_z: first.z,
            max_x: first.x,
            max_z: first.z,
        };
        Some(iter.fold(init, |b, c| CellBounds {
            min_x: b.min_x.min(c.x),
            min_z: b.min_z.min(c.z),
            max_x: b.max_x.max(c.x),
            max_z: b.max_z.max(c.z),
        }))
    }

    /// Order-independent FNV-1a hash of the set contents.
    ///
    /// Two sets with the same cells produce the same fingerprint regardless
    /// of insertion order. Not cryptographically secure; used to detect
    /// unchanged snapshots between refreshes.
    pub fn fingerprint(&self) -> u64 {
        let mut hash = fnv1a_u64(FNV_OFFSET, self.cells.len() as u64);
        for cell in self.sorted() {
            hash = fnv1a_u32(hash, cell.x as u32);
            hash = fnv1a_u32(hash, cell.z as u32);
        }
        hash
    }
}

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(i32, i32)> for CellSet {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        iter.into_iter().map(Cell::from).collect()
    }
}

impl Extend<Cell> for CellSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = Cell;
    type IntoIter = std::iter::Copied<indexmap::set::Iter<'a, Cell>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().copied()
    }
}
