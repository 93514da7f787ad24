//! Grid vertices, headings, oriented edges and output points.

use crate::cell::Cell;
use std::fmt;

/// A grid point: the corner shared by up to four cells.
///
/// Stored as `i64` so that the far corner of a cell at `i32::MAX` is still
/// representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    /// Grid x.
    pub x: i64,
    /// Grid z (grows downward).
    pub z: i64,
}

impl Vertex {
    /// Create a vertex at `(x, z)`.
    pub const fn new(x: i64, z: i64) -> Self {
        Self { x, z }
    }

    /// The top-left corner of a cell.
    pub fn of_cell(cell: Cell) -> Self {
        Self::new(i64::from(cell.x), i64::from(cell.z))
    }

    /// One unit step in `heading`.
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dz) = heading.offset();
        Self::new(self.x + dx, self.z + dz)
    }

    /// Top-to-bottom, left-to-right ordering key.
    pub fn row_major_key(self) -> (i64, i64) {
        (self.z, self.x)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Axis-aligned travel direction on the grid.
///
/// `South` is `+z`, so a clockwise turn from `East` yields `South`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// `+x`.
    East,
    /// `+z`.
    South,
    /// `-x`.
    West,
    /// `-z`.
    North,
}

impl Heading {
    /// Unit `(dx, dz)` offset.
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
            Self::North => (0, -1),
        }
    }

    /// Quarter turn clockwise (with `z` downward).
    pub const fn clockwise(self) -> Self {
        match self {
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
            Self::North => Self::East,
        }
    }

    /// Quarter turn counter-clockwise (with `z` downward).
    pub const fn counter_clockwise(self) -> Self {
        match self {
            Self::East => Self::North,
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
        }
    }

    /// The opposite direction.
    pub const fn reverse(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::North => Self::South,
        }
    }

    /// Whether travel is along the x axis.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::East | Self::West)
    }

    /// Direction of travel from `from` to `to`.
    ///
    /// Returns `None` unless the two points differ along exactly one axis.
    pub fn between(from: Vertex, to: Vertex) -> Option<Self> {
        match ((to.x - from.x).signum(), (to.z - from.z).signum()) {
            (1, 0) => Some(Self::East),
            (-1, 0) => Some(Self::West),
            (0, 1) => Some(Self::South),
            (0, -1) => Some(Self::North),
            _ => None,
        }
    }
}

/// An oriented, axis-aligned segment between two grid points.
///
/// Equality and hashing cover all four coordinates, so an edge and its
/// [`reversed`](Edge::reversed) partner are distinct values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// First endpoint.
    pub start: Vertex,
    /// Second endpoint.
    pub end: Vertex,
}

impl Edge {
    /// Create an edge from `start` to `end`.
    pub const fn new(start: Vertex, end: Vertex) -> Self {
        Self { start, end }
    }

    /// A unit edge leaving `start` in `heading`.
    pub fn unit(start: Vertex, heading: Heading) -> Self {
        Self::new(start, start.step(heading))
    }

    /// The same segment traversed the other way.
    pub const fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Direction of travel, or `None` for a degenerate or diagonal edge.
    pub fn heading(&self) -> Option<Heading> {
        Heading::between(self.start, self.end)
    }

    /// Manhattan length.
    pub fn len(&self) -> i64 {
        (self.end.x - self.start.x).abs() + (self.end.z - self.start.z).abs()
    }

    /// Whether both endpoints coincide.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `next` starts where this edge ends.
    pub fn connects_to(&self, next: &Edge) -> bool {
        self.end == next.start
    }

    /// The same edge with its end moved to `end`.
    pub fn extended_to(self, end: Vertex) -> Self {
        Self::new(self.start, end)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// A vertex scaled into output units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MapPoint {
    /// Output x.
    pub x: i64,
    /// Output z.
    pub z: i64,
}

impl MapPoint {
    /// Create a point at `(x, z)`.
    pub const fn new(x: i64, z: i64) -> Self {
        Self { x, z }
    }
}

/// Twice the signed area enclosed by a closed vertex path.
///
/// Positive for clockwise paths under the `z`-down convention. Computed in
/// `i128` so that paths spanning the full `i32` grid cannot overflow.
pub fn signed_area2(path: &[Vertex]) -> i128 {
    let n = path.len();
    (0..n)
        .map(|i| {
            let a = path[i];
            let b = path[(i + 1) % n];
            i128::from(a.x) * i128::from(b.z) - i128::from(b.x) * i128::from(a.z)
        })
        .sum()
}
