//! Boundary edge sets and closed loops.

use crate::geom::{signed_area2, Edge, Vertex};
use indexmap::IndexSet;

/// Working set of unit boundary edges.
///
/// Built by cancellation and fully consumed by loop assembly; never kept
/// beyond a single trace.
pub type BoundaryEdgeSet = IndexSet<Edge>;

/// Rotation sense of a closed loop under the `z`-down convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winding {
    /// Outer boundary: filled cells lie to the right of travel.
    Clockwise,
    /// Hole boundary.
    CounterClockwise,
}

/// A closed, head-to-tail sequence of (possibly merged) edges.
///
/// The last edge ends where the first begins. Loops are built by the
/// assembler and never mutated afterwards; stitching works on the vertex
/// list produced by [`vertices`](Loop::vertices).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loop {
    edges: Vec<Edge>,
}

impl Loop {
    /// Wrap a sequence of edges.
    ///
    /// Returns `None` for an empty sequence.
    pub fn new(edges: Vec<Edge>) -> Option<Self> {
        if edges.is_empty() {
            None
        } else {
            Some(Self { edges })
        }
    }

    /// Edges in traversal order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges (equal to the number of vertices).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always `false`: construction rejects empty loops.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Start vertex of the first edge.
    pub fn start(&self) -> Vertex {
        self.edges[0].start
    }

    /// Whether the edges connect head-to-tail and close on the start.
    pub fn is_closed(&self) -> bool {
        let n = self.edges.len();
        (0..n).all(|i| self.edges[i].connects_to(&self.edges[(i + 1) % n]))
    }

    /// Corner vertices in traversal order (the start of every edge).
    pub fn vertices(&self) -> Vec<Vertex> {
        self.edges.iter().map(|e| e.start).collect()
    }

    /// Twice the signed enclosed area; positive for clockwise loops.
    pub fn signed_area2(&self) -> i128 {
        signed_area2(&self.vertices())
    }

    /// Rotation sense derived from the signed area.
    pub fn winding(&self) -> Winding {
        if self.signed_area2() > 0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}
