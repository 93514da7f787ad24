//! Edge cancellation: the boundary of a cell set as oriented unit edges.
//!
//! Every cell contributes its four sides traversed clockwise (top, right,
//! bottom, left). Two edge-adjacent cells contribute the shared side once in
//! each direction, so inserting an edge whose reverse is already present
//! removes both. What survives is exactly the boundary, oriented so that the
//! filled side is always to the right of travel.

use gridtrace_core::{BoundaryEdgeSet, Cell, CellSet, Edge, Heading, Vertex};

/// The four sides of `cell`, clockwise from the top-left corner.
pub fn cell_edges(cell: Cell) -> [Edge; 4] {
    let top_left = Vertex::of_cell(cell);
    let top_right = top_left.step(Heading::East);
    let bottom_right = top_right.step(Heading::South);
    let bottom_left = top_left.step(Heading::South);
    [
        Edge::new(top_left, top_right),
        Edge::new(top_right, bottom_right),
        Edge::new(bottom_right, bottom_left),
        Edge::new(bottom_left, top_left),
    ]
}

/// Build the boundary edge set of `cells` by pairwise cancellation.
///
/// Runs in time linear in the number of cells. An empty input yields an
/// empty set.
pub fn boundary_edges(cells: &CellSet) -> BoundaryEdgeSet {
    let mut edges = BoundaryEdgeSet::with_capacity(cells.len() * 2);
    for cell in cells {
        for edge in cell_edges(cell) {
            if !edges.swap_remove(&edge.reversed()) {
                edges.insert(edge);
            }
        }
    }
    edges
}
