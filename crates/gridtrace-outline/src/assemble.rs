//! Loop assembly: chain boundary edges into closed loops.
//!
//! The edge set is consumed one loop at a time. Each loop starts at the
//! remaining edge with the smallest start vertex (top row first, then
//! leftmost), which is always a plain corner of its loop. From there the
//! walk goes straight for as long as the next unit edge continues the
//! current heading, merging the run into one edge, and otherwise turns.
//!
//! Where two filled cells touch only at a corner the walk finds both turns
//! available. It always takes the clockwise one so that it keeps hugging the
//! cell it came along; diagonal contact therefore never joins two regions
//! and an empty cell touching another empty cell at a corner shares its
//! boundary.

use gridtrace_core::{BoundaryEdgeSet, Edge, Loop, OutlineError, Winding};

/// The loops of a single connected region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loops {
    /// The clockwise outer boundary.
    pub outer: Loop,
    /// Counter-clockwise hole boundaries, sorted by start vertex `(z, x)`.
    pub holes: Vec<Loop>,
    /// Number of vertices where two diagonal cells met.
    pub pinches: usize,
}

/// Chain every edge of `edges` into closed loops and classify them.
///
/// Returns `Ok(None)` for an empty edge set.
///
/// # Errors
///
/// - [`OutlineError::MultipleComponents`] if more than one loop winds
///   clockwise.
/// - [`OutlineError::OpenBoundary`] if a walk dead-ends or no loop winds
///   clockwise. Neither happens for edge sets built by
///   [`boundary_edges`](crate::cancel::boundary_edges).
pub fn assemble_loops(mut edges: BoundaryEdgeSet) -> Result<Option<Loops>, OutlineError> {
    let mut order: Vec<Edge> = edges.iter().copied().collect();
    order.sort_unstable_by_key(|e| (e.start.row_major_key(), e.end.row_major_key()));
    let Some(seed) = order.first().map(|e| e.start) else {
        return Ok(None);
    };

    let mut pinches = 0;
    let mut loops = Vec::new();
    let mut pending = order.into_iter();
    while let Some(first) = pending.by_ref().find(|e| edges.contains(e)) {
        loops.push(walk_loop(&mut edges, first, &mut pinches)?);
    }

    let (mut outers, mut holes): (Vec<Loop>, Vec<Loop>) = loops
        .into_iter()
        .partition(|l| l.winding() == Winding::Clockwise);
    if outers.len() > 1 {
        return Err(OutlineError::MultipleComponents {
            outer_loops: outers.len(),
        });
    }
    let outer = outers
        .pop()
        .ok_or(OutlineError::OpenBoundary { at: seed })?;
    holes.sort_by_key(|l| l.start().row_major_key());

    Ok(Some(Loops {
        outer,
        holes,
        pinches,
    }))
}

/// Walk one loop starting with `first`, removing every edge it uses.
fn walk_loop(
    edges: &mut BoundaryEdgeSet,
    first: Edge,
    pinches: &mut usize,
) -> Result<Loop, OutlineError> {
    edges.swap_remove(&first);
    let origin = first.start;
    let mut chain = Vec::new();
    let mut current = first;

    loop {
        let heading = current
            .heading()
            .ok_or(OutlineError::OpenBoundary { at: current.start })?;

        while current.end != origin {
            let next = Edge::unit(current.end, heading);
            if !edges.swap_remove(&next) {
                break;
            }
            current = current.extended_to(next.end);
        }
        chain.push(current);
        if current.end == origin {
            break;
        }

        let right = Edge::unit(current.end, heading.clockwise());
        let left = Edge::unit(current.end, heading.counter_clockwise());
        current = match (edges.contains(&right), edges.contains(&left)) {
            (true, true) => {
                *pinches += 1;
                right
            }
            (true, false) => right,
            (false, true) => left,
            (false, false) => return Err(OutlineError::OpenBoundary { at: current.end }),
        };
        edges.swap_remove(&current);
    }

    Loop::new(chain).ok_or(OutlineError::OpenBoundary { at: origin })
}
