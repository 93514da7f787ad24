//! Splitting a cell set into 4-connected components.
//!
//! [`trace_outline`](crate::trace_outline) rejects inputs with more than one
//! outer boundary. Callers that want one outline per island split first.

use crate::pipeline::{Outline, Tracer};
use crate::scale::CoordinateMapper;
use gridtrace_core::{Cell, CellSet, OutlineError};
use indexmap::IndexSet;
use std::collections::VecDeque;

/// Partition `cells` into edge-connected components.
///
/// Components are ordered by their smallest cell in row-major order. Cells
/// that touch only at a corner end up in different components, matching
/// how the assembler resolves diagonal contact.
pub fn split_components(cells: &CellSet) -> Vec<CellSet> {
    let mut visited: IndexSet<Cell> = IndexSet::with_capacity(cells.len());
    let mut components = Vec::new();

    for seed in cells.sorted() {
        if !visited.insert(seed) {
            continue;
        }
        let mut component = CellSet::new();
        let mut queue = VecDeque::from([seed]);
        while let Some(cell) = queue.pop_front() {
            component.insert(cell);
            for n in cell.neighbours() {
                if cells.contains(n) && visited.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        components.push(component);
    }
    components
}

/// Trace every component of `cells` with strict hole handling.
///
/// # Errors
///
/// The first error from any component.
pub fn trace_components(
    cells: &CellSet,
    mapper: &CoordinateMapper,
) -> Result<Vec<Outline>, OutlineError> {
    Tracer::new(*mapper).trace_components(cells)
}
