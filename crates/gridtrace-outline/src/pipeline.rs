//! The tracing entry points.

use crate::assemble::assemble_loops;
use crate::cancel::boundary_edges;
use crate::components::split_components;
use crate::scale::CoordinateMapper;
use crate::stitch::{stitch_holes, stitch_holes_lenient};
use gridtrace_core::{CellSet, MapPoint, OutlineError, Vertex};

/// What to do with a hole that has no segment above its entry vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HolePolicy {
    /// Fail the trace with [`OutlineError::HoleAttachment`].
    #[default]
    Strict,
    /// Leave the hole out and record its entry vertex.
    DropUnattached,
}

/// A stitched outline in grid units.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridOutline {
    /// Closed vertex path; the last vertex connects back to the first.
    pub vertices: Vec<Vertex>,
    /// Holes folded into the path.
    pub holes: usize,
    /// Diagonal pinch vertices resolved during assembly.
    pub pinches: usize,
    /// Entry vertices of holes left out under [`HolePolicy::DropUnattached`].
    pub dropped_holes: Vec<Vertex>,
}

/// A stitched outline in output units.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outline {
    /// Closed point path; the last point connects back to the first.
    pub points: Vec<MapPoint>,
    /// Holes folded into the path.
    pub holes: usize,
    /// Diagonal pinch vertices resolved during assembly.
    pub pinches: usize,
    /// Entry vertices (grid units) of holes that were left out.
    pub dropped_holes: Vec<Vertex>,
}

impl Outline {
    /// Whether the outline has no points (empty input).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Configured outline tracer.
///
/// Holds no per-call state; one tracer can serve any number of inputs,
/// from any number of threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tracer {
    mapper: CoordinateMapper,
    policy: HolePolicy,
}

impl Tracer {
    /// A strict tracer using `mapper`.
    pub fn new(mapper: CoordinateMapper) -> Self {
        Self {
            mapper,
            policy: HolePolicy::Strict,
        }
    }

    /// Set the hole policy.
    pub fn hole_policy(mut self, policy: HolePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The coordinate mapper in use.
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Trace `cells` in grid units.
    ///
    /// # Errors
    ///
    /// See [`trace_outline`].
    pub fn trace_grid(&self, cells: &CellSet) -> Result<GridOutline, OutlineError> {
        let Some(loops) = assemble_loops(boundary_edges(cells))? else {
            return Ok(GridOutline::default());
        };
        let (vertices, dropped_holes) = match self.policy {
            HolePolicy::Strict => (stitch_holes(&loops.outer, &loops.holes)?, Vec::new()),
            HolePolicy::DropUnattached => stitch_holes_lenient(&loops.outer, &loops.holes),
        };
        Ok(GridOutline {
            vertices,
            holes: loops.holes.len() - dropped_holes.len(),
            pinches: loops.pinches,
            dropped_holes,
        })
    }

    /// Trace `cells` and scale the result.
    ///
    /// # Errors
    ///
    /// See [`trace_outline`].
    pub fn trace(&self, cells: &CellSet) -> Result<Outline, OutlineError> {
        let grid = self.trace_grid(cells)?;
        Ok(Outline {
            points: self.mapper.map_path(&grid.vertices),
            holes: grid.holes,
            pinches: grid.pinches,
            dropped_holes: grid.dropped_holes,
        })
    }

    /// Split `cells` into 4-connected components and trace each one.
    ///
    /// Outlines come back in the order of each component's top-left cell.
    ///
    /// # Errors
    ///
    /// The first error from any component.
    pub fn trace_components(&self, cells: &CellSet) -> Result<Vec<Outline>, OutlineError> {
        split_components(cells)
            .iter()
            .map(|component| self.trace(component))
            .collect()
    }
}

/// Trace a single connected cell region into a scaled outline.
///
/// An empty set yields an empty outline.
///
/// # Errors
///
/// - [`OutlineError::MultipleComponents`] if the cells form more than one
///   4-connected region.
/// - [`OutlineError::HoleAttachment`] if a hole cannot be bridged in.
/// - [`OutlineError::OpenBoundary`] on an internally inconsistent boundary.
pub fn trace_outline(cells: &CellSet, mapper: &CoordinateMapper) -> Result<Outline, OutlineError> {
    Tracer::new(*mapper).trace(cells)
}

/// Trace a single connected cell region, unscaled.
///
/// # Errors
///
/// As [`trace_outline`].
pub fn trace_grid_outline(cells: &CellSet) -> Result<GridOutline, OutlineError> {
    Tracer::new(CoordinateMapper::identity()).trace_grid(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(list: &[(i32, i32)]) -> CellSet {
        list.iter().copied().collect()
    }

    fn v(x: i64, z: i64) -> Vertex {
        Vertex::new(x, z)
    }

    #[test]
    fn empty_input_is_empty_outline() {
        let outline = trace_outline(&CellSet::new(), &CoordinateMapper::identity()).unwrap();
        assert!(outline.is_empty());
        assert_eq!(outline.holes, 0);
    }

    #[test]
    fn single_cell_is_unit_square() {
        let grid = trace_grid_outline(&cells(&[(0, 0)])).unwrap();
        assert_eq!(grid.vertices, vec![v(0, 0), v(1, 0), v(1, 1), v(0, 1)]);
    }

    #[test]
    fn scaling_is_applied_last() {
        let tracer = Tracer::new(CoordinateMapper::from_shift(4).unwrap());
        let outline = tracer.trace(&cells(&[(-1, -1)])).unwrap();
        assert_eq!(
            outline.points,
            vec![
                MapPoint::new(-16, -16),
                MapPoint::new(0, -16),
                MapPoint::new(0, 0),
                MapPoint::new(-16, 0),
            ]
        );
        assert_eq!(tracer.mapper().scale(), 16);
    }

    #[test]
    fn donut_counts_its_hole() {
        let mut set: CellSet = (0..3).flat_map(|x| (0..3).map(move |z| (x, z))).collect();
        set.remove((1, 1).into());
        let outline = trace_grid_outline(&set).unwrap();
        assert_eq!(outline.vertices.len(), 10);
        assert_eq!(outline.holes, 1);
        assert!(outline.dropped_holes.is_empty());
    }

    #[test]
    fn components_are_traced_separately() {
        let tracer = Tracer::default();
        let outlines = tracer.trace_components(&cells(&[(5, 5), (0, 0), (1, 1)])).unwrap();
        assert_eq!(outlines.len(), 3);
        assert_eq!(outlines[0].points[0], MapPoint::new(0, 0));
        assert_eq!(outlines[1].points[0], MapPoint::new(1, 1));
        assert_eq!(outlines[2].points[0], MapPoint::new(5, 5));
    }

    #[test]
    fn lenient_policy_matches_strict_on_valid_input() {
        let mut set: CellSet = (0..6).flat_map(|x| (0..6).map(move |z| (x, z))).collect();
        set.remove((1, 1).into());
        set.remove((3, 3).into());
        let strict = Tracer::default().trace(&set).unwrap();
        let lenient = Tracer::default()
            .hole_policy(HolePolicy::DropUnattached)
            .trace(&set)
            .unwrap();
        assert_eq!(strict, lenient);
        assert_eq!(strict.holes, 2);
    }
}
