//! Outline tracing for sets of unit grid cells.
//!
//! Turns an arbitrary [`CellSet`](gridtrace_core::CellSet) into a single
//! closed vertex path: the outer boundary of the region with every hole
//! folded in through a zero-width bridge and with collinear runs merged.
//!
//! # Pipeline
//!
//! Stages run strictly in order and keep no state between calls:
//!
//! 1. [`cancel`]: cells → oriented unit boundary edges
//! 2. [`assemble`]: edges → one outer loop plus hole loops
//! 3. [`stitch`]: loops → one vertex path
//! 4. [`scale`]: grid units → output units
//!
//! [`trace_outline`] wires them together. Inputs with several disjoint
//! islands are rejected; [`components`] splits them up front.
//!
//! # Example
//!
//! ```
//! use gridtrace_core::{CellSet, MapPoint};
//! use gridtrace_outline::{trace_outline, CoordinateMapper};
//!
//! let cells: CellSet = [(0, 0), (1, 0)].into_iter().collect();
//! let outline = trace_outline(&cells, &CoordinateMapper::new(16).unwrap()).unwrap();
//! assert_eq!(
//!     outline.points,
//!     vec![
//!         MapPoint::new(0, 0),
//!         MapPoint::new(32, 0),
//!         MapPoint::new(32, 16),
//!         MapPoint::new(0, 16),
//!     ]
//! );
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assemble;
pub mod cancel;
pub mod components;
pub mod pipeline;
pub mod scale;
pub mod stitch;

pub use assemble::{assemble_loops, Loops};
pub use cancel::boundary_edges;
pub use components::{split_components, trace_components};
pub use pipeline::{trace_grid_outline, trace_outline, GridOutline, HolePolicy, Outline, Tracer};
pub use scale::CoordinateMapper;
pub use stitch::{stitch_holes, Attachment};
