//! Core types for the gridtrace outline pipeline.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! values that flow between the pipeline stages: grid cells and cell sets,
//! grid vertices, oriented edges, closed loops, and the error type shared by
//! every stage.
//!
//! Coordinates follow the map convention: `x` grows to the east and `z`
//! grows *downward* (south). Under that convention an outer boundary winds
//! clockwise and a hole winds counter-clockwise.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod cell;
pub mod error;
pub mod geom;

pub use boundary::{BoundaryEdgeSet, Loop, Winding};
pub use cell::{Cell, CellBounds, CellSet};
pub use error::OutlineError;
pub use geom::{signed_area2, Edge, Heading, MapPoint, Vertex};
