//! Test utilities for gridtrace development.
//!
//! [`fixtures`] builds the standard cell sets (squares, rings, diamonds,
//! diagonal cut-outs, seeded noise) and [`geometry`] checks a traced path
//! against the cells it came from.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod geometry;

pub use fixtures::*;
pub use geometry::*;
