//! gridtrace: turn regions of grid cells into polygon outlines.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all gridtrace sub-crates. For most users, adding `gridtrace` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridtrace::prelude::*;
//!
//! // A 3×3 block with its centre missing.
//! let cells: CellSet = (0..3)
//!     .flat_map(|z| (0..3).map(move |x| (x, z)))
//!     .filter(|&c| c != (1, 1))
//!     .collect();
//!
//! let outline = trace_outline(&cells, &CoordinateMapper::new(16).unwrap()).unwrap();
//! assert_eq!(outline.holes, 1);
//! // Four outer corners, four hole corners, two bridge ends.
//! assert_eq!(outline.len(), 10);
//! assert_eq!(outline.points[0], MapPoint::new(0, 0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridtrace-core` | Cells, vertices, edges, loops, errors |
//! | [`outline`] | `gridtrace-outline` | The tracing pipeline and its stages |
//! | [`overlay`] | `gridtrace-overlay` | Region discovery, markers, refresh service |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`gridtrace-core`).
///
/// [`types::Cell`] and [`types::CellSet`] describe the input,
/// [`types::Vertex`] and [`types::MapPoint`] the output, and
/// [`types::OutlineError`] every way a trace can fail.
pub use gridtrace_core as types;

/// The tracing pipeline (`gridtrace-outline`).
///
/// [`outline::trace_outline`] runs every stage. The stages are public for
/// callers that want intermediate results, from
/// [`outline::boundary_edges`] to [`outline::stitch_holes`].
pub use gridtrace_outline as outline;

/// Map-overlay glue (`gridtrace-overlay`).
///
/// [`overlay::VisualizerService`] keeps a marker set per world in step with
/// its regions; [`overlay::Refresher`] drives it on a background thread.
pub use gridtrace_overlay as overlay;

/// Common imports for typical gridtrace usage.
///
/// ```rust
/// use gridtrace::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridtrace_core::{Cell, CellSet, MapPoint, OutlineError, Vertex};

    // Tracing
    pub use gridtrace_outline::{
        trace_components, trace_outline, CoordinateMapper, HolePolicy, Outline, Tracer,
    };

    // Overlay
    pub use gridtrace_overlay::{
        OverlayConfig, OverlayError, Refresher, UpdateReport, VisualizerService, WorldSnapshot,
    };
}
