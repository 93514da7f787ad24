//! Error types for the outline pipeline.
//!
//! An empty cell set is not an error (it traces to an empty path), and
//! vertices where two diagonal cells meet are resolved by a fixed turn rule
//! rather than reported. Everything else that prevents a single simple
//! outline is returned as an [`OutlineError`]; the pipeline never panics.

use crate::geom::Vertex;
use std::error::Error;
use std::fmt;

/// Errors returned by the outline pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutlineError {
    /// No horizontal edge of the current path lies directly above a hole's
    /// entry vertex, so the hole cannot be bridged in.
    HoleAttachment {
        /// Entry (top-left) vertex of the hole.
        hole_start: Vertex,
    },
    /// The cell set has more than one outer boundary. One call traces one
    /// connected component; split the input first.
    MultipleComponents {
        /// Number of clockwise loops found.
        outer_loops: usize,
    },
    /// The boundary walk reached a vertex with no way on, or the loops did
    /// not include an outer boundary. Only malformed edge sets hit this.
    OpenBoundary {
        /// Where the walk stopped.
        at: Vertex,
    },
    /// The coordinate scale factor must be at least 1.
    InvalidScale {
        /// The rejected factor.
        scale: u32,
    },
    /// A power-of-two shift does not fit a `u32` scale factor.
    InvalidShift {
        /// The rejected shift.
        bits: u32,
    },
}

impl fmt::Display for OutlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HoleAttachment { hole_start } => {
                write!(f, "no boundary edge above hole entry {hole_start}")
            }
            Self::MultipleComponents { outer_loops } => {
                write!(
                    f,
                    "cell set has {outer_loops} disjoint outer boundaries, expected 1"
                )
            }
            Self::OpenBoundary { at } => write!(f, "boundary walk cannot continue at {at}"),
            Self::InvalidScale { scale } => {
                write!(f, "scale factor {scale} is invalid, must be >= 1")
            }
            Self::InvalidShift { bits } => {
                write!(f, "shift of {bits} bits is invalid, must be < 32")
            }
        }
    }
}

impl Error for OutlineError {}
