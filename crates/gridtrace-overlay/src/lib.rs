//! Map-overlay glue for traced grid regions.
//!
//! Periodically turns the regions a world is split into (each a set of
//! sections) into polygon markers on a web map:
//!
//! - [`discover`] picks the regions worth drawing: the one under the spawn
//!   point and the ones visible observers stand in, restricted to the
//!   sections near those points.
//! - [`cache`] keeps traced outlines until a region's sections change.
//! - [`marker`] holds the resulting shape markers, one marker set per
//!   world.
//! - [`service`] ties it together for one refresh of one world;
//!   [`refresh`] repeats that on a background thread.
//!
//! The crate logs through the [`log`] facade and never installs a logger.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod color;
pub mod config;
pub mod discover;
pub mod error;
pub mod marker;
pub mod refresh;
pub mod service;

pub use cache::OutlineCache;
pub use color::Rgba;
pub use config::{ConfigError, OverlayConfig};
pub use discover::{BlockPos, DiscoveredRegion, Discoverer, Observer, RegionSnapshot, WorldSnapshot};
pub use error::OverlayError;
pub use marker::{global_id, MarkerSet, MarkerSetRegistry, ShapeMarker};
pub use refresh::Refresher;
pub use service::{UpdateReport, VisualizerService};
