//! One refresh of one world's region markers.

use crate::cache::OutlineCache;
use crate::config::{ConfigError, OverlayConfig};
use crate::discover::{Discoverer, WorldSnapshot};
use crate::marker::{global_id, MarkerSet, MarkerSetRegistry, ShapeMarker};
use gridtrace_outline::{HolePolicy, Tracer};
use indexmap::{IndexMap, IndexSet};

/// What one [`VisualizerService::update`] did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// The world has no enabled map; nothing was done.
    pub disabled: bool,
    /// Regions revealed this refresh.
    pub regions: usize,
    /// Markers written (new or replaced).
    pub markers_written: usize,
    /// Stale markers removed.
    pub markers_removed: usize,
    /// Regions whose trace failed; their previous markers were kept.
    pub regions_skipped: usize,
    /// Holes left out because they could not be bridged in.
    pub holes_dropped: usize,
}

/// Keeps every world's marker set in line with its current regions.
#[derive(Debug)]
pub struct VisualizerService {
    discoverer: Discoverer,
    tracer: Tracer,
    registry: MarkerSetRegistry,
    caches: IndexMap<String, OutlineCache>,
}

impl VisualizerService {
    /// A service for `config`.
    ///
    /// # Errors
    ///
    /// Whatever [`OverlayConfig::validate`] reports.
    pub fn new(config: &OverlayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let tracer = Tracer::new(config.mapper()?).hole_policy(HolePolicy::DropUnattached);
        Ok(Self {
            discoverer: Discoverer::new(
                config.discovery_radius,
                config.section_shift,
                config.spawn_rgba(),
            ),
            tracer,
            registry: MarkerSetRegistry::new(
                config.label.clone(),
                config.default_hidden,
                config.disabled_maps.clone(),
            ),
            caches: IndexMap::new(),
        })
    }

    /// Refresh the markers of `world`.
    ///
    /// Every revealed region is traced (one marker per connected part) and
    /// written under `region-<id>`, `region-<id>-1`, … Markers of regions
    /// that are no longer revealed are removed. A region whose trace fails
    /// is logged and keeps its previous markers.
    pub fn update(&mut self, world: &WorldSnapshot) -> UpdateReport {
        let mut report = UpdateReport::default();
        let Some(set) = self.registry.get_or_create(&world.id, &world.maps) else {
            report.disabled = true;
            return report;
        };
        let cache = self.caches.entry(world.id.clone()).or_default();

        let discovered = self.discoverer.discover(world);
        report.regions = discovered.len();
        let mut keep_markers: IndexSet<String> = IndexSet::new();
        let mut keep_regions: IndexSet<u64> = IndexSet::new();

        for region in &discovered {
            keep_regions.insert(region.id);
            let base = format!("region-{}", region.id);
            let outlines = match cache.get_or_trace(region.id, &region.sections, &self.tracer) {
                Ok(outlines) => outlines,
                Err(e) => {
                    log::warn!("world {}: skipping {base}: {e}", world.id);
                    report.regions_skipped += 1;
                    keep_markers.extend(region_marker_ids(set, &world.id, &base));
                    continue;
                }
            };

            for (part, outline) in outlines.iter().enumerate() {
                let name = if part == 0 {
                    base.clone()
                } else {
                    format!("{base}-{part}")
                };
                for hole in &outline.dropped_holes {
                    log::warn!(
                        "world {}: {name}: hole at section {hole} could not be bridged, drawing it filled",
                        world.id
                    );
                }
                report.holes_dropped += outline.dropped_holes.len();
                if let Some(marker) = ShapeMarker::from_outline(&name, outline, region.color) {
                    let id = global_id(&world.id, &name);
                    set.insert(id.clone(), marker);
                    keep_markers.insert(id);
                    report.markers_written += 1;
                }
            }
        }

        report.markers_removed = set.retain_ids(&keep_markers);
        cache.evict_except(&keep_regions);
        log::debug!(
            "world {}: {} regions, {} markers written, {} removed",
            world.id,
            report.regions,
            report.markers_written,
            report.markers_removed
        );
        report
    }

    /// The marker set of `world`, if it has one.
    pub fn marker_set(&self, world: &str) -> Option<&MarkerSet> {
        self.registry.get(world)
    }

    /// The outline cache of `world`, if it was ever refreshed.
    pub fn cache(&self, world: &str) -> Option<&OutlineCache> {
        self.caches.get(world)
    }

    /// Forget every world's markers and cached outlines.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.caches.clear();
    }
}

/// Ids of the markers currently written for `base` in `world`.
fn region_marker_ids(set: &MarkerSet, world: &str, base: &str) -> Vec<String> {
    let id = global_id(world, base);
    let part_prefix = format!("{id}-");
    set.ids()
        .filter(|existing| *existing == id || existing.starts_with(&part_prefix))
        .map(str::to_string)
        .collect()
}
