//! Shape markers and per-world marker sets.

use crate::color::Rgba;
use gridtrace_outline::Outline;
use indexmap::{IndexMap, IndexSet};

/// Prefix of every marker id written by this crate.
pub const ID_PREFIX: &str = "!GridTrace#";

/// Globally unique marker id for `base` in `world`.
pub fn global_id(world: &str, base: &str) -> String {
    format!("{ID_PREFIX}{world}:{base}")
}

/// A filled polygon drawn on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeMarker {
    /// Text shown on hover.
    pub label: String,
    /// Text shown in the detail popup.
    pub detail: String,
    /// Closed polygon in world units; the last point joins the first.
    pub points: Vec<(f64, f64)>,
    /// Anchor position: the first polygon point.
    pub position: (f64, f64),
    /// Stroke colour.
    pub line_color: Rgba,
    /// Fill colour.
    pub fill_color: Rgba,
    /// Whether terrain may hide the marker. Always `false` for regions.
    pub depth_test: bool,
}

impl ShapeMarker {
    /// Build a marker for `outline` filled with `color`.
    ///
    /// Returns `None` for an empty outline.
    pub fn from_outline(label: &str, outline: &Outline, color: Rgba) -> Option<Self> {
        let points: Vec<(f64, f64)> = outline
            .points
            .iter()
            .map(|p| (p.x as f64, p.z as f64))
            .collect();
        let position = *points.first()?;
        Some(Self {
            label: label.to_string(),
            detail: label.to_string(),
            points,
            position,
            line_color: color.outline_color(),
            fill_color: color,
            depth_test: false,
        })
    }
}

/// A named group of markers on one or more maps.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerSet {
    /// Group label shown in the map UI.
    pub label: String,
    /// Whether the group starts hidden.
    pub default_hidden: bool,
    markers: IndexMap<String, ShapeMarker>,
}

impl MarkerSet {
    /// An empty set.
    pub fn new(label: impl Into<String>, default_hidden: bool) -> Self {
        Self {
            label: label.into(),
            default_hidden,
            markers: IndexMap::new(),
        }
    }

    /// Insert or replace a marker, returning the previous one.
    pub fn insert(&mut self, id: String, marker: ShapeMarker) -> Option<ShapeMarker> {
        self.markers.insert(id, marker)
    }

    /// Remove a marker.
    pub fn remove(&mut self, id: &str) -> Option<ShapeMarker> {
        self.markers.shift_remove(id)
    }

    /// Look up a marker.
    pub fn get(&self, id: &str) -> Option<&ShapeMarker> {
        self.markers.get(id)
    }

    /// Marker ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.markers.keys().map(String::as_str)
    }

    /// Number of markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether the set has no markers.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Drop every marker whose id is not in `keep`. Returns how many were
    /// dropped.
    pub fn retain_ids(&mut self, keep: &IndexSet<String>) -> usize {
        let before = self.markers.len();
        self.markers.retain(|id, _| keep.contains(id));
        before - self.markers.len()
    }
}

/// One lazily created marker set per world.
///
/// A world none of whose maps is enabled is remembered as disabled and
/// never gets a set.
#[derive(Debug)]
pub struct MarkerSetRegistry {
    label: String,
    default_hidden: bool,
    disabled_maps: IndexSet<String>,
    sets: IndexMap<String, Option<MarkerSet>>,
}

impl MarkerSetRegistry {
    /// A registry creating sets with the given label and visibility.
    pub fn new(label: impl Into<String>, default_hidden: bool, disabled_maps: IndexSet<String>) -> Self {
        Self {
            label: label.into(),
            default_hidden,
            disabled_maps,
            sets: IndexMap::new(),
        }
    }

    /// The marker set of `world`, creating it on first use.
    ///
    /// `maps` lists the maps rendering the world; only consulted on first
    /// use. Returns `None` if the world is disabled.
    pub fn get_or_create(&mut self, world: &str, maps: &[String]) -> Option<&mut MarkerSet> {
        if !self.sets.contains_key(world) {
            let enabled = maps.iter().any(|m| !self.disabled_maps.contains(m));
            let set = enabled.then(|| MarkerSet::new(self.label.clone(), self.default_hidden));
            if set.is_none() {
                log::debug!("world {world} has no enabled maps, skipping");
            }
            self.sets.insert(world.to_string(), set);
        }
        self.sets.get_mut(world)?.as_mut()
    }

    /// The marker set of `world`, if one was created.
    pub fn get(&self, world: &str) -> Option<&MarkerSet> {
        self.sets.get(world)?.as_ref()
    }

    /// Forget every world.
    pub fn clear(&mut self) {
        self.sets.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtrace_core::MapPoint;

    fn outline(points: &[(i64, i64)]) -> Outline {
        Outline {
            points: points.iter().map(|&(x, z)| MapPoint::new(x, z)).collect(),
            ..Outline::default()
        }
    }

    fn maps(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn global_ids_are_namespaced() {
        assert_eq!(global_id("overworld", "region-3"), "!GridTrace#overworld:region-3");
    }

    #[test]
    fn marker_from_outline() {
        let color = Rgba::DEFAULT_SPAWN;
        let marker =
            ShapeMarker::from_outline("region-1", &outline(&[(0, 0), (256, 0), (256, 256)]), color)
                .unwrap();
        assert_eq!(marker.position, (0.0, 0.0));
        assert_eq!(marker.points.len(), 3);
        assert_eq!(marker.fill_color, color);
        assert_eq!(marker.line_color, color.outline_color());
        assert!(!marker.depth_test);
        assert!(ShapeMarker::from_outline("empty", &Outline::default(), color).is_none());
    }

    #[test]
    fn retain_drops_stale_markers() {
        let mut set = MarkerSet::new("Regions", true);
        let marker =
            ShapeMarker::from_outline("a", &outline(&[(0, 0), (1, 0), (1, 1)]), Rgba::DEFAULT_SPAWN)
                .unwrap();
        set.insert("a".into(), marker.clone());
        set.insert("b".into(), marker.clone());
        set.insert("c".into(), marker);
        let keep: IndexSet<String> = ["a".to_string(), "c".to_string()].into_iter().collect();
        assert_eq!(set.retain_ids(&keep), 1);
        assert_eq!(set.ids().collect::<Vec<_>>(), vec!["a", "c"]);
        assert!(set.remove("a").is_some());
        assert!(set.get("a").is_none());
    }

    #[test]
    fn registry_creates_once_per_world() {
        let mut registry = MarkerSetRegistry::new("Regions", false, IndexSet::new());
        let set = registry.get_or_create("w", &maps(&["surface"])).unwrap();
        assert_eq!(set.label, "Regions");
        assert!(!set.default_hidden);
        set.insert(
            "x".into(),
            ShapeMarker::from_outline("x", &outline(&[(0, 0), (1, 0), (1, 1)]), Rgba::DEFAULT_SPAWN)
                .unwrap(),
        );
        // Second lookup returns the same set, whatever maps are passed.
        assert_eq!(registry.get_or_create("w", &[]).unwrap().len(), 1);
        assert_eq!(registry.get("w").map(MarkerSet::len), Some(1));
    }

    #[test]
    fn registry_remembers_disabled_worlds() {
        let disabled: IndexSet<String> = ["nether".to_string()].into_iter().collect();
        let mut registry = MarkerSetRegistry::new("Regions", true, disabled);
        assert!(registry.get_or_create("n", &maps(&["nether"])).is_none());
        assert!(registry.get_or_create("n", &maps(&["surface"])).is_none());
        assert!(registry.get_or_create("e", &[]).is_none());
        assert!(registry.get_or_create("s", &maps(&["nether", "surface"])).is_some());

        registry.clear();
        assert!(registry.get("s").is_none());
        assert!(registry.get_or_create("n", &maps(&["surface"])).is_some());
    }
}
