//! Region discovery.
//!
//! A world is partitioned into regions, each owning a set of sections
//! (square blocks of `1 << shift` world units). Drawing every region in
//! full would be expensive and would reveal the whole map, so only the
//! neighbourhood of points of interest is drawn: the spawn point and every
//! visible observer. Each such point reveals the sections of its own
//! region within `radius` sections of it.

use crate::color::Rgba;
use gridtrace_core::{Cell, CellSet};
use indexmap::IndexMap;

/// A position in world (block) units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockPos {
    /// World x.
    pub x: i32,
    /// World z.
    pub z: i32,
}

impl BlockPos {
    /// Create a position.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The section containing this position.
    pub fn section(self, shift: u32) -> Cell {
        let shift = shift.min(31);
        Cell::new(self.x >> shift, self.z >> shift)
    }
}

/// A viewer standing somewhere in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Observer {
    /// Where the observer stands.
    pub pos: BlockPos,
    /// Hidden observers (invisible, spectating, vanished) reveal nothing.
    pub hidden: bool,
}

/// One region as reported by the world, in section coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionSnapshot {
    /// Stable region id.
    pub id: u64,
    /// Sections owned by the region.
    pub sections: CellSet,
}

/// Everything the overlay reads from one world per refresh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldSnapshot {
    /// World id, used in marker ids.
    pub id: String,
    /// Ids of the maps rendering this world.
    pub maps: Vec<String>,
    /// Spawn point, if the world has one.
    pub spawn: Option<BlockPos>,
    /// Current observers.
    pub observers: Vec<Observer>,
    /// Current regions.
    pub regions: Vec<RegionSnapshot>,
}

/// The revealed part of one region.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscoveredRegion {
    /// Region id.
    pub id: u64,
    /// Fill colour.
    pub color: Rgba,
    /// Revealed sections; a subset of the region's sections.
    pub sections: CellSet,
    /// Whether more than one point of interest revealed this region.
    pub shared: bool,
}

/// Finds the regions around points of interest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Discoverer {
    radius: u32,
    shift: u32,
    spawn_color: Rgba,
}

impl Discoverer {
    /// A discoverer revealing `radius` sections around each point, with
    /// sections of `1 << shift` blocks.
    pub fn new(radius: u32, shift: u32, spawn_color: Rgba) -> Self {
        Self {
            radius,
            shift,
            spawn_color,
        }
    }

    /// Regions revealed by the spawn point and the visible observers, in
    /// discovery order (spawn region first).
    ///
    /// The spawn region takes the spawn colour. Every other region takes
    /// the next colour around the hue circle, spaced by the total number
    /// of regions in the world.
    pub fn discover(&self, world: &WorldSnapshot) -> Vec<DiscoveredRegion> {
        let owner: IndexMap<Cell, usize> = world
            .regions
            .iter()
            .enumerate()
            .flat_map(|(i, region)| region.sections.iter().map(move |s| (s, i)))
            .collect();
        let region_count = world.regions.len();

        let mut found: IndexMap<u64, DiscoveredRegion> = IndexMap::new();
        let mut hue_index = 0;

        if let Some(spawn) = world.spawn {
            let centre = spawn.section(self.shift);
            if let Some(&i) = owner.get(&centre) {
                let region = &world.regions[i];
                let info = found.entry(region.id).or_insert_with(|| DiscoveredRegion {
                    id: region.id,
                    color: self.spawn_color,
                    sections: CellSet::new(),
                    shared: false,
                });
                self.reveal(info, region, centre);
            }
        }

        for observer in world.observers.iter().filter(|o| !o.hidden) {
            let centre = observer.pos.section(self.shift);
            let Some(&i) = owner.get(&centre) else {
                continue;
            };
            let region = &world.regions[i];
            let info = match found.entry(region.id) {
                indexmap::map::Entry::Occupied(entry) => {
                    let info = entry.into_mut();
                    info.shared = true;
                    info
                }
                indexmap::map::Entry::Vacant(entry) => {
                    hue_index += 1;
                    entry.insert(DiscoveredRegion {
                        id: region.id,
                        color: self.spawn_color.hue_for(hue_index, region_count),
                        sections: CellSet::new(),
                        shared: false,
                    })
                }
            };
            self.reveal(info, region, centre);
        }

        found.into_values().collect()
    }

    /// Add the sections of `region` within the radius of `centre`.
    fn reveal(&self, info: &mut DiscoveredRegion, region: &RegionSnapshot, centre: Cell) {
        let r = self.radius as i32;
        for dz in -r..=r {
            for dx in -r..=r {
                let (Some(x), Some(z)) = (centre.x.checked_add(dx), centre.z.checked_add(dz)) else {
                    continue;
                };
                let section = Cell::new(x, z);
                if region.sections.contains(section) {
                    info.sections.insert(section);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtrace_test_utils::{rect, shifted};

    fn region(id: u64, sections: CellSet) -> RegionSnapshot {
        RegionSnapshot { id, sections }
    }

    fn visible(x: i32, z: i32) -> Observer {
        Observer {
            pos: BlockPos::new(x, z),
            hidden: false,
        }
    }

    fn discoverer() -> Discoverer {
        Discoverer::new(1, 4, Rgba::DEFAULT_SPAWN)
    }

    #[test]
    fn block_to_section_floors_negatives() {
        assert_eq!(BlockPos::new(-1, 15).section(4), Cell::new(-1, 0));
        assert_eq!(BlockPos::new(-16, 16).section(4), Cell::new(-1, 1));
        assert_eq!(BlockPos::new(-17, 0).section(4), Cell::new(-2, 0));
    }

    #[test]
    fn spawn_region_gets_spawn_colour() {
        let world = WorldSnapshot {
            spawn: Some(BlockPos::new(40, 40)),
            regions: vec![region(7, rect(10, 10))],
            ..WorldSnapshot::default()
        };
        let found = discoverer().discover(&world);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 7);
        assert_eq!(found[0].color, Rgba::DEFAULT_SPAWN);
        // Section (2, 2) and its eight neighbours.
        assert_eq!(found[0].sections.len(), 9);
        assert!(!found[0].shared);
    }

    #[test]
    fn reveal_stops_at_the_region_edge() {
        let world = WorldSnapshot {
            spawn: Some(BlockPos::new(0, 0)),
            regions: vec![region(1, rect(10, 10))],
            ..WorldSnapshot::default()
        };
        let found = discoverer().discover(&world);
        assert_eq!(found[0].sections.len(), 4);
    }

    #[test]
    fn hidden_observers_reveal_nothing() {
        let world = WorldSnapshot {
            observers: vec![Observer {
                pos: BlockPos::new(40, 40),
                hidden: true,
            }],
            regions: vec![region(1, rect(10, 10))],
            ..WorldSnapshot::default()
        };
        assert!(discoverer().discover(&world).is_empty());
    }

    #[test]
    fn observers_get_distinct_colours_in_order() {
        let world = WorldSnapshot {
            spawn: Some(BlockPos::new(8, 8)),
            observers: vec![visible(1000, 8), visible(8, 1000), visible(20, 20)],
            regions: vec![
                region(1, rect(4, 4)),
                region(2, shifted(&rect(4, 4), 60, 0)),
                region(3, shifted(&rect(4, 4), 0, 60)),
            ],
            ..WorldSnapshot::default()
        };
        let found = discoverer().discover(&world);
        let ids: Vec<u64> = found.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(found[1].color, Rgba::DEFAULT_SPAWN.hue_for(1, 3));
        assert_eq!(found[2].color, Rgba::DEFAULT_SPAWN.hue_for(2, 3));
        assert_ne!(found[1].color, found[2].color);
        assert!(found[0].shared);
        assert!(!found[1].shared);
    }

    #[test]
    fn points_outside_every_region_are_ignored() {
        let world = WorldSnapshot {
            spawn: Some(BlockPos::new(-500, -500)),
            observers: vec![visible(500, 500)],
            regions: vec![region(1, rect(4, 4))],
            ..WorldSnapshot::default()
        };
        assert!(discoverer().discover(&world).is_empty());
    }
}
