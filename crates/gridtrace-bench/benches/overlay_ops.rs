//! Criterion benchmarks for overlay refreshes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gridtrace_bench::{lattice_profile, territory_profile};
use gridtrace_core::{Cell, CellSet};
use gridtrace_overlay::{
    BlockPos, Observer, OverlayConfig, RegionSnapshot, VisualizerService, WorldSnapshot,
};

/// Eight regions laid out in a row, 200 sections apart, with an observer
/// standing in each.
fn busy_world() -> WorldSnapshot {
    let regions: Vec<RegionSnapshot> = (0..8)
        .map(|i| {
            let base = territory_profile(2_000, i);
            let offset = i as i32 * 200;
            let sections: CellSet = base
                .iter()
                .map(|c| Cell::new(c.x + offset, c.z))
                .collect();
            RegionSnapshot { id: i, sections }
        })
        .collect();
    let observers = (0..8)
        .map(|i| Observer {
            pos: BlockPos::new(i * 200 * 256 + 8, 8),
            hidden: false,
        })
        .collect();
    WorldSnapshot {
        id: "bench".into(),
        maps: vec!["surface".into()],
        spawn: None,
        observers,
        regions,
    }
}

/// Benchmark: refresh with every region already cached.
fn bench_update_cached(c: &mut Criterion) {
    let world = busy_world();
    let mut service = VisualizerService::new(&OverlayConfig {
        discovery_radius: 32,
        ..OverlayConfig::default()
    })
    .unwrap();
    service.update(&world);

    c.bench_function("overlay_update_cached", |b| {
        b.iter(|| black_box(service.update(&world)));
    });
}

/// Benchmark: refresh from a cold service each time.
fn bench_update_cold(c: &mut Criterion) {
    let world = busy_world();
    let config = OverlayConfig {
        discovery_radius: 32,
        ..OverlayConfig::default()
    };

    c.bench_function("overlay_update_cold", |b| {
        b.iter(|| {
            let mut service = VisualizerService::new(&config).unwrap();
            black_box(service.update(&world))
        });
    });
}

/// Benchmark: tracing a lattice region through a cold service.
fn bench_update_lattice(c: &mut Criterion) {
    let world = WorldSnapshot {
        id: "lattice".into(),
        maps: vec!["surface".into()],
        spawn: Some(BlockPos::new(8, 8)),
        observers: vec![],
        regions: vec![RegionSnapshot {
            id: 1,
            sections: lattice_profile(64, 4),
        }],
    };
    let config = OverlayConfig {
        discovery_radius: 64,
        ..OverlayConfig::default()
    };

    c.bench_function("overlay_update_lattice_64", |b| {
        b.iter(|| {
            let mut service = VisualizerService::new(&config).unwrap();
            black_box(service.update(&world))
        });
    });
}

criterion_group!(
    benches,
    bench_update_cached,
    bench_update_cold,
    bench_update_lattice
);
criterion_main!(benches);
