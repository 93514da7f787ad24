//! Outline cache with section-fingerprint invalidation.
//!
//! Regions usually keep their sections between refreshes, so tracing every
//! region on every refresh is wasted work. [`OutlineCache`] keeps the traced
//! outlines of each region together with a fingerprint of the sections
//! they were traced from and retraces only when the fingerprint changes.
//!
//! # Invalidation
//!
//! A region is retraced when:
//! - It has not been traced yet.
//! - Its revealed sections differ (by [`CellSet::fingerprint`]).
//! - The tracer's scale factor changed.
//! - [`invalidate`](OutlineCache::invalidate) was called.
//!
//! Failed traces are never cached.

use gridtrace_core::{CellSet, OutlineError};
use gridtrace_outline::{Outline, Tracer};
use indexmap::{IndexMap, IndexSet};

/// Fingerprint of one trace input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TraceKey {
    sections: u64,
    cell_count: usize,
    scale: u32,
}

impl TraceKey {
    fn of(sections: &CellSet, tracer: &Tracer) -> Self {
        Self {
            sections: sections.fingerprint(),
            cell_count: sections.len(),
            scale: tracer.mapper().scale(),
        }
    }
}

#[derive(Debug)]
struct CachedOutlines {
    key: TraceKey,
    outlines: Vec<Outline>,
}

/// Per-region cache of traced outlines.
#[derive(Debug, Default)]
pub struct OutlineCache {
    entries: IndexMap<u64, CachedOutlines>,
    hits: u64,
    misses: u64,
}

impl OutlineCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Outlines of every component of `sections`, traced on a miss.
    ///
    /// # Errors
    ///
    /// The tracer's error on a miss. The previous entry for `region` is
    /// kept in that case.
    pub fn get_or_trace(
        &mut self,
        region: u64,
        sections: &CellSet,
        tracer: &Tracer,
    ) -> Result<&[Outline], OutlineError> {
        let key = TraceKey::of(sections, tracer);
        let fresh = matches!(self.entries.get(&region), Some(cached) if cached.key == key);
        if fresh {
            self.hits += 1;
        } else {
            let outlines = tracer.trace_components(sections)?;
            self.misses += 1;
            self.entries.insert(region, CachedOutlines { key, outlines });
        }
        Ok(self
            .entries
            .get(&region)
            .map(|cached| cached.outlines.as_slice())
            .unwrap_or(&[]))
    }

    /// Drop every region not in `keep`. Returns how many were dropped.
    pub fn evict_except(&mut self, keep: &IndexSet<u64>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|id, _| keep.contains(id));
        before - self.entries.len()
    }

    /// Drop everything.
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }

    /// Number of cached regions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no region is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that traced.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
