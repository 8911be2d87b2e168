//! Session-scoped memoisation of scored candidate tables.
//!
//! Tables are keyed by rank tier (the highest rank requirement among the
//! eligible sectors). Each entry remembers the eligible-sector set and the
//! forced seed it was computed from, so eligibility drift (unlocks,
//! allow-list changes) and mandatory-sector changes invalidate it instead of
//! serving stale candidates.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use farshore_core::{Sector, SectorId};

/// A scored candidate: the ordered stops and their cumulative travel cost.
#[derive(Debug, Clone)]
pub(crate) struct ScoredRoute {
    /// Stops in visit order, departure point implicit.
    pub(crate) stops: Vec<Sector>,
    /// Cumulative travel cost from the starting sector through every stop.
    pub(crate) distance: f64,
}

impl ScoredRoute {
    /// Whether this route visits every sector in `must_include`.
    pub(crate) fn covers(&self, must_include: &[SectorId]) -> bool {
        must_include
            .iter()
            .all(|id| self.stops.iter().any(|s| s.id == *id))
    }
}

#[derive(Debug)]
struct CacheEntry {
    /// Sorted ids of the eligible set the table was computed from.
    eligible: Vec<SectorId>,
    /// The forced seed, empty when the table is a full enumeration.
    forced: Vec<SectorId>,
    table: Arc<Vec<ScoredRoute>>,
}

impl CacheEntry {
    /// Whether the entry can satisfy a query with this `must_include`.
    ///
    /// A forced table only serves the identical forced seed. A full table
    /// serves any constraint at least one of its routes covers; routes that
    /// do not cover it are removed by the selection filter downstream.
    fn serves(&self, must_include: &[SectorId]) -> bool {
        if self.forced.is_empty() {
            must_include.is_empty() || self.table.iter().any(|r| r.covers(must_include))
        } else {
            self.forced == must_include
        }
    }
}

/// Cache hit/miss counters, observable for diagnostics and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups served from a cached table.
    pub hits: u64,
    /// Lookups that required a fresh computation.
    pub misses: u64,
}

/// Rank-tier keyed score cache shared across calls within a session.
///
/// Lookup and store are independent operations: tables are computed outside
/// the lock, and a race that computes a table twice simply overwrites once.
/// Stored tables are immutable behind an `Arc`, so readers never observe a
/// partial update.
#[derive(Debug, Default)]
pub(crate) struct ScoreCache {
    tiers: Mutex<HashMap<u8, CacheEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ScoreCache {
    /// Return the cached table for `tier` if it is still valid for this
    /// eligible set and `must_include` constraint.
    pub(crate) fn fetch(
        &self,
        tier: u8,
        eligible: &[SectorId],
        must_include: &[SectorId],
    ) -> Option<Arc<Vec<ScoredRoute>>> {
        let table = self.lookup(tier, eligible, must_include);
        if table.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        table
    }

    fn lookup(
        &self,
        tier: u8,
        eligible: &[SectorId],
        must_include: &[SectorId],
    ) -> Option<Arc<Vec<ScoredRoute>>> {
        let tiers = self.tiers.lock().ok()?;
        let entry = tiers.get(&tier)?;
        if entry.eligible == eligible && entry.serves(must_include) {
            Some(Arc::clone(&entry.table))
        } else {
            None
        }
    }

    /// Store a freshly computed table for `tier`, overwriting any stale
    /// entry, and return it for immediate use.
    pub(crate) fn store(
        &self,
        tier: u8,
        eligible: Vec<SectorId>,
        forced: Vec<SectorId>,
        table: Vec<ScoredRoute>,
    ) -> Arc<Vec<ScoredRoute>> {
        let table = Arc::new(table);
        if let Ok(mut tiers) = self.tiers.lock() {
            tiers.insert(
                tier,
                CacheEntry {
                    eligible,
                    forced,
                    table: Arc::clone(&table),
                },
            );
        }
        table
    }

    /// Snapshot the hit/miss counters.
    pub(crate) fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
