//! Candidate route enumeration.
//!
//! Routes are ordered stop sequences; the region's starting sector is
//! implicit and never stored. Expansion is breadth-first over a fixed-depth
//! tree rather than a full permutation search: it trades completeness for a
//! bounded candidate count, which is acceptable because haul is
//! order-independent and travel cost is dominated by endpoint proximity.

use std::collections::HashSet;

use farshore_core::{Sector, SectorId};

/// Produce the distinct candidate routes over `eligible`.
///
/// A non-empty `must_include` collapses the space to the single seed route
/// holding exactly those sectors in caller order, never extended. Otherwise
/// every eligible sector seeds a one-stop route and each round extends every
/// frontier route by every eligible sector it does not already visit, until
/// routes reach `max_extra_stops` stops.
///
/// Candidates are deduplicated on their ordered id sequence and returned in
/// first-encounter order, so downstream tie-breaks stay deterministic.
pub(crate) fn enumerate_routes(
    eligible: &[Sector],
    must_include: &[SectorId],
    max_extra_stops: usize,
) -> Vec<Vec<SectorId>> {
    if !must_include.is_empty() {
        // Routes never revisit a sector; keep the first occurrence only.
        let mut seed = Vec::with_capacity(must_include.len());
        for id in must_include {
            if !seed.contains(id) {
                seed.push(*id);
            }
        }
        return vec![seed];
    }

    let mut routes: Vec<Vec<SectorId>> = Vec::new();
    let mut seen: HashSet<Vec<SectorId>> = HashSet::new();
    for sector in eligible {
        let seed = vec![sector.id];
        if seen.insert(seed.clone()) {
            routes.push(seed);
        }
    }

    let mut frontier = routes.clone();
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for base in &frontier {
            if base.len() >= max_extra_stops {
                continue;
            }
            for sector in eligible {
                if base.contains(&sector.id) {
                    continue;
                }
                let mut extended = base.clone();
                extended.push(sector.id);
                if seen.insert(extended.clone()) {
                    next.push(extended.clone());
                    routes.push(extended);
                }
            }
        }
        frontier = next;
    }
    routes
}
