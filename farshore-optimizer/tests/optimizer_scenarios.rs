//! End-to-end scenarios for `RouteOptimizer` over an in-memory catalog.

use std::collections::HashSet;

use farshore_core::geometry::{route_distance, route_duration};
use farshore_core::test_support::{MemoryCatalog, loadout, sector, starting_sector};
use farshore_core::{
    HaulModel, Plan, PlanRequest, Planner, RankWeightedHaul, RegionId, Sector, SectorId,
};
use farshore_optimizer::{OptimizerConfig, RouteOptimizer};
use rstest::rstest;

const REGION: RegionId = RegionId(1);

fn request(rank: u8, range: f64) -> PlanRequest {
    let current = loadout(rank, range, 10.0);
    PlanRequest::new(REGION, current.clone(), current)
}

fn sequential_optimizer(
    catalog: MemoryCatalog,
) -> RouteOptimizer<MemoryCatalog, RankWeightedHaul> {
    RouteOptimizer::with_config(catalog, RankWeightedHaul, OptimizerConfig::sequential())
}

#[rstest]
fn region_with_no_eligible_sectors_is_infeasible() {
    let catalog = MemoryCatalog::with_sectors([
        starting_sector(1, 1),
        sector(2, 1, 3.0, 4.0, 5, 40.0),
    ])
    .with_locked(SectorId(2));
    let optimizer = sequential_optimizer(catalog);

    assert_eq!(optimizer.best_route(&request(10, 100.0)), None);
}

#[rstest]
fn single_eligible_sector_yields_the_single_stop_route() {
    let start = starting_sector(1, 1);
    let dest = sector(2, 1, 3.0, 4.0, 5, 40.0);
    let catalog = MemoryCatalog::with_sectors([start.clone(), dest.clone()]);
    let optimizer = sequential_optimizer(catalog);

    let outbound = request(10, 100.0);
    let plan = optimizer.best_route(&outbound).expect("within range");

    assert_eq!(plan.sectors, vec![SectorId(2)]);
    let full = [start, dest.clone()];
    assert_eq!(plan.duration, route_duration(&full, &outbound.candidate));
    assert_eq!(
        plan.haul,
        RankWeightedHaul.expected_haul(std::slice::from_ref(&dest), &outbound.current)
    );
}

/// Five sectors on a circle of radius 10: singles cost 10, adjacent pairs
/// stay within a range of 25, and everything longer exceeds it.
fn ring_catalog() -> (Sector, Vec<Sector>) {
    let start = starting_sector(1, 1);
    let hauls = [50.0, 80.0, 30.0, 90.0, 60.0];
    let sectors: Vec<Sector> = hauls
        .iter()
        .enumerate()
        .map(|(i, haul)| {
            let angle = (i as f64) * std::f64::consts::TAU / 5.0;
            sector(i as u32 + 2, 1, 10.0 * angle.cos(), 10.0 * angle.sin(), 1, *haul)
        })
        .collect();
    (start, sectors)
}

/// Every duplicate-free ordered sequence of up to `max_stops` stops.
fn all_candidates(sectors: &[Sector], max_stops: usize) -> Vec<Vec<Sector>> {
    let mut out = Vec::new();
    let mut stack: Vec<Vec<Sector>> = vec![Vec::new()];
    while let Some(prefix) = stack.pop() {
        if !prefix.is_empty() {
            out.push(prefix.clone());
        }
        if prefix.len() >= max_stops {
            continue;
        }
        for s in sectors {
            if prefix.iter().all(|p| p.id != s.id) {
                let mut next = prefix.clone();
                next.push(s.clone());
                stack.push(next);
            }
        }
    }
    out
}

#[rstest]
fn capacity_bounds_the_stop_count_and_the_winner_is_rate_optimal() {
    let (start, sectors) = ring_catalog();
    let mut all = vec![start.clone()];
    all.extend(sectors.iter().cloned());
    let optimizer = sequential_optimizer(MemoryCatalog::with_sectors(all));

    let outbound = request(10, 25.0);
    let plan = optimizer.best_route(&outbound).expect("adjacent pairs fit");

    assert!(plan.sectors.len() <= 2, "range 25 admits at most two stops");

    // The winner's rate dominates every candidate within range.
    for stops in all_candidates(&sectors, 4) {
        let mut full = vec![start.clone()];
        full.extend(stops.iter().cloned());
        if route_distance(&full) > outbound.candidate.range() {
            continue;
        }
        let rival = Plan {
            sectors: stops.iter().map(|s| s.id).collect(),
            duration: route_duration(&full, &outbound.candidate),
            haul: RankWeightedHaul.expected_haul(&stops, &outbound.current),
        };
        assert!(
            plan.yield_rate() >= rival.yield_rate(),
            "candidate {:?} out-rates the winner",
            rival.sectors
        );
    }
}

#[rstest]
fn mandatory_sector_above_the_rank_gate_is_infeasible() {
    let reachable = sector(2, 1, 3.0, 4.0, 5, 40.0);
    let gated = sector(3, 1, 4.0, 3.0, 50, 400.0);
    let catalog = MemoryCatalog::with_sectors([starting_sector(1, 1), reachable, gated]);
    let optimizer = sequential_optimizer(catalog);

    let forced = request(10, 100.0).with_must_include(vec![SectorId(2), SectorId(3)]);
    assert_eq!(optimizer.best_route(&forced), None);
}

#[rstest]
fn repeated_queries_reuse_the_cached_table() {
    let (start, sectors) = ring_catalog();
    let mut all = vec![start];
    all.extend(sectors);
    let optimizer = sequential_optimizer(MemoryCatalog::with_sectors(all));

    let outbound = request(10, 25.0);
    let first = optimizer.best_route(&outbound);
    let stats = optimizer.cache_stats();
    assert_eq!((stats.hits, stats.misses), (0, 1));

    let second = optimizer.best_route(&outbound);
    let stats = optimizer.cache_stats();
    assert_eq!((stats.hits, stats.misses), (1, 1));
    assert_eq!(first, second);
}

#[rstest]
fn eligibility_drift_at_the_same_tier_invalidates_the_cached_table() {
    let catalog = MemoryCatalog::with_sectors([
        starting_sector(1, 1),
        sector(2, 1, 3.0, 4.0, 5, 40.0),
        sector(3, 1, 6.0, 8.0, 5, 90.0),
    ])
    .with_locked(SectorId(3));
    let optimizer = sequential_optimizer(catalog);

    let plan = optimizer.best_route(&request(10, 100.0)).expect("feasible");
    assert_eq!(plan.sectors, vec![SectorId(2)]);

    // Same tier, wider eligible set via allow-list: the cache must not serve
    // the old table.
    let widened =
        request(10, 100.0).with_allow_list(HashSet::from([SectorId(2), SectorId(3)]));
    let plan = optimizer.best_route(&widened).expect("feasible");
    assert_eq!(plan.sectors, vec![SectorId(2), SectorId(3)]);

    let stats = optimizer.cache_stats();
    assert_eq!((stats.hits, stats.misses), (0, 2));
}

#[rstest]
fn allow_list_membership_replaces_the_unlock_restriction() {
    let catalog = MemoryCatalog::with_sectors([
        starting_sector(1, 1),
        sector(2, 1, 3.0, 4.0, 5, 40.0),
        sector(3, 1, 6.0, 8.0, 5, 90.0),
    ])
    .with_locked(SectorId(3));
    let optimizer = sequential_optimizer(catalog);

    let restricted = request(10, 100.0).with_allow_list(HashSet::from([SectorId(3)]));
    let plan = optimizer.best_route(&restricted).expect("allow-listed");
    assert_eq!(plan.sectors, vec![SectorId(3)]);
}
