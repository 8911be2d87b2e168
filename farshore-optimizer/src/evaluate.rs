//! Candidate scoring, filtering, and selection.
//!
//! Scoring and per-survivor evaluation are pure maps over independent
//! candidates; they run data-parallel via `rayon` unless the configuration
//! forces sequential execution. Both paths preserve candidate order, so the
//! first-encountered tie-break produces identical results either way.

use std::time::Duration;

use rayon::prelude::*;

use farshore_core::{HaulModel, Plan, PlanRequest, Sector, SectorId, geometry};

use crate::cache::ScoredRoute;

/// Resolve a stop id sequence against the eligible set and score its travel
/// cost. Ids with no eligible sector are dropped; the mandatory-sector
/// filter rejects such routes downstream, so no separate validation runs.
fn score_route(start: &Sector, route: &[SectorId], eligible: &[Sector]) -> ScoredRoute {
    let stops: Vec<Sector> = route
        .iter()
        .filter_map(|id| eligible.iter().find(|s| s.id == *id).cloned())
        .collect();
    let distance = geometry::route_distance(&with_start(start, &stops));
    ScoredRoute { stops, distance }
}

/// Score every candidate route, optionally in parallel.
pub(crate) fn score_routes(
    start: &Sector,
    routes: &[Vec<SectorId>],
    eligible: &[Sector],
    parallel: bool,
) -> Vec<ScoredRoute> {
    if parallel {
        routes
            .par_iter()
            .map(|route| score_route(start, route, eligible))
            .collect()
    } else {
        routes
            .iter()
            .map(|route| score_route(start, route, eligible))
            .collect()
    }
}

/// Filter the scored table by capacity and mandatory sectors, evaluate the
/// survivors, and pick the best haul rate.
///
/// Duration is computed under the candidate loadout; haul under the current
/// one. Ties keep the first-encountered candidate.
pub(crate) fn select_best(
    start: &Sector,
    table: &[ScoredRoute],
    request: &PlanRequest,
    haul_model: &dyn HaulModel,
    parallel: bool,
) -> Option<Plan> {
    let survivors: Vec<&ScoredRoute> = table
        .iter()
        .filter(|r| r.distance <= request.candidate.range() && r.covers(&request.must_include))
        .collect();
    if survivors.is_empty() {
        return None;
    }

    let evaluate = |route: &&ScoredRoute| -> (Duration, f64) {
        let full = with_start(start, &route.stops);
        let duration = geometry::route_duration(&full, &request.candidate);
        let haul = haul_model.expected_haul(&route.stops, &request.current);
        (duration, haul)
    };
    let metrics: Vec<(Duration, f64)> = if parallel {
        survivors.par_iter().map(evaluate).collect()
    } else {
        survivors.iter().map(evaluate).collect()
    };

    let mut best: Option<(f64, &ScoredRoute, Duration, f64)> = None;
    for (route, (duration, haul)) in survivors.iter().copied().zip(metrics) {
        let rate = haul_rate(haul, duration);
        if best.as_ref().is_none_or(|(best_rate, ..)| rate > *best_rate) {
            best = Some((rate, route, duration, haul));
        }
    }

    best.map(|(_, route, duration, haul)| Plan {
        sectors: route.stops.iter().map(|s| s.id).collect(),
        duration,
        haul,
    })
}

fn with_start(start: &Sector, stops: &[Sector]) -> Vec<Sector> {
    let mut full = Vec::with_capacity(stops.len() + 1);
    full.push(start.clone());
    full.extend(stops.iter().cloned());
    full
}

#[expect(
    clippy::float_arithmetic,
    reason = "the selection objective is haul divided by elapsed minutes"
)]
fn haul_rate(haul: f64, duration: Duration) -> f64 {
    let minutes = duration.as_secs_f64() / 60.0;
    if minutes > 0.0 { haul / minutes } else { 0.0 }
}
