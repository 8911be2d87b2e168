//! The optimizer facade: orchestration, configuration, and error absorption.

use thiserror::Error;

use farshore_core::{CatalogError, HaulModel, Plan, PlanRequest, Planner, SectorCatalog, SectorId};

use crate::cache::{CacheStats, ScoreCache};
use crate::enumerate::enumerate_routes;
use crate::evaluate::{score_routes, select_best};

/// Configuration for [`RouteOptimizer`].
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Maximum stops beyond the starting sector per route.
    pub max_extra_stops: usize,
    /// Evaluate candidates data-parallel; disable for strictly sequential,
    /// reproducible runs.
    pub parallel: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_extra_stops: 4,
            parallel: true,
        }
    }
}

impl OptimizerConfig {
    /// Default bounds with parallel evaluation switched off.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}

/// Internal pipeline failures, absorbed at the [`Planner`] boundary.
#[derive(Debug, Error)]
enum PlanError {
    /// The catalog could not resolve required sector data.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Bounded-search route optimizer.
///
/// Generic over the engine seams: a read-only sector catalog and a haul
/// model. One optimizer owns one session's score cache; drop it to forget
/// every memoised table.
///
/// # Examples
///
/// ```rust
/// use farshore_core::test_support::{loadout, sector, starting_sector, MemoryCatalog};
/// use farshore_core::{Planner, PlanRequest, RankWeightedHaul, RegionId, SectorId};
/// use farshore_optimizer::{OptimizerConfig, RouteOptimizer};
///
/// let catalog = MemoryCatalog::with_sectors([
///     starting_sector(1, 1),
///     sector(2, 1, 3.0, 4.0, 5, 60.0),
/// ]);
/// let optimizer =
///     RouteOptimizer::with_config(catalog, RankWeightedHaul, OptimizerConfig::sequential());
///
/// let current = loadout(10, 50.0, 10.0);
/// let request = PlanRequest::new(RegionId(1), current.clone(), current);
/// let plan = optimizer.best_route(&request).expect("route within range");
/// assert_eq!(plan.sectors, vec![SectorId(2)]);
/// ```
pub struct RouteOptimizer<C, H>
where
    C: SectorCatalog,
    H: HaulModel,
{
    catalog: C,
    haul_model: H,
    config: OptimizerConfig,
    cache: ScoreCache,
}

impl<C, H> RouteOptimizer<C, H>
where
    C: SectorCatalog,
    H: HaulModel,
{
    /// Construct an optimizer using default configuration.
    pub fn new(catalog: C, haul_model: H) -> Self {
        Self::with_config(catalog, haul_model, OptimizerConfig::default())
    }

    /// Construct an optimizer with explicit configuration.
    pub fn with_config(catalog: C, haul_model: H, config: OptimizerConfig) -> Self {
        Self {
            catalog,
            haul_model,
            config,
            cache: ScoreCache::default(),
        }
    }

    /// Snapshot the session cache's hit/miss counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn plan(&self, request: &PlanRequest) -> Result<Option<Plan>, PlanError> {
        let eligible = self.catalog.eligible_sectors(
            request.region,
            request.candidate.rank(),
            request.allow_list.as_ref(),
        );
        let Some(tier) = eligible.iter().map(|s| s.rank_req).max() else {
            log::debug!("no eligible sectors in region {}", request.region);
            return Ok(None);
        };
        let start = self.catalog.starting_sector(request.region)?;

        let mut eligible_ids: Vec<SectorId> = eligible.iter().map(|s| s.id).collect();
        eligible_ids.sort_unstable();
        let table = match self.cache.fetch(tier, &eligible_ids, &request.must_include) {
            Some(table) => table,
            None => {
                let routes = enumerate_routes(
                    &eligible,
                    &request.must_include,
                    self.config.max_extra_stops,
                );
                let scored = score_routes(&start, &routes, &eligible, self.config.parallel);
                self.cache
                    .store(tier, eligible_ids, request.must_include.clone(), scored)
            }
        };

        Ok(select_best(
            &start,
            &table,
            request,
            &self.haul_model,
            self.config.parallel,
        ))
    }
}

impl<C, H> Planner for RouteOptimizer<C, H>
where
    C: SectorCatalog + Send + Sync,
    H: HaulModel,
{
    fn best_route(&self, request: &PlanRequest) -> Option<Plan> {
        match self.plan(request) {
            Ok(plan) => plan,
            Err(err) => {
                log::error!(
                    "route planning failed for region {} at rank {}: {err}",
                    request.region,
                    request.candidate.rank()
                );
                None
            }
        }
    }
}
