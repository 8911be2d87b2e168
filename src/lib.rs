//! Facade crate for the Farshore route-optimization engine.
//!
//! This crate re-exports the core domain types and exposes the bounded-search
//! optimizer behind a feature flag.

#![forbid(unsafe_code)]

pub use farshore_core::{
    CatalogError, HaulModel, Loadout, LoadoutError, PartId, Plan, PlanRequest, Planner,
    RankWeightedHaul, RegionId, Sector, SectorCatalog, SectorId, geometry,
};

#[cfg(feature = "optimizer")]
pub use farshore_optimizer::{CacheStats, OptimizerConfig, RouteOptimizer};
