//! Core domain types for the Farshore route-optimization engine.
//!
//! This crate defines the data model shared by every component: sectors and
//! regions, vessel loadouts, plan requests and results, plus the trait seams
//! the optimizer is generic over (`SectorCatalog`, `HaulModel`, `Planner`).
//! Pure travel geometry lives in [`geometry`].
//!
//! Constructors validate where invariants matter and return `Result` to
//! surface invalid input early; plain records use infallible constructors.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalog;
pub mod geometry;
mod haul;
mod loadout;
mod plan;
mod sector;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalog::{CatalogError, SectorCatalog};
pub use haul::{HaulModel, RankWeightedHaul};
pub use loadout::{Loadout, LoadoutError, PartId};
pub use plan::{Plan, PlanRequest, Planner};
pub use sector::{RegionId, Sector, SectorId};
