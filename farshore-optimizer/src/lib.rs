//! Bounded-search route optimizer for the Farshore engine.
//!
//! This crate provides [`RouteOptimizer`], the default implementation of the
//! [`Planner`](farshore_core::Planner) trait. It expands a bounded
//! breadth-first tree of route candidates from a region's starting sector,
//! scores every candidate's travel cost, filters by the candidate loadout's
//! range and any mandatory sectors, and picks the route with the best haul
//! per minute.
//!
//! Candidate tables are memoised per rank tier in a session-scoped cache, and
//! scoring runs as a data-parallel map unless
//! [`OptimizerConfig::parallel`](OptimizerConfig) disables it. The public
//! boundary is deliberately small: a query either yields a plan or `None`,
//! with internal failures logged and absorbed rather than surfaced.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cache;
mod enumerate;
mod evaluate;
mod optimizer;

pub use cache::CacheStats;
pub use optimizer::{OptimizerConfig, RouteOptimizer};
