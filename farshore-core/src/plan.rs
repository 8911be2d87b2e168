//! Plan requests, results, and the planner seam.
//!
//! A request snapshots everything one query needs; the result is the chosen
//! route's stop sequence with its derived metrics. Absence of a result
//! signals infeasibility, not an error.

use std::collections::HashSet;
use std::time::Duration;

use crate::{Loadout, RegionId, SectorId};

/// Parameters for one route query.
///
/// Two loadout snapshots travel with the request: `current` scores haul,
/// while `candidate` (a hypothetical refit under evaluation, often equal to
/// `current`) governs feasibility and capacity. Both are read-only for the
/// duration of the query.
///
/// # Examples
/// ```rust
/// use farshore_core::{Loadout, PartId, PlanRequest, RegionId, SectorId};
///
/// # fn main() -> Result<(), farshore_core::LoadoutError> {
/// let loadout = Loadout::new(10, PartId(1), PartId(2), PartId(3), PartId(4), 80.0, 10.0)?;
/// let request = PlanRequest::new(RegionId(1), loadout.clone(), loadout)
///     .with_must_include(vec![SectorId(5)]);
/// assert_eq!(request.must_include, vec![SectorId(5)]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// Region whose sector graph is searched.
    pub region: RegionId,
    /// Loadout used for haul evaluation.
    pub current: Loadout,
    /// Loadout used for feasibility and capacity checks.
    pub candidate: Loadout,
    /// Sectors every considered route must contain, in caller order.
    pub must_include: Vec<SectorId>,
    /// When present, replaces the unlocked-sector restriction entirely.
    pub allow_list: Option<HashSet<SectorId>>,
}

impl PlanRequest {
    /// Construct a request with no mandatory sectors and no allow-list.
    pub fn new(region: RegionId, current: Loadout, candidate: Loadout) -> Self {
        Self {
            region,
            current,
            candidate,
            must_include: Vec::new(),
            allow_list: None,
        }
    }

    /// Require every considered route to contain `sectors`, in this order.
    #[must_use]
    pub fn with_must_include(mut self, sectors: Vec<SectorId>) -> Self {
        self.must_include = sectors;
        self
    }

    /// Restrict eligibility to `allowed`, ignoring unlock state.
    #[must_use]
    pub fn with_allow_list(mut self, allowed: HashSet<SectorId>) -> Self {
        self.allow_list = Some(allowed);
        self
    }
}

/// The chosen route and its derived metrics.
///
/// `sectors` lists the stops in visit order; the region's starting sector is
/// implicit and not repeated here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    /// Stops in visit order, departure point implicit.
    pub sectors: Vec<SectorId>,
    /// Total expedition duration.
    pub duration: Duration,
    /// Expected haul over the whole route.
    pub haul: f64,
}

impl Plan {
    /// Haul per minute: the objective the selector maximises.
    ///
    /// Returns zero for a zero-duration plan.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use farshore_core::{Plan, SectorId};
    ///
    /// let plan = Plan {
    ///     sectors: vec![SectorId(2)],
    ///     duration: Duration::from_secs(1200),
    ///     haul: 100.0,
    /// };
    /// assert_eq!(plan.yield_rate(), 5.0);
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "the yield rate is haul divided by elapsed minutes"
    )]
    pub fn yield_rate(&self) -> f64 {
        let minutes = self.duration.as_secs_f64() / 60.0;
        if minutes > 0.0 { self.haul / minutes } else { 0.0 }
    }
}

/// Find the best route for a request.
///
/// Implementations must be `Send + Sync` so planners can be shared across
/// threads. `None` means the query is infeasible (no eligible sectors, or no
/// candidate within capacity); it is a normal outcome, never an error.
pub trait Planner: Send + Sync {
    /// Return the best feasible route for `request`, if any.
    fn best_route(&self, request: &PlanRequest) -> Option<Plan>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::loadout;
    use rstest::rstest;

    #[rstest]
    fn request_builders_chain() {
        let current = loadout(10, 80.0, 10.0);
        let request = PlanRequest::new(RegionId(1), current.clone(), current)
            .with_must_include(vec![SectorId(5), SectorId(6)])
            .with_allow_list(HashSet::from([SectorId(5)]));
        assert_eq!(request.must_include.len(), 2);
        assert!(request.allow_list.is_some());
    }

    #[rstest]
    fn zero_duration_plan_has_zero_rate() {
        let plan = Plan {
            sectors: Vec::new(),
            duration: Duration::ZERO,
            haul: 50.0,
        };
        assert_eq!(plan.yield_rate(), 0.0);
    }

    #[rstest]
    fn rate_divides_haul_by_minutes() {
        let plan = Plan {
            sectors: vec![SectorId(2), SectorId(3)],
            duration: Duration::from_secs(3600),
            haul: 120.0,
        };
        assert_eq!(plan.yield_rate(), 2.0);
    }
}
