//! Data access seam for sector records.
//!
//! The `SectorCatalog` trait is a read-only view over the external data
//! provider: sectors per region, the region's starting sector, and the
//! caller's unlocked-sector set. Eligibility filtering is provided on top of
//! the required methods so every implementation applies the same rules.

use std::collections::HashSet;

use thiserror::Error;

use crate::{RegionId, Sector, SectorId};

/// Errors from [`SectorCatalog::starting_sector`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The region has no starting sector on record.
    #[error("region {0} has no starting sector")]
    NoStartingSector(RegionId),
}

/// Read-only access to the sector records of a region.
///
/// Implementations are side-effect-free views over external data; all three
/// required methods must be consistent for the lifetime of one query.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use farshore_core::{CatalogError, RegionId, Sector, SectorCatalog, SectorId};
///
/// struct SingleRegion {
///     sectors: Vec<Sector>,
/// }
///
/// impl SectorCatalog for SingleRegion {
///     fn sectors_in_region(
///         &self,
///         region: RegionId,
///     ) -> Box<dyn Iterator<Item = Sector> + Send + '_> {
///         Box::new(
///             self.sectors
///                 .iter()
///                 .filter(move |s| s.region == region)
///                 .cloned(),
///         )
///     }
///
///     fn starting_sector(&self, region: RegionId) -> Result<Sector, CatalogError> {
///         self.sectors
///             .iter()
///             .find(|s| s.region == region && s.starting_point)
///             .cloned()
///             .ok_or(CatalogError::NoStartingSector(region))
///     }
///
///     fn is_unlocked(&self, _sector: SectorId) -> bool {
///         true
///     }
/// }
///
/// let region = RegionId(1);
/// let start = Sector::starting_point(SectorId(1), region, Coord { x: 0.0, y: 0.0 });
/// let dest = Sector::new(SectorId(2), region, Coord { x: 3.0, y: 4.0 }, 5, 40.0);
/// let catalog = SingleRegion { sectors: vec![start, dest.clone()] };
///
/// let eligible = catalog.eligible_sectors(region, 10, None);
/// assert_eq!(eligible, vec![dest]);
/// ```
pub trait SectorCatalog {
    /// Return every sector recorded for `region`, starting sector included.
    fn sectors_in_region(
        &self,
        region: RegionId,
    ) -> Box<dyn Iterator<Item = Sector> + Send + '_>;

    /// Return the region's starting sector.
    ///
    /// Fails with [`CatalogError::NoStartingSector`] when the region has
    /// none on record.
    fn starting_sector(&self, region: RegionId) -> Result<Sector, CatalogError>;

    /// Whether the caller has unlocked `sector`.
    fn is_unlocked(&self, sector: SectorId) -> bool;

    /// Return all destination sectors in `region` visitable at `max_rank`.
    ///
    /// Sectors must be non-starting and gated at or below `max_rank`. The
    /// result is further restricted to the caller's unlocked set, unless
    /// `allow_list` is supplied, in which case allow-list membership replaces
    /// the unlock restriction entirely.
    fn eligible_sectors(
        &self,
        region: RegionId,
        max_rank: u8,
        allow_list: Option<&HashSet<SectorId>>,
    ) -> Vec<Sector> {
        self.sectors_in_region(region)
            .filter(|s| !s.starting_point && s.rank_req <= max_rank)
            .filter(|s| match allow_list {
                Some(allowed) => allowed.contains(&s.id),
                None => self.is_unlocked(s.id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryCatalog, sector, starting_sector};
    use rstest::{fixture, rstest};

    const REGION: RegionId = RegionId(1);

    #[fixture]
    fn catalog() -> MemoryCatalog {
        MemoryCatalog::with_sectors([
            starting_sector(1, 1),
            sector(2, 1, 10.0, 0.0, 5, 40.0),
            sector(3, 1, 0.0, 10.0, 20, 90.0),
            sector(4, 1, -10.0, 0.0, 50, 200.0),
        ])
    }

    #[rstest]
    fn filters_by_rank_gate(catalog: MemoryCatalog) {
        let eligible = catalog.eligible_sectors(REGION, 20, None);
        let ids: Vec<SectorId> = eligible.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![SectorId(2), SectorId(3)]);
    }

    #[rstest]
    fn excludes_starting_sector(catalog: MemoryCatalog) {
        let eligible = catalog.eligible_sectors(REGION, u8::MAX, None);
        assert!(eligible.iter().all(|s| !s.starting_point));
    }

    #[rstest]
    fn excludes_locked_sectors(catalog: MemoryCatalog) {
        let catalog = catalog.with_locked(SectorId(2));
        let eligible = catalog.eligible_sectors(REGION, 20, None);
        let ids: Vec<SectorId> = eligible.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![SectorId(3)]);
    }

    #[rstest]
    fn allow_list_overrides_unlock_state(catalog: MemoryCatalog) {
        let catalog = catalog.with_locked(SectorId(2));
        let allowed = HashSet::from([SectorId(2)]);
        let eligible = catalog.eligible_sectors(REGION, 20, Some(&allowed));
        let ids: Vec<SectorId> = eligible.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![SectorId(2)]);
    }

    #[rstest]
    fn missing_region_has_no_starting_sector(catalog: MemoryCatalog) {
        let err = catalog
            .starting_sector(RegionId(9))
            .expect_err("unknown region");
        assert_eq!(err, CatalogError::NoStartingSector(RegionId(9)));
    }
}
