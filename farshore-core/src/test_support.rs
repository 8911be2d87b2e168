//! Test-only, in-memory `SectorCatalog` implementation and fixture helpers
//! used by unit, property, and integration tests.

use std::collections::HashSet;

use geo::Coord;

use crate::{CatalogError, Loadout, PartId, RegionId, Sector, SectorCatalog, SectorId};

/// In-memory `SectorCatalog` used in tests.
///
/// The catalog performs a linear scan and is intended only for small
/// datasets. Every sector starts unlocked; use [`MemoryCatalog::with_locked`]
/// to simulate sectors the caller has not opened yet.
#[derive(Default, Debug)]
pub struct MemoryCatalog {
    sectors: Vec<Sector>,
    locked: HashSet<SectorId>,
}

impl MemoryCatalog {
    /// Create a catalog from a collection of sectors, all unlocked.
    pub fn with_sectors<I>(sectors: I) -> Self
    where
        I: IntoIterator<Item = Sector>,
    {
        Self {
            sectors: sectors.into_iter().collect(),
            locked: HashSet::new(),
        }
    }

    /// Mark `sector` as locked for the caller.
    #[must_use]
    pub fn with_locked(mut self, sector: SectorId) -> Self {
        self.locked.insert(sector);
        self
    }
}

impl SectorCatalog for MemoryCatalog {
    fn sectors_in_region(
        &self,
        region: RegionId,
    ) -> Box<dyn Iterator<Item = Sector> + Send + '_> {
        Box::new(
            self.sectors
                .iter()
                .filter(move |s| s.region == region)
                .cloned(),
        )
    }

    fn starting_sector(&self, region: RegionId) -> Result<Sector, CatalogError> {
        self.sectors
            .iter()
            .find(|s| s.region == region && s.starting_point)
            .cloned()
            .ok_or(CatalogError::NoStartingSector(region))
    }

    fn is_unlocked(&self, sector: SectorId) -> bool {
        !self.locked.contains(&sector)
    }
}

/// Construct a destination sector at a chart position.
#[must_use]
pub fn sector(id: u32, region: u32, x: f64, y: f64, rank_req: u8, haul_potential: f64) -> Sector {
    Sector::new(
        SectorId(id),
        RegionId(region),
        Coord { x, y },
        rank_req,
        haul_potential,
    )
}

/// Construct a region's starting sector at the chart origin.
#[must_use]
pub fn starting_sector(id: u32, region: u32) -> Sector {
    Sector::starting_point(SectorId(id), RegionId(region), Coord { x: 0.0, y: 0.0 })
}

/// Construct a loadout with fixed parts and the given performance.
#[expect(
    clippy::expect_used,
    reason = "test fixtures are built from known-valid values"
)]
#[must_use]
pub fn loadout(rank: u8, range: f64, speed: f64) -> Loadout {
    Loadout::new(
        rank,
        PartId(1),
        PartId(2),
        PartId(3),
        PartId(4),
        range,
        speed,
    )
    .expect("fixture loadout is valid")
}
