//! Sectors and regions: the nodes and maps of the route graph.

use std::fmt;

use geo::Coord;

/// Identifier of a sector, unique within its region.
///
/// # Examples
/// ```
/// use farshore_core::SectorId;
///
/// let id = SectorId(7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectorId(pub u32);

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a region: a named map with one starting sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A visitable node in the route graph.
///
/// Positions are chart coordinates in survey units. A sector is gated by
/// `rank_req` and contributes `haul_potential` to a route's expected haul.
/// Sectors are immutable snapshots for the lifetime of a query.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use farshore_core::{RegionId, Sector, SectorId};
///
/// let sector = Sector::new(
///     SectorId(2),
///     RegionId(1),
///     Coord { x: 12.0, y: -3.0 },
///     15,
///     60.0,
/// );
///
/// assert_eq!(sector.id, SectorId(2));
/// assert!(!sector.starting_point);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sector {
    /// Identifier, unique within the region.
    pub id: SectorId,
    /// Region this sector belongs to.
    pub region: RegionId,
    /// Chart position in survey units.
    pub position: Coord<f64>,
    /// Whether this is the region's departure point.
    pub starting_point: bool,
    /// Minimum vessel rank able to visit this sector.
    pub rank_req: u8,
    /// Expected haul contribution; non-negative.
    pub haul_potential: f64,
}

impl Sector {
    /// Construct a destination sector.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use farshore_core::{RegionId, Sector, SectorId};
    ///
    /// let sector = Sector::new(SectorId(3), RegionId(1), Coord { x: 0.0, y: 5.0 }, 1, 10.0);
    /// assert_eq!(sector.rank_req, 1);
    /// ```
    pub fn new(
        id: SectorId,
        region: RegionId,
        position: Coord<f64>,
        rank_req: u8,
        haul_potential: f64,
    ) -> Self {
        Self {
            id,
            region,
            position,
            starting_point: false,
            rank_req,
            haul_potential,
        }
    }

    /// Construct a region's starting sector.
    ///
    /// Starting sectors carry no rank gate and no haul of their own.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use farshore_core::{RegionId, Sector, SectorId};
    ///
    /// let start = Sector::starting_point(SectorId(1), RegionId(1), Coord { x: 0.0, y: 0.0 });
    /// assert!(start.starting_point);
    /// assert_eq!(start.rank_req, 0);
    /// ```
    pub fn starting_point(id: SectorId, region: RegionId, position: Coord<f64>) -> Self {
        Self {
            id,
            region,
            position,
            starting_point: true,
            rank_req: 0,
            haul_potential: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_sector_is_not_a_starting_point() {
        let sector = Sector::new(
            SectorId(4),
            RegionId(2),
            Coord { x: 1.0, y: 2.0 },
            30,
            120.0,
        );
        assert!(!sector.starting_point);
        assert_eq!(sector.region, RegionId(2));
    }

    #[test]
    fn starting_point_has_no_gate_or_haul() {
        let start = Sector::starting_point(SectorId(1), RegionId(2), Coord { x: 0.0, y: 0.0 });
        assert!(start.starting_point);
        assert_eq!(start.rank_req, 0);
        assert_eq!(start.haul_potential, 0.0);
    }

    #[test]
    fn ids_order_and_display() {
        assert!(SectorId(2) < SectorId(10));
        assert_eq!(RegionId(3).to_string(), "3");
    }
}
