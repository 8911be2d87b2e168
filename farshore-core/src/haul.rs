//! Expected-haul model for a set of visited sectors.
//!
//! The `HaulModel` trait assigns an expected haul to the *set* of sectors a
//! route visits, evaluated under the caller's current [`Loadout`]. Selection
//! downstream compares haul across routes of different lengths, so the
//! contract requires order independence and monotone growth.

use crate::{Loadout, Sector};

/// Compute the expected haul for a set of visited sectors.
///
/// Implementations must be thread-safe (`Send + Sync`) so evaluation can run
/// across threads, and must guarantee:
/// - the result is a pure function of the sector *set* (order-independent);
/// - adding a sector never decreases the result;
/// - results are finite and non-negative for valid sectors.
///
/// # Examples
///
/// ```rust
/// use farshore_core::{HaulModel, Loadout, Sector};
///
/// struct FlatHaul;
///
/// impl HaulModel for FlatHaul {
///     fn expected_haul(&self, sectors: &[Sector], _loadout: &Loadout) -> f64 {
///         sectors.len() as f64
///     }
/// }
/// ```
pub trait HaulModel: Send + Sync {
    /// Return the expected haul of `sectors` under `loadout`.
    fn expected_haul(&self, sectors: &[Sector], loadout: &Loadout) -> f64;
}

/// Standard haul model: the sum of sector haul potentials, scaled by the
/// loadout's rank.
///
/// Each rank adds one percent to the base potential, so a better-trained
/// crew extracts more from the same sectors. Summation keeps the model
/// order-independent and monotone.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use farshore_core::{HaulModel, Loadout, PartId, RankWeightedHaul, RegionId, Sector, SectorId};
///
/// # fn main() -> Result<(), farshore_core::LoadoutError> {
/// let sector = Sector::new(SectorId(2), RegionId(1), Coord { x: 1.0, y: 1.0 }, 1, 100.0);
/// let loadout = Loadout::new(50, PartId(1), PartId(2), PartId(3), PartId(4), 100.0, 10.0)?;
///
/// let haul = RankWeightedHaul.expected_haul(&[sector], &loadout);
/// assert_eq!(haul, 150.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RankWeightedHaul;

impl HaulModel for RankWeightedHaul {
    #[expect(
        clippy::float_arithmetic,
        reason = "haul is a rank-weighted sum of sector potentials"
    )]
    fn expected_haul(&self, sectors: &[Sector], loadout: &Loadout) -> f64 {
        let rank_factor = 1.0 + f64::from(loadout.rank()) / 100.0;
        sectors.iter().map(|s| s.haul_potential).sum::<f64>() * rank_factor
    }
}
