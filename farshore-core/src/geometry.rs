//! Pure travel geometry for ordered sector sequences.
//!
//! Distance is the sum of straight-line legs between consecutive sectors on
//! the chart; duration adds a fixed survey time per visited stop to the
//! transit time at the loadout's speed. Both are deterministic functions of
//! their inputs with no I/O, so results are reproducible for a fixed
//! snapshot.

use std::time::Duration;

use crate::{Loadout, Sector};

/// Fixed time spent surveying each visited sector, in seconds.
pub const SURVEY_SECONDS: f64 = 600.0;

/// Cumulative travel cost of an ordered sector sequence, in survey units.
///
/// The sequence includes the departure point; sequences of fewer than two
/// sectors cost nothing.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use farshore_core::{RegionId, Sector, SectorId};
/// use farshore_core::geometry::route_distance;
///
/// let region = RegionId(1);
/// let start = Sector::starting_point(SectorId(1), region, Coord { x: 0.0, y: 0.0 });
/// let dest = Sector::new(SectorId(2), region, Coord { x: 3.0, y: 4.0 }, 1, 10.0);
///
/// assert_eq!(route_distance(&[start.clone()]), 0.0);
/// assert_eq!(route_distance(&[start, dest]), 5.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "distance accumulates straight-line leg lengths"
)]
pub fn route_distance(sectors: &[Sector]) -> f64 {
    sectors
        .windows(2)
        .map(|leg| match leg {
            [from, to] => {
                (to.position.x - from.position.x).hypot(to.position.y - from.position.y)
            }
            _ => 0.0,
        })
        .sum()
}

/// Transit duration of an ordered sector sequence under `loadout`.
///
/// The sequence includes the departure point. Transit covers every leg at
/// the loadout's speed plus [`SURVEY_SECONDS`] per visited stop. The
/// degenerate sequence holding only the departure point takes no time.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use std::time::Duration;
/// use farshore_core::{Loadout, PartId, RegionId, Sector, SectorId};
/// use farshore_core::geometry::route_duration;
///
/// # fn main() -> Result<(), farshore_core::LoadoutError> {
/// let region = RegionId(1);
/// let start = Sector::starting_point(SectorId(1), region, Coord { x: 0.0, y: 0.0 });
/// let loadout = Loadout::new(1, PartId(1), PartId(2), PartId(3), PartId(4), 100.0, 10.0)?;
///
/// assert_eq!(route_duration(&[start], &loadout), Duration::ZERO);
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "duration combines leg transit with per-stop survey time; stop \
              counts are far below f64 precision limits"
)]
pub fn route_duration(sectors: &[Sector], loadout: &Loadout) -> Duration {
    if sectors.len() < 2 {
        return Duration::ZERO;
    }
    let transit_seconds = route_distance(sectors) / loadout.speed() * 3600.0;
    let survey_seconds = SURVEY_SECONDS * ((sectors.len() - 1) as f64);
    Duration::try_from_secs_f64(transit_seconds + survey_seconds).unwrap_or_default()
}
