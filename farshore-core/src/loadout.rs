//! Vessel loadouts: capability snapshots taken at query start.

use thiserror::Error;

/// Identifier of a fitted vessel part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartId(pub u16);

/// Errors returned by [`Loadout::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadoutError {
    /// Range was negative, NaN, or infinite.
    #[error("loadout range {0} must be finite and non-negative")]
    InvalidRange(f64),
    /// Speed was non-positive, NaN, or infinite.
    #[error("loadout speed {0} must be finite and positive")]
    InvalidSpeed(f64),
}

/// A vessel's capability snapshot: rank, the four fitted parts, and the
/// performance they derive.
///
/// `range` bounds the cumulative travel cost of a single expedition and
/// `speed` (survey units per hour) drives transit duration. Two snapshots
/// exist per query: the current loadout scores haul, while a candidate
/// loadout under evaluation governs feasibility. Both are immutable once
/// constructed.
///
/// # Examples
/// ```
/// use farshore_core::{Loadout, PartId};
///
/// # fn main() -> Result<(), farshore_core::LoadoutError> {
/// let loadout = Loadout::new(
///     55,
///     PartId(21),
///     PartId(22),
///     PartId(23),
///     PartId(24),
///     105.0,
///     20.0,
/// )?;
/// assert_eq!(loadout.rank(), 55);
/// assert_eq!(loadout.range(), 105.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    rank: u8,
    hull: PartId,
    stern: PartId,
    bow: PartId,
    bridge: PartId,
    range: f64,
    speed: f64,
}

impl Loadout {
    /// Validates and constructs a [`Loadout`].
    ///
    /// `range` must be finite and non-negative; `speed` finite and positive.
    pub fn new(
        rank: u8,
        hull: PartId,
        stern: PartId,
        bow: PartId,
        bridge: PartId,
        range: f64,
        speed: f64,
    ) -> Result<Self, LoadoutError> {
        if !range.is_finite() || range < 0.0 {
            return Err(LoadoutError::InvalidRange(range));
        }
        if !speed.is_finite() || speed <= 0.0 {
            return Err(LoadoutError::InvalidSpeed(speed));
        }
        Ok(Self {
            rank,
            hull,
            stern,
            bow,
            bridge,
            range,
            speed,
        })
    }

    /// The vessel's rank, gating which sectors it may visit.
    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// Maximum cumulative travel cost per expedition, in survey units.
    pub fn range(&self) -> f64 {
        self.range
    }

    /// Cruising speed in survey units per hour.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// The fitted hull part.
    pub fn hull(&self) -> PartId {
        self.hull
    }

    /// The fitted stern part.
    pub fn stern(&self) -> PartId {
        self.stern
    }

    /// The fitted bow part.
    pub fn bow(&self) -> PartId {
        self.bow
    }

    /// The fitted bridge part.
    pub fn bridge(&self) -> PartId {
        self.bridge
    }
}
