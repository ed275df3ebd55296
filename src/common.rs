//! Shared result types: shot outcomes and per-cell display states.

use core::fmt;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot struck an intact ship segment.
    Hit,
    /// Shot struck the last intact segment of a ship.
    Sunk,
    /// The cell was already fired upon; nothing changed.
    Repeat,
    /// The coordinate is outside the board.
    Invalid,
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            ShotOutcome::Miss => "miss",
            ShotOutcome::Hit => "hit",
            ShotOutcome::Sunk => "sunk",
            ShotOutcome::Repeat => "repeat",
            ShotOutcome::Invalid => "invalid",
        };
        write!(f, "{}", word)
    }
}

/// Read-only state of one board cell, as a renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Water nobody has fired at.
    Water,
    /// Water that took a shot.
    WaterShot,
    /// Ship segment nobody has hit.
    ShipIntact,
    /// Damaged segment of a ship still afloat.
    ShipHit,
    /// Segment of a fully sunk ship.
    ShipSunk,
}
