//! Board state: placement validation and shot resolution.
//!
//! The same type serves two roles. A player's own board carries ship
//! occupancy and resolves incoming fire against the fleet; the
//! shot-tracking board carries only the outcomes of shots fired at the
//! opponent, recorded via [`Board::record_shot`].

use crate::cellset::CellSet;
use crate::common::ShotOutcome;
use crate::config::BOARD_SIZE;
use crate::fleet::Fleet;
use crate::ship::{Orientation, Placement, Ship};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    occupied: CellSet,
    hits: CellSet,
    misses: CellSet,
    sunk: CellSet,
}

impl Board {
    /// An empty board: no ships, no shots.
    pub fn new() -> Self {
        Board::default()
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// Whether (`row`, `col`) has taken a shot. Out-of-board coordinates
    /// have not.
    pub fn is_shot_at(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && (self.hits.contains(row, col) || self.misses.contains(row, col))
    }

    pub fn hit_at(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.hits.contains(row, col)
    }

    pub fn miss_at(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.misses.contains(row, col)
    }

    pub fn sunk_at(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.sunk.contains(row, col)
    }

    /// Cells covered by placed ships.
    pub fn occupied(&self) -> CellSet {
        self.occupied
    }

    /// Cells where a shot struck a ship.
    pub fn hits(&self) -> CellSet {
        self.hits
    }

    /// Cells where a shot found open water.
    pub fn misses(&self) -> CellSet {
        self.misses
    }

    /// Cells belonging to ships known to be sunk.
    pub fn sunk(&self) -> CellSet {
        self.sunk
    }

    /// Places `ship` with its anchor at (`row`, `col`).
    ///
    /// Returns `false` when the run leaves the board, crosses an occupied
    /// cell, or the ship is already placed; the board and ship are left
    /// untouched in every failure case. `false` is the ordinary "does not
    /// fit" signal, not an error.
    pub fn place(&mut self, ship: &mut Ship, row: usize, col: usize, orientation: Orientation) -> bool {
        if ship.is_placed() {
            return false;
        }
        let Some(mask) = CellSet::run(row, col, orientation, ship.length()) else {
            return false;
        };
        if !mask.is_disjoint(self.occupied) {
            return false;
        }
        self.occupied |= mask;
        ship.set_placement(
            Placement {
                row,
                col,
                orientation,
            },
            mask,
        );
        true
    }

    /// Resolves an incoming shot against `fleet`.
    ///
    /// Out-of-board coordinates are [`ShotOutcome::Invalid`]; a cell that
    /// already took a shot is [`ShotOutcome::Repeat`] and mutates nothing,
    /// even when the first shot was a hit.
    pub fn resolve_shot(&mut self, fleet: &mut Fleet, row: usize, col: usize) -> ShotOutcome {
        if !self.in_bounds(row, col) {
            return ShotOutcome::Invalid;
        }
        if self.is_shot_at(row, col) {
            return ShotOutcome::Repeat;
        }
        match fleet.ship_at(row, col) {
            Some((index, segment)) => {
                self.hits.insert(row, col);
                let ship = fleet.get_mut(index);
                ship.register_hit(segment);
                if ship.is_sunk() {
                    self.sunk |= ship.mask();
                    log::debug!("{} sunk at ({}, {})", ship.name(), row, col);
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                }
            }
            None => {
                self.misses.insert(row, col);
                ShotOutcome::Miss
            }
        }
    }

    /// Records the reported outcome of an outgoing shot on a tracking
    /// board. Repeat and invalid outcomes leave no mark.
    pub fn record_shot(&mut self, row: usize, col: usize, outcome: ShotOutcome) {
        if !self.in_bounds(row, col) {
            return;
        }
        match outcome {
            ShotOutcome::Miss => self.misses.insert(row, col),
            ShotOutcome::Hit => self.hits.insert(row, col),
            ShotOutcome::Sunk => {
                self.hits.insert(row, col);
                self.sunk.insert(row, col);
            }
            ShotOutcome::Repeat | ShotOutcome::Invalid => {}
        }
    }
}
