use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;

use crate::board::Board;
use crate::cellset::CellSet;
use crate::common::{CellState, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::fleet::Fleet;
use crate::ship::Orientation;

/// One side of the game: a fleet, the board it lives on, and a private
/// record of shots fired at the opponent.
///
/// The tracking board is all a player ever learns about the other side;
/// opponents interact only through [`Player::fire_at`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    nickname: String,
    board: Board,
    shots: Board,
    fleet: Fleet,
    ships_lost: usize,
    ships_sunk: usize,
}

impl Player {
    /// Creates a player with the standard ten-ship fleet, all unplaced.
    ///
    /// Panics if `nickname` is blank.
    pub fn new(nickname: impl Into<String>) -> Self {
        let nickname = nickname.into();
        assert!(!nickname.trim().is_empty(), "player nickname must not be blank");
        Player {
            nickname,
            board: Board::new(),
            shots: Board::new(),
            fleet: Fleet::standard(),
            ships_lost: 0,
            ships_sunk: 0,
        }
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// The board this player's ships live on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The private record of shots fired at the opponent.
    pub fn shots(&self) -> &Board {
        &self.shots
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Places the fleet's ship at `index`, anchored at (`row`, `col`).
    /// Returns `false` when it does not fit or is already placed.
    ///
    /// Panics if `index` is out of range for the fleet.
    pub fn place_ship(&mut self, index: usize, row: usize, col: usize, orientation: Orientation) -> bool {
        let ship = self.fleet.get_mut(index);
        self.board.place(ship, row, col, orientation)
    }

    /// Places every still-unplaced ship at a position drawn uniformly from
    /// its remaining valid placements. Returns how many ships could not be
    /// placed (zero unless the board has run out of room).
    pub fn place_ships_randomly<R: Rng>(&mut self, rng: &mut R) -> usize {
        let mut unplaced = 0;
        for index in 0..self.fleet.len() {
            if self.fleet.get(index).is_placed() {
                continue;
            }
            let len = self.fleet.get(index).length();
            let mut candidates = Vec::new();
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                for row in 0..BOARD_SIZE {
                    for col in 0..BOARD_SIZE {
                        if let Some(mask) = CellSet::run(row, col, orientation, len) {
                            if mask.is_disjoint(self.board.occupied()) {
                                candidates.push((row, col, orientation));
                            }
                        }
                    }
                }
            }
            if candidates.is_empty() {
                log::warn!(
                    "{}: no room left for {} (length {})",
                    self.nickname,
                    self.fleet.get(index).name(),
                    len
                );
                unplaced += 1;
                continue;
            }
            let (row, col, orientation) = candidates[rng.random_range(0..candidates.len())];
            let ship = self.fleet.get_mut(index);
            let placed = self.board.place(ship, row, col, orientation);
            debug_assert!(placed);
            log::debug!(
                "{}: placed {} at ({}, {}) {:?}",
                self.nickname,
                self.fleet.get(index).name(),
                row,
                col,
                orientation
            );
        }
        unplaced
    }

    /// Resolves an incoming shot against this player's own board.
    pub fn receive_shot(&mut self, row: usize, col: usize) -> ShotOutcome {
        let outcome = self.board.resolve_shot(&mut self.fleet, row, col);
        if outcome == ShotOutcome::Sunk {
            self.ships_lost += 1;
        }
        outcome
    }

    /// Fires at the opponent.
    ///
    /// A coordinate this player has already fired at comes back as
    /// [`ShotOutcome::Repeat`] without touching the opponent at all;
    /// otherwise the opponent resolves the shot and the outcome lands on
    /// this player's tracking board.
    pub fn fire_at(&mut self, row: usize, col: usize, opponent: &mut Player) -> ShotOutcome {
        if self.shots.is_shot_at(row, col) {
            return ShotOutcome::Repeat;
        }
        let outcome = opponent.receive_shot(row, col);
        self.shots.record_shot(row, col, outcome);
        if outcome == ShotOutcome::Sunk {
            self.ships_sunk += 1;
        }
        outcome
    }

    /// True once the whole fleet is sunk.
    pub fn has_lost(&self) -> bool {
        self.fleet.is_fully_sunk()
    }

    pub fn all_ships_placed(&self) -> bool {
        self.fleet.all_placed()
    }

    /// Own ships sunk by the opponent.
    pub fn ships_lost(&self) -> usize {
        self.ships_lost
    }

    /// Opponent ships this player has sunk.
    pub fn ships_sunk(&self) -> usize {
        self.ships_sunk
    }

    pub fn ships_remaining(&self) -> usize {
        self.fleet.len() - self.ships_lost
    }

    /// Rendering view of this player's own board.
    ///
    /// Panics if the coordinate is outside the board.
    pub fn own_cell(&self, row: usize, col: usize) -> CellState {
        assert!(self.board.in_bounds(row, col), "cell ({}, {}) outside the board", row, col);
        match self.fleet.ship_at(row, col) {
            Some((index, _)) => {
                if self.fleet.get(index).is_sunk() {
                    CellState::ShipSunk
                } else if self.board.hit_at(row, col) {
                    CellState::ShipHit
                } else {
                    CellState::ShipIntact
                }
            }
            None if self.board.miss_at(row, col) => CellState::WaterShot,
            None => CellState::Water,
        }
    }

    /// Rendering view of what this player knows about the opponent.
    ///
    /// Panics if the coordinate is outside the board.
    pub fn target_cell(&self, row: usize, col: usize) -> CellState {
        assert!(self.shots.in_bounds(row, col), "cell ({}, {}) outside the board", row, col);
        if self.shots.sunk_at(row, col) {
            CellState::ShipSunk
        } else if self.shots.hit_at(row, col) {
            CellState::ShipHit
        } else if self.shots.miss_at(row, col) {
            CellState::WaterShot
        } else {
            CellState::Water
        }
    }
}
