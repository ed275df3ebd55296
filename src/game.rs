//! Turn coordination for a human-versus-computer match.

use core::fmt;

use alloc::string::String;

use rand::Rng;

use crate::ai::HuntTargetAi;
use crate::common::ShotOutcome;
use crate::config::{COMPUTER_NICKNAME, DEFAULT_HISTORY_CAPACITY};
use crate::history::{MoveHistory, MoveRecord};
use crate::player::Player;
use crate::ship::Orientation;

/// Where a match currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    /// Ships are being placed; no firing yet.
    Setup,
    /// Turns alternate until a fleet is gone.
    InProgress,
    /// One side has lost every ship.
    Finished,
}

/// Errors for game operations invoked at the wrong time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Start refused: the human fleet is not fully placed.
    ShipsNotPlaced,
    /// The computer could not fit its whole fleet on the board.
    PlacementFailed { unplaced: usize },
    /// The operation does not apply to the current phase.
    WrongPhase,
    /// It is the other side's turn.
    OutOfTurn,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ShipsNotPlaced => write!(f, "all ships must be placed before starting"),
            GameError::PlacementFailed { unplaced } => {
                write!(f, "could not place {} computer ship(s)", unplaced)
            }
            GameError::WrongPhase => write!(f, "operation not allowed in the current phase"),
            GameError::OutOfTurn => write!(f, "not this player's turn"),
        }
    }
}

/// A full match: both players, the computer's gunner, and the move log.
///
/// The human fires through [`Game::fire`]; the host drives the computer one
/// synchronous shot at a time through [`Game::computer_turn`], pacing the
/// calls however it likes. A hit earns another shot; a miss passes the
/// turn. The match finishes the moment either fleet is gone, checked after
/// every shot.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    human: Player,
    computer: Player,
    ai: HuntTargetAi,
    history: MoveHistory,
    phase: GamePhase,
    human_turn: bool,
    moves: u64,
}

impl Game {
    /// A fresh match in the setup phase.
    ///
    /// Panics if `nickname` is blank.
    pub fn new(nickname: impl Into<String>) -> Self {
        Game {
            human: Player::new(nickname),
            computer: Player::new(COMPUTER_NICKNAME),
            ai: HuntTargetAi::new(),
            history: MoveHistory::new(DEFAULT_HISTORY_CAPACITY),
            phase: GamePhase::Setup,
            human_turn: true,
            moves: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn human_turn(&self) -> bool {
        self.human_turn
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut MoveHistory {
        &mut self.history
    }

    /// Effective shots played so far (repeats and invalid attempts do not
    /// count).
    pub fn move_count(&self) -> u64 {
        self.moves
    }

    /// Places one of the human's ships during setup.
    pub fn place_human_ship(
        &mut self,
        index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<bool, GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::WrongPhase);
        }
        Ok(self.human.place_ship(index, row, col, orientation))
    }

    /// Randomly places the rest of the human fleet; returns how many ships
    /// stayed unplaced.
    pub fn place_human_ships_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<usize, GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::WrongPhase);
        }
        Ok(self.human.place_ships_randomly(rng))
    }

    /// Moves from setup to play: requires the human fleet fully placed,
    /// then places the computer fleet randomly. The human fires first.
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::WrongPhase);
        }
        if !self.human.all_ships_placed() {
            return Err(GameError::ShipsNotPlaced);
        }
        let unplaced = self.computer.place_ships_randomly(rng);
        if unplaced > 0 {
            return Err(GameError::PlacementFailed { unplaced });
        }
        self.phase = GamePhase::InProgress;
        self.human_turn = true;
        log::info!("game started: {} vs {}", self.human.nickname(), self.computer.nickname());
        Ok(())
    }

    /// One human shot at (`row`, `col`).
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotOutcome, GameError> {
        if self.phase != GamePhase::InProgress {
            return Err(GameError::WrongPhase);
        }
        if !self.human_turn {
            return Err(GameError::OutOfTurn);
        }
        let outcome = self.human.fire_at(row, col, &mut self.computer);
        self.after_shot(true, row, col, outcome);
        Ok(outcome)
    }

    /// One computer shot, chosen by the hunt-and-target gunner.
    pub fn computer_turn<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<((usize, usize), ShotOutcome), GameError> {
        if self.phase != GamePhase::InProgress {
            return Err(GameError::WrongPhase);
        }
        if self.human_turn {
            return Err(GameError::OutOfTurn);
        }
        let shots = *self.computer.shots();
        let Some((row, col)) = self.ai.select_target(rng, &shots) else {
            // A fully shot-out board means every fleet cell was hit, so the
            // match has already finished; treat a stray call gracefully.
            return Err(GameError::WrongPhase);
        };
        let outcome = self.computer.fire_at(row, col, &mut self.human);
        let shots = *self.computer.shots();
        self.ai.observe((row, col), outcome, &shots);
        self.after_shot(false, row, col, outcome);
        Ok(((row, col), outcome))
    }

    /// The winner's nickname once the match is finished.
    pub fn winner(&self) -> Option<&str> {
        if self.phase != GamePhase::Finished {
            return None;
        }
        if self.computer.has_lost() {
            Some(self.human.nickname())
        } else if self.human.has_lost() {
            Some(self.computer.nickname())
        } else {
            None
        }
    }

    fn after_shot(&mut self, human_turn: bool, row: usize, col: usize, outcome: ShotOutcome) {
        let actor = if human_turn {
            self.human.nickname()
        } else {
            self.computer.nickname()
        };
        log::info!("{} fired at ({}, {}): {}", actor, row, col, outcome);
        if matches!(outcome, ShotOutcome::Miss | ShotOutcome::Hit | ShotOutcome::Sunk) {
            self.moves += 1;
            let record = MoveRecord::new(actor, row, col, outcome, human_turn, self.timestamp_ms());
            if let Err(err) = self.history.push(record) {
                log::warn!("move not logged: {}", err);
            }
        }
        // A miss hands the turn over; a hit keeps it, as does a repeat so
        // the shooter can correct the coordinate.
        if outcome == ShotOutcome::Miss {
            self.human_turn = !human_turn;
        }
        if self.human.has_lost() || self.computer.has_lost() {
            self.phase = GamePhase::Finished;
            if let Some(winner) = self.winner() {
                log::info!("game over after {} moves: {} wins", self.moves, winner);
            }
        }
    }

    fn timestamp_ms(&self) -> u64 {
        #[cfg(feature = "std")]
        {
            use std::time::{SystemTime, UNIX_EPOCH};
            match SystemTime::now().duration_since(UNIX_EPOCH) {
                Ok(elapsed) => elapsed.as_millis() as u64,
                Err(_) => 0,
            }
        }
        #[cfg(not(feature = "std"))]
        {
            self.moves
        }
    }
}
