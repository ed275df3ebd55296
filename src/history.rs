//! Bounded LIFO record of the shots played in a game.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::common::ShotOutcome;
use crate::config::BOARD_SIZE;

/// Failure modes of the bounded history stack. Both are recoverable
/// conditions the caller decides how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    /// Push refused: the stack already holds `capacity` entries.
    Full { capacity: usize },
    /// Pop or peek on an empty stack.
    Empty,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Full { capacity } => {
                write!(f, "history full at capacity {}", capacity)
            }
            HistoryError::Empty => write!(f, "history is empty"),
        }
    }
}

/// One played shot: who fired, where, and what came of it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    actor: String,
    row: usize,
    col: usize,
    outcome: ShotOutcome,
    human_turn: bool,
    timestamp_ms: u64,
}

impl MoveRecord {
    /// Panics if `actor` is blank or the coordinate lies outside the board.
    pub fn new(
        actor: impl Into<String>,
        row: usize,
        col: usize,
        outcome: ShotOutcome,
        human_turn: bool,
        timestamp_ms: u64,
    ) -> Self {
        let actor = actor.into();
        assert!(!actor.trim().is_empty(), "move actor must not be blank");
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "move coordinate ({}, {}) outside the board",
            row,
            col
        );
        MoveRecord {
            actor,
            row,
            col,
            outcome,
            human_turn,
            timestamp_ms,
        }
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn outcome(&self) -> ShotOutcome {
        self.outcome
    }

    pub fn human_turn(&self) -> bool {
        self.human_turn
    }

    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    /// The coordinate in chart notation, column letter then 1-based row:
    /// (3, 1) is "B4".
    pub fn grid_label(&self) -> String {
        let column = (b'A' + self.col as u8) as char;
        format!("{}{}", column, self.row + 1)
    }

    /// Whether the shot damaged a ship.
    pub fn struck(&self) -> bool {
        matches!(self.outcome, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

// Equality is the logical move only; the timestamp and turn flag are
// bookkeeping and do not distinguish entries for search purposes.
impl PartialEq for MoveRecord {
    fn eq(&self, other: &Self) -> bool {
        self.actor == other.actor
            && self.row == other.row
            && self.col == other.col
            && self.outcome == other.outcome
    }
}

impl Eq for MoveRecord {}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fired at {}: {}", self.actor, self.grid_label(), self.outcome)
    }
}

/// A capacity-bounded stack of [`MoveRecord`]s.
///
/// A full stack refuses the push instead of evicting old entries; dropping
/// or draining history is the caller's decision.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveHistory {
    entries: Vec<MoveRecord>,
    capacity: usize,
}

impl MoveHistory {
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be positive");
        MoveHistory {
            entries: Vec::new(),
            capacity,
        }
    }

    pub fn push(&mut self, record: MoveRecord) -> Result<(), HistoryError> {
        if self.entries.len() == self.capacity {
            return Err(HistoryError::Full {
                capacity: self.capacity,
            });
        }
        self.entries.push(record);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<MoveRecord, HistoryError> {
        self.entries.pop().ok_or(HistoryError::Empty)
    }

    /// The most recent entry, left in place.
    pub fn peek(&self) -> Result<&MoveRecord, HistoryError> {
        self.entries.last().ok_or(HistoryError::Empty)
    }

    /// Up to `n` entries, most recent first.
    pub fn recent(&self, n: usize) -> Vec<&MoveRecord> {
        self.entries.iter().rev().take(n).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Depth of the first matching entry, counted from the top starting at
    /// one. `None` when absent.
    pub fn search(&self, record: &MoveRecord) -> Option<usize> {
        self.entries
            .iter()
            .rev()
            .position(|entry| entry == record)
            .map(|depth| depth + 1)
    }

    pub fn contains(&self, record: &MoveRecord) -> bool {
        self.search(record).is_some()
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.entries.iter()
    }
}
