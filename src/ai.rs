//! Targeting logic for the computer player.
//!
//! Two modes, decided entirely by the pending-target queue: with the queue
//! empty the gunner searches, firing at a coordinate drawn uniformly from
//! the cells it has not tried; after a hit it works the queue of adjacent
//! cells until the ship goes down, then returns to searching.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::config::BOARD_SIZE;

/// Hunt-and-target gunner state for a computer [`Player`](crate::Player).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HuntTargetAi {
    targets: VecDeque<(usize, usize)>,
    streak: Vec<(usize, usize)>,
}

impl HuntTargetAi {
    pub fn new() -> Self {
        HuntTargetAi::default()
    }

    /// True while the gunner is working neighbors of a known hit.
    pub fn is_hunting(&self) -> bool {
        !self.targets.is_empty()
    }

    /// Queued follow-up coordinates, including any made stale by later
    /// shots.
    pub fn pending_targets(&self) -> usize {
        self.targets.len()
    }

    /// Hits on the ship currently being worked.
    pub fn recent_hits(&self) -> &[(usize, usize)] {
        &self.streak
    }

    /// Picks the next coordinate to fire at, given this gunner's own
    /// shot-tracking board. Returns `None` only when every cell has been
    /// fired upon.
    pub fn select_target<R: Rng>(&mut self, rng: &mut R, shots: &Board) -> Option<(usize, usize)> {
        while let Some((row, col)) = self.targets.pop_front() {
            if !shots.is_shot_at(row, col) {
                return Some((row, col));
            }
        }
        let mut open = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !shots.is_shot_at(row, col) {
                    open.push((row, col));
                }
            }
        }
        if open.is_empty() {
            return None;
        }
        Some(open[rng.random_range(0..open.len())])
    }

    /// Feeds back the outcome of the shot at `coord`.
    ///
    /// A hit queues the in-bounds, unfired, not-yet-queued axis neighbors;
    /// a sunk ship clears all pending work so the next pick searches again.
    pub fn observe(&mut self, coord: (usize, usize), outcome: ShotOutcome, shots: &Board) {
        match outcome {
            ShotOutcome::Hit => {
                self.streak.push(coord);
                for neighbor in axis_neighbors(coord.0, coord.1) {
                    if !shots.is_shot_at(neighbor.0, neighbor.1) && !self.targets.contains(&neighbor)
                    {
                        self.targets.push_back(neighbor);
                    }
                }
            }
            ShotOutcome::Sunk => {
                self.streak.clear();
                self.targets.clear();
            }
            ShotOutcome::Miss | ShotOutcome::Repeat | ShotOutcome::Invalid => {}
        }
    }
}

fn axis_neighbors(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let up = row.checked_sub(1).map(|r| (r, col));
    let down = (row + 1 < BOARD_SIZE).then_some((row + 1, col));
    let left = col.checked_sub(1).map(|c| (row, c));
    let right = (col + 1 < BOARD_SIZE).then_some((row, col + 1));
    [up, down, left, right].into_iter().flatten()
}
