use alloc::vec::Vec;

use crate::config::STANDARD_FLEET;
use crate::ship::{Ship, ShipKind};

/// A player's ships, in placement-index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// An empty fleet.
    pub fn new() -> Self {
        Fleet { ships: Vec::new() }
    }

    /// The regulation ten-ship fleet: one carrier, two submarines, three
    /// destroyers and four frigates, twenty cells in total.
    pub fn standard() -> Self {
        Fleet {
            ships: STANDARD_FLEET.iter().map(|&kind| Ship::new(kind)).collect(),
        }
    }

    pub fn add(&mut self, ship: Ship) {
        self.ships.push(ship);
    }

    /// Read view of the ships in insertion order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Ship at `index`. Panics if the index is out of range.
    pub fn get(&self, index: usize) -> &Ship {
        &self.ships[index]
    }

    /// Mutable ship access, used when placing. Panics if out of range.
    pub fn get_mut(&mut self, index: usize) -> &mut Ship {
        &mut self.ships[index]
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// True once every ship is sunk.
    pub fn is_fully_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// True once every ship has an anchor.
    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    pub fn sunk_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_sunk()).count()
    }

    /// Which ship (and which of its segments) occupies (`row`, `col`).
    pub fn ship_at(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        self.ships
            .iter()
            .enumerate()
            .find_map(|(i, ship)| ship.segment_at(row, col).map(|seg| (i, seg)))
    }

    pub fn count_of(&self, kind: ShipKind) -> usize {
        self.ships.iter().filter(|s| s.kind() == kind).count()
    }
}
