//! Ship catalog and per-vessel damage tracking.

use core::fmt;

use crate::cellset::CellSet;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The fixed ship classes: name and hull length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Carrier,
    Submarine,
    Destroyer,
    Frigate,
}

impl ShipKind {
    /// Hull length in cells.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Carrier => 4,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
            ShipKind::Frigate => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Frigate => "Frigate",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anchor cell and orientation of a placed ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    /// Board coordinate of segment `i`, counting from the anchor.
    pub fn cell(self, i: usize) -> (usize, usize) {
        match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
        }
    }
}

/// A single vessel: class, placement and segment damage.
///
/// Created unplaced; anchored exactly once by a successful board placement.
/// Damage only accumulates, so a sunk ship stays sunk.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    kind: ShipKind,
    placement: Option<Placement>,
    mask: CellSet,
    damage: u8,
    sunk: bool,
}

impl Ship {
    pub fn new(kind: ShipKind) -> Self {
        Ship {
            kind,
            placement: None,
            mask: CellSet::new(),
            damage: 0,
            sunk: false,
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Cells this ship covers, empty while unplaced.
    pub fn mask(&self) -> CellSet {
        self.mask
    }

    /// Board cells occupied by the ship, anchor first. Empty while unplaced.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let len = self.kind.length();
        self.placement
            .into_iter()
            .flat_map(move |p| (0..len).map(move |i| p.cell(i)))
    }

    /// Segment index covering (`row`, `col`), if this ship occupies it.
    pub fn segment_at(&self, row: usize, col: usize) -> Option<usize> {
        let p = self.placement?;
        let len = self.kind.length();
        match p.orientation {
            Orientation::Horizontal => {
                (row == p.row && col >= p.col && col < p.col + len).then(|| col - p.col)
            }
            Orientation::Vertical => {
                (col == p.col && row >= p.row && row < p.row + len).then(|| row - p.row)
            }
        }
    }

    /// Whether segment `index` has been hit. Panics past the hull length.
    pub fn segment_hit(&self, index: usize) -> bool {
        assert!(index < self.kind.length(), "segment {} out of range", index);
        self.damage >> index & 1 == 1
    }

    /// Segments still intact.
    pub fn intact_segments(&self) -> usize {
        self.kind.length() - self.damage.count_ones() as usize
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub(crate) fn set_placement(&mut self, placement: Placement, mask: CellSet) {
        debug_assert!(self.placement.is_none());
        self.placement = Some(placement);
        self.mask = mask;
    }

    /// Marks segment `index` hit; returns whether it was intact before.
    pub(crate) fn register_hit(&mut self, index: usize) -> bool {
        debug_assert!(index < self.kind.length());
        let bit = 1u8 << index;
        let fresh = self.damage & bit == 0;
        self.damage |= bit;
        if self.damage.count_ones() as usize == self.kind.length() {
            self.sunk = true;
        }
        fresh
    }
}
