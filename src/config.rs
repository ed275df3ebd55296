use crate::ship::ShipKind;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 10;
pub const TOTAL_SHIP_CELLS: usize = 20;
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;
pub const COMPUTER_NICKNAME: &str = "Computer";

pub const STANDARD_FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Frigate,
    ShipKind::Frigate,
    ShipKind::Frigate,
    ShipKind::Frigate,
];
