use armada::{Board, Fleet, Orientation, Ship, ShipKind, ShotOutcome, NUM_SHIPS, TOTAL_SHIP_CELLS};

#[test]
fn test_kind_catalog() {
    assert_eq!(ShipKind::Carrier.length(), 4);
    assert_eq!(ShipKind::Submarine.length(), 3);
    assert_eq!(ShipKind::Destroyer.length(), 2);
    assert_eq!(ShipKind::Frigate.length(), 1);
    assert_eq!(ShipKind::Carrier.name(), "Carrier");
}

#[test]
fn test_standard_fleet_composition() {
    let fleet = Fleet::standard();
    assert_eq!(fleet.len(), NUM_SHIPS);
    assert_eq!(fleet.count_of(ShipKind::Carrier), 1);
    assert_eq!(fleet.count_of(ShipKind::Submarine), 2);
    assert_eq!(fleet.count_of(ShipKind::Destroyer), 3);
    assert_eq!(fleet.count_of(ShipKind::Frigate), 4);
    let cells: usize = fleet.ships().iter().map(Ship::length).sum();
    assert_eq!(cells, TOTAL_SHIP_CELLS);
    assert!(!fleet.all_placed());
    assert!(!fleet.is_fully_sunk());
}

#[test]
fn test_unplaced_ship_has_no_presence() {
    let ship = Ship::new(ShipKind::Submarine);
    assert!(!ship.is_placed());
    assert!(ship.placement().is_none());
    assert!(ship.mask().is_empty());
    assert_eq!(ship.cells().count(), 0);
    assert_eq!(ship.segment_at(0, 0), None);
    assert!(!ship.is_sunk());
    assert_eq!(ship.intact_segments(), 3);
}

#[test]
fn test_segment_lookup_after_placement() {
    let mut fleet = Fleet::new();
    fleet.add(Ship::new(ShipKind::Submarine));
    let mut board = Board::new();
    assert!(board.place(fleet.get_mut(0), 4, 2, Orientation::Horizontal));

    let ship = fleet.get(0);
    assert!(ship.is_placed());
    assert_eq!(ship.segment_at(4, 2), Some(0));
    assert_eq!(ship.segment_at(4, 3), Some(1));
    assert_eq!(ship.segment_at(4, 4), Some(2));
    assert_eq!(ship.segment_at(4, 5), None);
    assert_eq!(ship.segment_at(5, 2), None);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(4, 2), (4, 3), (4, 4)]);
}

#[test]
fn test_vertical_segments() {
    let mut fleet = Fleet::new();
    fleet.add(Ship::new(ShipKind::Destroyer));
    let mut board = Board::new();
    assert!(board.place(fleet.get_mut(0), 7, 9, Orientation::Vertical));
    let ship = fleet.get(0);
    assert_eq!(ship.segment_at(7, 9), Some(0));
    assert_eq!(ship.segment_at(8, 9), Some(1));
    assert_eq!(ship.segment_at(9, 9), None);
}

#[test]
fn test_sunk_is_monotonic() {
    let mut fleet = Fleet::new();
    fleet.add(Ship::new(ShipKind::Destroyer));
    let mut board = Board::new();
    assert!(board.place(fleet.get_mut(0), 0, 0, Orientation::Horizontal));

    assert_eq!(board.resolve_shot(&mut fleet, 0, 0), ShotOutcome::Hit);
    assert!(fleet.get(0).segment_hit(0));
    assert!(!fleet.get(0).is_sunk());
    assert_eq!(board.resolve_shot(&mut fleet, 0, 1), ShotOutcome::Sunk);
    assert!(fleet.get(0).is_sunk());
    assert_eq!(fleet.get(0).intact_segments(), 0);

    // more fire at the wreck changes nothing
    assert_eq!(board.resolve_shot(&mut fleet, 0, 0), ShotOutcome::Repeat);
    assert_eq!(board.resolve_shot(&mut fleet, 0, 1), ShotOutcome::Repeat);
    assert!(fleet.get(0).is_sunk());
}

#[test]
fn test_fleet_sunk_agreement() {
    let mut fleet = Fleet::new();
    fleet.add(Ship::new(ShipKind::Frigate));
    fleet.add(Ship::new(ShipKind::Frigate));
    let mut board = Board::new();
    assert!(board.place(fleet.get_mut(0), 0, 0, Orientation::Horizontal));
    assert!(board.place(fleet.get_mut(1), 5, 5, Orientation::Vertical));

    assert_eq!(board.resolve_shot(&mut fleet, 0, 0), ShotOutcome::Sunk);
    assert_eq!(fleet.sunk_count(), 1);
    assert!(!fleet.is_fully_sunk());
    assert_eq!(board.resolve_shot(&mut fleet, 5, 5), ShotOutcome::Sunk);
    assert_eq!(fleet.sunk_count(), 2);
    assert!(fleet.is_fully_sunk());
}
