use fleetgrid::{Board, Cell, Orientation, ShotOutcome};
use proptest::prelude::*;

#[test]
fn test_single_cell_ship_on_3x3() {
    let mut board = Board::from_rows(3, 3, &["000", "010", "000"]).unwrap();
    assert_eq!(board.fire(1, 1), ShotOutcome::Sunk);
    assert_eq!(board.cell(1, 1), Cell::Sunk);
}

#[test]
fn test_three_cell_ship_on_1x4() {
    let mut board = Board::from_rows(1, 4, &["1110"]).unwrap();
    assert_eq!(board.fire(0, 0), ShotOutcome::Hit);
    assert_eq!(board.fire(0, 1), ShotOutcome::Hit);
    assert_eq!(board.fire(0, 2), ShotOutcome::Sunk);
    for c in 0..3 {
        assert_eq!(board.cell(0, c), Cell::Sunk);
    }
    assert_eq!(board.cell(0, 3), Cell::Water);
}

#[test]
fn test_miss_then_forbidden() {
    let mut board = Board::new(2, 2);
    assert_eq!(board.fire(0, 1), ShotOutcome::Miss);
    assert_eq!(board.cell(0, 1), Cell::Miss);
    let before = board.clone();
    assert_eq!(board.fire(0, 1), ShotOutcome::Forbidden);
    assert_eq!(board, before);
}

#[test]
fn test_firing_on_hit_and_sunk_is_forbidden() {
    let mut board = Board::from_rows(1, 5, &["11010"]).unwrap();
    assert_eq!(board.fire(0, 0), ShotOutcome::Hit);
    assert_eq!(board.fire(0, 0), ShotOutcome::Forbidden);
    assert_eq!(board.fire(0, 3), ShotOutcome::Sunk);
    let before = board.clone();
    assert_eq!(board.fire(0, 3), ShotOutcome::Forbidden);
    assert_eq!(board, before);
}

#[test]
fn test_vertical_ship_touching_edges() {
    let mut board = Board::from_rows(3, 1, &["1", "1", "1"]).unwrap();
    assert_eq!(board.fire(2, 0), ShotOutcome::Hit);
    assert_eq!(board.fire(0, 0), ShotOutcome::Hit);
    assert_eq!(board.fire(1, 0), ShotOutcome::Sunk);
    assert_eq!(board.count(Cell::Sunk), 3);
}

#[test]
fn test_sinking_leaves_other_ships_alone() {
    let mut board = Board::from_rows(3, 4, &["1100", "0000", "1110"]).unwrap();
    board.fire(2, 0);
    board.fire(0, 0);
    assert_eq!(board.fire(0, 1), ShotOutcome::Sunk);
    assert_eq!(board.cell(2, 0), Cell::Hit);
    assert_eq!(board.cell(2, 1), Cell::ShipPart);
    assert_eq!(board.count(Cell::Sunk), 2);
}

fn ship_and_order() -> impl Strategy<Value = (usize, Vec<usize>, bool, usize, usize)> {
    (1usize..=6).prop_flat_map(|len| {
        (
            Just(len),
            Just((0..len).collect::<Vec<_>>()).prop_shuffle(),
            any::<bool>(),
            0usize..4,
            0usize..4,
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn last_hit_sinks_exactly_the_ship((len, order, horizontal, row, col) in ship_and_order()) {
        let orientation = if horizontal { Orientation::Horizontal } else { Orientation::Vertical };
        let mut board = Board::new(10, 10);
        prop_assert!(board.place_ship(len, orientation, row, col));
        let cells: Vec<_> = orientation.cells(row, col, len).collect();

        for (n, &i) in order.iter().enumerate() {
            let (r, c) = cells[i];
            let outcome = board.fire(r, c);
            if n + 1 == len {
                prop_assert_eq!(outcome, ShotOutcome::Sunk);
            } else {
                prop_assert_eq!(outcome, ShotOutcome::Hit);
            }
        }
        prop_assert_eq!(board.count(Cell::Sunk), len);
        for &(r, c) in &cells {
            prop_assert_eq!(board.cell(r, c), Cell::Sunk);
        }
    }

    #[test]
    fn second_shot_never_changes_state(row in 0usize..6, col in 0usize..6) {
        let mut board = Board::from_rows(6, 6, &["110000", "000100", "010100", "010000", "000001", "111001"]).unwrap();
        board.fire(row, col);
        let after_first = board.clone();
        prop_assert_eq!(board.fire(row, col), ShotOutcome::Forbidden);
        prop_assert_eq!(board, after_first);
    }
}
