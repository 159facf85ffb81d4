use fleetgrid::{Board, BoardError, Cell};

#[test]
fn test_new_board_is_water() {
    let board = Board::new(3, 5);
    assert_eq!(board.rows(), 3);
    assert_eq!(board.cols(), 5);
    assert_eq!(board.count(Cell::Water), 15);
    assert!(!board.all_sunk());
}

#[test]
fn test_try_new_rejects_empty_dimensions() {
    assert_eq!(
        Board::try_new(0, 4).unwrap_err(),
        BoardError::InvalidDimensions { rows: 0, cols: 4 }
    );
    assert!(Board::try_new(1, 1).is_ok());
}

#[test]
fn test_checked_access() {
    let board = Board::new(2, 2);
    assert_eq!(board.get(1, 1), Some(Cell::Water));
    assert_eq!(board.get(2, 0), None);
    assert_eq!(board.get(0, 2), None);
    assert_eq!(board.offset(0, 0, -1, 0), None);
    assert_eq!(board.offset(0, 0, 1, 1), Some((1, 1)));
}

#[test]
#[should_panic]
fn test_cell_out_of_bounds_panics() {
    let board = Board::new(2, 2);
    board.cell(2, 0);
}

#[test]
fn test_neighbors_are_bounds_checked() {
    let board = Board::new(3, 3);
    assert_eq!(board.neighbors8(0, 0).count(), 3);
    assert_eq!(board.neighbors8(0, 1).count(), 5);
    assert_eq!(board.neighbors8(1, 1).count(), 8);
}

#[test]
fn test_rows_roundtrip() {
    let rows = ["01234", "50000", "11110"];
    let board = Board::from_rows(3, 5, &rows).unwrap();
    assert_eq!(board.cell(0, 1), Cell::ShipPart);
    assert_eq!(board.cell(0, 4), Cell::Sunk);
    assert_eq!(board.cell(1, 0), Cell::Forbidden);
    assert_eq!(board.to_rows(), rows);
    let again = Board::from_rows(3, 5, &board.to_rows()).unwrap();
    assert_eq!(again, board);
}

#[test]
fn test_legacy_marker_codes_decode_to_water() {
    let board = Board::from_rows(1, 4, &["6789"]).unwrap();
    assert_eq!(board.count(Cell::Water), 4);
}

#[test]
fn test_from_rows_errors() {
    assert_eq!(
        Board::from_rows(2, 2, &["00"]).unwrap_err(),
        BoardError::RowCountMismatch { expected: 2, found: 1 }
    );
    assert_eq!(
        Board::from_rows(2, 2, &["00", "000"]).unwrap_err(),
        BoardError::RowLengthMismatch { row: 1, expected: 2, found: 3 }
    );
    assert_eq!(
        Board::from_rows(1, 2, &["0x"]).unwrap_err(),
        BoardError::InvalidCellCode { row: 0, col: 1, code: 'x' }
    );
}

#[test]
fn test_display_renders_each_row() {
    let board = Board::from_rows(2, 2, &["12", "34"]).unwrap();
    assert_eq!(board.to_string(), "S X \no # ");
}

#[test]
fn test_all_sunk() {
    let done = Board::from_rows(1, 4, &["4403"]).unwrap();
    assert!(done.all_sunk());
    let afloat = Board::from_rows(1, 4, &["4401"]).unwrap();
    assert!(!afloat.all_sunk());
}
