//! Shot resolution: hit/miss/sunk and destroyed-ship detection.

use crate::core::board::{Board, Cell, ORTHOGONAL};
use crate::core::common::ShotOutcome;
use alloc::vec;

impl Board {
    /// Fire at (`row`, `col`).
    ///
    /// Firing on a cell that was already fired on returns
    /// [`ShotOutcome::Forbidden`] and leaves the board untouched.
    ///
    /// # Panics
    /// If the coordinate is out of bounds.
    pub fn fire(&mut self, row: usize, col: usize) -> ShotOutcome {
        match self.cell(row, col) {
            Cell::Water | Cell::Forbidden => {
                self.set(row, col, Cell::Miss);
                ShotOutcome::Miss
            }
            Cell::ShipPart => {
                self.set(row, col, Cell::Hit);
                if self.sink_if_destroyed(row, col) {
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                }
            }
            Cell::Hit | Cell::Miss | Cell::Sunk => ShotOutcome::Forbidden,
        }
    }

    /// Probe outward from a freshly hit cell in the four axis directions.
    /// A direction stays open while it keeps meeting `Hit` cells; meeting an
    /// untouched `ShipPart` means the ship is still afloat. If no direction
    /// finds one, every hit cell seen is rewritten to `Sunk`.
    fn sink_if_destroyed(&mut self, row: usize, col: usize) -> bool {
        let mut members = vec![(row, col)];
        let mut open = [true; 4];
        let reach = self.rows().max(self.cols()) as isize;

        for dist in 1..reach {
            for (dir, &(dr, dc)) in ORTHOGONAL.iter().enumerate() {
                if !open[dir] {
                    continue;
                }
                match self.offset(row, col, dr * dist, dc * dist) {
                    Some((r, c)) => match self.cell(r, c) {
                        Cell::Hit => members.push((r, c)),
                        Cell::ShipPart => return false,
                        _ => open[dir] = false,
                    },
                    None => open[dir] = false,
                }
            }
            if open.iter().all(|o| !o) {
                break;
            }
        }

        for (r, c) in members {
            self.set(r, c, Cell::Sunk);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_ship_sinks_immediately() {
        let mut board = Board::new(1, 1);
        board.set(0, 0, Cell::ShipPart);
        assert_eq!(board.fire(0, 0), ShotOutcome::Sunk);
        assert_eq!(board.cell(0, 0), Cell::Sunk);
    }

    #[test]
    fn hit_in_the_middle_waits_for_both_ends() {
        let mut board = Board::new(1, 5);
        for c in 1..4 {
            board.set(0, c, Cell::ShipPart);
        }
        assert_eq!(board.fire(0, 2), ShotOutcome::Hit);
        assert_eq!(board.fire(0, 1), ShotOutcome::Hit);
        assert_eq!(board.fire(0, 3), ShotOutcome::Sunk);
        assert_eq!(board.count(Cell::Sunk), 3);
        assert_eq!(board.count(Cell::Water), 2);
    }

    #[test]
    fn forbidden_margin_is_open_water() {
        let mut board = Board::new(2, 2);
        board.set(0, 0, Cell::Forbidden);
        assert_eq!(board.fire(0, 0), ShotOutcome::Miss);
        assert_eq!(board.cell(0, 0), Cell::Miss);
    }
}
