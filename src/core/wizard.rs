//! Click-driven ship placement on top of the placement engine.
//!
//! A first click on open water picks a starting cell and offers an
//! orientation marker next to it for every direction the ship fits. A second
//! click on a marker places the ship; clicking the start cell again cancels.
//! Clicking a placed ship removes it. Markers live here, not on the board.

use crate::core::board::{Board, Cell};
use crate::core::ship::Orientation;
use alloc::vec::Vec;

/// Outcome of one placement click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementResult {
    /// A ship was written to the board.
    ShipSet,
    /// A start cell was chosen; waiting for an orientation marker.
    PointSet,
    /// A ship was removed from the board.
    ShipRemoved,
    /// Nothing was placed or removed.
    Failed,
}

/// Direction a ship extends from its start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
        }
    }

    fn orientation(self) -> Orientation {
        match self {
            Direction::Right | Direction::Left => Orientation::Horizontal,
            Direction::Down | Direction::Up => Orientation::Vertical,
        }
    }

    /// Top-left cell of a ship of `length` extending this way from (`row`, `col`).
    fn anchor(self, row: usize, col: usize, length: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Right | Direction::Down => Some((row, col)),
            Direction::Left => Some((row, (col + 1).checked_sub(length)?)),
            Direction::Up => Some(((row + 1).checked_sub(length)?, col)),
        }
    }
}

/// Orientation hint shown next to a pending start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

#[derive(Debug, Clone)]
struct Pending {
    row: usize,
    col: usize,
    markers: Vec<Marker>,
}

/// Placement state machine for one board.
#[derive(Debug, Clone, Default)]
pub struct ManualPlacer {
    pending: Option<Pending>,
}

impl ManualPlacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orientation markers currently on offer.
    pub fn markers(&self) -> &[Marker] {
        self.pending.as_ref().map_or(&[][..], |p| p.markers.as_slice())
    }

    /// Start cell awaiting an orientation, if any.
    pub fn pending_start(&self) -> Option<(usize, usize)> {
        self.pending.as_ref().map(|p| (p.row, p.col))
    }

    /// Drop any pending start cell.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Handle a click at (`row`, `col`) while placing a ship of `ship_length`
    /// (0 when every ship is already placed).
    ///
    /// Returns the result and the cell it refers to: the ship's top-left
    /// anchor for `ShipSet`/`ShipRemoved`, the start cell for `PointSet`,
    /// otherwise the clicked cell. The board's forbidden margin is refreshed
    /// after every call.
    pub fn handle(
        &mut self,
        board: &mut Board,
        row: usize,
        col: usize,
        ship_length: usize,
    ) -> (PlacementResult, usize, usize) {
        let outcome = match self.pending.take() {
            Some(pending) => self.finish(board, pending, row, col, ship_length),
            None if board.get(row, col) == Some(Cell::ShipPart) => {
                match board.ship_anchor(row, col) {
                    Some((ar, ac)) if board.remove_ship_at(ar, ac) => (PlacementResult::ShipRemoved, ar, ac),
                    _ => (PlacementResult::Failed, row, col),
                }
            }
            None if ship_length > 0 && board.in_bounds(row, col) => {
                self.begin(board, row, col, ship_length)
            }
            None => (PlacementResult::Failed, row, col),
        };
        board.update_forbidden();
        outcome
    }

    fn begin(
        &mut self,
        board: &mut Board,
        row: usize,
        col: usize,
        ship_length: usize,
    ) -> (PlacementResult, usize, usize) {
        if ship_length == 1 {
            return if board.place_ship(1, Orientation::Horizontal, row, col) {
                (PlacementResult::ShipSet, row, col)
            } else {
                (PlacementResult::Failed, row, col)
            };
        }

        let markers: Vec<Marker> = Direction::ALL
            .iter()
            .filter_map(|&direction| {
                let (ar, ac) = direction.anchor(row, col, ship_length)?;
                if !board.is_settable(ship_length, direction.orientation(), ar, ac) {
                    return None;
                }
                let (dr, dc) = direction.delta();
                let (mr, mc) = board.offset(row, col, dr, dc)?;
                Some(Marker {
                    row: mr,
                    col: mc,
                    direction,
                })
            })
            .collect();

        if markers.is_empty() {
            return (PlacementResult::Failed, row, col);
        }
        log::debug!("start cell ({}, {}) offers {} orientations", row, col, markers.len());
        self.pending = Some(Pending { row, col, markers });
        (PlacementResult::PointSet, row, col)
    }

    fn finish(
        &mut self,
        board: &mut Board,
        pending: Pending,
        row: usize,
        col: usize,
        ship_length: usize,
    ) -> (PlacementResult, usize, usize) {
        if (row, col) == (pending.row, pending.col) {
            return (PlacementResult::Failed, row, col);
        }
        let Some(marker) = pending
            .markers
            .iter()
            .find(|m| (m.row, m.col) == (row, col))
            .copied()
        else {
            self.pending = Some(pending);
            return (PlacementResult::Failed, row, col);
        };

        match marker.direction.anchor(pending.row, pending.col, ship_length) {
            Some((ar, ac)) if board.place_ship(ship_length, marker.direction.orientation(), ar, ac) => {
                (PlacementResult::ShipSet, ar, ac)
            }
            _ => (PlacementResult::Failed, row, col),
        }
    }
}
