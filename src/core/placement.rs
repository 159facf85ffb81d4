//! Ship placement: free-space channels, manual placement and removal, and
//! randomized automatic fleet placement.
//!
//! Ships never touch, not even diagonally. A cell next to any ship cell is
//! part of that ship's margin and can't hold another ship. Channels are the
//! maximal runs of water outside every margin, taken row by row and then
//! column by column; a ship can be placed exactly where it fits inside one.

use crate::core::board::{Board, Cell};
use crate::core::common::InsufficientSpace;
use crate::core::config::MAX_PLACEMENT_RETRIES;
use crate::core::ship::Orientation;
use alloc::vec::Vec;
use rand::Rng;

/// Maximal run of placeable water along one row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub orientation: Orientation,
    pub start_row: usize,
    pub start_col: usize,
    pub length: usize,
}

impl Channel {
    /// Whether a ship of `length` anchored at (`row`, `col`) lies inside this channel.
    pub fn fits(&self, length: usize, orientation: Orientation, row: usize, col: usize) -> bool {
        if orientation != self.orientation || length == 0 {
            return false;
        }
        match orientation {
            Orientation::Horizontal => {
                row == self.start_row
                    && col >= self.start_col
                    && col + length <= self.start_col + self.length
            }
            Orientation::Vertical => {
                col == self.start_col
                    && row >= self.start_row
                    && row + length <= self.start_row + self.length
            }
        }
    }

    /// Top-left cell of a ship starting `offset` cells into the channel.
    fn anchor_at(&self, offset: usize) -> (usize, usize) {
        match self.orientation {
            Orientation::Horizontal => (self.start_row, self.start_col + offset),
            Orientation::Vertical => (self.start_row + offset, self.start_col),
        }
    }
}

impl Board {
    /// Water cell outside every ship margin.
    fn is_placeable(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Cell::Water
            && !self
                .neighbors8(row, col)
                .any(|(r, c)| self.cell(r, c).is_occupied())
    }

    /// All channels on the current board, rows first, then columns.
    /// Does not modify the board.
    pub fn channels(&self) -> Vec<Channel> {
        let mut channels = Vec::new();
        for row in 0..self.rows() {
            let line = (0..self.cols()).map(|col| self.is_placeable(row, col));
            for (start, length) in runs(line) {
                channels.push(Channel {
                    orientation: Orientation::Horizontal,
                    start_row: row,
                    start_col: start,
                    length,
                });
            }
        }
        for col in 0..self.cols() {
            let line = (0..self.rows()).map(|row| self.is_placeable(row, col));
            for (start, length) in runs(line) {
                channels.push(Channel {
                    orientation: Orientation::Vertical,
                    start_row: start,
                    start_col: col,
                    length,
                });
            }
        }
        channels
    }

    /// Whether a ship could be placed with its top-left cell at (`row`, `col`).
    pub fn is_settable(&self, length: usize, orientation: Orientation, row: usize, col: usize) -> bool {
        self.channels()
            .iter()
            .any(|ch| ch.fits(length, orientation, row, col))
    }

    /// Place a ship with its top-left cell at (`row`, `col`).
    /// Returns `false`, leaving the board unchanged, if it doesn't fit a channel.
    pub fn place_ship(&mut self, length: usize, orientation: Orientation, row: usize, col: usize) -> bool {
        if !self.is_settable(length, orientation, row, col) {
            return false;
        }
        self.write_ship(length, orientation, row, col);
        true
    }

    fn write_ship(&mut self, length: usize, orientation: Orientation, row: usize, col: usize) {
        for (r, c) in orientation.cells(row, col, length) {
            self.set(r, c, Cell::ShipPart);
        }
    }

    /// Top-left cell of the untouched ship covering (`row`, `col`), if any.
    pub fn ship_anchor(&self, mut row: usize, mut col: usize) -> Option<(usize, usize)> {
        if self.get(row, col)? != Cell::ShipPart {
            return None;
        }
        loop {
            if row > 0 && self.cell(row - 1, col) == Cell::ShipPart {
                row -= 1;
            } else if col > 0 && self.cell(row, col - 1) == Cell::ShipPart {
                col -= 1;
            } else {
                return Some((row, col));
            }
        }
    }

    /// Remove the untouched ship covering (`row`, `col`).
    /// Returns `false` if there is no ship there.
    pub fn remove_ship_at(&mut self, row: usize, col: usize) -> bool {
        let Some((row, col)) = self.ship_anchor(row, col) else {
            return false;
        };
        let orientation = if self.get(row, col + 1) == Some(Cell::ShipPart) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (dr, dc) = orientation.step();
        let (mut r, mut c) = (row, col);
        while self.get(r, c) == Some(Cell::ShipPart) {
            self.set(r, c, Cell::Water);
            r += dr;
            c += dc;
        }
        true
    }

    /// Turn every `Forbidden` cell back into water.
    pub fn clear_forbidden(&mut self) {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if self.cell(row, col) == Cell::Forbidden {
                    self.set(row, col, Cell::Water);
                }
            }
        }
    }

    /// Recompute the `Forbidden` margin around every ship. Only water is
    /// marked; ship, hit, miss and sunk cells are left alone. Idempotent.
    pub fn update_forbidden(&mut self) {
        self.clear_forbidden();
        let margin: Vec<(usize, usize)> = self
            .iter()
            .filter(|&((r, c), cell)| {
                cell == Cell::Water
                    && self.neighbors8(r, c).any(|(nr, nc)| self.cell(nr, nc).is_occupied())
            })
            .map(|(coord, _)| coord)
            .collect();
        for (r, c) in margin {
            self.set(r, c, Cell::Forbidden);
        }
    }

    /// Clear the board and place ships of the given lengths, in order, at
    /// random non-touching positions. See [`Board::auto_place_with`].
    pub fn auto_place<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        lengths: &[usize],
    ) -> Result<(), InsufficientSpace> {
        self.auto_place_with(rng, lengths, MAX_PLACEMENT_RETRIES)
    }

    /// Like [`Board::auto_place`] with an explicit retry cap.
    ///
    /// Whenever a ship finds no channel long enough, the whole board is reset
    /// and placement restarts from the first ship. After more than
    /// `max_retries` resets the board is left all water and
    /// `InsufficientSpace` is returned. Zero-length entries are skipped.
    pub fn auto_place_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        lengths: &[usize],
        max_retries: usize,
    ) -> Result<(), InsufficientSpace> {
        let mut resets = 0;
        self.reset();
        let mut i = 0;
        while i < lengths.len() {
            let length = lengths[i];
            if length == 0 {
                i += 1;
                continue;
            }
            let candidates: Vec<Channel> = self
                .channels()
                .into_iter()
                .filter(|ch| ch.length >= length)
                .collect();

            if candidates.is_empty() {
                self.reset();
                resets += 1;
                if resets > max_retries {
                    log::warn!(
                        "auto placement of {:?} on {}x{} failed after {} resets",
                        lengths,
                        self.rows(),
                        self.cols(),
                        max_retries
                    );
                    return Err(InsufficientSpace { attempts: max_retries });
                }
                log::debug!("no channel for ship {} (length {}), reset #{}", i, length, resets);
                i = 0;
                continue;
            }

            let channel = candidates[rng.random_range(0..candidates.len())];
            let offset = rng.random_range(0..=channel.length - length);
            let (row, col) = channel.anchor_at(offset);
            self.write_ship(length, channel.orientation, row, col);
            i += 1;
        }
        log::debug!("placed {} ships after {} resets", lengths.len(), resets);
        Ok(())
    }
}

/// Whether `lengths` can be auto-placed on a `rows`×`cols` board.
///
/// `true` guarantees a valid configuration exists. `false` means one most
/// likely does not; a very crowded but feasible fleet may still be rejected.
pub fn fleet_fits<R: Rng + ?Sized>(rows: usize, cols: usize, lengths: &[usize], rng: &mut R) -> bool {
    match Board::try_new(rows, cols) {
        Ok(mut scratch) => scratch.auto_place(rng, lengths).is_ok(),
        Err(_) => false,
    }
}

/// Maximal runs of `true` as `(start, length)`.
fn runs<I: Iterator<Item = bool>>(line: I) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut start = None;
    let mut last = 0;
    for (i, free) in line.enumerate() {
        match (free, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                out.push((s, i - s));
                start = None;
            }
            _ => {}
        }
        last = i + 1;
    }
    if let Some(s) = start {
        out.push((s, last - s));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_split_on_blocked_cells() {
        let line = [true, true, false, true, false, false, true, true, true];
        assert_eq!(runs(line.into_iter()), vec![(0, 2), (3, 1), (6, 3)]);
        assert!(runs([false, false].into_iter()).is_empty());
    }

    #[test]
    fn empty_board_has_one_channel_per_line() {
        let board = Board::new(3, 4);
        let channels = board.channels();
        assert_eq!(channels.len(), 3 + 4);
        assert!(channels
            .iter()
            .filter(|c| c.orientation == Orientation::Horizontal)
            .all(|c| c.length == 4 && c.start_col == 0));
        assert!(channels
            .iter()
            .filter(|c| c.orientation == Orientation::Vertical)
            .all(|c| c.length == 3 && c.start_row == 0));
    }

    #[test]
    fn channel_fit_respects_bounds() {
        let ch = Channel {
            orientation: Orientation::Vertical,
            start_row: 2,
            start_col: 1,
            length: 3,
        };
        assert!(ch.fits(3, Orientation::Vertical, 2, 1));
        assert!(ch.fits(2, Orientation::Vertical, 3, 1));
        assert!(!ch.fits(2, Orientation::Vertical, 4, 1));
        assert!(!ch.fits(1, Orientation::Horizontal, 2, 1));
        assert!(!ch.fits(0, Orientation::Vertical, 2, 1));
    }
}
