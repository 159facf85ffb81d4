// Hunt-then-search targeting for the automated side.
// Keeps no memory between calls: everything is derived from the board, so a
// restored game continues exactly where it left off.

use crate::core::board::{Board, Cell, ORTHOGONAL};
use alloc::vec::Vec;
use rand::Rng;

/// Which rule produced the current candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPhase {
    /// Finishing off a ship that has been hit but not sunk.
    Hunt,
    /// Looking for a new ship.
    Search,
}

/// Pick the next cell to fire at on `board`, or `None` when no legal cell is left.
pub fn choose_target<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    let (phase, candidates) = target_candidates(board);
    if candidates.is_empty() {
        return None;
    }
    let pick = candidates[rng.random_range(0..candidates.len())];
    log::debug!("{:?} phase: {} candidates, firing at {:?}", phase, candidates.len(), pick);
    Some(pick)
}

/// The full set `choose_target` draws from.
///
/// Hunt phase: the first hit cell in row-major order that still has a legal
/// follow-up shot supplies the set. Search phase: every untouched cell with no
/// sunk ship among its eight neighbours, since ships never touch.
pub fn target_candidates(board: &Board) -> (TargetPhase, Vec<(usize, usize)>) {
    for ((row, col), cell) in board.iter() {
        if cell != Cell::Hit {
            continue;
        }
        let candidates = hunt_candidates(board, row, col);
        if !candidates.is_empty() {
            return (TargetPhase::Hunt, candidates);
        }
    }
    (TargetPhase::Search, search_candidates(board))
}

/// Follow-up shots around the hit at (`row`, `col`).
pub fn hunt_candidates(board: &Board, row: usize, col: usize) -> Vec<(usize, usize)> {
    let is_hit = |dr: isize, dc: isize| {
        board
            .offset(row, col, dr, dc)
            .is_some_and(|(r, c)| board.cell(r, c) == Cell::Hit)
    };
    let axis = if is_hit(1, 0) || is_hit(-1, 0) {
        Some((1, 0))
    } else if is_hit(0, 1) || is_hit(0, -1) {
        Some((0, 1))
    } else {
        None
    };

    let mut candidates = Vec::new();
    match axis {
        Some((dr, dc)) => {
            // Both open ends of the run of hits through this cell.
            for sign in [-1, 1] {
                let (sr, sc) = (dr * sign, dc * sign);
                let (mut r, mut c) = (row, col);
                while let Some((nr, nc)) = board.offset(r, c, sr, sc) {
                    if board.cell(nr, nc) != Cell::Hit {
                        break;
                    }
                    (r, c) = (nr, nc);
                }
                if let Some(end) = fireable(board, r, c, sr, sc) {
                    candidates.push(end);
                }
            }
        }
        None => {
            for &(dr, dc) in ORTHOGONAL.iter() {
                if let Some(cell) = fireable(board, row, col, dr, dc) {
                    candidates.push(cell);
                }
            }
        }
    }
    candidates
}

/// Untouched cells not adjacent to a sunk ship.
pub fn search_candidates(board: &Board) -> Vec<(usize, usize)> {
    board
        .iter()
        .filter(|&((r, c), cell)| {
            cell.is_fireable() && !board.neighbors8(r, c).any(|(nr, nc)| board.cell(nr, nc) == Cell::Sunk)
        })
        .map(|(coord, _)| coord)
        .collect()
}

fn fireable(board: &Board, row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
    board
        .offset(row, col, dr, dc)
        .filter(|&(r, c)| board.cell(r, c).is_fireable())
}
