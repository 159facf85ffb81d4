//! Player trait and implementations
//!
//! A Player is responsible for:
//! - Placing its fleet on its own board
//! - Selecting targets on the opponent's board
//! - Handling feedback from its shots

use crate::core::{board::Board, common::{InsufficientSpace, ShotOutcome}};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Place ships of the given lengths onto the player's own board.
    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        lengths: &[usize],
    ) -> Result<(), InsufficientSpace>;

    /// Choose the next cell to fire at on the opponent's board.
    /// `None` means no legal target is left.
    fn select_target(&mut self, rng: &mut SmallRng, opponent: &Board) -> Option<(usize, usize)>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: (usize, usize), _result: ShotOutcome) {}
}

pub mod ai;
pub use ai::AiPlayer;
