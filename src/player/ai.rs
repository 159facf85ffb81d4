use crate::core::{
    ai,
    board::Board,
    common::{InsufficientSpace, ShotOutcome},
};
use rand::rngs::SmallRng;

use super::Player;

/// Automated player: random non-touching fleet, hunt-then-search targeting.
#[derive(Debug, Default)]
pub struct AiPlayer {
    shots: usize,
    sunk: usize,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shots reported through `handle_shot_result`.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Ships this player has sunk.
    pub fn sunk(&self) -> usize {
        self.sunk
    }
}

impl Player for AiPlayer {
    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        lengths: &[usize],
    ) -> Result<(), InsufficientSpace> {
        board.auto_place(rng, lengths)
    }

    fn select_target(&mut self, rng: &mut SmallRng, opponent: &Board) -> Option<(usize, usize)> {
        ai::choose_target(opponent, rng)
    }

    fn handle_shot_result(&mut self, _coord: (usize, usize), result: ShotOutcome) {
        if result != ShotOutcome::Forbidden {
            self.shots += 1;
        }
        if result == ShotOutcome::Sunk {
            self.sunk += 1;
        }
    }
}
