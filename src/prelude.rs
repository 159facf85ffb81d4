//! Commonly used types and utilities for ease of import.

pub use crate::{
    choose_target, AiPlayer, Board, Cell, GameConfig, GameEngine, GameMode, InsufficientSpace,
    ManualPlacer, Orientation, PlacementResult, Player, ShotOutcome,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
