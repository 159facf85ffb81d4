//! Core battleship engine (no_std compatible)
//!
//! Pure game logic: the board and its cell states, shot resolution, ship
//! placement, the click-driven placement wizard, the targeting AI and the
//! game session built on top of them. Needs only `alloc`, `rand` and `log`.

pub mod ai;
pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod placement;
pub mod ship;
pub mod shot;
pub mod wizard;

// Re-export commonly used types
pub use ai::{choose_target, hunt_candidates, search_candidates, target_candidates, TargetPhase};
pub use board::{Board, Cell};
pub use common::{BoardError, InsufficientSpace, ShotOutcome};
pub use config::*;
pub use game::{GameEngine, GameMode, GameState};
pub use placement::{fleet_fits, Channel};
pub use ship::{Orientation, ShipClass, ShipSpec};
pub use wizard::{Direction, ManualPlacer, Marker, PlacementResult};
