use crate::core::{
    ai,
    board::Board,
    common::{BoardError, InsufficientSpace, ShotOutcome},
    config::{class_for_length, GameConfig},
    ship::ShipSpec,
    wizard::{ManualPlacer, PlacementResult},
};
use alloc::{string::String, vec::Vec};
use rand::Rng;

/// Phase of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    /// The human is placing ships.
    SettingShips,
    Playing,
    PlayerWon,
    ComputerWon,
    /// Boards unavailable, e.g. the computer could not place its fleet.
    Hold,
}

/// Serializable snapshot of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub mode: GameMode,
    pub config: GameConfig,
    pub fleet: Vec<ShipSpec>,
    pub ships_lost_player: usize,
    pub ships_lost_computer: usize,
    pub player_grid: Vec<String>,
    pub computer_grid: Vec<String>,
}

#[cfg(feature = "std")]
impl GameState {
    /// Encode as bincode bytes.
    pub fn encode(&self) -> anyhow::Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from [`GameState::encode`] output.
    pub fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// One human-versus-computer session: both boards, the human's fleet and
/// the score.
#[derive(Debug)]
pub struct GameEngine {
    config: GameConfig,
    mode: GameMode,
    player_board: Board,
    computer_board: Board,
    fleet: Vec<ShipSpec>,
    placer: ManualPlacer,
    ships_lost_player: usize,
    ships_lost_computer: usize,
}

impl GameEngine {
    /// Start a session. If the computer's fleet doesn't fit, the engine is
    /// returned in [`GameMode::Hold`].
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        config.validate()?;
        let mut engine = Self {
            config,
            mode: GameMode::Hold,
            player_board: Board::new(config.rows, config.cols),
            computer_board: Board::new(config.rows, config.cols),
            fleet: Vec::new(),
            placer: ManualPlacer::new(),
            ships_lost_player: 0,
            ships_lost_computer: 0,
        };
        if let Err(e) = engine.restart(rng) {
            log::warn!("{}", e);
        }
        Ok(engine)
    }

    /// Reset both boards and the score, and auto-place the computer's fleet.
    /// On `InsufficientSpace` the session is put on hold.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), InsufficientSpace> {
        self.player_board = Board::new(self.config.rows, self.config.cols);
        self.computer_board = Board::new(self.config.rows, self.config.cols);
        self.fleet = self.config.ship_lengths().into_iter().map(ShipSpec::new).collect();
        self.placer = ManualPlacer::new();
        self.ships_lost_player = 0;
        self.ships_lost_computer = 0;

        let lengths = self.config.ship_lengths();
        match self.computer_board.auto_place(rng, &lengths) {
            Ok(()) => {
                self.set_mode(GameMode::SettingShips);
                Ok(())
            }
            Err(e) => {
                self.set_mode(GameMode::Hold);
                Err(e)
            }
        }
    }

    fn set_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            log::info!("game mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// The computer's board. Renderers must hide its untouched ship parts.
    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    pub fn fleet(&self) -> &[ShipSpec] {
        &self.fleet
    }

    pub fn placer(&self) -> &ManualPlacer {
        &self.placer
    }

    pub fn ships_lost_player(&self) -> usize {
        self.ships_lost_player
    }

    pub fn ships_lost_computer(&self) -> usize {
        self.ships_lost_computer
    }

    /// Length of the next ship to place, if any remain.
    pub fn next_ship_length(&self) -> Option<usize> {
        self.fleet.iter().find(|s| !s.is_placed()).map(|s| s.length)
    }

    pub fn all_ships_placed(&self) -> bool {
        self.fleet.iter().all(ShipSpec::is_placed)
    }

    /// Route a click on the player's board during ship setup.
    pub fn handle_placement(&mut self, row: usize, col: usize) -> (PlacementResult, usize, usize) {
        if self.mode != GameMode::SettingShips {
            return (PlacementResult::Failed, row, col);
        }
        let length = self.next_ship_length().unwrap_or(0);
        let (result, r, c) = self.placer.handle(&mut self.player_board, row, col, length);
        match result {
            PlacementResult::ShipSet => {
                if let Some(ship) = self.fleet.iter_mut().find(|s| !s.is_placed()) {
                    ship.anchor = Some((r, c));
                    let name = class_for_length(ship.length).map_or("ship", |class| class.name());
                    log::debug!("{} placed at ({}, {})", name, r, c);
                }
            }
            PlacementResult::ShipRemoved => {
                for ship in self.fleet.iter_mut().filter(|s| s.anchor == Some((r, c))) {
                    ship.anchor = None;
                }
            }
            PlacementResult::PointSet | PlacementResult::Failed => {}
        }
        (result, r, c)
    }

    /// Leave setup once every ship is placed. Returns `true` if play began.
    pub fn start(&mut self) -> bool {
        if self.mode != GameMode::SettingShips || !self.all_ships_placed() {
            return false;
        }
        self.placer.cancel();
        self.player_board.clear_forbidden();
        self.set_mode(GameMode::Playing);
        true
    }

    /// The human fires at the computer's board. Outside play every shot is
    /// `Forbidden`.
    pub fn player_shoot(&mut self, row: usize, col: usize) -> ShotOutcome {
        if self.mode != GameMode::Playing || !self.computer_board.in_bounds(row, col) {
            return ShotOutcome::Forbidden;
        }
        let outcome = self.computer_board.fire(row, col);
        if outcome == ShotOutcome::Sunk {
            self.ships_lost_computer += 1;
            if self.ships_lost_computer == self.config.ship_count() {
                self.set_mode(GameMode::PlayerWon);
            }
        }
        outcome
    }

    /// The computer fires at the player's board until it misses, runs out of
    /// targets or wins. Returns every shot taken.
    pub fn computer_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<((usize, usize), ShotOutcome)> {
        let mut shots = Vec::new();
        while self.mode == GameMode::Playing {
            let Some((row, col)) = ai::choose_target(&self.player_board, rng) else {
                break;
            };
            let outcome = self.player_board.fire(row, col);
            shots.push(((row, col), outcome));
            if outcome == ShotOutcome::Sunk {
                self.ships_lost_player += 1;
                if self.ships_lost_player == self.config.ship_count() {
                    self.set_mode(GameMode::ComputerWon);
                }
            }
            if !outcome.keeps_turn() {
                break;
            }
        }
        shots
    }

    /// Snapshot for saving.
    pub fn state(&self) -> GameState {
        GameState {
            mode: self.mode,
            config: self.config,
            fleet: self.fleet.clone(),
            ships_lost_player: self.ships_lost_player,
            ships_lost_computer: self.ships_lost_computer,
            player_grid: self.player_board.to_rows(),
            computer_grid: self.computer_board.to_rows(),
        }
    }

    /// Restore a session from a snapshot.
    pub fn from_state(state: GameState) -> Result<Self, BoardError> {
        state.config.validate()?;
        let rows = state.config.rows;
        let cols = state.config.cols;
        Ok(Self {
            config: state.config,
            mode: state.mode,
            player_board: Board::from_rows(rows, cols, &state.player_grid)?,
            computer_board: Board::from_rows(rows, cols, &state.computer_grid)?,
            fleet: state.fleet,
            placer: ManualPlacer::new(),
            ships_lost_player: state.ships_lost_player,
            ships_lost_computer: state.ships_lost_computer,
        })
    }
}
