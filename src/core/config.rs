use super::common::BoardError;
use super::ship::ShipClass;
use alloc::vec::Vec;

pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Full-board resets allowed before auto-placement reports `InsufficientSpace`.
pub const MAX_PLACEMENT_RETRIES: usize = 1000;

pub const PATROL_BOAT: ShipClass = ShipClass::new("Patrol boat", 2);
pub const CRUISER: ShipClass = ShipClass::new("Cruiser", 3);
pub const SUBMARINE: ShipClass = ShipClass::new("Submarine", 4);
pub const CARRIER: ShipClass = ShipClass::new("Carrier", 5);

/// Ship classes in fleet order.
pub const SHIP_CLASSES: [ShipClass; 4] = [PATROL_BOAT, CRUISER, SUBMARINE, CARRIER];

/// Board size and fleet composition for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub patrol_boats: usize,
    pub cruisers: usize,
    pub submarines: usize,
    pub carriers: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_BOARD_SIZE,
            cols: DEFAULT_BOARD_SIZE,
            patrol_boats: 1,
            cruisers: 1,
            submarines: 1,
            carriers: 1,
        }
    }
}

impl GameConfig {
    /// Square board of `size` with the default fleet.
    pub fn square(size: usize) -> Self {
        Self {
            rows: size,
            cols: size,
            ..Self::default()
        }
    }

    /// Total number of ships in the fleet.
    pub fn ship_count(&self) -> usize {
        self.patrol_boats + self.cruisers + self.submarines + self.carriers
    }

    /// Ship lengths in fleet order: patrol boats, cruisers, submarines, carriers.
    pub fn ship_lengths(&self) -> Vec<usize> {
        let counts = [self.patrol_boats, self.cruisers, self.submarines, self.carriers];
        SHIP_CLASSES
            .iter()
            .zip(counts)
            .flat_map(|(class, n)| core::iter::repeat(class.length()).take(n))
            .collect()
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(BoardError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

/// Look up a ship class by length.
pub fn class_for_length(length: usize) -> Option<ShipClass> {
    SHIP_CLASSES.iter().copied().find(|c| c.length() == length)
}
