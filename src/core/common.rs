//! Common types for the engine: shot outcomes and board errors.

/// Result of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot hit a ship that still has untouched parts.
    Hit,
    /// Shot destroyed the last untouched part of a ship.
    Sunk,
    /// Cell was already fired on; nothing changed.
    Forbidden,
}

impl ShotOutcome {
    /// `true` when the shooter keeps the turn (a hit or a sink).
    pub fn keeps_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Errors returned by fallible board construction and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board must have at least one row and one column.
    InvalidDimensions { rows: usize, cols: usize },
    /// Coordinate lies outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Serialized board has the wrong number of rows.
    RowCountMismatch { expected: usize, found: usize },
    /// A serialized row has the wrong number of cells.
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A serialized cell is not a known digit code.
    InvalidCellCode { row: usize, col: usize, code: char },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid board dimensions {}x{}", rows, cols)
            }
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is out of bounds", row, col)
            }
            BoardError::RowCountMismatch { expected, found } => {
                write!(f, "Expected {} rows, found {}", expected, found)
            }
            BoardError::RowLengthMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} cells, expected {}",
                row, found, expected
            ),
            BoardError::InvalidCellCode { row, col, code } => {
                write!(f, "Unknown cell code '{}' at ({}, {})", code, row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Auto-placement gave up: the fleet does not fit the board within the retry cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientSpace {
    /// Number of full-board resets performed before giving up.
    pub attempts: usize,
}

impl core::fmt::Display for InsufficientSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Not enough space on the board for the fleet (gave up after {} resets)",
            self.attempts
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InsufficientSpace {}
