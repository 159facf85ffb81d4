//! Game board: a rows×cols grid of cell states with bounds-checked access.

use crate::core::common::BoardError;
use alloc::{string::String, vec, vec::Vec};
use core::fmt;

/// State of a single cell.
///
/// The numeric codes returned by [`Cell::code`] are the persisted save format
/// and must not change: Water=0, ShipPart=1, Hit=2, Miss=3, Sunk=4, Forbidden=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Untouched, empty.
    #[default]
    Water,
    /// Untouched, occupied by a ship.
    ShipPart,
    /// Occupied cell that was fired on.
    Hit,
    /// Empty cell that was fired on.
    Miss,
    /// Part of a fully destroyed ship.
    Sunk,
    /// Empty cell adjacent to a ship. Advisory only.
    Forbidden,
}

impl Cell {
    /// Single-digit save code.
    pub fn code(self) -> char {
        match self {
            Cell::Water => '0',
            Cell::ShipPart => '1',
            Cell::Hit => '2',
            Cell::Miss => '3',
            Cell::Sunk => '4',
            Cell::Forbidden => '5',
        }
    }

    /// Parse a save code. Codes 6-9 were orientation markers in older saves;
    /// markers are never board state, so they decode to water.
    pub fn from_code(code: char) -> Option<Cell> {
        match code {
            '0' | '6'..='9' => Some(Cell::Water),
            '1' => Some(Cell::ShipPart),
            '2' => Some(Cell::Hit),
            '3' => Some(Cell::Miss),
            '4' => Some(Cell::Sunk),
            '5' => Some(Cell::Forbidden),
            _ => None,
        }
    }

    /// Cell belongs to a ship (untouched, hit or sunk).
    pub fn is_occupied(self) -> bool {
        matches!(self, Cell::ShipPart | Cell::Hit | Cell::Sunk)
    }

    /// Cell has not been fired on yet and may be targeted.
    pub fn is_fireable(self) -> bool {
        matches!(self, Cell::Water | Cell::ShipPart)
    }

    fn symbol(self) -> char {
        match self {
            Cell::Water => '.',
            Cell::ShipPart => 'S',
            Cell::Hit => 'X',
            Cell::Miss => 'o',
            Cell::Sunk => '#',
            Cell::Forbidden => '-',
        }
    }
}

/// Orthogonal directions: up, down, left, right.
pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const SURROUNDING: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A player's side of the ocean.
///
/// Cells are stored row-major. Mutation is crate-private so every change goes
/// through firing, placement or removal.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-water board.
    ///
    /// # Panics
    /// If either dimension is zero. Use [`Board::try_new`] for a checked constructor.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(board) => board,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible constructor: returns `Err(InvalidDimensions)` if a dimension is zero.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Water; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Checked access; `None` outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Cell at (`row`, `col`).
    ///
    /// # Panics
    /// If the coordinate is out of bounds; that is a caller bug.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(
            self.in_bounds(row, col),
            "cell ({}, {}) outside {}x{} board",
            row,
            col,
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(self.in_bounds(row, col));
        self.cells[row * self.cols + col] = cell;
    }

    /// Coordinate displaced by (`dr`, `dc`), if it stays on the board.
    pub fn offset(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        self.in_bounds(r, c).then_some((r, c))
    }

    /// The up-to-eight in-bounds neighbours of a cell.
    pub fn neighbors8(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        SURROUNDING
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(row, col, dr, dc))
    }

    /// Row-major iterator over `((row, col), cell)`.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i / cols, i % cols), cell))
    }

    /// Number of cells in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// `true` when at least one ship cell exists and none is left unsunk.
    pub fn all_sunk(&self) -> bool {
        self.cells.contains(&Cell::Sunk)
            && !self
                .cells
                .iter()
                .any(|c| matches!(c, Cell::ShipPart | Cell::Hit))
    }

    /// Set every cell back to water.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Water);
    }

    /// Serialize as one digit string per row (see [`Cell::code`]).
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }

    /// Rebuild a board from [`Board::to_rows`] output.
    pub fn from_rows<S: AsRef<str>>(
        rows: usize,
        cols: usize,
        lines: &[S],
    ) -> Result<Self, BoardError> {
        let mut board = Self::try_new(rows, cols)?;
        if lines.len() != rows {
            return Err(BoardError::RowCountMismatch {
                expected: rows,
                found: lines.len(),
            });
        }
        for (r, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != cols {
                return Err(BoardError::RowLengthMismatch {
                    row: r,
                    expected: cols,
                    found,
                });
            }
            for (c, code) in line.chars().enumerate() {
                let cell = Cell::from_code(code)
                    .ok_or(BoardError::InvalidCellCode { row: r, col: c, code })?;
                board.set(r, c, cell);
            }
        }
        Ok(board)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board<{}x{}>:", self.rows, self.cols)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            for cell in row {
                write!(f, "{} ", cell.symbol())?;
            }
            if r + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
