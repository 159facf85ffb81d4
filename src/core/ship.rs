//! Ship descriptors and orientation.

/// Orientation of a ship or channel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Row/column step taken when walking along this orientation.
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }

    /// Cells covered by a run of `length` starting at (`row`, `col`).
    pub fn cells(self, row: usize, col: usize, length: usize) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = self.step();
        (0..length).map(move |i| (row + dr * i, col + dc * i))
    }
}

/// Named ship class: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship in a fleet: its length and, once placed, its top-left anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSpec {
    pub length: usize,
    pub anchor: Option<(usize, usize)>,
}

impl ShipSpec {
    /// Unplaced ship of the given length.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            anchor: None,
        }
    }

    pub fn is_placed(&self) -> bool {
        self.anchor.is_some()
    }
}
