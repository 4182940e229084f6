//! A single grid location and its alive/dead state.

/// One cell of a [`World`](crate::World).
///
/// The position is fixed at construction; only the alive flag changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    x: usize,
    y: usize,
    alive: bool,
}

/// Plain copy of a cell handed to drivers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellState {
    pub x: usize,
    pub y: usize,
    pub alive: bool,
}

impl Cell {
    /// Create a cell with an explicit state.
    #[must_use]
    pub const fn new(x: usize, y: usize, alive: bool) -> Self {
        Self { x, y, alive }
    }

    /// Create a live cell at `(x, y)`.
    #[must_use]
    pub const fn at(x: usize, y: usize) -> Self {
        Self::new(x, y, true)
    }

    #[must_use]
    pub const fn x(&self) -> usize {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> usize {
        self.y
    }

    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn revive(&mut self) {
        self.alive = true;
    }

    pub fn die(&mut self) {
        self.alive = false;
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    #[must_use]
    pub const fn state(&self) -> CellState {
        CellState {
            x: self.x,
            y: self.y,
            alive: self.alive,
        }
    }
}

impl From<Cell> for CellState {
    fn from(cell: Cell) -> Self {
        cell.state()
    }
}
