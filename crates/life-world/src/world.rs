use std::fmt::{self, Write as _};

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{Cell, CellState, Direction, Fate, Pattern, Rule, Seed, WorldError, WorldResult};

/// Live neighbours of a cell, in scan order.
pub type Neighbours<'a> = SmallVec<[&'a Cell; 8]>;

/// Summary of one call to [`World::rotate`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    /// Generation the world is in after the transition.
    pub generation: u64,
    /// Dead cells brought to life.
    pub births: usize,
    /// Live cells killed by under- or overpopulation.
    pub deaths: usize,
    /// Live cells after the transition.
    pub population: usize,
}

/// A fixed-size Game of Life grid with hard edges.
///
/// Cells live in one backing store ordered by `x` then `y` (index
/// `x * height + y`). The flattened view ([`World::cells`]) and the grid
/// view ([`World::board`], [`World::get`]) both read that store, so an edit
/// through one is always visible through the other.
///
/// Mutation needs `&mut World`; share a world across threads only behind a
/// lock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    generation: u64,
}

impl World {
    /// Create a `width x height` world seeded from `seed`.
    pub fn new(width: usize, height: usize, seed: Seed) -> WorldResult<Self> {
        let invalid = WorldError::InvalidDimension { width, height };
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or(invalid)?;

        // Grids too large to allocate are rejected instead of aborting.
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid)?;

        let mut rng = seed.rng();
        for x in 0..width {
            for y in 0..height {
                cells.push(Cell::new(x, y, rng.bool()));
            }
        }

        let world = Self {
            width,
            height,
            cells,
            generation: 0,
        };
        debug!(
            width,
            height,
            ?seed,
            population = world.population(),
            "created world"
        );
        Ok(world)
    }

    /// Create a world, seeded randomly or from [`Seed::DEFAULT_FIXED`].
    pub fn with_randomize(width: usize, height: usize, randomize: bool) -> WorldResult<Self> {
        Self::new(width, height, Seed::from_randomize(randomize))
    }

    /// Deterministic world with every cell alive.
    pub fn genesis(width: usize, height: usize) -> WorldResult<Self> {
        let mut world = Self::with_randomize(width, height, false)?;
        world.cells.iter_mut().for_each(Cell::revive);
        Ok(world)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of generations applied since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Every cell, ordered by `x` then `y`.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Columns of the grid; the `x`-th item is indexed by `y`.
    pub fn board(&self) -> impl ExactSizeIterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.height)
    }

    /// Plain copies of every cell, ordered by `x` then `y`.
    pub fn cell_states(&self) -> impl ExactSizeIterator<Item = CellState> {
        self.cells.iter().map(Cell::state)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(Cell::is_alive)
    }

    fn index(&self, x: usize, y: usize) -> WorldResult<usize> {
        if x < self.width && y < self.height {
            Ok(x * self.height + y)
        } else {
            Err(WorldError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get(&self, x: usize, y: usize) -> WorldResult<&Cell> {
        let idx = self.index(x, y)?;
        Ok(&self.cells[idx])
    }

    fn get_mut(&mut self, x: usize, y: usize) -> WorldResult<&mut Cell> {
        let idx = self.index(x, y)?;
        Ok(&mut self.cells[idx])
    }

    pub fn cell_state(&self, x: usize, y: usize) -> WorldResult<CellState> {
        self.get(x, y).map(Cell::state)
    }

    pub fn kill(&mut self, x: usize, y: usize) -> WorldResult<()> {
        self.get_mut(x, y).map(Cell::die)
    }

    pub fn revive(&mut self, x: usize, y: usize) -> WorldResult<()> {
        self.get_mut(x, y).map(Cell::revive)
    }

    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) -> WorldResult<()> {
        self.get_mut(x, y).map(|cell| cell.set_alive(alive))
    }

    /// Flip a cell and return its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> WorldResult<bool> {
        let cell = self.get_mut(x, y)?;
        cell.set_alive(!cell.is_alive());
        Ok(cell.is_alive())
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::die);
    }

    /// Revive every cell of `pattern` with its bottom-left corner at `(x, y)`.
    ///
    /// Nothing is changed if any cell of the pattern falls outside the world.
    pub fn place(&mut self, pattern: &Pattern, x: usize, y: usize) -> WorldResult<()> {
        let indices = pattern
            .cells
            .iter()
            .map(|&(dx, dy)| self.index(x.saturating_add(dx), y.saturating_add(dy)))
            .collect::<WorldResult<Vec<_>>>()?;

        for idx in indices {
            self.cells[idx].revive();
        }
        debug!(pattern = pattern.name, x, y, "placed pattern");
        Ok(())
    }

    /// Live cells in the Moore neighbourhood of `(x, y)`.
    ///
    /// Neighbours are scanned in [`Direction::ALL`] order; positions past an
    /// edge are skipped rather than wrapped.
    pub fn live_neighbours_of(&self, x: usize, y: usize) -> WorldResult<Neighbours<'_>> {
        self.index(x, y)?;
        Ok(self.live_neighbours(x, y).collect())
    }

    fn live_neighbours(&self, x: usize, y: usize) -> impl Iterator<Item = &Cell> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| dir.step(x, y, self.width, self.height))
            .map(move |(nx, ny)| &self.cells[nx * self.height + ny])
            .filter(|cell| cell.is_alive())
    }

    /// Advance one generation.
    ///
    /// Every decision is made against the current generation before any
    /// cell changes; births and survivals are applied first, then deaths.
    pub fn rotate(&mut self) -> Transition {
        let mut to_live = Vec::new();
        let mut to_die = Vec::new();
        let mut births = 0;

        for (idx, cell) in self.cells.iter().enumerate() {
            let neighbours = self.live_neighbours(cell.x(), cell.y()).count();

            for rule in Rule::matching(cell.is_alive(), neighbours) {
                match rule.fate() {
                    Fate::Live => to_live.push(idx),
                    Fate::Die => to_die.push(idx),
                }
                if rule == Rule::Birth {
                    births += 1;
                }
            }
        }

        for &idx in &to_live {
            self.cells[idx].revive();
        }
        for &idx in &to_die {
            self.cells[idx].die();
        }
        self.generation += 1;

        let transition = Transition {
            generation: self.generation,
            births,
            deaths: to_die.len(),
            population: self.population(),
        };
        trace!(
            generation = transition.generation,
            births = transition.births,
            deaths = transition.deaths,
            population = transition.population,
            "rotated world"
        );
        transition
    }

    /// Driver-facing name for [`World::rotate`].
    pub fn advance_generation(&mut self) -> Transition {
        self.rotate()
    }
}

/// One line per row, highest `y` first; `#` alive, `.` dead.
impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let alive = self.cells[x * self.height + y].is_alive();
                f.write_char(if alive { '#' } else { '.' })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{BLINKER, BLOCK};

    fn empty(width: usize, height: usize) -> World {
        let mut world = World::genesis(width, height).unwrap();
        world.clear();
        world
    }

    fn alive(world: &World) -> Vec<(usize, usize)> {
        world
            .cells()
            .iter()
            .filter(|c| c.is_alive())
            .map(Cell::position)
            .collect()
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            World::new(0, 3, Seed::default()),
            Err(WorldError::InvalidDimension {
                width: 0,
                height: 3
            })
        );
        assert!(World::genesis(3, 0).is_err());
        assert!(World::genesis(usize::MAX, 2).is_err());
        assert_eq!(
            World::new(usize::MAX / 2, 1, Seed::default()),
            Err(WorldError::InvalidDimension {
                width: usize::MAX / 2,
                height: 1
            })
        );
    }

    #[test]
    fn board_and_cells_share_storage() {
        let mut world = World::genesis(3, 2).unwrap();
        world.kill(2, 1).unwrap();

        let board: Vec<_> = world.board().collect();
        assert_eq!(board.len(), 3);
        assert_eq!(board[2][1], Cell::new(2, 1, false));
        assert_eq!(world.cells()[5], Cell::new(2, 1, false));
    }

    #[test]
    fn toggle_flips() {
        let mut world = empty(2, 2);
        assert_eq!(world.toggle(1, 1), Ok(true));
        assert_eq!(world.toggle(1, 1), Ok(false));
        assert!(world.toggle(2, 0).is_err());
    }

    #[test]
    fn blinker_oscillates() {
        let mut world = empty(5, 5);
        world.place(&BLINKER, 1, 1).unwrap();
        let horizontal = alive(&world);
        assert_eq!(horizontal, vec![(1, 2), (2, 2), (3, 2)]);

        let transition = world.rotate();
        assert_eq!(alive(&world), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(transition.births, 2);
        assert_eq!(transition.deaths, 2);
        assert_eq!(transition.population, 3);
        assert_eq!(transition.generation, 1);

        world.rotate();
        assert_eq!(alive(&world), horizontal);
        assert_eq!(world.generation(), 2);
    }

    #[test]
    fn block_is_stable() {
        let mut world = empty(4, 4);
        world.place(&BLOCK, 1, 1).unwrap();
        let before = world.clone();

        let transition = world.rotate();

        assert_eq!(world.cells(), before.cells());
        assert_eq!(transition.births, 0);
        assert_eq!(transition.deaths, 0);
    }

    #[test]
    fn place_out_of_bounds_leaves_world_untouched() {
        let mut world = empty(3, 3);
        let err = world.place(&BLOCK, 2, 0).unwrap_err();

        assert!(matches!(err, WorldError::OutOfBounds { x: 3, .. }));
        assert!(world.is_extinct());
    }

    #[test]
    fn display_puts_high_y_first() {
        let mut world = empty(3, 2);
        world.revive(0, 1).unwrap();
        world.revive(2, 0).unwrap();

        assert_eq!(world.to_string(), "#..\n..#\n");
    }
}
