// simulation.rs - Generation-by-generation evolution of a Grid

use log::{debug, trace};
use rand::Rng;

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::patterns::Pattern;

/// Conway's rule: survival on 2 or 3 neighbors, birth on exactly 3.
#[inline]
#[rustfmt::skip]
pub fn next_state(alive: bool, live_neighbors: usize) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3)            => true, // Birth
        _                     => false, // Death or stays dead
    }
}

/// Owns the current generation and counts how many steps produced it.
///
/// Callers read the board through [`Simulation::grid`] or
/// [`Simulation::for_each_live_cell`]; nothing outside hands out a mutable
/// reference to it.
#[derive(Debug, Clone)]
pub struct Simulation {
    board: Grid,
    step: u64,
}

impl Simulation {
    /// Adopts `grid` as generation 0.
    pub fn from_grid(grid: Grid) -> Self {
        Self { board: grid, step: 0 }
    }

    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, fill: f64, rng: &mut R) -> Result<Self> {
        let mut sim = Self::from_grid(Grid::new(0, 0));
        sim.random_init(width, height, fill, rng)?;
        Ok(sim)
    }

    /// A dead `width x height` board with `pattern` stamped in the middle.
    pub fn from_pattern(width: usize, height: usize, pattern: &Pattern) -> Self {
        let mut grid = Grid::new(width, height);
        let skipped = pattern.stamp_centered(&mut grid);
        if skipped > 0 {
            debug!("{}: {skipped} cells did not fit on a {width}x{height} grid", pattern.name);
        }
        Self::from_grid(grid)
    }

    /// Replaces the board with a fresh random one and resets the step counter.
    ///
    /// Each cell is alive independently with probability `fill`. The current
    /// board is left untouched if `fill` is rejected.
    pub fn random_init<R: Rng + ?Sized>(
        &mut self,
        width: usize,
        height: usize,
        fill: f64,
        rng: &mut R,
    ) -> Result<()> {
        if !(0.0..=1.0).contains(&fill) {
            return Err(Error::InvalidFillProbability(fill));
        }

        let mut grid = Grid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                *grid.cell_mut(x, y) = rng.gen_bool(fill);
            }
        }

        debug!(
            "seeded {width}x{height} grid with fill {fill}: {} live cells",
            grid.population()
        );
        self.board = grid;
        self.step = 0;
        Ok(())
    }

    /// Computes the next generation and makes it current.
    ///
    /// Every cell is decided from the previous board only; the new board is a
    /// separate buffer that replaces the old one once fully populated. Returns
    /// whether any cell is alive afterwards.
    pub fn advance(&mut self) -> bool {
        let current = &self.board;
        let mut next = current.create_empty();
        let mut any_alive = false;

        for y in 0..current.height() {
            for x in 0..current.width() {
                let alive = current.cell(x, y);
                let n = current.count_live_neighbors(x, y);

                if next_state(alive, n) {
                    *next.cell_mut(x, y) = true;
                    any_alive = true;
                }
            }
        }

        self.board = next;
        self.step += 1;

        if any_alive {
            trace!("step {}: {} live cells", self.step, self.board.population());
        } else {
            debug!("extinct at step {}", self.step);
        }
        any_alive
    }

    /// Advances up to `steps` times, stopping early once the board dies out.
    /// Returns the liveness of the last generation produced.
    pub fn run(&mut self, steps: u64) -> bool {
        let mut alive = self.board.population() > 0;
        for _ in 0..steps {
            alive = self.advance();
            if !alive {
                break;
            }
        }
        alive
    }

    /// Calls `visit(x, y)` for every live cell, in raster order.
    pub fn for_each_live_cell<F: FnMut(usize, usize)>(&self, mut visit: F) {
        for (x, y) in self.board.live_cells() {
            visit(x, y);
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.board
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn population(&self) -> usize {
        self.board.population()
    }

    pub fn set_cell(&mut self, x: usize, y: usize, value: bool) -> Result<()> {
        self.board.set(x, y, value)
    }

    /// Flips one cell and returns its new value.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<bool> {
        let value = !self.board.get(x, y)?;
        self.board.set(x, y, value)?;
        Ok(value)
    }

    /// Kills every cell and resets the step counter.
    pub fn clear(&mut self) {
        self.board = self.board.create_empty();
        self.step = 0;
    }
}
