// grid.rs - Fixed-size board of boolean cells for Conway's Game of Life

use std::fmt;

use crate::error::{Error, Result};

/// Offsets of the Moore neighborhood, center excluded.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// A `width x height` board stored as one flat buffer, row-major:
/// cell `(x, y)` lives at index `y * width + x`.
///
/// The shape is fixed at construction; only cell values change. The edges do
/// not wrap, so anything past them reads as dead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All cells dead. A 0x0 grid is valid and simply has no cells.
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        let len = width
            .checked_mul(height)
            .unwrap_or_else(|| panic!("{width}x{height} grid has more cells than fit in memory"));
        Self {
            width,
            height,
            cells: vec![false; len],
        }
    }

    /// A dead grid with the same dimensions as `self`.
    pub fn create_empty(&self) -> Self {
        Self::new(self.width, self.height)
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

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    /// Direct access for loops bounded by the grid's own dimensions.
    pub(crate) fn cell(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }

    pub(crate) fn cell_mut(&mut self, x: usize, y: usize) -> &mut bool {
        debug_assert!(x < self.width && y < self.height);
        &mut self.cells[y * self.width + x]
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, x: usize, y: usize, value: bool) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Live cells among the 8 Moore neighbors of `(x, y)`.
    ///
    /// Probes that leave the grid, either by going below zero or by failing
    /// the bounds check in [`Grid::get`], count as dead. Corner cells therefore
    /// see at most 3 neighbors and edge cells at most 5.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| {
                match (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
                    (Some(nx), Some(ny)) => self.get(nx, ny).unwrap_or(false),
                    _ => false,
                }
            })
            .count()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell, in raster order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(idx, _)| (idx % width, idx / width))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for &alive in &self.cells[y * self.width..(y + 1) * self.width] {
                f.write_str(if alive { "o" } else { " " })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_zero_sized_grid() {
        let grid = Grid::new(0, 0);
        assert_eq!(grid.population(), 0);
        assert!(grid.get(0, 0).is_err());
        assert_eq!(grid.to_string(), "");
    }

    #[test]
    #[should_panic(expected = "more cells than fit")]
    fn test_oversized_grid_panics() {
        Grid::new(usize::MAX / 2 + 1, 2);
    }

    #[test]
    fn test_set_then_get_leaves_other_cells_alone() {
        let mut grid = Grid::new(5, 4);
        grid.set(3, 2, true).unwrap();

        for y in 0..4 {
            for x in 0..5 {
                assert_eq!(grid.get(x, y).unwrap(), (x, y) == (3, 2));
            }
        }

        grid.set(3, 2, false).unwrap();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_row_major_layout() {
        let mut grid = Grid::new(3, 2);
        grid.set(2, 1, true).unwrap();
        // y * width + x
        assert!(grid.cells[5]);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(3, 2);
        let expected = Error::OutOfBounds { x: 3, y: 0, width: 3, height: 2 };

        assert_eq!(grid.get(3, 0), Err(expected.clone()));
        assert_eq!(grid.set(3, 0, true), Err(expected));
        assert!(grid.get(0, 2).is_err());
        assert!(grid.set(usize::MAX, usize::MAX, true).is_err());
    }

    #[test]
    fn test_create_empty_keeps_shape_not_cells() {
        let mut grid = Grid::new(6, 2);
        grid.set(1, 1, true).unwrap();

        let empty = grid.create_empty();
        assert_eq!(empty.dimensions(), (6, 2));
        assert_eq!(empty.population(), 0);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_neighbors_of_lone_center() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, true).unwrap();

        assert_eq!(grid.count_live_neighbors(1, 1), 0);
        for (x, y) in [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)] {
            assert_eq!(grid.count_live_neighbors(x, y), 1, "neighbor ({x}, {y})");
        }
    }

    #[test]
    fn test_edges_do_not_wrap() {
        let mut grid = Grid::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, true).unwrap();
            }
        }

        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        assert_eq!(grid.count_live_neighbors(2, 2), 3);
        assert_eq!(grid.count_live_neighbors(1, 0), 5);
        assert_eq!(grid.count_live_neighbors(0, 1), 5);
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
    }

    #[test]
    fn test_live_cells_raster_order() {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 0, true).unwrap();
        grid.set(0, 2, true).unwrap();
        grid.set(1, 0, true).unwrap();

        let cells: Vec<_> = grid.live_cells().collect();
        assert_eq!(cells, vec![(1, 0), (2, 0), (0, 2)]);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3, 2);
        grid.set(0, 0, true).unwrap();
        grid.set(2, 1, true).unwrap();
        assert_eq!(grid.to_string(), "o  \n  o\n");
    }
}
