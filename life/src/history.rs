// history.rs - Fingerprints of recent generations for cycle detection

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

pub const DEFAULT_HISTORY_LEN: usize = 10;

/// Ring of the last `capacity` generation hashes.
///
/// Once a generation repeats, every later one repeats too, so a hit means the
/// board is a still life or an oscillator with period up to `capacity`.
#[derive(Debug, Clone)]
pub struct GenerationHistory {
    hashes: Vec<u64>,
    capacity: usize,
    next: usize,
}

impl Default for GenerationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LEN)
    }
}

impl GenerationHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            hashes: Vec::with_capacity(capacity),
            capacity,
            next: 0,
        }
    }

    pub fn fingerprint(grid: &Grid) -> u64 {
        let mut hasher = DefaultHasher::new();
        grid.hash(&mut hasher);
        hasher.finish()
    }

    /// Remembers `grid`. Returns true if it matches a remembered generation.
    pub fn record(&mut self, grid: &Grid) -> bool {
        let hash = Self::fingerprint(grid);
        if self.hashes.contains(&hash) {
            return true;
        }
        if self.capacity == 0 {
            return false;
        }

        if self.hashes.len() < self.capacity {
            self.hashes.push(hash);
        } else {
            self.hashes[self.next] = hash;
        }
        self.next = (self.next + 1) % self.capacity;
        false
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn clear(&mut self) {
        self.hashes.clear();
        self.next = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(4, 4);
        for &(x, y) in cells {
            grid.set(x, y, true).unwrap();
        }
        grid
    }

    #[test]
    fn test_repeat_is_detected() {
        let mut history = GenerationHistory::default();
        let a = grid_with(&[(0, 0)]);
        let b = grid_with(&[(1, 1)]);

        assert!(!history.record(&a));
        assert!(!history.record(&b));
        assert!(history.record(&a));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_oldest_entry_is_forgotten() {
        let mut history = GenerationHistory::new(2);
        let a = grid_with(&[(0, 0)]);
        let b = grid_with(&[(1, 1)]);
        let c = grid_with(&[(2, 2)]);

        assert!(!history.record(&a));
        assert!(!history.record(&b));
        assert!(!history.record(&c));
        // `a` was overwritten by `c`
        assert!(!history.record(&a));
        assert!(history.record(&c));
    }

    #[test]
    fn test_clear() {
        let mut history = GenerationHistory::default();
        let a = grid_with(&[(3, 3)]);
        history.record(&a);
        history.clear();

        assert!(history.is_empty());
        assert!(!history.record(&a));
    }

    #[test]
    fn test_zero_capacity_never_matches() {
        let mut history = GenerationHistory::new(0);
        let a = grid_with(&[]);
        assert!(!history.record(&a));
        assert!(!history.record(&a));
    }
}
