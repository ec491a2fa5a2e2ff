// error.rs - Error type shared by the grid and the simulation

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A coordinate fell outside `[0, width) x [0, height)`.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("fill probability {0} is not in [0, 1]")]
    InvalidFillProbability(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
