//! # life
//!
//! Conway's Game of Life on a fixed-size, non-wrapping board.
//!
//! A [`Grid`] holds one generation. A [`Simulation`] owns the current grid,
//! builds each successor into a fresh buffer and reports whether anything is
//! still alive. Front ends seed it, call [`Simulation::advance`] on their own
//! cadence and read cells back to draw them.
//!
//! ```rust
//! use life::{Simulation, patterns};
//!
//! let blinker = patterns::find("Blinker").unwrap();
//! let mut sim = Simulation::from_pattern(5, 5, blinker);
//! let start = sim.grid().clone();
//!
//! assert!(sim.advance());
//! assert!(sim.advance());
//! assert_eq!(sim.grid(), &start);
//! assert_eq!(sim.step(), 2);
//! ```
//!
//! Random seeding takes the generator from the caller:
//!
//! ```rust
//! use life::Simulation;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let sim = Simulation::random(60, 60, 0.1, &mut rng).unwrap();
//! sim.for_each_live_cell(|x, y| assert!(x < 60 && y < 60));
//! ```

pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod simulation;

pub use error::{Error, Result};
pub use grid::Grid;
pub use history::GenerationHistory;
pub use patterns::Pattern;
pub use simulation::Simulation;

// Board size, fill and cadence used by the front ends when not told otherwise
pub const DEFAULT_WIDTH: usize = 60;
pub const DEFAULT_HEIGHT: usize = 60;
pub const DEFAULT_FILL: f64 = 0.1;
pub const DEFAULT_INTERVAL_MS: u64 = 250;
