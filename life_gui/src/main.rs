// main.rs - Windowed Game of Life driving a life::Simulation

use eframe::egui;
use egui::Color32;
use life::{GenerationHistory, Grid, Simulation, patterns};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

mod ui;

// Board shown in the window
pub const GRID_SIZE: usize = 50;
// Chance a cell starts alive on "Random"
pub const RANDOM_FILL: f64 = 0.33;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("starting {GRID_SIZE}x{GRID_SIZE} Game of Life window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(GameOfLife::default())),
    )
}

/// Why the app stopped running by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    Extinct,
    Cycle,
}

pub struct GameOfLife {
    sim: Simulation,
    history: GenerationHistory,
    rng: StdRng,

    pub is_running: bool,
    pub halted: Option<Halt>,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

impl Default for GameOfLife {
    fn default() -> Self {
        Self {
            sim: Simulation::from_grid(Grid::new(GRID_SIZE, GRID_SIZE)),
            history: GenerationHistory::default(),
            rng: StdRng::from_entropy(),
            is_running: false,
            halted: None,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(life::DEFAULT_INTERVAL_MS),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
        }
    }
}

impl GameOfLife {
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// One generation. Pauses the app on extinction or once the board repeats.
    pub fn update_generation(&mut self) {
        let alive = self.sim.advance();
        let repeated = self.history.record(self.sim.grid());

        let halt = match (alive, repeated) {
            (false, _) => Some(Halt::Extinct),
            (true, true) => Some(Halt::Cycle),
            (true, false) => None,
        };
        if let Some(halt) = halt {
            info!("stopping at generation {}: {halt:?}", self.sim.step());
            self.is_running = false;
            self.halted = Some(halt);
        }
    }

    /// Forget past generations after the board was edited or replaced.
    fn restart_tracking(&mut self) {
        self.history.clear();
        self.history.record(self.sim.grid());
        self.halted = None;
    }

    fn reset(&mut self, sim: Simulation) {
        self.sim = sim;
        self.restart_tracking();
    }

    pub fn clear_grid(&mut self) {
        self.sim.clear();
        self.restart_tracking();
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            self.reset(Simulation::from_pattern(GRID_SIZE, GRID_SIZE, pattern));
        }
    }

    pub fn apply_random_pattern(&mut self) {
        match Simulation::random(GRID_SIZE, GRID_SIZE, RANDOM_FILL, &mut self.rng) {
            Ok(sim) => self.reset(sim),
            Err(e) => log::error!("random board: {e}"),
        }
    }

    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        if self.sim.toggle_cell(x, y).is_ok() {
            self.restart_tracking();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blinker_halts_on_cycle() {
        let mut app = GameOfLife::default();
        app.selected_pattern = patterns::PATTERNS.iter().position(|p| p.name == "Blinker").unwrap();
        app.apply_selected_pattern();
        app.is_running = true;

        app.update_generation();
        assert!(app.is_running);
        app.update_generation();
        assert!(!app.is_running);
        assert_eq!(app.halted, Some(Halt::Cycle));
    }

    #[test]
    fn test_lone_cell_halts_on_extinction() {
        let mut app = GameOfLife::default();
        app.toggle_cell(10, 10);
        app.is_running = true;

        app.update_generation();
        assert!(!app.is_running);
        assert_eq!(app.halted, Some(Halt::Extinct));
    }

    #[test]
    fn test_clear_resets_generation() {
        let mut app = GameOfLife::default();
        app.apply_random_pattern();
        app.update_generation();
        app.clear_grid();

        assert_eq!(app.simulation().step(), 0);
        assert_eq!(app.simulation().population(), 0);
        assert_eq!(app.halted, None);
    }
}
