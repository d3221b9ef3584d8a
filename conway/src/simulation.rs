// simulation.rs - Simulation state and the operations that change it

use crate::config::SimulationConfig;
use crate::error::IntervalError;
use crate::grid::Grid;
use crate::interval::{GenerationInterval, IntervalInput};
use crate::rules::step_grid;
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Grid, generation counter, run flag and interval settings.
///
/// Only the grid is ever replaced wholesale; previous generations are dropped.
#[derive(Debug, Clone)]
pub struct Simulation<R = StdRng> {
    grid: Grid,
    generation: u64,
    running: bool,
    configured_interval: IntervalInput,
    active_interval: GenerationInterval,
    last_error: Option<IntervalError>,
    density: f64,
    rng: R,
}

/// Read-only copy of everything the presentation layer shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub grid: Grid,
    pub generation: u64,
    pub running: bool,
    pub interval_text: String,
    pub active_interval: GenerationInterval,
    pub last_error: Option<String>,
}

impl Snapshot {
    /// Generation as shown to users, counting from 1.
    pub fn display_generation(&self) -> u64 {
        self.generation + 1
    }
}

impl Simulation<StdRng> {
    /// Production setup: fixed dimensions, entropy-seeded randomness.
    pub fn new() -> Self {
        Self::from_parts(SimulationConfig::default(), GenerationInterval::default(), StdRng::from_entropy())
    }

    pub fn seeded(config: SimulationConfig, seed: u64) -> Result<Self, IntervalError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl Default for Simulation<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Simulation<R> {
    pub fn with_rng(config: SimulationConfig, rng: R) -> Result<Self, IntervalError> {
        let interval = GenerationInterval::new(config.interval_ms)?;
        Ok(Self::from_parts(config, interval, rng))
    }

    fn from_parts(config: SimulationConfig, interval: GenerationInterval, mut rng: R) -> Self {
        let grid = Grid::random(config.rows, config.cols, config.density, &mut rng);
        Self {
            grid,
            generation: 0,
            running: false,
            configured_interval: interval.into(),
            active_interval: interval,
            last_error: None,
            density: config.density,
            rng,
        }
    }

    /// Replaces the current grid, keeping every other field.
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn configured_interval(&self) -> IntervalInput {
        self.configured_interval
    }

    pub fn active_interval(&self) -> GenerationInterval {
        self.active_interval
    }

    pub fn last_error(&self) -> Option<&IntervalError> {
        self.last_error.as_ref()
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        self.grid = step_grid(&self.grid);
        self.generation += 1;
        trace!("generation {} ({} live)", self.generation, self.grid.live_count());
    }

    /// Returns true when the run state changed.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        info!("simulation started at generation {}", self.generation);
        true
    }

    /// Returns true when the run state changed.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        info!("simulation stopped at generation {}", self.generation);
        true
    }

    /// Flips the run state and returns the new one.
    pub fn toggle_running(&mut self) -> bool {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
        self.running
    }

    /// Stops, reseeds the grid at the same dimensions and zeroes the counter.
    /// Interval settings are kept.
    pub fn reset(&mut self) {
        self.running = false;
        self.grid = Grid::random(self.grid.rows(), self.grid.cols(), self.density, &mut self.rng);
        self.generation = 0;
        self.last_error = None;
        info!("simulation reset ({} live cells)", self.grid.live_count());
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        self.grid.toggle(row, col);
    }

    /// Stores raw interval text. Blank text is kept as a blank buffer and
    /// non-numeric text leaves the buffer unchanged. The last error is cleared
    /// either way.
    pub fn set_configured_interval(&mut self, raw: &str) -> Result<(), IntervalError> {
        self.last_error = None;
        match IntervalInput::parse(raw) {
            Ok(input) => {
                self.configured_interval = input;
                Ok(())
            }
            Err(err) => {
                debug!("ignoring interval edit: {err}");
                Err(err)
            }
        }
    }

    /// Makes the edited interval active if it is in range, otherwise records
    /// the error and keeps the active interval.
    pub fn commit_interval(&mut self) -> Result<GenerationInterval, IntervalError> {
        match self.configured_interval.validate() {
            Ok(interval) => {
                self.active_interval = interval;
                self.last_error = None;
                info!("generation interval set to {interval}");
                Ok(interval)
            }
            Err(err) => {
                warn!("rejected interval {:?}: {err}", self.configured_interval);
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            generation: self.generation,
            running: self.running,
            interval_text: self.configured_interval.to_string(),
            active_interval: self.active_interval,
            last_error: self.last_error.as_ref().map(ToString::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Simulation {
        Simulation::seeded(SimulationConfig::with_dimensions(8, 10), 42).unwrap()
    }

    #[test]
    fn starts_stopped_at_generation_zero() {
        let sim = small();
        assert_eq!(sim.generation(), 0);
        assert!(!sim.is_running());
        assert_eq!(sim.active_interval().as_millis(), 300);
        assert_eq!(sim.configured_interval(), IntervalInput::Millis(300));
        assert!(sim.last_error().is_none());
    }

    #[test]
    fn default_simulation_uses_fixed_dimensions() {
        let sim = Simulation::new();
        assert_eq!((sim.grid().rows(), sim.grid().cols()), (78, 151));
    }

    #[test]
    fn invalid_startup_interval_is_rejected() {
        let config = SimulationConfig { interval_ms: 5, ..SimulationConfig::default() };
        assert_eq!(Simulation::seeded(config, 1).unwrap_err(), IntervalError::OutOfRange(5));
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut sim = small();
        assert!(sim.start());
        assert!(!sim.start());
        assert!(sim.is_running());
        assert!(sim.stop());
        assert!(!sim.stop());
        assert!(!sim.is_running());
    }

    #[test]
    fn toggle_running_flips() {
        let mut sim = small();
        assert!(sim.toggle_running());
        assert!(!sim.toggle_running());
    }

    #[test]
    fn toggle_cell_allowed_while_running() {
        let mut sim = small().with_grid(Grid::empty(8, 10));
        sim.start();
        sim.toggle_cell(3, 4);
        assert!(sim.grid().get(3, 4));
        assert!(sim.is_running());
    }

    #[test]
    fn blank_edit_is_kept() {
        let mut sim = small();
        sim.set_configured_interval("").unwrap();
        assert_eq!(sim.configured_interval(), IntervalInput::Blank);
        assert_eq!(sim.snapshot().interval_text, "");
    }

    #[test]
    fn non_numeric_edit_is_ignored_and_clears_error() {
        let mut sim = small();
        sim.set_configured_interval("5").unwrap();
        sim.commit_interval().unwrap_err();
        assert!(sim.last_error().is_some());

        assert!(sim.set_configured_interval("fast").is_err());
        assert_eq!(sim.configured_interval(), IntervalInput::Millis(5));
        assert!(sim.last_error().is_none());
    }

    #[test]
    fn committing_blank_buffer_fails() {
        let mut sim = small();
        sim.set_configured_interval("").unwrap();
        assert_eq!(sim.commit_interval(), Err(IntervalError::Blank));
        assert_eq!(sim.active_interval().as_millis(), 300);
        assert_eq!(sim.snapshot().last_error.as_deref(), Some("Must be between 20 and 5000"));
    }

    #[test]
    fn reset_keeps_interval_and_clears_state() {
        let mut sim = small();
        sim.set_configured_interval("1000").unwrap();
        sim.commit_interval().unwrap();
        sim.set_configured_interval("1").unwrap();
        sim.commit_interval().unwrap_err();
        sim.start();
        sim.step();

        sim.reset();
        assert_eq!(sim.generation(), 0);
        assert!(!sim.is_running());
        assert!(sim.last_error().is_none());
        assert_eq!(sim.active_interval().as_millis(), 1000);
        assert_eq!(sim.configured_interval(), IntervalInput::Millis(1));
        assert_eq!((sim.grid().rows(), sim.grid().cols()), (8, 10));
    }

    #[test]
    fn snapshot_counts_generations_from_one() {
        let mut sim = small();
        assert_eq!(sim.snapshot().display_generation(), 1);
        sim.step();
        let snap = sim.snapshot();
        assert_eq!(snap.generation, 1);
        assert_eq!(snap.display_generation(), 2);
        assert_eq!(snap.interval_text, "300");
    }
}
