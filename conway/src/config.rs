// config.rs - Compile-time configuration for the simulation engine

use std::time::Duration;

// Grid size is fixed for the lifetime of the process
pub const ROWS: usize = 78;
pub const COLS: usize = 151;

pub const INITIAL_DENSITY: f64 = 0.3;          // Probability that a cell starts alive

pub const DEFAULT_INTERVAL_MS: i64 = 300;      // Delay between generations at startup
pub const MIN_INTERVAL_MS: i64 = 20;           // Inclusive bounds for a committed interval
pub const MAX_INTERVAL_MS: i64 = 5000;

/// Startup parameters for a [`Simulation`](crate::Simulation).
///
/// `Default` is the production configuration; tests build smaller grids.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    pub density: f64,
    pub interval_ms: i64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            density: INITIAL_DENSITY,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl SimulationConfig {
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self { rows, cols, ..Self::default() }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

pub(crate) fn millis(ms: i64) -> Duration {
    Duration::from_millis(ms.max(0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_fixed_constants() {
        let config = SimulationConfig::default();
        assert_eq!(config.rows, 78);
        assert_eq!(config.cols, 151);
        assert_eq!(config.interval_ms, 300);
        assert!((config.density - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.cell_count(), 78 * 151);
    }

    #[test]
    fn default_interval_is_within_bounds() {
        assert!((MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&DEFAULT_INTERVAL_MS));
    }

    #[test]
    fn with_dimensions_keeps_other_defaults() {
        let config = SimulationConfig::with_dimensions(5, 7);
        assert_eq!((config.rows, config.cols), (5, 7));
        assert_eq!(config.interval_ms, DEFAULT_INTERVAL_MS);
    }
}
