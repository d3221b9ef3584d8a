// lib.rs - Conway's Game of Life simulation engine
//
// Grid and transition rule, the simulation state a front end drives, and the
// timer that steps it while running.

pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod grid;
pub mod interval;
pub mod rules;
pub mod simulation;
pub mod timer;

pub use config::{COLS, ROWS, SimulationConfig};
pub use controller::Controller;
pub use driver::{Command, EngineHandle};
pub use error::{EngineError, IntervalError};
pub use grid::Grid;
pub use interval::{GenerationInterval, IntervalInput};
pub use rules::{next_state, step_grid};
pub use simulation::{Simulation, Snapshot};
pub use timer::Ticker;
