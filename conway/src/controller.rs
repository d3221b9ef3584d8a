// controller.rs - Simulation plus the timer that drives it

use crate::error::IntervalError;
use crate::interval::GenerationInterval;
use crate::simulation::{Simulation, Snapshot};
use crate::timer::Ticker;
use log::debug;
use rand::Rng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Owns the simulation and its generation timer.
///
/// Every intent that changes the run state or the active interval re-arms or
/// cancels the timer, so a new interval applies from the next firing on.
#[derive(Debug, Clone)]
pub struct Controller<R = StdRng> {
    sim: Simulation<R>,
    ticker: Ticker,
}

impl Default for Controller<StdRng> {
    fn default() -> Self {
        Self::new(Simulation::new())
    }
}

impl<R: Rng> Controller<R> {
    pub fn new(sim: Simulation<R>) -> Self {
        let mut controller = Self { sim, ticker: Ticker::new() };
        // a simulation handed over already running starts ticking right away
        controller.rearm(Instant::now());
        controller
    }

    pub fn simulation(&self) -> &Simulation<R> {
        &self.sim
    }

    pub fn snapshot(&self) -> Snapshot {
        self.sim.snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.sim.is_running()
    }

    /// Steps once if the timer is due. Returns true when a generation passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.sim.is_running() || !self.ticker.poll(now) {
            return false;
        }
        self.sim.step();
        true
    }

    pub fn next_tick(&self) -> Option<Instant> {
        self.ticker.deadline()
    }

    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.remaining(now)
    }

    /// Manual single step; the timer schedule is left alone.
    pub fn step(&mut self) {
        self.sim.step();
    }

    pub fn start(&mut self, now: Instant) {
        if self.sim.start() {
            self.rearm(now);
        }
    }

    pub fn stop(&mut self, now: Instant) {
        if self.sim.stop() {
            self.rearm(now);
        }
    }

    pub fn toggle_running(&mut self, now: Instant) -> bool {
        let running = self.sim.toggle_running();
        self.rearm(now);
        running
    }

    pub fn reset(&mut self, now: Instant) {
        self.sim.reset();
        self.rearm(now);
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        self.sim.toggle_cell(row, col);
    }

    pub fn set_configured_interval(&mut self, raw: &str) -> Result<(), IntervalError> {
        self.sim.set_configured_interval(raw)
    }

    pub fn commit_interval(&mut self, now: Instant) -> Result<GenerationInterval, IntervalError> {
        let interval = self.sim.commit_interval()?;
        self.rearm(now);
        Ok(interval)
    }

    fn rearm(&mut self, now: Instant) {
        if self.sim.is_running() {
            let period = self.sim.active_interval().as_duration();
            self.ticker.arm(now, period);
            debug!("next generation in {period:?}");
        } else if self.ticker.is_armed() {
            self.ticker.cancel();
            debug!("generation timer cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::grid::Grid;

    const MS: Duration = Duration::from_millis(1);

    fn blinker_controller() -> Controller {
        let sim = Simulation::seeded(SimulationConfig::with_dimensions(5, 5), 0)
            .unwrap()
            .with_grid(Grid::from_live_cells(5, 5, &[(2, 1), (2, 2), (2, 3)]));
        Controller::new(sim)
    }

    #[test]
    fn stopped_controller_never_steps() {
        let mut ctl = blinker_controller();
        let t0 = Instant::now();
        assert!(!ctl.poll(t0 + MS * 10_000));
        assert_eq!(ctl.snapshot().generation, 0);
        assert_eq!(ctl.next_tick(), None);
    }

    #[test]
    fn running_controller_steps_once_per_interval() {
        let mut ctl = blinker_controller();
        let t0 = Instant::now();
        ctl.start(t0);

        assert!(!ctl.poll(t0 + MS * 299));
        assert!(ctl.poll(t0 + MS * 300));
        assert!(!ctl.poll(t0 + MS * 300));
        assert!(ctl.poll(t0 + MS * 600));
        assert_eq!(ctl.snapshot().generation, 2);
    }

    #[test]
    fn stop_cancels_pending_tick() {
        let mut ctl = blinker_controller();
        let t0 = Instant::now();
        ctl.start(t0);
        ctl.stop(t0 + MS * 100);
        assert!(!ctl.poll(t0 + MS * 1000));
        assert_eq!(ctl.time_until_next_tick(t0), None);
    }

    #[test]
    fn committed_interval_applies_from_next_firing() {
        let mut ctl = blinker_controller();
        let t0 = Instant::now();
        ctl.start(t0);
        assert!(ctl.poll(t0 + MS * 300));

        ctl.set_configured_interval("50").unwrap();
        ctl.commit_interval(t0 + MS * 400).unwrap();
        assert_eq!(ctl.next_tick(), Some(t0 + MS * 450));
        assert!(!ctl.poll(t0 + MS * 449));
        assert!(ctl.poll(t0 + MS * 450));
        assert_eq!(ctl.time_until_next_tick(t0 + MS * 460), Some(MS * 40));
    }

    #[test]
    fn rejected_interval_keeps_schedule() {
        let mut ctl = blinker_controller();
        let t0 = Instant::now();
        ctl.start(t0);
        ctl.set_configured_interval("19").unwrap();
        assert!(ctl.commit_interval(t0 + MS * 100).is_err());
        assert_eq!(ctl.next_tick(), Some(t0 + MS * 300));
        assert!(ctl.snapshot().last_error.is_some());
    }

    #[test]
    fn interval_committed_while_stopped_applies_on_start() {
        let mut ctl = blinker_controller();
        let t0 = Instant::now();
        ctl.set_configured_interval("80").unwrap();
        ctl.commit_interval(t0).unwrap();
        assert_eq!(ctl.next_tick(), None);
        assert!(!ctl.poll(t0 + MS * 1000));

        let started = t0 + MS * 1000;
        ctl.start(started);
        assert_eq!(ctl.next_tick(), Some(started + MS * 80));
        assert!(!ctl.poll(started + MS * 79));
        assert!(ctl.poll(started + MS * 80));
        assert_eq!(ctl.snapshot().generation, 1);
    }

    #[test]
    fn reset_stops_the_timer() {
        let mut ctl = blinker_controller();
        let t0 = Instant::now();
        ctl.start(t0);
        assert!(ctl.poll(t0 + MS * 300));
        ctl.reset(t0 + MS * 310);
        assert!(!ctl.is_running());
        assert_eq!(ctl.next_tick(), None);
        assert_eq!(ctl.snapshot().generation, 0);
    }

    #[test]
    fn toggled_cell_feeds_next_tick() {
        let mut ctl = Controller::new(
            Simulation::seeded(SimulationConfig::with_dimensions(4, 4), 0)
                .unwrap()
                .with_grid(Grid::from_live_cells(4, 4, &[(1, 1), (1, 2), (2, 1)])),
        );
        let t0 = Instant::now();
        ctl.start(t0);
        // completes the block, which is a still life
        ctl.toggle_cell(2, 2);
        assert!(ctl.poll(t0 + MS * 300));
        assert_eq!(
            ctl.simulation().grid(),
            &Grid::from_live_cells(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)])
        );
    }

    #[test]
    fn toggle_running_arms_and_cancels() {
        let mut ctl = blinker_controller();
        let t0 = Instant::now();
        assert!(ctl.toggle_running(t0));
        assert!(ctl.next_tick().is_some());
        assert!(!ctl.toggle_running(t0));
        assert!(ctl.next_tick().is_none());
    }
}
