// driver.rs - Async host that runs a controller on a tokio task
//
// For hosts without a frame loop of their own (services, headless runs).
// A GUI that repaints every frame can poll a `Controller` directly instead.

use crate::controller::Controller;
use crate::error::EngineError;
use crate::simulation::Snapshot;
use log::{debug, info};
use rand::Rng;
use std::time::Instant;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Intents accepted by a running engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ToggleCell { row: usize, col: usize },
    Start,
    Stop,
    ToggleRunning,
    Reset,
    SetConfiguredInterval(String),
    CommitInterval,
    Shutdown,
}

/// Cloneable handle for sending intents and reading snapshots.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Snapshot>,
}

impl EngineHandle {
    pub fn send(&self, command: Command) -> Result<(), EngineError> {
        self.commands.send(command)?;
        Ok(())
    }

    pub fn toggle_cell(&self, row: usize, col: usize) -> Result<(), EngineError> {
        self.send(Command::ToggleCell { row, col })
    }

    pub fn start(&self) -> Result<(), EngineError> {
        self.send(Command::Start)
    }

    pub fn stop(&self) -> Result<(), EngineError> {
        self.send(Command::Stop)
    }

    pub fn toggle_running(&self) -> Result<(), EngineError> {
        self.send(Command::ToggleRunning)
    }

    pub fn reset(&self) -> Result<(), EngineError> {
        self.send(Command::Reset)
    }

    pub fn set_configured_interval(&self, raw: impl Into<String>) -> Result<(), EngineError> {
        self.send(Command::SetConfiguredInterval(raw.into()))
    }

    pub fn commit_interval(&self) -> Result<(), EngineError> {
        self.send(Command::CommitInterval)
    }

    pub fn shutdown(&self) -> Result<(), EngineError> {
        self.send(Command::Shutdown)
    }

    /// Latest published state.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that wakes on every published state change.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }
}

/// Moves the controller onto its own task.
///
/// The task ends on `Command::Shutdown` or once every handle is dropped.
pub fn spawn<R>(controller: Controller<R>) -> (EngineHandle, JoinHandle<()>)
where
    R: Rng + Send + 'static,
{
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());
    let task = tokio::spawn(run(controller, command_rx, snapshot_tx));
    (EngineHandle { commands: command_tx, snapshots: snapshot_rx }, task)
}

async fn run<R: Rng>(
    mut controller: Controller<R>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<Snapshot>,
) {
    info!("engine task started");
    loop {
        let deadline = controller.next_tick();
        let wake_at = tokio::time::Instant::from_std(deadline.unwrap_or_else(now));

        tokio::select! {
            command = commands.recv() => match command {
                Some(Command::Shutdown) | None => break,
                Some(command) => apply(&mut controller, command),
            },
            _ = tokio::time::sleep_until(wake_at), if deadline.is_some() => {
                if !controller.poll(now()) {
                    continue;
                }
            }
        }

        snapshots.send_replace(controller.snapshot());
    }
    info!("engine task stopped at generation {}", controller.snapshot().generation);
}

fn apply<R: Rng>(controller: &mut Controller<R>, command: Command) {
    debug!("engine command {command:?}");
    let now = now();
    match command {
        Command::ToggleCell { row, col } => controller.toggle_cell(row, col),
        Command::Start => controller.start(now),
        Command::Stop => controller.stop(now),
        Command::ToggleRunning => {
            controller.toggle_running(now);
        }
        Command::Reset => controller.reset(now),
        Command::SetConfiguredInterval(raw) => {
            // rejected text only clears the error, the snapshot still changes
            let _ = controller.set_configured_interval(&raw);
        }
        Command::CommitInterval => {
            // a rejected commit is reported through the snapshot's last_error
            let _ = controller.commit_interval(now);
        }
        Command::Shutdown => {}
    }
}

// Follows tokio's clock so paused test time drives the controller too
fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}
