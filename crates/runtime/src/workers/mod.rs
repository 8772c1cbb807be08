//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the battle and is the only task that mutates it.

mod simulation;

pub use simulation::{Command, SimulationWorker};
