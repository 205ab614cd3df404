mod error;
mod runner;

pub use error::SimulationError;
pub use runner::{Simulation, SimulationOutcome};
