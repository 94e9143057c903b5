//! Tank shooter — a fixed-tick scrolling shooter simulation.
//!
//! - `compute`: the simulation loop that owns every entity
//! - `collision`, `spawn`, `scoreboard`, `state`: the subsystems it drives
//! - `input` / `snapshot`: command stream in, read-only view out
//! - `display`: terminal renderer for snapshots

pub mod collision;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod events;
pub mod input;
pub mod scoreboard;
pub mod snapshot;
pub mod spawn;
pub mod state;

pub use compute::{Simulation, TickOutcome};
pub use config::GameConfig;
pub use error::ConfigError;
