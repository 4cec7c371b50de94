//! Headless balance simulator.
//!
//! Plays many seeded sessions with a scripted policy through the same
//! [`Session`](crate::core::Session) reducer the game uses, and summarises
//! how far each run progressed.

mod config;
mod policy;
mod report;
mod runner;

pub use config::SimConfig;
pub use policy::next_action;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
