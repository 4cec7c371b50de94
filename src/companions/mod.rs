//! Companions: story allies and extracted shadows.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
