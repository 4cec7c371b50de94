//! The hunter: stats, skills and progression.

pub mod idle;
pub mod player;
pub mod progression;
pub mod skills;
pub mod stats;

pub use player::*;
pub use progression::*;
pub use skills::*;
pub use stats::*;
