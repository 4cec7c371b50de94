//! Session, state, events and the game log.

pub mod admin;
pub mod config;
pub mod constants;
pub mod events;
pub mod game_state;
pub mod log;
pub mod rejection;
pub mod session;

pub use config::GameConfig;
pub use constants::*;
pub use events::GameEvent;
pub use game_state::*;
pub use log::*;
pub use rejection::Rejection;
pub use session::{Action, Session};
