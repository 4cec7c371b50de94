//! Shadow Gate - turn-based hunter RPG engine
//!
//! The library holds every rule of the game. Front ends build a
//! [`core::Session`], feed it [`core::Action`]s and render the game log.

pub mod build_info;
pub mod character;
pub mod combat;
pub mod companions;
pub mod content;
pub mod core;
pub mod economy;
pub mod simulator;
