//! Shop, inventory and skill upgrades.

pub mod inventory;
pub mod items;
pub mod shop;
pub mod skill_upgrade;

pub use inventory::*;
pub use items::*;
pub use shop::*;
pub use skill_upgrade::*;
