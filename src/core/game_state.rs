//! The whole game state, as seen by the reducer.

use crate::character::player::Player;
use crate::combat::types::{Encounter, Enemy};
use serde::{Deserialize, Serialize};

/// Where the session is in the encounter cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Free to enter a gate, start a story chapter, shop, train or rest.
    Idle,
    /// Narration has been shown; the enemy is waiting to engage.
    Intro { enemy: Enemy, chapter: Option<usize> },
    /// Turn-based fight in progress.
    Combat(Encounter),
    /// The fight was won. The defeated enemy is kept for one extraction attempt.
    Victory {
        defeated: Enemy,
        extraction_attempted: bool,
    },
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Intro { .. } => "Intro",
            Phase::Combat(_) => "Combat",
            Phase::Victory { .. } => "Victory",
        }
    }

    /// Intro and combat lock out shopping and idle actions.
    pub fn is_engaged(&self) -> bool {
        matches!(self, Phase::Intro { .. } | Phase::Combat(_))
    }

    pub fn encounter(&self) -> Option<&Encounter> {
        match self {
            Phase::Combat(encounter) => Some(encounter),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub phase: Phase,
}

impl GameState {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            phase: Phase::Idle,
        }
    }
}
