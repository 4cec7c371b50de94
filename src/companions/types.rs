use crate::combat::types::Rank;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanionKind {
    Hunter,
    Shadow,
}

/// A permanent ally. Contributes a flat bonus to every player attack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Companion {
    pub id: String,
    pub name: String,
    pub rank: Rank,
    pub description: String,
    pub kind: CompanionKind,
    pub attack_bonus: u32,
}

impl Companion {
    pub fn shadow(id: &str, name: &str, rank: Rank, description: &str, attack_bonus: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            rank,
            description: description.to_string(),
            kind: CompanionKind::Shadow,
            attack_bonus,
        }
    }
}

pub fn igris() -> Companion {
    Companion::shadow("igris", "Igris", Rank::A, "The blood-red knight commander", 50)
}

pub fn iron() -> Companion {
    Companion::shadow("iron", "Iron", Rank::A, "A body of steel", 40)
}

pub fn beru() -> Companion {
    Companion::shadow("beru", "Beru", Rank::S, "King of the ants", 200)
}

pub fn kamish() -> Companion {
    Companion::shadow("kamish", "Shadow Kamish", Rank::S, "The dragon of ruin", 500)
}

/// Sum of every companion's flat attack bonus.
pub fn total_attack_bonus(companions: &[Companion]) -> u32 {
    companions.iter().map(|c| c.attack_bonus).sum()
}
