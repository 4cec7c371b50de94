//! Skill definitions and the skills a hunter can learn.

use serde::{Deserialize, Serialize};

pub const SPRINT_ID: &str = "sprint";
pub const VITAL_STRIKE_ID: &str = "vital_strike";
pub const DAGGER_THROW_ID: &str = "dagger_throw";
pub const SHADOW_EXTRACTION_ID: &str = "shadow_extract";
pub const IAIDO_ID: &str = "iaido";

/// Non-damage effect tag. In practice mutually exclusive with a damage multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillEffect {
    Heal,
    Summon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub mp_cost: u32,
    /// Turns. Advisory only; not enforced between uses.
    pub cooldown: u32,
    pub damage_mult: Option<f64>,
    pub effect: Option<SkillEffect>,
    pub level: u32,
}

impl Skill {
    fn new(id: &str, name: &str, description: &str, mp_cost: u32, cooldown: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            mp_cost,
            cooldown,
            damage_mult: None,
            effect: None,
            level: 1,
        }
    }

    fn with_damage(mut self, mult: f64) -> Self {
        self.damage_mult = Some(mult);
        self
    }

    fn with_effect(mut self, effect: SkillEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn is_offensive(&self) -> bool {
        self.damage_mult.is_some()
    }

    /// Summon skills are used from the victory screen, not the combat menu.
    pub fn usable_in_combat(&self) -> bool {
        self.effect != Some(SkillEffect::Summon)
    }
}

pub fn sprint() -> Skill {
    Skill::new(
        SPRINT_ID,
        "Sprint",
        "Move faster for a moment. (Raises evasion)",
        5,
        3,
    )
}

pub fn vital_strike() -> Skill {
    Skill::new(
        VITAL_STRIKE_ID,
        "Vital Strike",
        "Strike the enemy's weak point. (200% attack)",
        15,
        2,
    )
    .with_damage(2.0)
}

pub fn dagger_throw() -> Skill {
    Skill::new(
        DAGGER_THROW_ID,
        "Dagger Throw",
        "Attack the enemy from range. (150% attack)",
        20,
        1,
    )
    .with_damage(1.5)
}

pub fn shadow_extraction() -> Skill {
    Skill::new(
        SHADOW_EXTRACTION_ID,
        "Shadow Extraction",
        "Extract the shadow of a fallen enemy and raise it as a soldier.",
        100,
        0,
    )
    .with_effect(SkillEffect::Summon)
}

pub fn iaido() -> Skill {
    Skill::new(
        IAIDO_ID,
        "Iaido",
        "Cut faster than the eye can follow.",
        40,
        2,
    )
    .with_damage(3.5)
}
