use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier shared by enemies, companions, gates and story bosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    E,
    D,
    C,
    B,
    A,
    S,
}

impl Rank {
    pub fn all() -> [Rank; 6] {
        [Rank::E, Rank::D, Rank::C, Rank::B, Rank::A, Rank::S]
    }

    pub fn letter(&self) -> &'static str {
        match self {
            Rank::E => "E",
            Rank::D => "D",
            Rank::C => "C",
            Rank::B => "B",
            Rank::A => "A",
            Rank::S => "S",
        }
    }

    pub fn parse(input: &str) -> Option<Rank> {
        let upper = input.trim().to_ascii_uppercase();
        Rank::all().into_iter().find(|rank| rank.letter() == upper)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Creature family, fixed when an enemy template is defined.
///
/// Extracted shadows are named after the family instead of inspecting the
/// enemy's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyFamily {
    Goblin,
    Orc,
    Knight,
    Bear,
    #[default]
    Beast,
}

impl EnemyFamily {
    /// Shadow name prefix for families with a dedicated soldier type.
    pub fn shadow_prefix(&self) -> Option<&'static str> {
        match self {
            EnemyFamily::Goblin => Some("Shadow Goblin"),
            EnemyFamily::Orc => Some("Shadow Orc"),
            EnemyFamily::Knight => Some("Shadow Knight"),
            EnemyFamily::Bear => Some("Shadow Bear"),
            EnemyFamily::Beast => None,
        }
    }
}

/// A single opponent, scoped to one encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub rank: Rank,
    pub max_hp: u32,
    /// Signed so overkill damage stays visible until victory is resolved.
    pub current_hp: i64,
    pub attack: u32,
    pub description: String,
    pub is_boss: bool,
    #[serde(default)]
    pub family: EnemyFamily,
}

impl Enemy {
    pub fn new(name: impl Into<String>, rank: Rank, max_hp: u32, attack: u32) -> Self {
        Self {
            name: name.into(),
            rank,
            max_hp,
            current_hp: max_hp as i64,
            attack,
            description: String::new(),
            is_boss: false,
            family: EnemyFamily::Beast,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_family(mut self, family: EnemyFamily) -> Self {
        self.family = family;
        self
    }

    pub fn as_boss(mut self) -> Self {
        self.is_boss = true;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp -= amount as i64;
    }

    /// HP for display, never below zero.
    pub fn display_hp(&self) -> u32 {
        self.current_hp.max(0) as u32
    }
}

/// The fight currently in progress. `chapter` is set for story encounters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub enemy: Enemy,
    pub chapter: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(Rank::E < Rank::D);
        assert!(Rank::A < Rank::S);
    }

    #[test]
    fn test_rank_parse() {
        assert_eq!(Rank::parse("s"), Some(Rank::S));
        assert_eq!(Rank::parse("C"), Some(Rank::C));
        assert_eq!(Rank::parse("Z"), None);
    }

    #[test]
    fn test_enemy_overkill_keeps_negative_hp() {
        let mut enemy = Enemy::new("Goblin", Rank::E, 50, 8);
        enemy.take_damage(60);
        assert_eq!(enemy.current_hp, -10);
        assert!(!enemy.is_alive());
        assert_eq!(enemy.display_hp(), 0);
    }

    #[test]
    fn test_family_prefix() {
        assert_eq!(EnemyFamily::Goblin.shadow_prefix(), Some("Shadow Goblin"));
        assert_eq!(EnemyFamily::Beast.shadow_prefix(), None);
    }
}
