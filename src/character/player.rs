use super::skills::{self, Skill};
use super::stats::Stats;
use crate::companions::types::Companion;
use crate::core::constants::*;
use crate::economy::items::InventoryEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Job {
    None,
    Necromancer,
    ShadowMonarch,
}

impl Job {
    pub fn name(&self) -> &'static str {
        match self {
            Job::None => "Jobless",
            Job::Necromancer => "Necromancer",
            Job::ShadowMonarch => "Shadow Monarch",
        }
    }

    /// Jobs that command shadows learn extraction regardless of level.
    pub fn commands_shadows(&self) -> bool {
        matches!(self, Job::Necromancer | Job::ShadowMonarch)
    }
}

/// The player aggregate. Every action produces a new version of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub level: u32,
    /// May exceed `max_exp` until level-ups are resolved.
    pub current_exp: u64,
    pub max_exp: u64,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub gold: u64,
    pub stats: Stats,
    pub stat_points: u32,
    pub job: Job,
    pub title: String,
    pub skills: Vec<Skill>,
    pub companions: Vec<Companion>,
    pub inventory: Vec<InventoryEntry>,
    /// Index of the next story chapter to clear.
    pub story_stage: usize,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: 1,
            current_exp: 0,
            max_exp: STARTING_MAX_EXP,
            hp: STARTING_MAX_HP,
            max_hp: STARTING_MAX_HP,
            mp: STARTING_MAX_MP,
            max_mp: STARTING_MAX_MP,
            gold: 0,
            stats: Stats::new(),
            stat_points: 0,
            job: Job::None,
            title: STARTING_TITLE.to_string(),
            skills: vec![skills::sprint()],
            companions: Vec::new(),
            inventory: Vec::new(),
            story_stage: 0,
        }
    }

    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn has_skill(&self, id: &str) -> bool {
        self.skill(id).is_some()
    }

    pub fn has_companion(&self, id: &str) -> bool {
        self.companions.iter().any(|c| c.id == id)
    }

    /// Appends a skill unless one with the same id is already known.
    pub fn learn_skill(&mut self, skill: Skill) -> bool {
        if self.has_skill(&skill.id) {
            return false;
        }
        self.skills.push(skill);
        true
    }

    pub fn shop_unlocked(&self) -> bool {
        self.level >= SHOP_UNLOCK_LEVEL
    }

    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    pub fn restore_mp(&mut self, amount: u32) {
        self.mp = self.mp.saturating_add(amount).min(self.max_mp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::stats::StatType;

    #[test]
    fn test_new_player_initial_values() {
        let player = Player::new("Jinwoo");
        assert_eq!(player.level, 1);
        assert_eq!(player.current_exp, 0);
        assert_eq!(player.max_exp, 100);
        assert_eq!((player.hp, player.max_hp), (100, 100));
        assert_eq!((player.mp, player.max_mp), (50, 50));
        assert_eq!(player.gold, 0);
        assert_eq!(player.stat_points, 0);
        assert_eq!(player.job, Job::None);
        assert_eq!(player.title, "E-Rank Hunter");
        assert_eq!(player.story_stage, 0);
        for stat in StatType::all() {
            assert_eq!(player.stats.get(stat), 10);
        }
    }

    #[test]
    fn test_new_player_knows_only_sprint() {
        let player = Player::new("Jinwoo");
        assert_eq!(player.skills.len(), 1);
        assert!(player.has_skill(skills::SPRINT_ID));
    }

    #[test]
    fn test_learn_skill_is_unique_by_id() {
        let mut player = Player::new("Jinwoo");
        assert!(player.learn_skill(skills::vital_strike()));
        assert!(!player.learn_skill(skills::vital_strike()));
        assert_eq!(player.skills.len(), 2);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut player = Player::new("Jinwoo");
        player.hp = 90;
        player.heal(500);
        assert_eq!(player.hp, 100);
        player.mp = 0;
        player.restore_mp(20);
        assert_eq!(player.mp, 20);
    }

    #[test]
    fn test_shadow_jobs() {
        assert!(!Job::None.commands_shadows());
        assert!(Job::Necromancer.commands_shadows());
        assert!(Job::ShadowMonarch.commands_shadows());
    }
}
