//! Offline content generation from the static tables.

use super::tables::{boss_fallback_stats, enemy_templates, BOSS_FALLBACK_DESCRIPTION};
use super::{ContentError, ContentProvider};
use crate::combat::types::{Enemy, Rank};
use crate::core::constants::{ENEMY_VARIANCE_MAX, ENEMY_VARIANCE_MIN};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// Deterministic given the RNG; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalContent;

impl LocalContent {
    pub fn new() -> Self {
        Self
    }

    pub fn dungeon_entry(&self, rank: Rank, theme: Option<&str>) -> String {
        let atmosphere = match theme {
            Some(theme) => format!("The cold air of the {} brushes your skin.", theme),
            None => "Thick darkness surrounds you.".to_string(),
        };
        format!(
            "You step through the {}-rank gate. {} You sense monsters lurking somewhere.",
            rank, atmosphere
        )
    }

    pub fn story_encounter(&self, boss_name: &str) -> String {
        format!("The legendary monster {} has appeared!", boss_name)
    }

    /// Random template for the rank, with HP and attack scaled together.
    pub fn enemy(&self, rank: Rank, fixed_name: Option<&str>, rng: &mut dyn RngCore) -> Enemy {
        if let Some(name) = fixed_name {
            let (hp, attack) = boss_fallback_stats(rank);
            return Enemy::new(name, rank, hp, attack)
                .with_description(BOSS_FALLBACK_DESCRIPTION)
                .as_boss();
        }

        let templates = enemy_templates(rank);
        let Some(template) = templates.choose(rng) else {
            return Enemy::new("Shadow Beast", rank, 100, 10);
        };
        let variance = rng.gen_range(ENEMY_VARIANCE_MIN..ENEMY_VARIANCE_MAX);
        let max_hp = (template.max_hp as f64 * variance).floor() as u32;
        let attack = (template.attack as f64 * variance).floor() as u32;

        let enemy = Enemy::new(template.name, rank, max_hp, attack)
            .with_description(template.description)
            .with_family(template.family);
        if template.is_boss {
            enemy.as_boss()
        } else {
            enemy
        }
    }
}

impl ContentProvider for LocalContent {
    fn describe_dungeon_entry(
        &self,
        rank: Rank,
        theme: Option<&str>,
        _rng: &mut dyn RngCore,
    ) -> Result<String, ContentError> {
        Ok(self.dungeon_entry(rank, theme))
    }

    fn generate_enemy(
        &self,
        rank: Rank,
        fixed_name: Option<&str>,
        rng: &mut dyn RngCore,
    ) -> Result<Enemy, ContentError> {
        Ok(self.enemy(rank, fixed_name, rng))
    }

    fn describe_story_encounter(
        &self,
        _title: &str,
        boss_name: &str,
        _rng: &mut dyn RngCore,
    ) -> Result<String, ContentError> {
        Ok(self.story_encounter(boss_name))
    }
}
