//! Skill upgrade economy: spend gold to raise a skill's level and improve one
//! aspect of it.

use crate::character::player::Player;
use crate::core::constants::*;
use crate::core::events::GameEvent;
use crate::core::rejection::Rejection;
use serde::{Deserialize, Serialize};

/// Which aspect of a skill an upgrade improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeKind {
    /// +0.2 damage multiplier. Offensive skills only.
    Damage,
    /// -2 MP cost, never below 1.
    Cost,
    /// -1 cooldown, never below 0.
    Cooldown,
}

impl UpgradeKind {
    pub fn all() -> [UpgradeKind; 3] {
        [UpgradeKind::Damage, UpgradeKind::Cost, UpgradeKind::Cooldown]
    }

    pub fn description(&self) -> &'static str {
        match self {
            UpgradeKind::Damage => "damage up",
            UpgradeKind::Cost => "MP cost down",
            UpgradeKind::Cooldown => "cooldown down",
        }
    }

    pub fn parse(input: &str) -> Option<UpgradeKind> {
        match input.trim().to_ascii_lowercase().as_str() {
            "damage" | "dmg" => Some(UpgradeKind::Damage),
            "cost" | "mp" => Some(UpgradeKind::Cost),
            "cooldown" | "cd" => Some(UpgradeKind::Cooldown),
            _ => None,
        }
    }
}

/// Gold needed to upgrade a skill from the given level.
pub fn upgrade_cost(skill_level: u32) -> u64 {
    SKILL_UPGRADE_BASE_COST * skill_level as u64
}

/// Adds one damage step, rounded to one decimal place.
fn raised_multiplier(mult: f64) -> f64 {
    ((mult + DAMAGE_UPGRADE_STEP) * 10.0).round() / 10.0
}

/// Upgrade a skill in place.
///
/// Rejected without any state change when the skill is unknown, the upgrade
/// would not change anything, or gold is short.
pub fn upgrade_skill(
    player: &mut Player,
    skill_id: &str,
    kind: UpgradeKind,
) -> Result<Vec<GameEvent>, Rejection> {
    let gold = player.gold;
    let skill = player
        .skills
        .iter_mut()
        .find(|s| s.id == skill_id)
        .ok_or(Rejection::SkillNotFound)?;

    let applicable = match kind {
        UpgradeKind::Damage => skill.damage_mult.is_some(),
        UpgradeKind::Cost => skill.mp_cost > MIN_SKILL_MP_COST,
        UpgradeKind::Cooldown => skill.cooldown > 0,
    };
    if !applicable {
        return Err(Rejection::UpgradeNotApplicable);
    }

    let cost = upgrade_cost(skill.level);
    if gold < cost {
        return Err(Rejection::InsufficientGold { needed: cost });
    }

    match kind {
        UpgradeKind::Damage => skill.damage_mult = skill.damage_mult.map(raised_multiplier),
        UpgradeKind::Cost => {
            skill.mp_cost = skill
                .mp_cost
                .saturating_sub(MP_COST_UPGRADE_STEP)
                .max(MIN_SKILL_MP_COST)
        }
        UpgradeKind::Cooldown => skill.cooldown = skill.cooldown.saturating_sub(1),
    }
    skill.level += 1;

    let event = GameEvent::SkillUpgraded {
        skill_name: skill.name.clone(),
        level: skill.level,
        kind,
    };
    player.gold -= cost;
    Ok(vec![event])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::skills;

    fn rich_player() -> Player {
        let mut player = Player::new("Test");
        player.gold = 10_000;
        player.learn_skill(skills::vital_strike());
        player
    }

    #[test]
    fn test_upgrade_cost_scales_with_level() {
        assert_eq!(upgrade_cost(1), 500);
        assert_eq!(upgrade_cost(4), 2000);
    }

    #[test]
    fn test_damage_upgrade_rounds_to_one_decimal() {
        let mut player = rich_player();
        for _ in 0..3 {
            upgrade_skill(&mut player, skills::VITAL_STRIKE_ID, UpgradeKind::Damage).unwrap();
        }
        let skill = player.skill(skills::VITAL_STRIKE_ID).unwrap();
        assert_eq!(skill.damage_mult, Some(2.6));
        assert_eq!(skill.level, 4);
        // 500 + 1000 + 1500
        assert_eq!(player.gold, 7_000);
    }

    #[test]
    fn test_damage_upgrade_rejected_without_multiplier() {
        let mut player = rich_player();
        let before = player.clone();
        assert_eq!(
            upgrade_skill(&mut player, skills::SPRINT_ID, UpgradeKind::Damage),
            Err(Rejection::UpgradeNotApplicable)
        );
        assert_eq!(player, before);
    }

    #[test]
    fn test_cost_upgrade_floors_at_one() {
        let mut player = rich_player();
        player.gold = 1_000_000;
        // sprint: 5 -> 3 -> 1
        upgrade_skill(&mut player, skills::SPRINT_ID, UpgradeKind::Cost).unwrap();
        upgrade_skill(&mut player, skills::SPRINT_ID, UpgradeKind::Cost).unwrap();
        assert_eq!(player.skill(skills::SPRINT_ID).unwrap().mp_cost, 1);
        assert_eq!(
            upgrade_skill(&mut player, skills::SPRINT_ID, UpgradeKind::Cost),
            Err(Rejection::UpgradeNotApplicable)
        );
    }

    #[test]
    fn test_cooldown_upgrade_floors_at_zero() {
        let mut player = rich_player();
        player.gold = 1_000_000;
        upgrade_skill(&mut player, skills::VITAL_STRIKE_ID, UpgradeKind::Cooldown).unwrap();
        upgrade_skill(&mut player, skills::VITAL_STRIKE_ID, UpgradeKind::Cooldown).unwrap();
        assert_eq!(player.skill(skills::VITAL_STRIKE_ID).unwrap().cooldown, 0);
        assert_eq!(
            upgrade_skill(&mut player, skills::VITAL_STRIKE_ID, UpgradeKind::Cooldown),
            Err(Rejection::UpgradeNotApplicable)
        );
    }

    #[test]
    fn test_insufficient_gold_leaves_skill_unchanged() {
        let mut player = rich_player();
        player.gold = 499;
        let before = player.clone();
        assert_eq!(
            upgrade_skill(&mut player, skills::VITAL_STRIKE_ID, UpgradeKind::Damage),
            Err(Rejection::InsufficientGold { needed: 500 })
        );
        assert_eq!(player, before);
    }

    #[test]
    fn test_unknown_skill_rejected() {
        let mut player = rich_player();
        assert_eq!(
            upgrade_skill(&mut player, "fireball", UpgradeKind::Damage),
            Err(Rejection::SkillNotFound)
        );
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(UpgradeKind::parse("DMG"), Some(UpgradeKind::Damage));
        assert_eq!(UpgradeKind::parse("cd"), Some(UpgradeKind::Cooldown));
        assert_eq!(UpgradeKind::parse("speed"), None);
        assert_eq!(UpgradeKind::all().len(), 3);
    }
}
