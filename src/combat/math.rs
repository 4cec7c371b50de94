//! Pure combat formulas.
//!
//! These functions calculate outcomes without touching game state. Both the
//! session and the balance simulator go through them.

use crate::character::player::Player;
use crate::companions::types::total_attack_bonus;
use crate::combat::types::Rank;
use crate::core::constants::*;
use crate::economy::items::{equipped_bonus, ItemType};
use rand::Rng;

/// Result of a player attack calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackResult {
    /// Damage dealt (after crit multiplier if applicable).
    pub damage: u32,
    /// Whether this attack was a critical hit.
    pub is_crit: bool,
}

/// Outcome of an enemy's attack on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyStrike {
    Dodged,
    Hit { damage: u32 },
}

/// Pre-variance attack: 2×STR + AGI + companion bonuses + equipped weapon bonuses.
pub fn base_attack(player: &Player) -> u32 {
    STRENGTH_DAMAGE_WEIGHT * player.stats.strength()
        + AGILITY_DAMAGE_WEIGHT * player.stats.agility()
        + total_attack_bonus(&player.companions)
        + equipped_bonus(&player.inventory, ItemType::Weapon)
}

/// Crit chance as a fraction. Not clamped: SENSE 100+ always crits.
pub fn crit_chance(sense: u32) -> f64 {
    sense as f64 * CRIT_CHANCE_PER_SENSE
}

/// Defense: 0.8×VIT + equipped armor bonuses.
pub fn defense(player: &Player) -> f64 {
    player.stats.vitality() as f64 * DEFENSE_PER_VITALITY
        + equipped_bonus(&player.inventory, ItemType::Armor) as f64
}

/// Dodge chance as a fraction, capped at 50%.
pub fn dodge_chance(agility: u32) -> f64 {
    (agility as f64 * DODGE_CHANCE_PER_AGILITY).min(DODGE_CHANCE_CAP)
}

/// Damage formula with all random inputs supplied.
///
/// `base × variance × multiplier` is floored, then a crit multiplies the
/// floored value by 1.5 and floors again.
pub fn damage_from_rolls(base: u32, variance: f64, multiplier: f64, is_crit: bool) -> u32 {
    let mut damage = (base as f64 * variance * multiplier).floor().max(0.0);
    if is_crit {
        damage = (damage * CRIT_MULTIPLIER).floor();
    }
    damage as u32
}

/// Calculate player attack damage with variance and crit rolls.
///
/// `multiplier` is 1.0 for a basic attack and the skill's damage multiplier
/// for offensive skills.
pub fn calculate_player_attack(player: &Player, multiplier: f64, rng: &mut impl Rng) -> AttackResult {
    let variance = rng.gen_range(DAMAGE_VARIANCE_MIN..DAMAGE_VARIANCE_MAX);
    let is_crit = roll_chance(crit_chance(player.stats.sense()), rng);
    AttackResult {
        damage: damage_from_rolls(base_attack(player), variance, multiplier, is_crit),
        is_crit,
    }
}

/// Damage the player takes from a hit that was not dodged. Always at least 1.
pub fn damage_taken(enemy_attack: u32, defense: f64) -> u32 {
    let raw = (enemy_attack as f64 - defense).floor();
    if raw < MIN_ENEMY_DAMAGE as f64 {
        MIN_ENEMY_DAMAGE
    } else {
        raw as u32
    }
}

/// Roll the enemy's attack: dodge first, then defense-reduced damage.
pub fn calculate_enemy_strike(player: &Player, enemy_attack: u32, rng: &mut impl Rng) -> EnemyStrike {
    if roll_chance(dodge_chance(player.stats.agility()), rng) {
        return EnemyStrike::Dodged;
    }
    EnemyStrike::Hit {
        damage: damage_taken(enemy_attack, defense(player)),
    }
}

/// Experience and gold for a defeated enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub exp: u64,
    pub gold: u64,
}

/// Base reward for the rank, boosted for bosses.
pub fn victory_reward(rank: Rank, is_boss: bool) -> Reward {
    let (exp, gold) = match rank {
        Rank::E => (20, 100),
        Rank::D => (50, 300),
        Rank::C => (150, 1_000),
        Rank::B => (500, 5_000),
        Rank::A => (2_000, 20_000),
        Rank::S => (10_000, 100_000),
    };
    if is_boss {
        Reward {
            exp: exp * BOSS_EXP_MULTIPLIER,
            gold: gold * BOSS_GOLD_MULTIPLIER,
        }
    } else {
        Reward { exp, gold }
    }
}

/// Roll a uniform [0, 1) value against a probability.
pub fn roll_chance(chance: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < chance
}
