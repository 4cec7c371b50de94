//! Experience, level-ups, stat allocation and skill unlocks.

use super::player::Player;
use super::skills;
use super::stats::StatType;
use crate::core::constants::*;
use crate::core::events::GameEvent;
use crate::core::rejection::Rejection;

/// Next max EXP after a level-up.
pub fn next_max_exp(max_exp: u64) -> u64 {
    (max_exp as f64 * MAX_EXP_GROWTH).floor() as u64
}

/// Max HP gained on a level-up for the given vitality.
pub fn hp_growth(vitality: u32) -> u32 {
    LEVEL_UP_HP_BASE + LEVEL_UP_HP_PER_VITALITY * vitality
}

/// Max MP gained on a level-up for the given intelligence.
pub fn mp_growth(intelligence: u32) -> u32 {
    LEVEL_UP_MP_BASE + LEVEL_UP_MP_PER_INTELLIGENCE * intelligence
}

/// Applies exactly one level-up if the EXP threshold has been crossed.
/// Returns the events for it, or an empty list when below the threshold.
pub fn level_up_once(player: &mut Player) -> Vec<GameEvent> {
    if player.current_exp < player.max_exp {
        return Vec::new();
    }

    player.current_exp -= player.max_exp;
    player.level += 1;
    player.max_exp = next_max_exp(player.max_exp);

    player.max_hp += hp_growth(player.stats.vitality());
    player.hp = player.max_hp;
    player.max_mp += mp_growth(player.stats.intelligence());
    player.mp = player.max_mp;
    player.stat_points += LEVEL_UP_STAT_POINTS;

    let mut events = unlock_skills_for_level(player);
    events.insert(
        0,
        GameEvent::LevelUp {
            level: player.level,
        },
    );
    events
}

/// Resolves every pending level-up, one level at a time, until the player's
/// EXP is below the threshold again. Runs after every action.
pub fn resolve_level_ups(player: &mut Player) -> Vec<GameEvent> {
    let mut events = Vec::new();
    loop {
        let step = level_up_once(player);
        if step.is_empty() {
            break;
        }
        events.extend(step);
    }
    if !events.is_empty() {
        tracing::debug!(level = player.level, "level-ups resolved");
    }
    events
}

/// Skills granted when reaching the player's current level.
pub fn unlock_skills_for_level(player: &mut Player) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if player.level == VITAL_STRIKE_LEVEL && player.learn_skill(skills::vital_strike()) {
        events.push(GameEvent::SkillLearned {
            skill_name: skills::vital_strike().name,
        });
        events.push(GameEvent::ShopOpened);
    }

    if player.level == DAGGER_THROW_LEVEL && player.learn_skill(skills::dagger_throw()) {
        events.push(GameEvent::SkillLearned {
            skill_name: skills::dagger_throw().name,
        });
    }

    events.extend(unlock_shadow_extraction(player));
    events
}

/// Grants Shadow Extraction at level 20, or earlier for shadow-commanding jobs.
pub fn unlock_shadow_extraction(player: &mut Player) -> Vec<GameEvent> {
    let eligible = player.level >= SHADOW_EXTRACTION_LEVEL || player.job.commands_shadows();
    if eligible && player.learn_skill(skills::shadow_extraction()) {
        return vec![GameEvent::SkillLearned {
            skill_name: skills::shadow_extraction().name,
        }];
    }
    Vec::new()
}

/// Spends one stat point on the given stat.
///
/// Vitality also raises max HP by 10 and intelligence raises max MP by 5;
/// current HP/MP are left alone.
pub fn allocate_stat(player: &mut Player, stat: StatType) -> Result<Vec<GameEvent>, Rejection> {
    if player.stat_points == 0 {
        return Err(Rejection::NoStatPoints);
    }

    player.stats.increment(stat);
    player.stat_points -= 1;
    match stat {
        StatType::Vitality => player.max_hp += MAX_HP_PER_VITALITY_POINT,
        StatType::Intelligence => player.max_mp += MAX_MP_PER_INTELLIGENCE_POINT,
        _ => {}
    }

    Ok(vec![GameEvent::StatIncreased {
        stat,
        value: player.stats.get(stat),
    }])
}

/// Adds EXP without resolving level-ups; the session runs the post-step.
pub fn grant_exp(player: &mut Player, amount: u64) {
    player.current_exp = player.current_exp.saturating_add(amount);
}
