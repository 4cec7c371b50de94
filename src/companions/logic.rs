//! Shadow extraction and story-granted companions.

use super::types::{beru, igris, iron, Companion};
use crate::character::player::{Job, Player};
use crate::character::progression::unlock_shadow_extraction;
use crate::character::skills::SHADOW_EXTRACTION_ID;
use crate::combat::types::Enemy;
use crate::core::constants::*;
use crate::core::events::GameEvent;
use crate::core::rejection::Rejection;
use crate::economy::items::random_uuid;
use rand::Rng;

/// Title that comes with the job change after the Knight Commander quest.
pub const JOB_CHANGE_TITLE: &str = "Shadow Monarch";

/// Extraction success chance in percent. Unclamped: INT 120+ always succeeds.
pub fn extraction_chance(intelligence: u32) -> f64 {
    EXTRACTION_BASE_CHANCE + intelligence as f64 * EXTRACTION_CHANCE_PER_INTELLIGENCE
}

/// Name of the shadow soldier raised from an enemy.
pub fn shadow_name_for(enemy: &Enemy) -> String {
    match enemy.family.shadow_prefix() {
        Some(prefix) => format!("{} Soldier", prefix),
        None => {
            let first_word = enemy.name.split_whitespace().next().unwrap_or("Nameless");
            format!("Shadow {} Soldier", first_word)
        }
    }
}

/// The companion an extraction of this enemy produces.
pub fn shadow_from(enemy: &Enemy, rng: &mut impl Rng) -> Companion {
    Companion::shadow(
        &format!("shadow_{}", random_uuid(rng)),
        &shadow_name_for(enemy),
        enemy.rank,
        &format!("The shadow of {}", enemy.name),
        (enemy.attack as f64 * SHADOW_ATTACK_RATIO).floor() as u32,
    )
}

/// One extraction attempt on a defeated enemy.
///
/// MP is spent whether or not the roll succeeds. Callers enforce the
/// one-attempt-per-victory rule.
pub fn attempt_extraction(
    player: &mut Player,
    enemy: &Enemy,
    rng: &mut impl Rng,
) -> Result<Vec<GameEvent>, Rejection> {
    let cost = player
        .skill(SHADOW_EXTRACTION_ID)
        .map(|skill| skill.mp_cost)
        .ok_or(Rejection::ExtractionSkillMissing)?;
    if player.mp < cost {
        return Err(Rejection::ExtractionManaShort);
    }

    player.mp -= cost;
    let mut events = vec![GameEvent::ExtractionAttempted];

    let roll = rng.gen_range(0.0..100.0);
    if roll < extraction_chance(player.stats.intelligence()) {
        let shadow = shadow_from(enemy, rng);
        tracing::debug!(shadow = %shadow.name, roll, "extraction succeeded");
        events.push(GameEvent::ExtractionSucceeded {
            companion_name: shadow.name.clone(),
        });
        player.companions.push(shadow);
    } else {
        events.push(GameEvent::ExtractionFailed);
    }
    Ok(events)
}

/// Adds a companion unless one with the same id is already in the party.
fn recruit(player: &mut Player, companion: Companion) -> Vec<GameEvent> {
    if player.has_companion(&companion.id) {
        return Vec::new();
    }
    let name = companion.name.clone();
    player.companions.push(companion);
    vec![GameEvent::CompanionJoined { name }]
}

/// One-time rewards for clearing a story chapter.
pub fn story_chapter_rewards(player: &mut Player, chapter: usize) -> Vec<GameEvent> {
    match chapter {
        1 => {
            player.job = Job::Necromancer;
            player.title = JOB_CHANGE_TITLE.to_string();
            let mut events = vec![GameEvent::JobChanged {
                job: player.job,
                title: player.title.clone(),
            }];
            events.extend(recruit(player, igris()));
            events.extend(unlock_shadow_extraction(player));
            events
        }
        2 => recruit(player, iron()),
        4 => recruit(player, beru()),
        _ => Vec::new(),
    }
}
