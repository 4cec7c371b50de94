//! The scripted player used by the simulator.

use crate::character::player::Player;
use crate::character::stats::StatType;
use crate::combat::types::Rank;
use crate::content::{dungeon_gates, story_chapter};
use crate::core::game_state::{GameState, Phase};
use crate::core::session::Action;
use crate::economy::items::Restore;

/// Levels above a chapter's requirement before the policy attempts it.
const STORY_LEVEL_MARGIN: u32 = 10;
const POTION_ID: &str = "hp_potion_m";
const POTION_STOCK: u32 = 3;

/// Gate rank matching the hunter's level.
pub fn rank_for_level(level: u32) -> Rank {
    match level {
        0..=4 => Rank::E,
        5..=11 => Rank::D,
        12..=24 => Rank::C,
        25..=39 => Rank::B,
        40..=59 => Rank::A,
        _ => Rank::S,
    }
}

fn hp_percent(player: &Player) -> u32 {
    player.hp * 100 / player.max_hp.max(1)
}

fn hp_potion_count(player: &Player) -> u32 {
    player
        .inventory
        .iter()
        .filter(|entry| entry.item.restore == Some(Restore::Hp))
        .map(|entry| entry.count)
        .sum()
}

fn hp_potion_id(player: &Player) -> Option<String> {
    player
        .inventory
        .iter()
        .find(|entry| entry.item.restore == Some(Restore::Hp) && entry.count > 0)
        .map(|entry| entry.item.id.clone())
}

/// Strongest damage skill the hunter can pay for right now.
fn best_affordable_skill(player: &Player) -> Option<String> {
    player
        .skills
        .iter()
        .filter(|skill| skill.is_offensive() && skill.mp_cost <= player.mp)
        .max_by(|a, b| {
            let a = a.damage_mult.unwrap_or(0.0);
            let b = b.damage_mult.unwrap_or(0.0);
            a.total_cmp(&b)
        })
        .map(|skill| skill.id.clone())
}

fn can_extract(player: &Player) -> bool {
    player
        .skill(crate::character::skills::SHADOW_EXTRACTION_ID)
        .is_some_and(|skill| player.mp >= skill.mp_cost)
}

/// Picks the policy's next action for the given state.
pub fn next_action(state: &GameState) -> Action {
    let player = &state.player;
    match &state.phase {
        Phase::Intro { .. } => Action::Engage,
        Phase::Combat(_) => {
            if hp_percent(player) < 30 {
                if let Some(item_id) = hp_potion_id(player) {
                    return Action::UseItem { item_id };
                }
                if hp_percent(player) < 15 {
                    return Action::Flee;
                }
            }
            match best_affordable_skill(player) {
                Some(skill_id) => Action::UseSkill { skill_id },
                None => Action::Attack,
            }
        }
        Phase::Victory {
            extraction_attempted,
            ..
        } => {
            if !extraction_attempted && can_extract(player) {
                Action::Extract
            } else {
                Action::LeaveVictory
            }
        }
        Phase::Idle => idle_action(player),
    }
}

fn idle_action(player: &Player) -> Action {
    if player.stat_points > 0 {
        let stat = if player.stats.strength() <= player.stats.vitality() {
            StatType::Strength
        } else {
            StatType::Vitality
        };
        return Action::AllocateStat(stat);
    }
    if hp_percent(player) < 60 {
        return Action::Rest;
    }
    if player.shop_unlocked()
        && hp_potion_count(player) < POTION_STOCK
        && player.gold >= 3 * 300
    {
        return Action::Buy {
            item_id: POTION_ID.to_string(),
        };
    }
    if let Some(chapter) = story_chapter(player.story_stage) {
        if player.level >= chapter.required_level + STORY_LEVEL_MARGIN {
            return Action::StartStory {
                chapter: chapter.id,
            };
        }
    }

    let rank = rank_for_level(player.level);
    let theme = dungeon_gates()
        .into_iter()
        .find(|gate| gate.rank == rank)
        .map(|gate| gate.theme.to_string());
    Action::EnterDungeon { rank, theme }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::types::{Encounter, Enemy};

    #[test]
    fn test_rank_for_level() {
        assert_eq!(rank_for_level(1), Rank::E);
        assert_eq!(rank_for_level(5), Rank::D);
        assert_eq!(rank_for_level(30), Rank::B);
        assert_eq!(rank_for_level(99), Rank::S);
    }

    #[test]
    fn test_idle_spends_points_first() {
        let mut state = GameState::new(Player::new("Sim"));
        state.player.stat_points = 3;
        assert_eq!(next_action(&state), Action::AllocateStat(StatType::Strength));
    }

    #[test]
    fn test_idle_enters_matching_gate() {
        let state = GameState::new(Player::new("Sim"));
        assert_eq!(
            next_action(&state),
            Action::EnterDungeon {
                rank: Rank::E,
                theme: Some("Underground Waterway".to_string())
            }
        );
    }

    #[test]
    fn test_low_hp_flees_without_potions() {
        let mut state = GameState::new(Player::new("Sim"));
        state.player.hp = 10;
        state.player.mp = 0;
        state.phase = Phase::Combat(Encounter {
            enemy: Enemy::new("Goblin", Rank::E, 50, 8),
            chapter: None,
        });
        assert_eq!(next_action(&state), Action::Flee);
    }

    #[test]
    fn test_victory_leaves_without_extraction_skill() {
        let mut state = GameState::new(Player::new("Sim"));
        state.phase = Phase::Victory {
            defeated: Enemy::new("Goblin", Rank::E, 50, 8),
            extraction_attempted: false,
        };
        assert_eq!(next_action(&state), Action::LeaveVictory);
    }
}
