//! Progression integration tests
//!
//! Level-ups, stat allocation, skill unlocks and story rewards.

use shadow_gate::character::player::{Job, Player};
use shadow_gate::character::progression::{allocate_stat, grant_exp, resolve_level_ups};
use shadow_gate::character::skills;
use shadow_gate::character::stats::StatType;
use shadow_gate::combat::logic::resolve_victory;
use shadow_gate::combat::types::{Encounter, Enemy, Rank};
use shadow_gate::core::{GameEvent, Rejection};

// ============================================================================
// Level-ups
// ============================================================================

#[test]
fn test_exact_threshold_levels_once() {
    let mut player = Player::new("Jinwoo");
    grant_exp(&mut player, 100);
    let events = resolve_level_ups(&mut player);

    assert_eq!(events[0], GameEvent::LevelUp { level: 2 });
    assert_eq!(player.level, 2);
    assert_eq!(player.current_exp, 0);
    assert_eq!(player.max_exp, 130);
    assert_eq!((player.hp, player.max_hp), (140, 140));
    assert_eq!((player.mp, player.max_mp), (80, 80));
    assert_eq!(player.stat_points, 3);
}

#[test]
fn test_multi_level_jump_applies_each_level() {
    let mut player = Player::new("Jinwoo");
    grant_exp(&mut player, 1_000);
    let events = resolve_level_ups(&mut player);

    // 100 + 130 + 169 + 219 + 284 = 902
    assert_eq!(player.level, 6);
    assert_eq!(player.current_exp, 98);
    assert_eq!(player.max_exp, 369);
    assert_eq!(player.max_hp, 300);
    assert_eq!(player.max_mp, 200);
    assert_eq!(player.stat_points, 15);
    assert!(player.has_skill(skills::VITAL_STRIKE_ID));
    assert!(player.shop_unlocked());
    assert!(events.contains(&GameEvent::ShopOpened));
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::LevelUp { .. }))
            .count(),
        5
    );
}

#[test]
fn test_below_threshold_is_noop() {
    let mut player = Player::new("Jinwoo");
    grant_exp(&mut player, 99);
    assert!(resolve_level_ups(&mut player).is_empty());
    assert_eq!(player.level, 1);
}

#[test]
fn test_skill_unlocks_at_fifteen_and_twenty() {
    let mut player = Player::new("Jinwoo");
    player.level = 14;
    player.current_exp = player.max_exp;
    resolve_level_ups(&mut player);
    assert!(player.has_skill(skills::DAGGER_THROW_ID));
    assert!(!player.has_skill(skills::SHADOW_EXTRACTION_ID));

    player.level = 19;
    player.current_exp = player.max_exp;
    resolve_level_ups(&mut player);
    assert_eq!(player.level, 20);
    assert!(player.has_skill(skills::SHADOW_EXTRACTION_ID));
}

// ============================================================================
// Stat allocation
// ============================================================================

#[test]
fn test_vitality_and_intelligence_raise_maximums_only() {
    let mut player = Player::new("Jinwoo");
    player.stat_points = 2;
    player.hp = 60;

    allocate_stat(&mut player, StatType::Vitality).unwrap();
    assert_eq!(player.stats.vitality(), 11);
    assert_eq!(player.max_hp, 110);
    assert_eq!(player.hp, 60);

    allocate_stat(&mut player, StatType::Intelligence).unwrap();
    assert_eq!(player.max_mp, 55);
    assert_eq!(player.mp, 50);

    assert_eq!(
        allocate_stat(&mut player, StatType::Strength),
        Err(Rejection::NoStatPoints)
    );
    assert_eq!(player.stats.strength(), 10);
}

// ============================================================================
// Story rewards
// ============================================================================

fn story_victory(player: &mut Player, chapter: usize, name: &str, rank: Rank) -> Vec<GameEvent> {
    let encounter = Encounter {
        enemy: Enemy::new(name, rank, 100, 10).as_boss(),
        chapter: Some(chapter),
    };
    resolve_victory(player, &encounter)
}

#[test]
fn test_knight_commander_grants_job_change() {
    let mut player = Player::new("Jinwoo");
    player.story_stage = 1;
    player.level = 12;

    let events = story_victory(&mut player, 1, "Blood-Red Igris", Rank::A);

    assert_eq!(player.story_stage, 2);
    assert_eq!(player.job, Job::Necromancer);
    assert_eq!(player.title, "Shadow Monarch");
    assert!(player.has_companion("igris"));
    assert!(player.has_skill(skills::SHADOW_EXTRACTION_ID));
    assert!(events.contains(&GameEvent::CompanionJoined {
        name: "Igris".to_string()
    }));
}

#[test]
fn test_later_chapters_recruit_iron_and_beru_once() {
    let mut player = Player::new("Jinwoo");
    player.story_stage = 2;
    story_victory(&mut player, 2, "King of the White Ghosts", Rank::A);
    assert!(player.has_companion("iron"));

    story_victory(&mut player, 3, "Demon King Baran", Rank::S);
    assert_eq!(player.story_stage, 4);
    assert_eq!(player.companions.len(), 1);

    story_victory(&mut player, 4, "Beru the Ant King", Rank::S);
    assert!(player.has_companion("beru"));
    assert_eq!(player.story_stage, 5);

    // Replaying a cleared chapter neither advances nor re-recruits.
    story_victory(&mut player, 4, "Beru the Ant King", Rank::S);
    assert_eq!(player.story_stage, 5);
    assert_eq!(player.companions.len(), 2);
}
