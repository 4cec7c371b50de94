//! Combat resolution integration tests
//!
//! Drives the combat engine through the public library API with seeded RNGs.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shadow_gate::character::player::Player;
use shadow_gate::character::skills;
use shadow_gate::character::stats::StatType;
use shadow_gate::combat::logic::{conclude_turn, enemy_turn, player_attack, use_skill, TurnOutcome};
use shadow_gate::combat::math::{
    calculate_enemy_strike, crit_chance, damage_from_rolls, damage_taken, dodge_chance,
    EnemyStrike,
};
use shadow_gate::combat::types::{Encounter, Enemy, Rank};
use shadow_gate::core::{GameEvent, Rejection};

fn hunter_without_dodge() -> Player {
    let mut player = Player::new("Jinwoo");
    player.stats.set(StatType::Agility, 0);
    player
}

// ============================================================================
// Damage formulas
// ============================================================================

#[test]
fn test_fresh_hunter_damage_band() {
    // base 30: floor(30 × [0.8, 1.2)) is 24..=35, a crit can reach 52.
    let player = Player::new("Jinwoo");
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..1_000 {
        let mut enemy = Enemy::new("Slime", Rank::E, 10_000, 5);
        player_attack(&player, &mut enemy, &mut rng);
        let dealt = enemy.max_hp as i64 - enemy.current_hp;
        assert!((24..=52).contains(&dealt), "dealt {}", dealt);
    }
}

#[test]
fn test_crit_floors_twice() {
    // floor(floor(30 × 1.1) × 1.5) = floor(33 × 1.5) = 49
    assert_eq!(damage_from_rolls(30, 1.1, 1.0, true), 49);
    assert_eq!(damage_from_rolls(30, 1.1, 1.0, false), 33);
}

#[test]
fn test_high_sense_always_crits() {
    assert!(crit_chance(100) >= 1.0);
    assert!((crit_chance(10) - 0.1).abs() < 1e-9);
}

#[test]
fn test_minimum_damage_taken_is_one() {
    assert_eq!(damage_taken(5, 8.0), 1);
    assert_eq!(damage_taken(8, 8.0), 1);
    assert_eq!(damage_taken(25, 8.0), 17);
}

#[test]
fn test_dodge_rate_capped_at_half() {
    assert_eq!(dodge_chance(1_000), 0.5);

    let mut player = Player::new("Jinwoo");
    player.stats.set(StatType::Agility, 1_000);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let trials = 100_000;
    let dodged = (0..trials)
        .filter(|_| calculate_enemy_strike(&player, 50, &mut rng) == EnemyStrike::Dodged)
        .count();
    let rate = dodged as f64 / trials as f64;
    assert!((0.49..=0.51).contains(&rate), "dodge rate {}", rate);
}

// ============================================================================
// Turn flow
// ============================================================================

#[test]
fn test_goblin_dies_in_three_basic_attacks() {
    let player = Player::new("Jinwoo");
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..500 {
        let mut goblin = Enemy::new("Goblin", Rank::E, 50, 8);
        for _ in 0..3 {
            player_attack(&player, &mut goblin, &mut rng);
        }
        assert!(!goblin.is_alive());
    }
}

#[test]
fn test_enemy_counter_only_while_alive() {
    let mut player = hunter_without_dodge();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut encounter = Encounter {
        enemy: Enemy::new("Hob Goblin", Rank::D, 150, 25),
        chapter: None,
    };

    let (events, outcome) = conclude_turn(&mut player, &encounter, &mut rng);
    assert_eq!(outcome, TurnOutcome::Continue);
    assert!(matches!(events[0], GameEvent::EnemyAttack { damage: 17, .. }));
    assert_eq!(player.hp, 83);

    encounter.enemy.take_damage(1_000);
    let (events, outcome) = conclude_turn(&mut player, &encounter, &mut rng);
    assert_eq!(outcome, TurnOutcome::Victory);
    assert_eq!(
        events[0],
        GameEvent::EnemyDefeated {
            enemy_name: "Hob Goblin".to_string(),
            exp: 50,
            gold: 300,
            is_boss: false
        }
    );
    assert_eq!(player.hp, 83);
}

#[test]
fn test_defeat_penalty_scenario() {
    let mut player = hunter_without_dodge();
    player.hp = 3;
    player.current_exp = 91;
    player.gold = 1_005;
    let spider = Enemy::new("Giant Spider", Rank::C, 350, 16);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    enemy_turn(&mut player, &spider, &mut rng);

    assert_eq!(player.hp, 10);
    assert_eq!(player.current_exp, 45);
    assert_eq!(player.gold, 804);
    assert_eq!(player.level, 1);
}

#[test]
fn test_boss_reward_multipliers() {
    let mut player = hunter_without_dodge();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut boss = Enemy::new("Kasaka", Rank::C, 800, 60).as_boss();
    boss.take_damage(800);
    let encounter = Encounter {
        enemy: boss,
        chapter: None,
    };
    conclude_turn(&mut player, &encounter, &mut rng);
    assert_eq!(player.current_exp, 450);
    assert_eq!(player.gold, 5_000);
}

#[test]
fn test_skill_without_mana_costs_nothing() {
    let mut player = Player::new("Jinwoo");
    player.learn_skill(skills::vital_strike());
    player.mp = 10;
    let mut enemy = Enemy::new("Goblin", Rank::E, 50, 8);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let before = player.clone();
    assert_eq!(
        use_skill(&mut player, &mut enemy, skills::VITAL_STRIKE_ID, &mut rng),
        Err(Rejection::InsufficientMana)
    );
    assert_eq!(player, before);
    assert_eq!(enemy.current_hp, 50);
}
