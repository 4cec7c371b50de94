//! Turn resolution: player actions, the enemy counter-attack, victory and
//! defeat.

use super::math::{self, EnemyStrike};
use super::types::{Encounter, Enemy};
use crate::character::player::Player;
use crate::character::progression::grant_exp;
use crate::character::skills::SkillEffect;
use crate::companions::logic::story_chapter_rewards;
use crate::core::constants::*;
use crate::core::events::GameEvent;
use crate::core::rejection::Rejection;
use crate::economy::items::{equipped_bonus, ItemType};
use rand::seq::SliceRandom;
use rand::Rng;

/// Whether the fight goes on after a full turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Continue,
    Victory,
}

/// Basic attack.
pub fn player_attack(player: &Player, enemy: &mut Enemy, rng: &mut impl Rng) -> Vec<GameEvent> {
    let result = math::calculate_player_attack(player, 1.0, rng);
    enemy.take_damage(result.damage);

    let mut events = vec![GameEvent::PlayerAttack {
        enemy_name: enemy.name.clone(),
        damage: result.damage,
        was_crit: result.is_crit,
    }];

    // Flavour only; the bonus is already in the damage.
    if math::roll_chance(COMPANION_ASSIST_LOG_CHANCE, rng) {
        if let Some(companion) = player.companions.choose(rng) {
            events.push(GameEvent::CompanionAssist {
                companion_name: companion.name.clone(),
            });
        }
    }
    events
}

/// Use a skill from the combat menu.
///
/// Rejected before any MP is spent when the skill is unknown, is a summon,
/// or costs more MP than the player has.
pub fn use_skill(
    player: &mut Player,
    enemy: &mut Enemy,
    skill_id: &str,
    rng: &mut impl Rng,
) -> Result<Vec<GameEvent>, Rejection> {
    let skill = player.skill(skill_id).cloned().ok_or(Rejection::SkillNotFound)?;
    if !skill.usable_in_combat() {
        return Err(Rejection::SkillNotUsableInCombat);
    }
    if player.mp < skill.mp_cost {
        return Err(Rejection::InsufficientMana);
    }
    player.mp -= skill.mp_cost;

    let event = if let Some(mult) = skill.damage_mult {
        let result = math::calculate_player_attack(player, mult, rng);
        enemy.take_damage(result.damage);
        GameEvent::SkillStrike {
            skill_name: skill.name,
            damage: result.damage,
            was_crit: result.is_crit,
        }
    } else if skill.effect == Some(SkillEffect::Heal) {
        let amount = player.max_hp * HEAL_SKILL_PERCENT / 100;
        player.heal(amount);
        GameEvent::SkillHeal {
            skill_name: skill.name,
            amount,
        }
    } else {
        GameEvent::SkillActivated {
            skill_name: skill.name,
        }
    };
    Ok(vec![event])
}

/// The enemy's single counter-action. Applies defeat inline.
pub fn enemy_turn(player: &mut Player, enemy: &Enemy, rng: &mut impl Rng) -> Vec<GameEvent> {
    if !enemy.is_alive() {
        return Vec::new();
    }

    match math::calculate_enemy_strike(player, enemy.attack, rng) {
        EnemyStrike::Dodged => vec![GameEvent::Dodged {
            enemy_name: enemy.name.clone(),
        }],
        EnemyStrike::Hit { damage } => {
            let mut events = vec![GameEvent::EnemyAttack {
                enemy_name: enemy.name.clone(),
                damage,
                armor_bonus: equipped_bonus(&player.inventory, ItemType::Armor),
            }];
            let remaining = player.hp as i64 - damage as i64;
            if remaining <= 0 {
                events.push(apply_defeat(player));
            } else {
                player.hp = remaining as u32;
            }
            events
        }
    }
}

/// Knocked out: no death, but HP drops to 10% and EXP and gold are cut.
pub fn apply_defeat(player: &mut Player) -> GameEvent {
    let exp_before = player.current_exp;
    let gold_before = player.gold;

    player.hp = player.max_hp * DEFEAT_HP_PERCENT / 100;
    player.current_exp = exp_before * DEFEAT_EXP_KEEP_PERCENT / 100;
    player.gold = gold_before * DEFEAT_GOLD_KEEP_PERCENT / 100;

    tracing::debug!(hp = player.hp, "player defeated");
    GameEvent::PlayerDefeated {
        hp_left: player.hp,
        exp_lost: exp_before - player.current_exp,
        gold_lost: gold_before - player.gold,
    }
}

/// Rewards for beating the encounter's enemy, plus story advancement when the
/// encounter was the player's current chapter.
pub fn resolve_victory(player: &mut Player, encounter: &Encounter) -> Vec<GameEvent> {
    let enemy = &encounter.enemy;
    let reward = math::victory_reward(enemy.rank, enemy.is_boss);
    grant_exp(player, reward.exp);
    player.gold = player.gold.saturating_add(reward.gold);

    let mut events = vec![GameEvent::EnemyDefeated {
        enemy_name: enemy.name.clone(),
        exp: reward.exp,
        gold: reward.gold,
        is_boss: enemy.is_boss,
    }];

    if let Some(chapter) = encounter.chapter {
        if chapter == player.story_stage {
            player.story_stage += 1;
            events.push(GameEvent::ChapterCleared { chapter });
            events.extend(story_chapter_rewards(player, chapter));
        }
    }
    events
}

/// Closes a turn after the player's action: victory if the enemy fell,
/// otherwise the enemy strikes back once.
pub fn conclude_turn(
    player: &mut Player,
    encounter: &Encounter,
    rng: &mut impl Rng,
) -> (Vec<GameEvent>, TurnOutcome) {
    if encounter.enemy.is_alive() {
        (enemy_turn(player, &encounter.enemy, rng), TurnOutcome::Continue)
    } else {
        (resolve_victory(player, encounter), TurnOutcome::Victory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::skills;
    use crate::character::stats::StatType;
    use crate::combat::types::Rank;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn goblin() -> Enemy {
        Enemy::new("Goblin", Rank::E, 50, 8)
    }

    fn no_dodge_player() -> Player {
        let mut player = Player::new("Test");
        player.stats.set(StatType::Agility, 0);
        player
    }

    #[test]
    fn test_three_basic_attacks_kill_goblin() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let player = Player::new("Test");
            let mut enemy = goblin();
            for _ in 0..3 {
                player_attack(&player, &mut enemy, &mut rng);
            }
            assert!(!enemy.is_alive());
        }
    }

    #[test]
    fn test_skill_rejected_without_mana() {
        let mut player = Player::new("Test");
        player.learn_skill(skills::vital_strike());
        player.mp = 10;
        let mut enemy = goblin();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(
            use_skill(&mut player, &mut enemy, skills::VITAL_STRIKE_ID, &mut rng),
            Err(Rejection::InsufficientMana)
        );
        assert_eq!(player.mp, 10);
        assert_eq!(enemy.current_hp, 50);
    }

    #[test]
    fn test_offensive_skill_spends_mana_and_hits_harder() {
        let mut player = Player::new("Test");
        player.stats.set(StatType::Sense, 0);
        player.learn_skill(skills::vital_strike());
        let mut enemy = Enemy::new("Stone Golem", Rank::D, 300, 15);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let events = use_skill(&mut player, &mut enemy, skills::VITAL_STRIKE_ID, &mut rng).unwrap();
        assert_eq!(player.mp, 35);
        match &events[0] {
            GameEvent::SkillStrike { damage, .. } => assert!((48..=72).contains(damage)),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_summon_skill_not_usable_in_combat() {
        let mut player = Player::new("Test");
        player.learn_skill(skills::shadow_extraction());
        player.mp = 200;
        let mut enemy = goblin();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            use_skill(&mut player, &mut enemy, skills::SHADOW_EXTRACTION_ID, &mut rng),
            Err(Rejection::SkillNotUsableInCombat)
        );
        assert_eq!(player.mp, 200);
    }

    #[test]
    fn test_heal_skill_restores_forty_percent() {
        let mut player = Player::new("Test");
        let mut heal = skills::sprint();
        heal.id = "mend".to_string();
        heal.effect = Some(SkillEffect::Heal);
        player.learn_skill(heal);
        player.hp = 10;
        let mut enemy = goblin();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        use_skill(&mut player, &mut enemy, "mend", &mut rng).unwrap();
        assert_eq!(player.hp, 50);
    }

    #[test]
    fn test_sprint_just_activates() {
        let mut player = Player::new("Test");
        let mut enemy = goblin();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let events = use_skill(&mut player, &mut enemy, skills::SPRINT_ID, &mut rng).unwrap();
        assert!(matches!(events[0], GameEvent::SkillActivated { .. }));
        assert_eq!(enemy.current_hp, 50);
        assert_eq!(player.mp, 45);
    }

    #[test]
    fn test_enemy_hit_reduces_hp() {
        let mut player = no_dodge_player();
        let enemy = Enemy::new("Hob Goblin", Rank::D, 150, 25);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        enemy_turn(&mut player, &enemy, &mut rng);
        // 25 - 8 defense
        assert_eq!(player.hp, 83);
    }

    #[test]
    fn test_overkill_defeat_penalty() {
        let mut player = no_dodge_player();
        player.hp = 3;
        player.current_exp = 91;
        player.gold = 1005;
        let enemy = Enemy::new("Giant Spider", Rank::C, 350, 16);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let events = enemy_turn(&mut player, &enemy, &mut rng);
        assert_eq!(player.hp, 10);
        assert_eq!(player.current_exp, 45);
        assert_eq!(player.gold, 804);
        assert_eq!(player.level, 1);
        assert_eq!(
            events[1],
            GameEvent::PlayerDefeated {
                hp_left: 10,
                exp_lost: 46,
                gold_lost: 201
            }
        );
    }

    #[test]
    fn test_dead_enemy_does_not_strike() {
        let mut player = no_dodge_player();
        let mut enemy = goblin();
        enemy.take_damage(60);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(enemy_turn(&mut player, &enemy, &mut rng).is_empty());
        assert_eq!(player.hp, 100);
    }

    #[test]
    fn test_victory_rewards_and_story_advance() {
        let mut player = Player::new("Test");
        let boss = Enemy::new("Blue Venom-Fang Kasaka", Rank::C, 800, 60).as_boss();
        let encounter = Encounter {
            enemy: boss,
            chapter: Some(0),
        };

        let events = resolve_victory(&mut player, &encounter);
        assert_eq!(player.current_exp, 450);
        assert_eq!(player.gold, 5_000);
        assert_eq!(player.story_stage, 1);
        assert!(events.contains(&GameEvent::ChapterCleared { chapter: 0 }));
    }

    #[test]
    fn test_replayed_chapter_does_not_advance() {
        let mut player = Player::new("Test");
        player.story_stage = 2;
        let encounter = Encounter {
            enemy: Enemy::new("Kasaka", Rank::C, 800, 60).as_boss(),
            chapter: Some(0),
        };
        resolve_victory(&mut player, &encounter);
        assert_eq!(player.story_stage, 2);
    }

    #[test]
    fn test_conclude_turn_outcomes() {
        let mut player = no_dodge_player();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut encounter = Encounter {
            enemy: goblin(),
            chapter: None,
        };

        let (_, outcome) = conclude_turn(&mut player, &encounter, &mut rng);
        assert_eq!(outcome, TurnOutcome::Continue);
        assert_eq!(player.hp, 99);

        encounter.enemy.take_damage(50);
        let (events, outcome) = conclude_turn(&mut player, &encounter, &mut rng);
        assert_eq!(outcome, TurnOutcome::Victory);
        assert!(matches!(events[0], GameEvent::EnemyDefeated { .. }));
        assert_eq!(player.gold, 100);
    }
}
