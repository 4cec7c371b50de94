//! Events produced by the game engines.
//!
//! Every engine reports what happened as a list of [`GameEvent`]s; the
//! session turns them into game log lines. Engine code never formats log
//! text itself.

use super::log::LogCategory;
use crate::character::player::Job;
use crate::character::stats::StatType;
use crate::combat::types::Rank;
use crate::economy::items::Restore;
use crate::economy::skill_upgrade::UpgradeKind;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    // ── Session ─────────────────────────────────────────────────
    Synchronized,
    Welcome { name: String },

    // ── Encounters ──────────────────────────────────────────────
    DungeonEntered { rank: Rank, narration: String },
    StoryStarted { title: String, narration: String },
    EnemyAppeared { name: String },
    Fled,
    VictoryLeft,

    // ── Combat ──────────────────────────────────────────────────
    PlayerAttack { enemy_name: String, damage: u32, was_crit: bool },
    CompanionAssist { companion_name: String },
    SkillStrike { skill_name: String, damage: u32, was_crit: bool },
    SkillHeal { skill_name: String, amount: u32 },
    SkillActivated { skill_name: String },
    EnemyAttack { enemy_name: String, damage: u32, armor_bonus: u32 },
    Dodged { enemy_name: String },
    PlayerDefeated { hp_left: u32, exp_lost: u64, gold_lost: u64 },
    EnemyDefeated { enemy_name: String, exp: u64, gold: u64, is_boss: bool },

    // ── Story ───────────────────────────────────────────────────
    ChapterCleared { chapter: usize },
    JobChanged { job: Job, title: String },
    CompanionJoined { name: String },

    // ── Progression ─────────────────────────────────────────────
    LevelUp { level: u32 },
    SkillLearned { skill_name: String },
    ShopOpened,
    StatIncreased { stat: StatType, value: u32 },

    // ── Economy ─────────────────────────────────────────────────
    ItemPurchased { name: String, price: u64 },
    Equipped { name: String },
    Unequipped { name: String },
    ItemUsed { name: String, restore: Restore, amount: u32 },
    SkillUpgraded { skill_name: String, level: u32, kind: UpgradeKind },

    // ── Shadow extraction ───────────────────────────────────────
    ExtractionAttempted,
    ExtractionSucceeded { companion_name: String },
    ExtractionFailed,

    // ── Idle ────────────────────────────────────────────────────
    Trained { exp: u64 },
    Rested { hp: u32, mp: u32 },

    // ── Admin codes ─────────────────────────────────────────────
    AdminGold { amount: u64 },
    AdminCompanion { name: String },
    AdminSkill { name: String },
}

impl GameEvent {
    /// The line this event contributes to the game log.
    pub fn log_line(&self) -> (String, LogCategory) {
        use LogCategory::*;
        match self {
            GameEvent::Synchronized => ("Synchronized with the System.".to_string(), System),
            GameEvent::Welcome { name } => (format!("Welcome, player '{}'.", name), System),
            GameEvent::DungeonEntered { narration, .. } => (narration.clone(), System),
            GameEvent::StoryStarted { title, narration } => {
                (format!("[Main Story] {} begins. {}", title, narration), Story)
            }
            GameEvent::EnemyAppeared { name } => {
                (format!("[Warning] {} has appeared!", name), Danger)
            }
            GameEvent::Fled => ("You escaped from the fight.".to_string(), Info),
            GameEvent::VictoryLeft => ("You leave the battlefield.".to_string(), Info),
            GameEvent::PlayerAttack {
                enemy_name,
                damage,
                was_crit,
            } => {
                let crit = if *was_crit { "[Critical!] " } else { "" };
                (format!("{}You dealt {} damage to {}.", crit, damage, enemy_name), Combat)
            }
            GameEvent::CompanionAssist { companion_name } => {
                (format!("{} joins the attack!", companion_name), Info)
            }
            GameEvent::SkillStrike {
                skill_name,
                damage,
                was_crit,
            } => {
                let crit = if *was_crit { " Critical!" } else { "" };
                (
                    format!("[Skill] {}! {} massive damage!{}", skill_name, damage, crit),
                    Danger,
                )
            }
            GameEvent::SkillHeal { skill_name, amount } => (
                format!("[Skill] {} used! Recovered {} HP.", skill_name, amount),
                Gain,
            ),
            GameEvent::SkillActivated { skill_name } => {
                (format!("[Skill] {} activated!", skill_name), Info)
            }
            GameEvent::EnemyAttack {
                enemy_name,
                damage,
                armor_bonus,
            } => {
                let armor = if *armor_bonus > 0 {
                    format!(" (armor -{})", armor_bonus)
                } else {
                    String::new()
                };
                (
                    format!("{} attacks! You took {} damage.{}", enemy_name, damage, armor),
                    Danger,
                )
            }
            GameEvent::Dodged { enemy_name } => (
                format!("You nimbly dodged {}'s attack!", enemy_name),
                Gain,
            ),
            GameEvent::PlayerDefeated {
                exp_lost, gold_lost, ..
            } => (
                format!(
                    "Everything goes dark... [Penalty] No level is lost, but you lose {} EXP and {} gold.",
                    exp_lost, gold_lost
                ),
                Danger,
            ),
            GameEvent::EnemyDefeated {
                enemy_name,
                exp,
                gold,
                is_boss,
            } => {
                let bonus = if *is_boss { " Boss bonus!" } else { "" };
                (
                    format!(
                        "You defeated {}! +{} EXP, +{} gold.{}",
                        enemy_name, exp, gold, bonus
                    ),
                    Gain,
                )
            }
            GameEvent::ChapterCleared { chapter } => (
                format!("[Story Complete] Chapter {} cleared!", chapter + 1),
                System,
            ),
            GameEvent::JobChanged { job, title } => (
                format!("[Job Change] You are now a {} ({}). 'Arise'...", job.name(), title),
                System,
            ),
            GameEvent::CompanionJoined { name } => {
                (format!("Shadow soldier '{}' acquired.", name), Gain)
            }
            GameEvent::LevelUp { level } => (format!("Level up! Reached Lv.{}!", level), System),
            GameEvent::SkillLearned { skill_name } => {
                (format!("[Skill Acquired] You learned '{}'.", skill_name), System)
            }
            GameEvent::ShopOpened => (
                "[Shop Unlocked] The shop is now available.".to_string(),
                System,
            ),
            GameEvent::StatIncreased { stat, value } => {
                (format!("{} increased to {}.", stat.abbrev(), value), Info)
            }
            GameEvent::ItemPurchased { name, .. } => (format!("Purchased {}.", name), Gain),
            GameEvent::Equipped { name } => (format!("Equipped {}.", name), Gain),
            GameEvent::Unequipped { name } => (format!("Unequipped {}.", name), Info),
            GameEvent::ItemUsed {
                name,
                restore,
                amount,
            } => {
                let text = match restore {
                    Restore::Full => format!("Used {}. Fully recovered!", name),
                    Restore::Hp => format!("Used {}. Recovered {} HP.", name, amount),
                    Restore::Mp => format!("Used {}. Recovered {} MP.", name, amount),
                };
                (text, Gain)
            }
            GameEvent::SkillUpgraded {
                skill_name,
                level,
                kind,
            } => (
                format!(
                    "[Skill Upgrade] {} Lv.{} ({})",
                    skill_name,
                    level,
                    kind.description()
                ),
                Gain,
            ),
            GameEvent::ExtractionAttempted => (
                "Attempting shadow extraction... \"Arise...\"".to_string(),
                System,
            ),
            GameEvent::ExtractionSucceeded { companion_name } => (
                format!("Success! {} joins the shadow army.", companion_name),
                Gain,
            ),
            GameEvent::ExtractionFailed => (
                "Extraction failed. The soul has faded away.".to_string(),
                Info,
            ),
            GameEvent::Trained { exp } => (
                format!("Daily quest complete. You feel a little stronger. (+{} EXP)", exp),
                Gain,
            ),
            GameEvent::Rested { .. } => ("You took a rest.".to_string(), Gain),
            GameEvent::AdminGold { amount } => (
                format!("[SYSTEM] Administrator verified: {} gold granted.", amount),
                Gain,
            ),
            GameEvent::AdminCompanion { name } => (
                format!("[SYSTEM] Administrator verified: shadow '{}' summoned.", name),
                Gain,
            ),
            GameEvent::AdminSkill { name } => (
                format!("[SYSTEM] Administrator verified: skill '{}' learned.", name),
                Gain,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crit_attack_line() {
        let (text, category) = GameEvent::PlayerAttack {
            enemy_name: "Goblin".to_string(),
            damage: 45,
            was_crit: true,
        }
        .log_line();
        assert_eq!(text, "[Critical!] You dealt 45 damage to Goblin.");
        assert_eq!(category, LogCategory::Combat);
    }

    #[test]
    fn test_armor_note_only_when_armored() {
        let bare = GameEvent::EnemyAttack {
            enemy_name: "Slime".to_string(),
            damage: 3,
            armor_bonus: 0,
        };
        assert!(!bare.log_line().0.contains("armor"));

        let armored = GameEvent::EnemyAttack {
            enemy_name: "Slime".to_string(),
            damage: 1,
            armor_bonus: 5,
        };
        assert!(armored.log_line().0.ends_with("(armor -5)"));
    }

    #[test]
    fn test_chapter_numbers_are_one_based() {
        let (text, _) = GameEvent::ChapterCleared { chapter: 0 }.log_line();
        assert!(text.contains("Chapter 1"));
    }
}
