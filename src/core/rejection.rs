//! Reasons an action can be turned down.
//!
//! A rejected action leaves the game state untouched; its `Display` text is
//! what the player reads in the game log.

use super::log::LogCategory;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Please enter a player name.")]
    EmptyName,

    #[error("Not enough gold. (Needed: {needed}G)")]
    InsufficientGold { needed: u64 },

    #[error("Not enough mana!")]
    InsufficientMana,

    #[error("The shop opens at level {required}.")]
    ShopLocked { required: u32 },

    #[error("That item is not in your inventory.")]
    ItemNotFound,

    #[error("That item is not in the shop catalog.")]
    UnknownItem,

    #[error("That item cannot be equipped.")]
    NotEquippable,

    #[error("That item cannot be used.")]
    NotUsable,

    #[error("HP is already full.")]
    HpAlreadyFull,

    #[error("MP is already full.")]
    MpAlreadyFull,

    #[error("No stat points remaining.")]
    NoStatPoints,

    #[error("You do not know that skill.")]
    SkillNotFound,

    #[error("That upgrade cannot be applied to this skill.")]
    UpgradeNotApplicable,

    #[error("Invalid code.")]
    UnknownCode,

    #[error("{0}")]
    AlreadyOwned(String),

    #[error("There is no enemy to fight.")]
    NotInCombat,

    #[error("There is no battlefield to leave.")]
    NotOnBattlefield,

    #[error("Wait until the current event finishes.")]
    Busy,

    #[error("Level too low. (Required level: {required})")]
    LevelTooLow { required: u32 },

    #[error("Complete the previous story first.")]
    ChapterLocked,

    #[error("That chapter has already been cleared.")]
    ChapterCompleted,

    #[error("No such story chapter.")]
    UnknownChapter,

    #[error("There is no fallen enemy to extract.")]
    NoExtractionTarget,

    #[error("Extraction has already been attempted.")]
    ExtractionAlreadyAttempted,

    #[error("You have not learned Shadow Extraction.")]
    ExtractionSkillMissing,

    #[error("Not enough mana to extract.")]
    ExtractionManaShort,

    #[error("That skill cannot be used in combat.")]
    SkillNotUsableInCombat,

    #[error("Not enough HP to train.")]
    TooExhausted,
}

impl Rejection {
    /// Log category used when this rejection is shown to the player.
    pub fn category(&self) -> LogCategory {
        match self {
            Rejection::InsufficientGold { .. }
            | Rejection::InsufficientMana
            | Rejection::ExtractionManaShort
            | Rejection::LevelTooLow { .. }
            | Rejection::TooExhausted => LogCategory::Danger,
            _ => LogCategory::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_details() {
        assert_eq!(
            Rejection::InsufficientGold { needed: 500 }.to_string(),
            "Not enough gold. (Needed: 500G)"
        );
        assert_eq!(
            Rejection::LevelTooLow { required: 10 }.to_string(),
            "Level too low. (Required level: 10)"
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(Rejection::InsufficientMana.category(), LogCategory::Danger);
        assert_eq!(Rejection::HpAlreadyFull.category(), LogCategory::Info);
        assert_eq!(Rejection::UnknownCode.category(), LogCategory::Info);
    }
}
