//! Static content: enemy templates, dungeon gates and the story chapters.

use crate::combat::types::{EnemyFamily, Rank};

/// A monster as defined per rank, before variance is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub max_hp: u32,
    pub attack: u32,
    pub description: &'static str,
    pub family: EnemyFamily,
    pub is_boss: bool,
}

const fn template(
    name: &'static str,
    max_hp: u32,
    attack: u32,
    description: &'static str,
    family: EnemyFamily,
) -> EnemyTemplate {
    EnemyTemplate {
        name,
        max_hp,
        attack,
        description,
        family,
        is_boss: false,
    }
}

/// Every monster that can appear in a gate of the given rank.
pub fn enemy_templates(rank: Rank) -> Vec<EnemyTemplate> {
    use EnemyFamily::*;
    match rank {
        Rank::E => vec![
            template("Goblin", 50, 8, "A small, cunning monster.", Goblin),
            template("Slime", 60, 5, "A gelatinous monster.", Beast),
            template("Steel-Fang Wolf", 80, 12, "Its fangs are razor sharp.", Beast),
        ],
        Rank::D => vec![
            template("Hob Goblin", 150, 25, "Much bulkier than a common goblin.", Goblin),
            template("Stone Golem", 300, 15, "A sturdy monster made of rock.", Beast),
        ],
        Rank::C => vec![
            template("Lizardman", 400, 45, "A scaled humanoid monster.", Beast),
            template("Giant Spider", 350, 50, "An enormous venomous spider.", Beast),
        ],
        Rank::B => vec![
            template("Iron Golem", 1000, 70, "A golem forged from steel.", Beast),
            template("Yeti", 900, 80, "A monster that endures the bitter cold.", Beast),
            template("Flame Lizard", 800, 90, "Flames rise from its body.", Beast),
        ],
        Rank::A => vec![
            template("High Orc Warrior", 2000, 120, "A red-skinned high orc.", Orc),
            template(
                "White Ghost of the Snowfield",
                1800,
                130,
                "A ghost hiding in the blizzard.",
                Beast,
            ),
            template("Magma Giant", 2500, 110, "A giant born from lava.", Beast),
        ],
        Rank::S => vec![
            EnemyTemplate {
                is_boss: true,
                ..template("Dragon", 10000, 500, "The apex predator.", Beast)
            },
            EnemyTemplate {
                is_boss: true,
                ..template("Giant King", 12000, 450, "A king who tramples everything.", Beast)
            },
        ],
    }
}

/// HP and attack for a named boss when no content service supplies them.
pub fn boss_fallback_stats(rank: Rank) -> (u32, u32) {
    match rank {
        Rank::C => (800, 60),
        Rank::A => (4000, 200),
        Rank::S => (20000, 1000),
        _ => (100, 10),
    }
}

pub const BOSS_FALLBACK_DESCRIPTION: &str = "The master of this dungeon.";

/// A selectable gate in the dungeon list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DungeonGate {
    pub rank: Rank,
    pub theme: &'static str,
}

pub fn dungeon_gates() -> Vec<DungeonGate> {
    vec![
        DungeonGate { rank: Rank::E, theme: "Underground Waterway" },
        DungeonGate { rank: Rank::D, theme: "Goblin Forest" },
        DungeonGate { rank: Rank::C, theme: "Orc Swamp" },
        DungeonGate { rank: Rank::B, theme: "Golem Mine" },
        DungeonGate { rank: Rank::B, theme: "Ice Cave" },
        DungeonGate { rank: Rank::A, theme: "Snowfield (Red Gate)" },
        DungeonGate { rank: Rank::A, theme: "Volcanic Zone" },
        DungeonGate { rank: Rank::S, theme: "Jeju Island (Ant Nest)" },
    ]
}

/// One main-story boss fight. Chapters must be cleared in order.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryChapter {
    pub id: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub required_level: u32,
    pub boss_name: &'static str,
    pub boss_rank: Rank,
    pub boss_family: EnemyFamily,
}

pub fn story_chapters() -> Vec<StoryChapter> {
    vec![
        StoryChapter {
            id: 0,
            title: "Awakening: Instance Dungeon",
            description: "Hapjeong Station. Your own leveling begins.",
            required_level: 1,
            boss_name: "Blue Venom-Fang Kasaka",
            boss_rank: Rank::C,
            boss_family: EnemyFamily::Beast,
        },
        StoryChapter {
            id: 1,
            title: "Job Change Quest: Knight Commander",
            description: "A duel with the red knight hiding in the shadows.",
            required_level: 10,
            boss_name: "Blood-Red Igris",
            boss_rank: Rank::A,
            boss_family: EnemyFamily::Knight,
        },
        StoryChapter {
            id: 2,
            title: "Red Gate: Snowfield",
            description: "A desperate struggle with the white ghosts in a frozen forest.",
            required_level: 20,
            boss_name: "King of the White Ghosts",
            boss_rank: Rank::A,
            boss_family: EnemyFamily::Beast,
        },
        StoryChapter {
            id: 3,
            title: "Demon Castle",
            description: "Slay Baran, King of Demons, amid the flames of hell.",
            required_level: 35,
            boss_name: "Demon King Baran",
            boss_rank: Rank::S,
            boss_family: EnemyFamily::Beast,
        },
        StoryChapter {
            id: 4,
            title: "Jeju Island Raid",
            description: "An S-rank gate. The king of the ants awaits.",
            required_level: 50,
            boss_name: "Beru the Ant King",
            boss_rank: Rank::S,
            boss_family: EnemyFamily::Beast,
        },
    ]
}

pub fn story_chapter(id: usize) -> Option<StoryChapter> {
    story_chapters().into_iter().find(|chapter| chapter.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rank_has_templates() {
        for rank in Rank::all() {
            assert!(!enemy_templates(rank).is_empty(), "no templates for {}", rank);
        }
    }

    #[test]
    fn test_only_s_rank_templates_are_bosses() {
        for rank in Rank::all() {
            let expect_boss = rank == Rank::S;
            assert!(enemy_templates(rank).iter().all(|t| t.is_boss == expect_boss));
        }
    }

    #[test]
    fn test_goblins_are_tagged() {
        let hob = enemy_templates(Rank::D)
            .into_iter()
            .find(|t| t.name == "Hob Goblin")
            .unwrap();
        assert_eq!(hob.family, EnemyFamily::Goblin);
    }

    #[test]
    fn test_story_chapters_sequential() {
        let chapters = story_chapters();
        assert_eq!(chapters.len(), 5);
        for (i, chapter) in chapters.iter().enumerate() {
            assert_eq!(chapter.id, i);
        }
        assert!(chapters
            .windows(2)
            .all(|w| w[0].required_level < w[1].required_level));
    }

    #[test]
    fn test_boss_fallback_stats() {
        assert_eq!(boss_fallback_stats(Rank::C), (800, 60));
        assert_eq!(boss_fallback_stats(Rank::S), (20000, 1000));
        assert_eq!(boss_fallback_stats(Rank::E), (100, 10));
    }

    #[test]
    fn test_gate_list() {
        let gates = dungeon_gates();
        assert_eq!(gates.len(), 8);
        assert_eq!(gates[0].rank, Rank::E);
        assert_eq!(gates[7].theme, "Jeju Island (Ant Nest)");
    }
}
