use crate::core::constants::{BASE_STAT_VALUE, NUM_STATS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatType {
    Strength,
    Agility,
    Sense,
    Vitality,
    Intelligence,
}

impl StatType {
    pub fn all() -> [StatType; NUM_STATS] {
        [
            StatType::Strength,
            StatType::Agility,
            StatType::Sense,
            StatType::Vitality,
            StatType::Intelligence,
        ]
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            StatType::Strength => "STR",
            StatType::Agility => "AGI",
            StatType::Sense => "SNS",
            StatType::Vitality => "VIT",
            StatType::Intelligence => "INT",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            StatType::Strength => 0,
            StatType::Agility => 1,
            StatType::Sense => 2,
            StatType::Vitality => 3,
            StatType::Intelligence => 4,
        }
    }

    /// Parses a stat from its full name or abbreviation, case-insensitively.
    pub fn parse(input: &str) -> Option<StatType> {
        let lowered = input.trim().to_ascii_lowercase();
        StatType::all().into_iter().find(|stat| {
            lowered == stat.abbrev().to_ascii_lowercase()
                || lowered == format!("{:?}", stat).to_ascii_lowercase()
        })
    }
}

/// The five hunter stats. All start at 10 and only ever grow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    values: [u32; NUM_STATS],
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    pub fn new() -> Self {
        Self {
            values: [BASE_STAT_VALUE; NUM_STATS],
        }
    }

    pub fn get(&self, stat: StatType) -> u32 {
        self.values[stat.index()]
    }

    pub fn set(&mut self, stat: StatType, value: u32) {
        self.values[stat.index()] = value;
    }

    pub fn increment(&mut self, stat: StatType) {
        self.values[stat.index()] = self.values[stat.index()].saturating_add(1);
    }

    pub fn strength(&self) -> u32 {
        self.get(StatType::Strength)
    }

    pub fn agility(&self) -> u32 {
        self.get(StatType::Agility)
    }

    pub fn sense(&self) -> u32 {
        self.get(StatType::Sense)
    }

    pub fn vitality(&self) -> u32 {
        self.get(StatType::Vitality)
    }

    pub fn intelligence(&self) -> u32 {
        self.get(StatType::Intelligence)
    }
}
