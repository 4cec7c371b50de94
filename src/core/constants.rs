// Starting character
pub const BASE_STAT_VALUE: u32 = 10;
pub const NUM_STATS: usize = 5;
pub const STARTING_MAX_EXP: u64 = 100;
pub const STARTING_MAX_HP: u32 = 100;
pub const STARTING_MAX_MP: u32 = 50;
pub const STARTING_TITLE: &str = "E-Rank Hunter";

// Leveling
pub const MAX_EXP_GROWTH: f64 = 1.3;
pub const LEVEL_UP_HP_BASE: u32 = 20;
pub const LEVEL_UP_HP_PER_VITALITY: u32 = 2;
pub const LEVEL_UP_MP_BASE: u32 = 10;
pub const LEVEL_UP_MP_PER_INTELLIGENCE: u32 = 2;
pub const LEVEL_UP_STAT_POINTS: u32 = 3;
pub const MAX_HP_PER_VITALITY_POINT: u32 = 10;
pub const MAX_MP_PER_INTELLIGENCE_POINT: u32 = 5;

// Unlock levels
pub const SHOP_UNLOCK_LEVEL: u32 = 5;
pub const VITAL_STRIKE_LEVEL: u32 = 5;
pub const DAGGER_THROW_LEVEL: u32 = 15;
pub const SHADOW_EXTRACTION_LEVEL: u32 = 20;

// Player attack
pub const STRENGTH_DAMAGE_WEIGHT: u32 = 2;
pub const AGILITY_DAMAGE_WEIGHT: u32 = 1;
pub const DAMAGE_VARIANCE_MIN: f64 = 0.8;
pub const DAMAGE_VARIANCE_MAX: f64 = 1.2;
pub const CRIT_CHANCE_PER_SENSE: f64 = 0.01;
pub const CRIT_MULTIPLIER: f64 = 1.5;

// Enemy attack
pub const DEFENSE_PER_VITALITY: f64 = 0.8;
pub const DODGE_CHANCE_PER_AGILITY: f64 = 0.005;
pub const DODGE_CHANCE_CAP: f64 = 0.5;
pub const MIN_ENEMY_DAMAGE: u32 = 1;

// Victory and defeat
pub const BOSS_EXP_MULTIPLIER: u64 = 3;
pub const BOSS_GOLD_MULTIPLIER: u64 = 5;
pub const DEFEAT_HP_PERCENT: u32 = 10;
pub const DEFEAT_EXP_KEEP_PERCENT: u64 = 50;
pub const DEFEAT_GOLD_KEEP_PERCENT: u64 = 80;

// Enemy generation
pub const ENEMY_VARIANCE_MIN: f64 = 0.9;
pub const ENEMY_VARIANCE_MAX: f64 = 1.1;

// Skills
pub const HEAL_SKILL_PERCENT: u32 = 40;
pub const SKILL_UPGRADE_BASE_COST: u64 = 500;
pub const DAMAGE_UPGRADE_STEP: f64 = 0.2;
pub const MP_COST_UPGRADE_STEP: u32 = 2;
pub const MIN_SKILL_MP_COST: u32 = 1;

// Shadow extraction
pub const EXTRACTION_BASE_CHANCE: f64 = 40.0;
pub const EXTRACTION_CHANCE_PER_INTELLIGENCE: f64 = 0.5;
pub const SHADOW_ATTACK_RATIO: f64 = 0.8;

// Idle actions
pub const TRAINING_MIN_HP: u32 = 10;
pub const TRAINING_HP_COST: u32 = 5;
pub const TRAINING_BASE_EXP: u64 = 5;
pub const REST_RECOVERY_PERCENT: u32 = 50;

// Companion flavour text on basic attacks
pub const COMPANION_ASSIST_LOG_CHANCE: f64 = 0.3;

// Game log
pub const GAME_LOG_CAPACITY: usize = 50;
