//! Session configuration.

use super::constants::GAME_LOG_CAPACITY;

pub const SEED_ENV: &str = "SHADOW_GATE_SEED";
pub const CONTENT_URL_ENV: &str = "SHADOW_GATE_CONTENT_URL";

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Pause after dungeon narration before the enemy appears (ms)
    pub intro_delay_ms: u64,

    /// Pause after story narration before the boss appears (ms)
    pub story_intro_delay_ms: u64,

    /// Pause between the player's action and the enemy's counter (ms)
    pub enemy_turn_delay_ms: u64,

    /// Pause between the extraction chant and its result (ms)
    pub extraction_delay_ms: u64,

    /// Number of game log entries kept
    pub log_capacity: usize,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Content service endpoint (None = local tables only)
    pub content_url: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            intro_delay_ms: 1500,
            story_intro_delay_ms: 2000,
            enemy_turn_delay_ms: 800,
            extraction_delay_ms: 1500,
            log_capacity: GAME_LOG_CAPACITY,
            seed: None,
            content_url: None,
        }
    }
}

impl GameConfig {
    /// Defaults overlaid with `SHADOW_GATE_SEED` and `SHADOW_GATE_CONTENT_URL`.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var(SEED_ENV).ok().as_deref(),
            std::env::var(CONTENT_URL_ENV).ok().as_deref(),
        )
    }

    /// Apply raw override values. An unparsable seed is ignored.
    pub fn with_overrides(mut self, seed: Option<&str>, content_url: Option<&str>) -> Self {
        if let Some(raw) = seed {
            match raw.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => tracing::warn!(value = raw, "ignoring invalid {}", SEED_ENV),
            }
        }
        if let Some(url) = content_url.map(str::trim).filter(|url| !url.is_empty()) {
            self.content_url = Some(url.to_string());
        }
        self
    }

    /// Seeded config with every pacing delay removed. Used by tests and the
    /// simulator.
    pub fn instant(seed: u64) -> Self {
        Self {
            intro_delay_ms: 0,
            story_intro_delay_ms: 0,
            enemy_turn_delay_ms: 0,
            extraction_delay_ms: 0,
            seed: Some(seed),
            ..Default::default()
        }
    }
}
