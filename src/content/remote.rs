//! HTTP content service client.
//!
//! Posts a small JSON request per piece of content and expects either
//! `{"text": ...}` or an enemy object back.

use super::{ContentError, ContentProvider};
use crate::combat::types::{Enemy, EnemyFamily, Rank};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const USER_AGENT: &str = "shadow-gate";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
const UNKNOWN_ENEMY_NAME: &str = "Unknown Entity";
const UNKNOWN_ENEMY_DESCRIPTION: &str = "An unknown creature.";

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum ContentRequest<'a> {
    #[serde(rename_all = "camelCase")]
    DungeonEntry { rank: Rank, theme: Option<&'a str> },
    #[serde(rename_all = "camelCase")]
    Enemy { rank: Rank, fixed_name: Option<&'a str> },
    #[serde(rename_all = "camelCase")]
    StoryEncounter { title: &'a str, boss_name: &'a str },
}

#[derive(Debug, Deserialize)]
struct TextResponse {
    text: String,
}

/// Enemy payload. Missing fields fall back to neutral defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnemyResponse {
    name: Option<String>,
    hp: Option<u32>,
    attack: Option<u32>,
    description: Option<String>,
    #[serde(default)]
    is_boss: bool,
    #[serde(default)]
    family: EnemyFamily,
}

impl EnemyResponse {
    fn into_enemy(self, rank: Rank, fixed_name: Option<&str>) -> Enemy {
        let name = fixed_name
            .map(str::to_string)
            .or(self.name)
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_ENEMY_NAME.to_string());
        let enemy = Enemy::new(
            name,
            rank,
            self.hp.filter(|hp| *hp > 0).unwrap_or(100),
            self.attack.unwrap_or(10),
        )
        .with_description(
            self.description
                .unwrap_or_else(|| UNKNOWN_ENEMY_DESCRIPTION.to_string()),
        )
        .with_family(self.family);
        if self.is_boss {
            enemy.as_boss()
        } else {
            enemy
        }
    }
}

/// Content service reached over HTTP.
pub struct RemoteContent {
    agent: ureq::Agent,
    url: String,
}

impl RemoteContent {
    pub fn new(url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build();
        Self {
            agent,
            url: url.into(),
        }
    }

    fn post<T: serde::de::DeserializeOwned>(
        &self,
        request: &ContentRequest<'_>,
    ) -> Result<T, ContentError> {
        let response = self
            .agent
            .post(&self.url)
            .send_json(request)
            .map_err(Box::new)?;
        Ok(response.into_json()?)
    }

    fn text(&self, request: &ContentRequest<'_>) -> Result<String, ContentError> {
        let response: TextResponse = self.post(request)?;
        let text = response.text.trim();
        if text.is_empty() {
            return Err(ContentError::Malformed("empty text".into()));
        }
        Ok(text.to_string())
    }
}

impl ContentProvider for RemoteContent {
    fn describe_dungeon_entry(
        &self,
        rank: Rank,
        theme: Option<&str>,
        _rng: &mut dyn RngCore,
    ) -> Result<String, ContentError> {
        self.text(&ContentRequest::DungeonEntry { rank, theme })
    }

    fn generate_enemy(
        &self,
        rank: Rank,
        fixed_name: Option<&str>,
        _rng: &mut dyn RngCore,
    ) -> Result<Enemy, ContentError> {
        let response: EnemyResponse = self.post(&ContentRequest::Enemy { rank, fixed_name })?;
        Ok(response.into_enemy(rank, fixed_name))
    }

    fn describe_story_encounter(
        &self,
        title: &str,
        boss_name: &str,
        _rng: &mut dyn RngCore,
    ) -> Result<String, ContentError> {
        self.text(&ContentRequest::StoryEncounter { title, boss_name })
    }
}
