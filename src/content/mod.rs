//! Narration and enemy generation.
//!
//! A [`ContentProvider`] supplies flavour text and enemies. [`LocalContent`]
//! builds everything from the static tables; [`RemoteContent`] asks an HTTP
//! service. Wrap a provider that can fail in [`FallbackContent`] so the player
//! never sees a content error.

pub mod local;
pub mod remote;
pub mod tables;

pub use local::LocalContent;
pub use remote::RemoteContent;
pub use tables::*;

use crate::combat::types::{Enemy, Rank};
use rand::RngCore;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("could not read content response: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed content: {0}")]
    Malformed(String),
}

pub trait ContentProvider {
    fn describe_dungeon_entry(
        &self,
        rank: Rank,
        theme: Option<&str>,
        rng: &mut dyn RngCore,
    ) -> Result<String, ContentError>;

    /// A fresh enemy for the rank. `fixed_name` pins the name for story bosses.
    fn generate_enemy(
        &self,
        rank: Rank,
        fixed_name: Option<&str>,
        rng: &mut dyn RngCore,
    ) -> Result<Enemy, ContentError>;

    fn describe_story_encounter(
        &self,
        title: &str,
        boss_name: &str,
        rng: &mut dyn RngCore,
    ) -> Result<String, ContentError>;
}

/// Answers from `inner`, or from [`LocalContent`] whenever `inner` fails.
pub struct FallbackContent<P> {
    inner: P,
    local: LocalContent,
}

impl<P: ContentProvider> FallbackContent<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            local: LocalContent::new(),
        }
    }

    pub fn dungeon_entry(&self, rank: Rank, theme: Option<&str>, rng: &mut dyn RngCore) -> String {
        self.inner
            .describe_dungeon_entry(rank, theme, rng)
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "dungeon narration unavailable, using local text");
                self.local.dungeon_entry(rank, theme)
            })
    }

    pub fn enemy(&self, rank: Rank, fixed_name: Option<&str>, rng: &mut dyn RngCore) -> Enemy {
        match self.inner.generate_enemy(rank, fixed_name, rng) {
            Ok(enemy) => enemy,
            Err(err) => {
                tracing::warn!(error = %err, %rank, "enemy generation unavailable, using local tables");
                self.local.enemy(rank, fixed_name, rng)
            }
        }
    }

    pub fn story_encounter(&self, title: &str, boss_name: &str, rng: &mut dyn RngCore) -> String {
        self.inner
            .describe_story_encounter(title, boss_name, rng)
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "story narration unavailable, using local text");
                self.local.story_encounter(boss_name)
            })
    }
}

impl<P: ContentProvider> ContentProvider for FallbackContent<P> {
    fn describe_dungeon_entry(
        &self,
        rank: Rank,
        theme: Option<&str>,
        rng: &mut dyn RngCore,
    ) -> Result<String, ContentError> {
        Ok(self.dungeon_entry(rank, theme, rng))
    }

    fn generate_enemy(
        &self,
        rank: Rank,
        fixed_name: Option<&str>,
        rng: &mut dyn RngCore,
    ) -> Result<Enemy, ContentError> {
        Ok(self.enemy(rank, fixed_name, rng))
    }

    fn describe_story_encounter(
        &self,
        title: &str,
        boss_name: &str,
        rng: &mut dyn RngCore,
    ) -> Result<String, ContentError> {
        Ok(self.story_encounter(title, boss_name, rng))
    }
}

impl<P: ContentProvider + ?Sized> ContentProvider for Box<P> {
    fn describe_dungeon_entry(
        &self,
        rank: Rank,
        theme: Option<&str>,
        rng: &mut dyn RngCore,
    ) -> Result<String, ContentError> {
        (**self).describe_dungeon_entry(rank, theme, rng)
    }

    fn generate_enemy(
        &self,
        rank: Rank,
        fixed_name: Option<&str>,
        rng: &mut dyn RngCore,
    ) -> Result<Enemy, ContentError> {
        (**self).generate_enemy(rank, fixed_name, rng)
    }

    fn describe_story_encounter(
        &self,
        title: &str,
        boss_name: &str,
        rng: &mut dyn RngCore,
    ) -> Result<String, ContentError> {
        (**self).describe_story_encounter(title, boss_name, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct Broken;

    impl ContentProvider for Broken {
        fn describe_dungeon_entry(
            &self,
            _rank: Rank,
            _theme: Option<&str>,
            _rng: &mut dyn RngCore,
        ) -> Result<String, ContentError> {
            Err(ContentError::Malformed("offline".into()))
        }

        fn generate_enemy(
            &self,
            _rank: Rank,
            _fixed_name: Option<&str>,
            _rng: &mut dyn RngCore,
        ) -> Result<Enemy, ContentError> {
            Err(ContentError::Malformed("offline".into()))
        }

        fn describe_story_encounter(
            &self,
            _title: &str,
            _boss_name: &str,
            _rng: &mut dyn RngCore,
        ) -> Result<String, ContentError> {
            Err(ContentError::Malformed("offline".into()))
        }
    }

    #[test]
    fn test_fallback_substitutes_local_content() {
        let content = FallbackContent::new(Broken);
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let text = content
            .describe_dungeon_entry(Rank::D, Some("Goblin Forest"), &mut rng)
            .unwrap();
        assert!(text.contains("Goblin Forest"));

        let enemy = content.generate_enemy(Rank::D, None, &mut rng).unwrap();
        assert_eq!(enemy.rank, Rank::D);

        let story = content
            .describe_story_encounter("Demon Castle", "Demon King Baran", &mut rng)
            .unwrap();
        assert!(story.contains("Demon King Baran"));
    }

    #[test]
    fn test_fallback_passes_through_success() {
        let content = FallbackContent::new(LocalContent::new());
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let boss = content
            .generate_enemy(Rank::S, Some("Beru the Ant King"), &mut rng)
            .unwrap();
        assert_eq!(boss.max_hp, 20000);
    }
}
