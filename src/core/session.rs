//! The game session: one player, one log, one RNG.
//!
//! Every player intent goes through [`Session::dispatch`]. The reducer works
//! on a copy of the state and the copy is committed only when the action is
//! accepted, so a rejected action never leaves a half-applied change behind.

use super::admin::redeem_code;
use super::config::GameConfig;
use super::events::GameEvent;
use super::game_state::{GameState, Phase};
use super::log::GameLog;
use super::rejection::Rejection;
use crate::character::idle;
use crate::character::player::Player;
use crate::character::progression::{allocate_stat, resolve_level_ups};
use crate::character::stats::StatType;
use crate::combat::logic::{conclude_turn, player_attack, use_skill, TurnOutcome};
use crate::combat::types::{Encounter, Enemy, Rank};
use crate::companions::logic::attempt_extraction;
use crate::content::{
    story_chapter, ContentProvider, FallbackContent, LocalContent, RemoteContent,
};
use crate::economy::inventory::{toggle_equip, use_item};
use crate::economy::shop::purchase;
use crate::economy::skill_upgrade::{upgrade_skill, UpgradeKind};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Everything a player can ask for.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    EnterDungeon { rank: Rank, theme: Option<String> },
    StartStory { chapter: usize },
    /// Finish the intro and start the fight.
    Engage,
    Attack,
    UseSkill { skill_id: String },
    UseItem { item_id: String },
    Flee,
    Extract,
    LeaveVictory,
    Buy { item_id: String },
    /// Accepts an inventory uid or an item id.
    ToggleEquip { uid: String },
    UpgradeSkill { skill_id: String, kind: UpgradeKind },
    AllocateStat(StatType),
    Train,
    Rest,
    AdminCode(String),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::EnterDungeon { .. } => "enter_dungeon",
            Action::StartStory { .. } => "start_story",
            Action::Engage => "engage",
            Action::Attack => "attack",
            Action::UseSkill { .. } => "use_skill",
            Action::UseItem { .. } => "use_item",
            Action::Flee => "flee",
            Action::Extract => "extract",
            Action::LeaveVictory => "leave_victory",
            Action::Buy { .. } => "buy",
            Action::ToggleEquip { .. } => "toggle_equip",
            Action::UpgradeSkill { .. } => "upgrade_skill",
            Action::AllocateStat(_) => "allocate_stat",
            Action::Train => "train",
            Action::Rest => "rest",
            Action::AdminCode(_) => "admin_code",
        }
    }
}

type Content = FallbackContent<Box<dyn ContentProvider>>;

pub struct Session {
    state: GameState,
    log: GameLog,
    rng: ChaCha8Rng,
    content: Content,
    config: GameConfig,
}

impl Session {
    /// Start a session with the content source named in `config`.
    pub fn start(name: &str, config: GameConfig) -> Result<Self, Rejection> {
        let provider: Box<dyn ContentProvider> = match &config.content_url {
            Some(url) => {
                tracing::info!(url = %url, "using remote content service");
                Box::new(RemoteContent::new(url.clone()))
            }
            None => Box::new(LocalContent::new()),
        };
        Self::with_content(name, config, provider)
    }

    pub fn with_content(
        name: &str,
        config: GameConfig,
        provider: Box<dyn ContentProvider>,
    ) -> Result<Self, Rejection> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Rejection::EmptyName);
        }

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut session = Self {
            state: GameState::new(Player::new(name)),
            log: GameLog::new(config.log_capacity),
            rng,
            content: FallbackContent::new(provider),
            config,
        };
        session.record(&[
            GameEvent::Synchronized,
            GameEvent::Welcome {
                name: name.to_string(),
            },
        ]);
        tracing::info!(player = name, seed = ?session.config.seed, "session started");
        Ok(session)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn phase(&self) -> &Phase {
        &self.state.phase
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Apply one action. On success the new state is committed and the events
    /// are appended to the log; on rejection only the rejection line is logged.
    pub fn dispatch(&mut self, action: Action) -> Result<Vec<GameEvent>, Rejection> {
        tracing::debug!(action = action.name(), phase = self.state.phase.name(), "dispatch");

        let mut next = self.state.clone();
        match reduce(&mut next, action, &mut self.rng, &self.content) {
            Ok(mut events) => {
                events.extend(resolve_level_ups(&mut next.player));
                self.state = next;
                self.record(&events);
                Ok(events)
            }
            Err(rejection) => {
                tracing::debug!(%rejection, "action rejected");
                self.log.push(rejection.to_string(), rejection.category());
                Err(rejection)
            }
        }
    }

    fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            let (text, category) = event.log_line();
            self.log.push(text, category);
        }
    }
}

fn reduce(
    state: &mut GameState,
    action: Action,
    rng: &mut ChaCha8Rng,
    content: &Content,
) -> Result<Vec<GameEvent>, Rejection> {
    match action {
        Action::EnterDungeon { rank, theme } => {
            require_free(&state.phase)?;
            let narration = content.dungeon_entry(rank, theme.as_deref(), rng);
            let enemy = content.enemy(rank, None, rng);
            state.phase = Phase::Intro {
                enemy,
                chapter: None,
            };
            Ok(vec![GameEvent::DungeonEntered { rank, narration }])
        }
        Action::StartStory { chapter } => start_story(state, chapter, rng, content),
        Action::Engage => match &state.phase {
            Phase::Intro { enemy, chapter } => {
                let encounter = Encounter {
                    enemy: enemy.clone(),
                    chapter: *chapter,
                };
                let event = GameEvent::EnemyAppeared {
                    name: encounter.enemy.name.clone(),
                };
                state.phase = Phase::Combat(encounter);
                Ok(vec![event])
            }
            Phase::Combat(_) => Err(Rejection::Busy),
            _ => Err(Rejection::NotInCombat),
        },
        Action::Attack => combat_turn(state, rng, |player, enemy, rng| {
            Ok(player_attack(player, enemy, rng))
        }),
        Action::UseSkill { skill_id } => combat_turn(state, rng, |player, enemy, rng| {
            use_skill(player, enemy, &skill_id, rng)
        }),
        Action::UseItem { item_id } => {
            if state.phase.encounter().is_some() {
                combat_turn(state, rng, |player, _, _| use_item(player, &item_id))
            } else {
                use_item(&mut state.player, &item_id)
            }
        }
        Action::Flee => {
            require_combat(&state.phase)?;
            state.phase = Phase::Idle;
            Ok(vec![GameEvent::Fled])
        }
        Action::Extract => match &mut state.phase {
            Phase::Victory {
                defeated,
                extraction_attempted,
            } => {
                if *extraction_attempted {
                    return Err(Rejection::ExtractionAlreadyAttempted);
                }
                let events = attempt_extraction(&mut state.player, defeated, rng)?;
                *extraction_attempted = true;
                Ok(events)
            }
            _ => Err(Rejection::NoExtractionTarget),
        },
        Action::LeaveVictory => match state.phase {
            Phase::Victory { .. } => {
                state.phase = Phase::Idle;
                Ok(vec![GameEvent::VictoryLeft])
            }
            _ => Err(Rejection::NotOnBattlefield),
        },
        Action::Buy { item_id } => {
            require_not_engaged(&state.phase)?;
            purchase(&mut state.player, &item_id, rng)
        }
        Action::ToggleEquip { uid } => toggle_equip(&mut state.player, &uid),
        Action::UpgradeSkill { skill_id, kind } => {
            upgrade_skill(&mut state.player, &skill_id, kind)
        }
        Action::AllocateStat(stat) => allocate_stat(&mut state.player, stat),
        Action::Train => {
            require_not_engaged(&state.phase)?;
            idle::train(&mut state.player)
        }
        Action::Rest => {
            require_not_engaged(&state.phase)?;
            Ok(idle::rest(&mut state.player))
        }
        Action::AdminCode(code) => redeem_code(&mut state.player, &code),
    }
}

fn start_story(
    state: &mut GameState,
    chapter_id: usize,
    rng: &mut ChaCha8Rng,
    content: &Content,
) -> Result<Vec<GameEvent>, Rejection> {
    require_free(&state.phase)?;
    let chapter = story_chapter(chapter_id).ok_or(Rejection::UnknownChapter)?;
    let player = &state.player;
    if chapter.id < player.story_stage {
        return Err(Rejection::ChapterCompleted);
    }
    if chapter.id > player.story_stage {
        return Err(Rejection::ChapterLocked);
    }
    if player.level < chapter.required_level {
        return Err(Rejection::LevelTooLow {
            required: chapter.required_level,
        });
    }

    let narration = content.story_encounter(chapter.title, chapter.boss_name, rng);
    let boss: Enemy = content
        .enemy(chapter.boss_rank, Some(chapter.boss_name), rng)
        .with_family(chapter.boss_family)
        .as_boss();
    state.phase = Phase::Intro {
        enemy: boss,
        chapter: Some(chapter.id),
    };
    Ok(vec![GameEvent::StoryStarted {
        title: chapter.title.to_string(),
        narration,
    }])
}

/// Runs the player's half of a turn, then the enemy's half or the victory.
fn combat_turn<F>(
    state: &mut GameState,
    rng: &mut ChaCha8Rng,
    act: F,
) -> Result<Vec<GameEvent>, Rejection>
where
    F: FnOnce(&mut Player, &mut Enemy, &mut ChaCha8Rng) -> Result<Vec<GameEvent>, Rejection>,
{
    require_combat(&state.phase)?;
    let GameState { player, phase } = state;
    let Phase::Combat(encounter) = phase else {
        return Err(Rejection::NotInCombat);
    };

    let mut events = act(player, &mut encounter.enemy, rng)?;
    let (counter, outcome) = conclude_turn(player, encounter, rng);
    events.extend(counter);

    if outcome == TurnOutcome::Victory {
        let defeated = encounter.enemy.clone();
        *phase = Phase::Victory {
            defeated,
            extraction_attempted: false,
        };
    }
    Ok(events)
}

fn require_combat(phase: &Phase) -> Result<(), Rejection> {
    match phase {
        Phase::Combat(_) => Ok(()),
        Phase::Intro { .. } => Err(Rejection::Busy),
        _ => Err(Rejection::NotInCombat),
    }
}

/// New encounters start from Idle or from a finished fight.
fn require_free(phase: &Phase) -> Result<(), Rejection> {
    match phase {
        Phase::Idle | Phase::Victory { .. } => Ok(()),
        _ => Err(Rejection::Busy),
    }
}

fn require_not_engaged(phase: &Phase) -> Result<(), Rejection> {
    if phase.is_engaged() {
        Err(Rejection::Busy)
    } else {
        Ok(())
    }
}
