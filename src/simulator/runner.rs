//! Runs scripted sessions through the real reducer.

use super::config::SimConfig;
use super::policy::next_action;
use super::report::{RunStats, SimReport};
use crate::core::config::GameConfig;
use crate::core::events::GameEvent;
use crate::core::session::Session;

const SIM_PLAYER_NAME: &str = "Simulated Hunter";
/// Consecutive rejections after which a run is considered stuck.
const MAX_CONSECUTIVE_REJECTIONS: u32 = 50;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let base_seed = config.seed.unwrap_or_else(rand::random);
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = base_seed.wrapping_add(run_idx as u64);
        let stats = simulate_single_run(config, seed);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} (seed={}) - Level {}, Story {}, Victories {}, Defeats {}, Shadows {}",
                run_idx + 1,
                config.num_runs,
                seed,
                stats.final_level,
                stats.story_stage,
                stats.victories,
                stats.defeats,
                stats.companions
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs, config.max_actions_per_run)
}

/// Play one seeded session until the target level or the action limit.
pub fn simulate_single_run(config: &SimConfig, seed: u64) -> RunStats {
    let mut stats = RunStats {
        seed,
        ..Default::default()
    };
    let Ok(mut session) = Session::start(SIM_PLAYER_NAME, GameConfig::instant(seed)) else {
        return stats;
    };

    let mut consecutive_rejections = 0;
    while stats.actions < config.max_actions_per_run {
        if session.player().level >= config.target_level {
            stats.reached_target = true;
            break;
        }

        let action = next_action(session.state());
        stats.actions += 1;
        match session.dispatch(action) {
            Ok(events) => {
                consecutive_rejections = 0;
                tally(&mut stats, &events);
            }
            Err(rejection) => {
                stats.rejections += 1;
                consecutive_rejections += 1;
                if consecutive_rejections >= MAX_CONSECUTIVE_REJECTIONS {
                    tracing::warn!(seed, %rejection, "simulated run stuck");
                    break;
                }
            }
        }
    }

    let player = session.player();
    stats.final_level = player.level;
    stats.final_gold = player.gold;
    stats.story_stage = player.story_stage;
    stats.companions = player.companions.len();
    stats
}

fn tally(stats: &mut RunStats, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::EnemyDefeated { is_boss, .. } => {
                stats.victories += 1;
                if *is_boss {
                    stats.boss_victories += 1;
                }
            }
            GameEvent::PlayerDefeated { .. } => stats.defeats += 1,
            GameEvent::Fled => stats.flees += 1,
            GameEvent::ExtractionAttempted => stats.extraction_attempts += 1,
            GameEvent::ExtractionSucceeded { .. } => stats.extraction_successes += 1,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_run() {
        let config = SimConfig::quick(11);
        let a = simulate_single_run(&config, 11);
        let b = simulate_single_run(&config, 11);
        assert_eq!(a.final_level, b.final_level);
        assert_eq!(a.victories, b.victories);
        assert_eq!(a.actions, b.actions);
    }

    #[test]
    fn test_runs_make_progress() {
        let report = run_simulation(&SimConfig::quick(3));
        assert_eq!(report.num_runs, 5);
        assert!(report.avg_final_level > 1.0);
        assert!(report.avg_victories > 0.0);
    }

    #[test]
    fn test_action_limit_respected() {
        let config = SimConfig {
            max_actions_per_run: 25,
            ..SimConfig::quick(5)
        };
        let stats = simulate_single_run(&config, 5);
        assert!(stats.actions <= 25);
        assert!(!stats.reached_target);
    }
}
