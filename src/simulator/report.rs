//! Simulation report generation.

use serde::Serialize;
use std::collections::BTreeMap;

/// What happened in one simulated session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub seed: u64,
    pub reached_target: bool,
    pub actions: u64,
    pub rejections: u64,
    pub final_level: u32,
    pub final_gold: u64,
    pub story_stage: usize,
    pub companions: usize,
    pub victories: u64,
    pub boss_victories: u64,
    pub defeats: u64,
    pub flees: u64,
    pub extraction_attempts: u64,
    pub extraction_successes: u64,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_completed: u32,
    pub runs_timed_out: u32,

    // Aggregated stats
    pub avg_final_level: f64,
    pub avg_final_gold: f64,
    pub avg_story_stage: f64,
    pub avg_companions: f64,
    pub avg_victories: f64,
    pub avg_defeats: f64,
    pub avg_actions: f64,
    pub extraction_rate: f64,

    // Distribution data
    pub level_distribution: BTreeMap<u32, u32>,
    pub story_distribution: BTreeMap<usize, u32>,

    pub run_stats: Vec<RunStats>,
}

fn average<F: Fn(&RunStats) -> f64>(runs: &[RunStats], f: F) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, max_actions: u64) -> Self {
        let num_runs = runs.len() as u32;
        let runs_completed = runs.iter().filter(|r| r.reached_target).count() as u32;
        let runs_timed_out = runs
            .iter()
            .filter(|r| !r.reached_target && r.actions >= max_actions)
            .count() as u32;

        let attempts: u64 = runs.iter().map(|r| r.extraction_attempts).sum();
        let successes: u64 = runs.iter().map(|r| r.extraction_successes).sum();
        let extraction_rate = if attempts > 0 {
            successes as f64 / attempts as f64
        } else {
            0.0
        };

        let mut level_distribution = BTreeMap::new();
        let mut story_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
            *story_distribution.entry(run.story_stage).or_insert(0) += 1;
        }

        Self {
            num_runs,
            runs_completed,
            runs_timed_out,
            avg_final_level: average(&runs, |r| r.final_level as f64),
            avg_final_gold: average(&runs, |r| r.final_gold as f64),
            avg_story_stage: average(&runs, |r| r.story_stage as f64),
            avg_companions: average(&runs, |r| r.companions as f64),
            avg_victories: average(&runs, |r| r.victories as f64),
            avg_defeats: average(&runs, |r| r.defeats as f64),
            avg_actions: average(&runs, |r| r.actions as f64),
            extraction_rate,
            level_distribution,
            story_distribution,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} completed, {} timed out\n\n",
            self.num_runs, self.runs_completed, self.runs_timed_out
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Level:     {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Story Stage:     {:.1}\n", self.avg_story_stage));
        report.push_str(&format!("  Avg Final Gold:      {:.0}\n", self.avg_final_gold));
        report.push_str(&format!("  Avg Actions:         {:.0}\n\n", self.avg_actions));

        report.push_str("── COMBAT ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Victories:       {:.1}\n", self.avg_victories));
        report.push_str(&format!("  Avg Defeats:         {:.1}\n", self.avg_defeats));
        report.push_str(&format!("  Avg Shadows:         {:.1}\n", self.avg_companions));
        report.push_str(&format!(
            "  Extraction Rate:     {:.1}%\n\n",
            self.extraction_rate * 100.0
        ));

        report.push_str("── STORY COMPLETION ─────────────────────────────────────────────\n");
        for (stage, count) in &self.story_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Stage {}: {:>5.1}% {}\n", stage, pct, bar));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let defeats_per_victory = self.avg_defeats / self.avg_victories.max(1.0);
        let rating = if defeats_per_victory < 0.02 {
            "TOO EASY - Hunters rarely fall"
        } else if defeats_per_victory < 0.15 {
            "GOOD - Challenging but fair"
        } else {
            "TOO HARD - Frequent defeats"
        };
        report.push_str(&format!("  Defeats/Victory: {:.3}\n", defeats_per_victory));
        report.push_str(&format!("  Rating:          {}\n", rating));

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(level: u32, story_stage: usize, attempts: u64, successes: u64) -> RunStats {
        RunStats {
            final_level: level,
            story_stage,
            extraction_attempts: attempts,
            extraction_successes: successes,
            actions: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_from_runs_averages() {
        let report = SimReport::from_runs(vec![run(10, 0, 4, 1), run(20, 2, 4, 3)], 100);
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.avg_final_level, 15.0);
        assert_eq!(report.avg_story_stage, 1.0);
        assert_eq!(report.extraction_rate, 0.5);
        assert_eq!(report.runs_timed_out, 2);
        assert_eq!(report.level_distribution.get(&10), Some(&1));
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new(), 100);
        assert_eq!(report.avg_final_level, 0.0);
        assert!(report.to_text().contains("Runs: 0 total"));
    }

    #[test]
    fn test_json_has_fields() {
        let report = SimReport::from_runs(vec![run(5, 0, 0, 0)], 100);
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value["num_runs"], 1);
        assert_eq!(value["level_distribution"]["5"], 1);
    }
}
