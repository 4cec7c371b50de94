//! The player-facing game log.

use super::constants::GAME_LOG_CAPACITY;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogCategory {
    System,
    Combat,
    Info,
    Danger,
    Gain,
    Story,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Monotonic per-log sequence number.
    pub seq: u64,
    pub text: String,
    pub category: LogCategory,
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
}

/// Append-only, chronological, keeps only the most recent entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_seq: u64,
}

impl Default for GameLog {
    fn default() -> Self {
        Self::new(GAME_LOG_CAPACITY)
    }
}

impl GameLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, text: impl Into<String>, category: LogCategory) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            seq: self.next_seq,
            text: text.into(),
            category,
            timestamp: chrono::Utc::now().timestamp_millis(),
        });
        self.next_seq += 1;
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Entries appended at or after the given sequence number.
    pub fn since(&self, seq: u64) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.seq >= seq)
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sequence number the next entry will receive.
    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }
}
