//! Identity sources for new assets.
//!
//! Ids are opaque to callers. Both generators issue strictly increasing
//! values for the lifetime of the generator and return `None` once the
//! id space is used up.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Source of fresh asset ids.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> Option<u64>;
}

/// Which [`IdGenerator`] a store is built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Timestamp,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Sequential => Box::new(SequentialIds::new()),
            IdStrategy::Timestamp => Box::new(TimestampIds::new()),
        }
    }
}

impl std::str::FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(IdStrategy::Sequential),
            "timestamp" => Ok(IdStrategy::Timestamp),
            other => Err(format!("unknown id strategy: {}", other)),
        }
    }
}

/// Counter starting at 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: Option<u64>,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl SequentialIds {
    pub fn new() -> Self {
        SequentialIds { next: Some(1) }
    }

    /// Start counting from `next`.
    pub fn starting_at(next: u64) -> Self {
        SequentialIds {
            next: Some(next.max(1)),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> Option<u64> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }
}

/// Wall-clock milliseconds, bumped past the last issued id when the clock
/// has not moved (or moved backwards).
#[derive(Debug, Clone, Default)]
pub struct TimestampIds {
    last: u64,
}

impl TimestampIds {
    pub fn new() -> Self {
        TimestampIds { last: 0 }
    }

    fn now_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> Option<u64> {
        let now = Self::now_millis();
        self.last = if now > self.last {
            now
        } else {
            self.last.checked_add(1)?
        };
        Some(self.last)
    }
}
