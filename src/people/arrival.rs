//! Arrival times for the nearby set

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// When each currently-nearby avatar showed up
#[derive(Debug, Clone, Default)]
pub struct ArrivalTimes {
    times: HashMap<Uuid, DateTime<Utc>>,
}

impl ArrivalTimes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tracked set with `ids`.
    /// Ids already tracked keep their time, new ones get `now`, the rest go.
    pub fn update(&mut self, ids: &[Uuid], now: DateTime<Utc>) {
        let previous = std::mem::take(&mut self.times);
        self.times = ids
            .iter()
            .map(|id| (*id, previous.get(id).copied().unwrap_or(now)))
            .collect();
    }

    pub fn get(&self, id: &Uuid) -> Option<DateTime<Utc>> {
        self.times.get(id).copied()
    }

    /// Tracked time, or `now` for ids we have never seen arrive
    pub fn arrival_or(&self, id: &Uuid, now: DateTime<Utc>) -> DateTime<Utc> {
        self.get(id).unwrap_or(now)
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}
