// src/model/queues.rs

use std::collections::BTreeMap;

/// Orders placed but not yet delivered, keyed by arrival day.
///
/// Orders sharing an arrival day are merged into one quantity. Arrivals are
/// removed as they are collected, so each order is delivered exactly once.
#[derive(Debug, Clone, Default)]
pub struct PendingOrders {
    by_arrival_day: BTreeMap<usize, u32>,
}

impl PendingOrders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items enter the pipeline, due on `arrival_day`.
    pub fn place(&mut self, arrival_day: usize, quantity: u32) {
        let due = self.by_arrival_day.entry(arrival_day).or_insert(0);
        *due = due.saturating_add(quantity);
    }

    /// Removes and returns everything due on `day`.
    /// Call this at the START of the day.
    pub fn pop_due(&mut self, day: usize) -> u32 {
        self.by_arrival_day.remove(&day).unwrap_or(0)
    }

    /// Total quantity still in transit.
    pub fn on_order(&self) -> u64 {
        self.by_arrival_day.values().map(|&q| q as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_arrival_day.is_empty()
    }

    // Number of distinct arrival days outstanding
    pub fn len(&self) -> usize {
        self.by_arrival_day.len()
    }
}
