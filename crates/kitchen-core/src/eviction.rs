//! # Eviction Index
//!
//! Min-priority index over shelf-resident orders, keyed by the absolute instant
//! their freshness runs out on the shelf.
//!
//! Entries are never removed eagerly. When an order leaves the shelf through
//! pickup, discard or a move, its entry stays in the heap and goes stale. Callers
//! pass a liveness check (shelf membership) and stale entries are dropped as
//! they surface. This keeps removals O(1) at the cost of a slightly larger heap.

use crate::model::Temperature;
use chrono::{DateTime, Utc};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// One heap entry. Only the id and temperature are stored, never a copy of the
/// record's mutable fields.
#[derive(Debug, Clone)]
pub struct EvictionEntry {
    pub expires_at: DateTime<Utc>,
    pub order_id: String,
    pub temperature: Temperature,
    seq: u64,
}

impl PartialEq for EvictionEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EvictionEntry {}

impl PartialOrd for EvictionEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EvictionEntry {
    // Ties on expiry fall back to insertion order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.expires_at
            .cmp(&other.expires_at)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

#[derive(Debug, Default)]
pub struct EvictionIndex {
    heap: BinaryHeap<Reverse<EvictionEntry>>,
    next_seq: u64,
}

impl EvictionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        order_id: impl Into<String>,
        temperature: Temperature,
        expires_at: DateTime<Utc>,
    ) {
        let entry = EvictionEntry {
            expires_at,
            order_id: order_id.into(),
            temperature,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.heap.push(Reverse(entry));
    }

    /// Removes and returns the earliest entry, stale or not.
    pub fn pop(&mut self) -> Option<EvictionEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Puts a previously popped entry back with its original key.
    pub fn restore(&mut self, entry: EvictionEntry) {
        self.heap.push(Reverse(entry));
    }

    /// Pops entries until one passes `is_live`, dropping stale ones on the way.
    pub fn pop_live(&mut self, is_live: impl Fn(&EvictionEntry) -> bool) -> Option<EvictionEntry> {
        while let Some(entry) = self.pop() {
            if is_live(&entry) {
                return Some(entry);
            }
        }
        None
    }

    /// Takes the earliest live entry that is also `eligible`.
    ///
    /// Live but ineligible entries are restored unchanged. Stale entries met
    /// during the scan are dropped.
    pub fn take_first_eligible(
        &mut self,
        is_live: impl Fn(&EvictionEntry) -> bool,
        eligible: impl Fn(&EvictionEntry) -> bool,
    ) -> Option<EvictionEntry> {
        let mut skipped = Vec::new();
        let mut chosen = None;

        while let Some(entry) = self.pop_live(&is_live) {
            if eligible(&entry) {
                chosen = Some(entry);
                break;
            }
            skipped.push(entry);
        }

        for entry in skipped {
            self.restore(entry);
        }
        chosen
    }

    /// Number of entries, including stale ones.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::collections::HashSet;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(secs)
    }

    #[test]
    fn test_pop_returns_earliest_expiry() {
        let mut index = EvictionIndex::new();
        index.push("late", Temperature::Room, at(30));
        index.push("early", Temperature::Hot, at(5));
        index.push("mid", Temperature::Cold, at(10));

        let order: Vec<_> = std::iter::from_fn(|| index.pop()).map(|e| e.order_id).collect();
        assert_eq!(order, ["early", "mid", "late"]);
    }

    #[test]
    fn test_equal_expiry_pops_in_insertion_order() {
        let mut index = EvictionIndex::new();
        index.push("first", Temperature::Room, at(10));
        index.push("second", Temperature::Room, at(10));
        assert_eq!(index.pop().unwrap().order_id, "first");
        assert_eq!(index.pop().unwrap().order_id, "second");
    }

    #[test]
    fn test_pop_live_skips_stale_entries() {
        let mut index = EvictionIndex::new();
        index.push("gone", Temperature::Hot, at(1));
        index.push("here", Temperature::Hot, at(2));
        let shelf: HashSet<&str> = ["here"].into_iter().collect();

        let entry = index.pop_live(|e| shelf.contains(e.order_id.as_str())).unwrap();
        assert_eq!(entry.order_id, "here");
        assert!(index.is_empty());
    }

    #[test]
    fn test_take_first_eligible_restores_skipped_entries() {
        let mut index = EvictionIndex::new();
        index.push("room", Temperature::Room, at(1));
        index.push("stale", Temperature::Hot, at(2));
        index.push("cold", Temperature::Cold, at(3));
        index.push("hot", Temperature::Hot, at(4));
        let shelf: HashSet<&str> = ["room", "cold", "hot"].into_iter().collect();

        let chosen = index
            .take_first_eligible(
                |e| shelf.contains(e.order_id.as_str()),
                |e| e.temperature == Temperature::Hot,
            )
            .unwrap();
        assert_eq!(chosen.order_id, "hot");

        // "stale" was dropped; the two skipped entries keep their keys.
        assert_eq!(index.len(), 2);
        let room = index.pop().unwrap();
        assert_eq!((room.order_id.as_str(), room.expires_at), ("room", at(1)));
        let cold = index.pop().unwrap();
        assert_eq!((cold.order_id.as_str(), cold.expires_at), ("cold", at(3)));
    }

    #[test]
    fn test_take_first_eligible_without_candidate_keeps_live_entries() {
        let mut index = EvictionIndex::new();
        index.push("a", Temperature::Room, at(1));
        index.push("b", Temperature::Room, at(2));

        assert!(index.take_first_eligible(|_| true, |_| false).is_none());
        assert_eq!(index.len(), 2);
        assert_eq!(index.pop().unwrap().order_id, "a");
    }
}
