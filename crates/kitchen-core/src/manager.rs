//! # Storage Manager
//!
//! Owns every resident [`OrderRecord`], the per-class membership sets, the shelf
//! [`EvictionIndex`] and the action ledger.
//!
//! ## Placement
//!
//! [`StorageManager::place_order`] walks a fixed fallback chain and stops at the
//! first step that admits the order:
//!
//! 1. **Ideal** - the class matching the order's temperature, if it has room.
//! 2. **Shelf** - the shelf at the off-ideal rate, if it has room.
//! 3. **Rebalance** - move the earliest-expiring hot/cold order off the shelf
//!    into its own ideal class (when that class has room), then retry the shelf.
//! 4. **Discard** - throw away the shelf order that expires first, then retry
//!    the shelf.
//!
//! Steps 3 and 4 each free exactly one shelf slot, so the final retry cannot
//! fail unless capacity accounting is broken. That case is reported as
//! [`KitchenError::PlacementExhausted`].
//!
//! ## Concurrency
//!
//! The manager is plain `&mut self` state with no internal locking. Share it
//! through a [`KitchenHandle`](crate::KitchenHandle), which serializes callers.
//! Time is always passed in by the caller.

use crate::error::KitchenError;
use crate::eviction::EvictionIndex;
use crate::model::{Action, ActionKind, Capacities, Order, StorageClass, Temperature};
use crate::record::OrderRecord;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use tracing::{debug, error, info, warn};

#[derive(Debug)]
pub struct StorageManager {
    capacities: Capacities,
    heater: HashSet<String>,
    cooler: HashSet<String>,
    shelf: HashSet<String>,
    records: HashMap<String, OrderRecord>,
    shelf_index: EvictionIndex,
    ledger: Vec<Action>,
}

impl StorageManager {
    /// Creates an empty kitchen. Every capacity must be at least 1.
    pub fn new(capacities: Capacities) -> Result<Self, KitchenError> {
        if let Some(class) = capacities.first_empty() {
            return Err(KitchenError::InvalidCapacity { class });
        }
        Ok(Self {
            capacities,
            heater: HashSet::new(),
            cooler: HashSet::new(),
            shelf: HashSet::new(),
            records: HashMap::new(),
            shelf_index: EvictionIndex::new(),
            ledger: Vec::new(),
        })
    }

    /// Stores a newly received order, freeing shelf space if needed.
    pub fn place_order(&mut self, order: Order, now: DateTime<Utc>) -> Result<(), KitchenError> {
        if self.records.contains_key(&order.id) {
            warn!(order_id = %order.id, "Order already resident");
            return Err(KitchenError::DuplicateOrder { order_id: order.id });
        }

        let record = OrderRecord::new(order, now);
        let ideal = record.class();
        debug!(order_id = %record.id(), temp = %record.temperature(), %ideal, "Placing");

        if self.has_room(ideal) {
            self.admit(record, ideal, now);
            return Ok(());
        }

        debug!(order_id = %record.id(), %ideal, "Ideal storage full");
        if self.has_room(StorageClass::Shelf) {
            self.admit(record, StorageClass::Shelf, now);
            return Ok(());
        }

        debug!(order_id = %record.id(), "Shelf full");
        if !self.move_one_off_shelf(now) {
            self.discard_earliest_on_shelf(now);
        }

        if self.has_room(StorageClass::Shelf) {
            self.admit(record, StorageClass::Shelf, now);
            return Ok(());
        }

        error!(
            order_id = %record.id(),
            shelf = self.shelf.len(),
            capacity = self.capacities.shelf,
            "Placement exhausted"
        );
        Err(KitchenError::PlacementExhausted {
            order_id: record.id().to_owned(),
        })
    }

    /// Hands an order to a courier, or discards it if it spoiled while waiting.
    ///
    /// Unknown ids are ignored; the order has already left the kitchen.
    pub fn pickup_order(&mut self, id: &str, now: DateTime<Utc>) {
        let Some(mut record) = self.records.remove(id) else {
            debug!(order_id = %id, "Pickup for non-resident order ignored");
            return;
        };

        let class = record.class();
        self.members_mut(class).remove(id);
        record.apply_decay(now);

        if record.is_spoiled() {
            warn!(order_id = %id, %class, "Order spoiled before pickup");
            self.log_action(now, id, ActionKind::Discard, class);
        } else {
            self.log_action(now, id, ActionKind::Pickup, class);
        }
    }

    /// The ledger in the order actions happened.
    pub fn actions(&self) -> &[Action] {
        &self.ledger
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.ledger
    }

    pub fn capacities(&self) -> Capacities {
        self.capacities
    }

    /// Number of orders currently held in `class`.
    pub fn occupancy(&self, class: StorageClass) -> usize {
        self.members(class).len()
    }

    pub fn is_resident(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn record(&self, id: &str) -> Option<&OrderRecord> {
        self.records.get(id)
    }

    fn members(&self, class: StorageClass) -> &HashSet<String> {
        match class {
            StorageClass::Heater => &self.heater,
            StorageClass::Cooler => &self.cooler,
            StorageClass::Shelf => &self.shelf,
        }
    }

    fn members_mut(&mut self, class: StorageClass) -> &mut HashSet<String> {
        match class {
            StorageClass::Heater => &mut self.heater,
            StorageClass::Cooler => &mut self.cooler,
            StorageClass::Shelf => &mut self.shelf,
        }
    }

    fn has_room(&self, class: StorageClass) -> bool {
        self.occupancy(class) < self.capacities.of(class)
    }

    /// Makes `record` resident in `class` and logs the placement.
    /// Callers check capacity first.
    fn admit(&mut self, mut record: OrderRecord, class: StorageClass, now: DateTime<Utc>) {
        record.relocate(class, now);
        let id = record.id().to_owned();

        self.members_mut(class).insert(id.clone());
        if class == StorageClass::Shelf {
            self.shelf_index
                .push(id.clone(), record.temperature(), record.expires_at());
        }
        self.records.insert(id.clone(), record);
        self.log_action(now, &id, ActionKind::Place, class);
    }

    /// Frees one shelf slot by moving the earliest-expiring hot or cold order
    /// into its ideal class. Returns `false` if no such order can move.
    fn move_one_off_shelf(&mut self, now: DateTime<Utc>) -> bool {
        let heater_room = self.has_room(StorageClass::Heater);
        let cooler_room = self.has_room(StorageClass::Cooler);
        if !heater_room && !cooler_room {
            return false;
        }

        let shelf = &self.shelf;
        let candidate = self.shelf_index.take_first_eligible(
            |entry| shelf.contains(&entry.order_id),
            |entry| match entry.temperature {
                Temperature::Hot => heater_room,
                Temperature::Cold => cooler_room,
                Temperature::Room => false,
            },
        );
        let Some(entry) = candidate else {
            debug!("No shelf order can move to its ideal storage");
            return false;
        };

        let id = entry.order_id;
        self.shelf.remove(&id);
        let Some(mut record) = self.records.remove(&id) else {
            warn!(order_id = %id, "Shelf member without a record");
            return false;
        };

        record.apply_decay(now);
        if record.is_spoiled() {
            warn!(order_id = %id, "Shelf order spoiled before it could move");
            self.log_action(now, &id, ActionKind::Discard, StorageClass::Shelf);
            return true;
        }

        let destination = StorageClass::ideal_for(record.temperature());
        record.relocate(destination, now);
        self.members_mut(destination).insert(id.clone());
        self.records.insert(id.clone(), record);
        self.log_action(now, &id, ActionKind::Move, destination);
        true
    }

    /// Discards the shelf order with the nearest expiry, spoiled or not.
    fn discard_earliest_on_shelf(&mut self, now: DateTime<Utc>) {
        while let Some(entry) = self
            .shelf_index
            .pop_live(|entry| self.shelf.contains(&entry.order_id))
        {
            let id = entry.order_id;
            self.shelf.remove(&id);
            let Some(mut record) = self.records.remove(&id) else {
                warn!(order_id = %id, "Shelf member without a record");
                continue;
            };

            record.apply_decay(now);
            warn!(
                order_id = %id,
                remaining_sec = record.remaining_budget_sec(),
                "Discarding to make room on shelf"
            );
            self.log_action(now, &id, ActionKind::Discard, StorageClass::Shelf);
            return;
        }
    }

    fn log_action(&mut self, now: DateTime<Utc>, id: &str, kind: ActionKind, class: StorageClass) {
        let action = Action::new(now, id, kind, class);
        info!(
            timestamp = action.timestamp,
            order_id = %id,
            action = %kind,
            target = %class,
            "Recorded"
        );
        self.ledger.push(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t(ms: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::milliseconds(ms)
    }

    fn order(id: &str, temp: &str, freshness: u64) -> Order {
        Order::new(id, format!("Item-{id}"), temp, 10, freshness)
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = StorageManager::new(Capacities::new(1, 1, 0)).unwrap_err();
        assert_eq!(err, KitchenError::InvalidCapacity { class: StorageClass::Shelf });
    }

    #[test]
    fn test_rejects_duplicate_resident_id() {
        let mut kitchen = StorageManager::new(Capacities::default()).unwrap();
        kitchen.place_order(order("a", "hot", 60), t(0)).unwrap();
        let err = kitchen.place_order(order("a", "hot", 60), t(1)).unwrap_err();
        assert!(matches!(err, KitchenError::DuplicateOrder { .. }));
        assert_eq!(kitchen.actions().len(), 1);
    }

    #[test]
    fn test_shelf_placement_pushes_index_entry_with_off_ideal_rate() {
        let mut kitchen = StorageManager::new(Capacities::new(1, 1, 2)).unwrap();
        kitchen.place_order(order("h1", "hot", 60), t(0)).unwrap();
        kitchen.place_order(order("h2", "hot", 60), t(0)).unwrap();

        let record = kitchen.record("h2").unwrap();
        assert_eq!(record.class(), StorageClass::Shelf);
        assert_eq!(record.decay_rate(), 2);
        assert_eq!(kitchen.shelf_index.len(), 1);
        let entry = kitchen.shelf_index.pop().unwrap();
        assert_eq!(entry.expires_at, t(30_000));
    }

    #[test]
    fn test_pickup_leaves_stale_index_entry() {
        let mut kitchen = StorageManager::new(Capacities::default()).unwrap();
        kitchen.place_order(order("r1", "room", 60), t(0)).unwrap();
        kitchen.pickup_order("r1", t(1_000));

        assert_eq!(kitchen.occupancy(StorageClass::Shelf), 0);
        assert_eq!(kitchen.shelf_index.len(), 1);
    }

    #[test]
    fn test_spoiled_move_candidate_is_discarded_and_frees_slot() {
        let mut kitchen = StorageManager::new(Capacities::new(1, 1, 1)).unwrap();
        kitchen.place_order(order("h1", "hot", 60), t(0)).unwrap();
        // Lands on the shelf at 2x: spoils after 2s.
        kitchen.place_order(order("h2", "hot", 4), t(0)).unwrap();
        kitchen.pickup_order("h1", t(1_000));

        kitchen.place_order(order("r1", "room", 60), t(5_000)).unwrap();

        let tail: Vec<_> = kitchen.actions()[2..]
            .iter()
            .map(|a| (a.id.as_str(), a.action, a.target))
            .collect();
        assert_eq!(
            tail,
            [
                ("h1", ActionKind::Pickup, StorageClass::Heater),
                ("h2", ActionKind::Discard, StorageClass::Shelf),
                ("r1", ActionKind::Place, StorageClass::Shelf),
            ]
        );
        assert_eq!(kitchen.occupancy(StorageClass::Heater), 0);
    }

    #[test]
    fn test_all_classes_report_occupancy() {
        let mut kitchen = StorageManager::new(Capacities::default()).unwrap();
        kitchen.place_order(order("h", "hot", 60), t(0)).unwrap();
        kitchen.place_order(order("c", "cold", 60), t(0)).unwrap();
        kitchen.place_order(order("r", "room", 60), t(0)).unwrap();
        for class in StorageClass::ALL {
            assert_eq!(kitchen.occupancy(class), 1, "{class}");
        }
    }
}
