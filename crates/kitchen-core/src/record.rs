//! # Order Record
//!
//! Mutable tracking state for one resident order, layered over the immutable
//! [`Order`]. Records are owned by the [`StorageManager`](crate::StorageManager)
//! and never handed out mutably.
//!
//! `remaining_budget_sec` is only meaningful relative to `last_update`. Every
//! path that changes the class or reads the budget for an expiry decision goes
//! through [`OrderRecord::apply_decay`] first, which keeps both fields in step.

use crate::decay;
use crate::model::{Order, StorageClass, Temperature};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct OrderRecord {
    order: Order,
    temperature: Temperature,
    class: StorageClass,
    last_update: DateTime<Utc>,
    remaining_budget_sec: f64,
    decay_rate: u32,
}

impl OrderRecord {
    /// Starts tracking `order` at its ideal class with the full freshness budget.
    pub fn new(order: Order, now: DateTime<Utc>) -> Self {
        let temperature = order.temperature();
        let remaining_budget_sec = order.freshness as f64;
        Self {
            order,
            temperature,
            class: StorageClass::ideal_for(temperature),
            last_update: now,
            remaining_budget_sec,
            decay_rate: 1,
        }
    }

    /// Charges the time since the last update against the budget.
    ///
    /// No-op when `now` is not after `last_update`, so repeated or
    /// out-of-order calls are harmless.
    pub fn apply_decay(&mut self, now: DateTime<Utc>) {
        let Some(elapsed) = decay::elapsed_secs(self.last_update, now) else {
            return;
        };
        self.remaining_budget_sec =
            decay::decayed_budget(self.remaining_budget_sec, elapsed, self.decay_rate);
        self.last_update = now;
    }

    /// Moves the record to `class`, settling decay at the old rate first.
    pub fn relocate(&mut self, class: StorageClass, now: DateTime<Utc>) {
        self.apply_decay(now);
        self.class = class;
        self.decay_rate = class.decay_rate_for(self.temperature);
        self.last_update = now;
    }

    /// Instant the budget runs out at the current rate.
    pub fn expires_at(&self) -> DateTime<Utc> {
        decay::expiry_at(self.last_update, self.remaining_budget_sec, self.decay_rate)
    }

    pub fn is_spoiled(&self) -> bool {
        self.remaining_budget_sec <= 0.0
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn id(&self) -> &str {
        &self.order.id
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn class(&self) -> StorageClass {
        self.class
    }

    pub fn last_update(&self) -> DateTime<Utc> {
        self.last_update
    }

    pub fn remaining_budget_sec(&self) -> f64 {
        self.remaining_budget_sec
    }

    pub fn decay_rate(&self) -> u32 {
        self.decay_rate
    }
}
